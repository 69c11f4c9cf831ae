use chrono::{Duration, TimeZone, Utc};
use ecoyatra_core::auth::{hash_password, Account, Credential, Session, StaticAuthenticator};
use ecoyatra_core::storage::{parse_grievance_rows, MemoryKeyValueStore, MemoryStore};
use ecoyatra_core::tracker::{submit_grievance, GrievanceDraft, TrackerState};
use ecoyatra_core::{compute_stats, GrievanceReader, GrievanceStats};

fn authenticator() -> StaticAuthenticator {
    StaticAuthenticator::new(vec![Account {
        user_id: "u-meera".to_string(),
        email: "meera@ecoyatra.in".to_string(),
        name: "Meera".to_string(),
        password_sha256: hash_password("cycle-to-work"),
    }])
}

#[test]
fn login_submit_and_track() {
    let kv = MemoryKeyValueStore::new();
    let store = MemoryStore::new();
    let session = Session::new(&kv);
    let reader = GrievanceReader::new(&session, &store);
    let now = Utc::now();

    // Logged out: nothing to show, no query issued
    assert!(reader.load(now).is_empty());
    assert_eq!(store.query_count(), 0);

    session
        .login(&authenticator(), &Credential::new("meera@ecoyatra.in", "cycle-to-work"))
        .expect("login");

    let draft = GrievanceDraft {
        title: "Broken cycle rack".to_string(),
        category: "Infrastructure".to_string(),
        description: "Station 4 rack is bent".to_string(),
        priority: None,
    };
    submit_grievance(&session, &store, &draft, now).expect("submit");

    let state = TrackerState::new();
    assert!(state.refresh(&reader, now + Duration::minutes(5)));

    let snapshot = state.snapshot();
    assert_eq!(snapshot.grievances.len(), 1);
    let grievance = &snapshot.grievances[0];
    assert_eq!(grievance.date, "Just now");
    assert_eq!(grievance.priority, "Medium");
    assert_eq!(grievance.timeline.len(), 1);
    assert_eq!(grievance.timeline[0].status, "Submitted");
    assert_eq!(
        snapshot.stats,
        GrievanceStats {
            total: 1,
            resolved: 0,
            pending: 1
        }
    );
}

#[test]
fn backend_rows_to_display() {
    let body = r#"[
        {"id": 3, "user_id": "u1", "title": "Ticket overcharged", "category": "Fare",
         "status": "Resolved", "priority": "Low", "created_at": "2026-09-20T10:00:00+00:00",
         "description": "Charged twice",
         "grievance_timeline": [
            {"status": "Submitted", "description": "Received", "completed": true, "created_at": "2026-09-20T10:00:00+00:00"},
            {"status": "Resolved", "description": "Refunded", "completed": true, "created_at": "2026-09-22T16:45:00+00:00"}
         ]},
        {"id": 1, "user_id": "u1", "title": "Dirty coach", "category": "Cleanliness",
         "status": "Under Review", "priority": "Medium", "created_at": "2026-10-15T06:00:00+00:00",
         "description": "", "grievance_timeline": null}
    ]"#;

    let records = parse_grievance_rows(body).expect("rows");
    let store = MemoryStore::with_records(records);
    let reader = GrievanceReader::new(Some(ecoyatra_core::Identity::new("u1")), &store);
    let now = Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();

    let grievances = reader.load(now);
    let ids: Vec<&str> = grievances.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(grievances[0].date, "1 day ago");
    assert_eq!(grievances[1].date, "Sep 20");
    assert_eq!(grievances[1].timeline[1].date, "Sep 22, 2026");
    assert_eq!(grievances[1].timeline[1].time, "04:45 PM");

    let stats = compute_stats(&grievances);
    assert_eq!(stats.resolved, 1);
    assert_eq!(stats.pending, 1);
}
