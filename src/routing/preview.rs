//! Route preview for the trip map.
//!
//! One routing request per (origin, destination) change. On success the
//! preview carries the routed polyline plus distance and duration labels;
//! on failure it falls back to a straight line with no figures.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::RouteError;

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Raw routing service result.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResponse {
    pub polyline: Vec<Coordinate>,
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// External routing collaborator.
pub trait RouteProvider {
    fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteResponse, RouteError>;
}

impl<T: RouteProvider + ?Sized> RouteProvider for &T {
    fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteResponse, RouteError> {
        (**self).compute_route(origin, destination)
    }
}

/// What the map draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePreview {
    pub polyline: Vec<Coordinate>,
    pub distance: Option<String>,
    pub duration: Option<String>,
    pub fallback: bool,
}

impl RoutePreview {
    /// Straight two-point line, no figures.
    pub fn straight_line(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            polyline: vec![origin, destination],
            distance: None,
            duration: None,
            fallback: true,
        }
    }
}

/// Meters to a one-decimal kilometre label, e.g. `12.3 km`.
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

/// Seconds to `N min` under an hour, else `Hh Mm`.
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds.max(0.0) / 60.0).round() as u64;
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{}h {}m", minutes / 60, minutes % 60)
    }
}

/// Request a route once and derive the preview, falling back on failure.
pub fn preview_route<P: RouteProvider + ?Sized>(
    provider: &P,
    origin: Coordinate,
    destination: Coordinate,
) -> RoutePreview {
    match provider.compute_route(origin, destination) {
        Ok(route) => {
            let distance = format_distance_km(route.distance_meters);
            let duration = format_duration(route.duration_seconds);
            log::info!(
                "ROUTE_PREVIEW_READY points={} distance={} duration={}",
                route.polyline.len(),
                distance,
                duration
            );
            RoutePreview {
                polyline: route.polyline,
                distance: Some(distance),
                duration: Some(duration),
                fallback: false,
            }
        }
        Err(e) => {
            log::warn!("ROUTE_PREVIEW_FALLBACK error={}", e);
            RoutePreview::straight_line(origin, destination)
        }
    }
}

/// Remembers the last (origin, destination) pair so repeated renders with
/// the same endpoints do not re-request.
#[derive(Debug)]
pub struct RoutePlanner<P> {
    provider: P,
    last: Mutex<Option<(Coordinate, Coordinate, RoutePreview)>>,
}

impl<P: RouteProvider> RoutePlanner<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            last: Mutex::new(None),
        }
    }

    pub fn preview(&self, origin: Coordinate, destination: Coordinate) -> RoutePreview {
        if let Some((o, d, preview)) = self.last.lock().as_ref() {
            if *o == origin && *d == destination {
                log::debug!("ROUTE_PREVIEW_UNCHANGED");
                return preview.clone();
            }
        }

        // Lock is not held across the routing request
        let preview = preview_route(&self.provider, origin, destination);
        *self.last.lock() = Some((origin, destination, preview.clone()));
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    struct FixedProvider {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FixedProvider {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    impl RouteProvider for FixedProvider {
        fn compute_route(
            &self,
            origin: Coordinate,
            destination: Coordinate,
        ) -> Result<RouteResponse, RouteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(RouteError::Request("network unreachable".to_string()));
            }
            Ok(RouteResponse {
                polyline: vec![origin, Coordinate::new(12.95, 77.6), destination],
                distance_meters: 12_345.0,
                duration_seconds: 5_400.0,
            })
        }
    }

    fn endpoints() -> (Coordinate, Coordinate) {
        (Coordinate::new(12.9716, 77.5946), Coordinate::new(12.9352, 77.6245))
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance_km(12_345.0), "12.3 km");
        assert_eq!(format_distance_km(2_500.0), "2.5 km");
        assert_eq!(format_distance_km(0.0), "0.0 km");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1_800.0), "30 min");
        assert_eq!(format_duration(59.0), "1 min");
        assert_eq!(format_duration(3_540.0), "59 min");
        assert_eq!(format_duration(3_600.0), "1h 0m");
        assert_eq!(format_duration(5_400.0), "1h 30m");
        assert_eq!(format_duration(9_000.0), "2h 30m");
    }

    #[test]
    fn test_preview_success() {
        let (origin, destination) = endpoints();
        let preview = preview_route(&FixedProvider::new(false), origin, destination);
        assert!(!preview.fallback);
        assert_eq!(preview.polyline.len(), 3);
        assert_eq!(preview.distance.as_deref(), Some("12.3 km"));
        assert_eq!(preview.duration.as_deref(), Some("1h 30m"));
    }

    #[test]
    fn test_preview_fallback() {
        let (origin, destination) = endpoints();
        let preview = preview_route(&FixedProvider::new(true), origin, destination);
        assert!(preview.fallback);
        assert_eq!(preview.polyline, vec![origin, destination]);
        assert_eq!(preview.distance, None);
        assert_eq!(preview.duration, None);
    }

    #[test]
    fn test_planner_requests_once_per_pair() {
        let provider = FixedProvider::new(false);
        let planner = RoutePlanner::new(&provider);
        let (origin, destination) = endpoints();

        planner.preview(origin, destination);
        planner.preview(origin, destination);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        planner.preview(destination, origin);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    // Blocks requests from `gated_origin` until released.
    struct GatedProvider {
        gated_origin: Coordinate,
        entered: Mutex<mpsc::Sender<()>>,
        release: Mutex<mpsc::Receiver<()>>,
    }

    impl RouteProvider for GatedProvider {
        fn compute_route(
            &self,
            origin: Coordinate,
            destination: Coordinate,
        ) -> Result<RouteResponse, RouteError> {
            if origin == self.gated_origin {
                let _ = self.entered.lock().send(());
                let _ = self.release.lock().recv();
            }
            Ok(RouteResponse {
                polyline: vec![origin, destination],
                distance_meters: 1_000.0,
                duration_seconds: 600.0,
            })
        }
    }

    #[test]
    fn test_planner_does_not_block_on_slow_request() {
        let (slow_origin, slow_destination) = endpoints();
        let (fast_origin, fast_destination) = (Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0));

        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let (done_tx, done_rx) = mpsc::channel();

        let provider = GatedProvider {
            gated_origin: slow_origin,
            entered: Mutex::new(entered_tx),
            release: Mutex::new(release_rx),
        };
        let planner = RoutePlanner::new(&provider);
        let planner = &planner;

        thread::scope(|s| {
            s.spawn(move || planner.preview(slow_origin, slow_destination));
            entered_rx.recv().unwrap();

            s.spawn(move || {
                let preview = planner.preview(fast_origin, fast_destination);
                let _ = done_tx.send(preview);
            });

            let fast = done_rx.recv_timeout(Duration::from_secs(5));
            release_tx.send(()).unwrap();

            let fast = fast.expect("second preview waited on the slow request");
            assert_eq!(fast.distance.as_deref(), Some("1.0 km"));
            assert_eq!(fast.duration.as_deref(), Some("10 min"));
        });
    }
}
