//! OSRM routing service wire format.
//!
//! Builds the `route/v1/driving` request URL and parses the GeoJSON reply.
//! The HTTP transport itself is supplied by the host as a fetch function.

use serde::Deserialize;

use crate::error::RouteError;

use super::preview::{Coordinate, RouteProvider, RouteResponse};

#[derive(Debug, Deserialize)]
struct OsrmReply {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    // [lon, lat] pairs
    coordinates: Vec<[f64; 2]>,
}

/// Build the route request URL. OSRM takes `lon,lat` order.
pub fn build_route_url(base_url: &str, origin: Coordinate, destination: Coordinate) -> String {
    format!(
        "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
        base_url.trim_end_matches('/'),
        origin.lon,
        origin.lat,
        destination.lon,
        destination.lat
    )
}

/// Parse an OSRM reply body, taking the first route.
pub fn parse_route_response(body: &str) -> Result<RouteResponse, RouteError> {
    let reply: OsrmReply = serde_json::from_str(body)?;

    if reply.code != "Ok" {
        return Err(RouteError::NoRoute(reply.code));
    }

    let route = reply
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::NoRoute("empty".to_string()))?;

    Ok(RouteResponse {
        polyline: route
            .geometry
            .coordinates
            .iter()
            .map(|[lon, lat]| Coordinate::new(*lat, *lon))
            .collect(),
        distance_meters: route.distance,
        duration_seconds: route.duration,
    })
}

/// Routing collaborator over an OSRM endpoint.
///
/// `fetch` performs a GET and returns the body, or a transport error
/// message.
pub struct OsrmRouteProvider<F> {
    base_url: String,
    fetch: F,
}

impl<F> OsrmRouteProvider<F>
where
    F: Fn(&str) -> Result<String, String>,
{
    pub fn new(base_url: &str, fetch: F) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            fetch,
        }
    }
}

impl<F> RouteProvider for OsrmRouteProvider<F>
where
    F: Fn(&str) -> Result<String, String>,
{
    fn compute_route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteResponse, RouteError> {
        let url = build_route_url(&self.base_url, origin, destination);
        log::debug!("ROUTE_REQUEST url={}", url);

        let body = (self.fetch)(&url).map_err(RouteError::Request)?;
        parse_route_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::preview::preview_route;

    const REPLY: &str = r#"{
        "code": "Ok",
        "routes": [{
            "distance": 4210.7,
            "duration": 1830.2,
            "geometry": {"type": "LineString", "coordinates": [[77.5946, 12.9716], [77.61, 12.95], [77.6245, 12.9352]]}
        }],
        "waypoints": []
    }"#;

    #[test]
    fn test_build_route_url() {
        let url = build_route_url(
            "https://router.project-osrm.org/",
            Coordinate::new(12.5, 77.25),
            Coordinate::new(13.0, 77.75),
        );
        assert_eq!(
            url,
            "https://router.project-osrm.org/route/v1/driving/77.25,12.5;77.75,13?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn test_parse_reply_swaps_to_lat_lon() {
        let route = parse_route_response(REPLY).unwrap();
        assert_eq!(route.polyline.len(), 3);
        assert_eq!(route.polyline[0], Coordinate::new(12.9716, 77.5946));
        assert_eq!(route.distance_meters, 4210.7);
    }

    #[test]
    fn test_parse_no_route() {
        let result = parse_route_response(r#"{"code": "NoRoute", "message": "Impossible route"}"#);
        assert!(matches!(result, Err(RouteError::NoRoute(ref code)) if code == "NoRoute"));

        let empty = parse_route_response(r#"{"code": "Ok", "routes": []}"#);
        assert!(matches!(empty, Err(RouteError::NoRoute(_))));

        assert!(matches!(parse_route_response("<html>"), Err(RouteError::Parse(_))));
    }

    #[test]
    fn test_provider_end_to_end() {
        let provider = OsrmRouteProvider::new("http://osrm.local", |url: &str| {
            assert!(url.starts_with("http://osrm.local/route/v1/driving/"));
            Ok(REPLY.to_string())
        });
        let preview = preview_route(
            &provider,
            Coordinate::new(12.9716, 77.5946),
            Coordinate::new(12.9352, 77.6245),
        );
        assert_eq!(preview.distance.as_deref(), Some("4.2 km"));
        assert_eq!(preview.duration.as_deref(), Some("31 min"));
    }

    #[test]
    fn test_provider_transport_error_falls_back() {
        let provider =
            OsrmRouteProvider::new("http://osrm.local", |_: &str| Err("timed out".to_string()));
        let preview = preview_route(
            &provider,
            Coordinate::new(1.0, 2.0),
            Coordinate::new(3.0, 4.0),
        );
        assert!(preview.fallback);
    }
}
