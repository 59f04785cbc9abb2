// crates/routes-core/src/requests.rs
//
// Request messages for the three RoutesAlpha methods, plus the demonstration
// requests sent by the sample programs.
//
// The assembler functions are deterministic: every call builds the same
// request from the same literal constants.

use crate::types::{
    PolylineEncoding, PolylineQuality, RouteModifiers, RouteObjective, RouteTravelMode,
    RoutingPreference, Units,
};
use crate::waypoint::{waypoint, Waypoint};

/// Language tag sent with every sample request.
pub const SAMPLE_LANGUAGE_CODE: &str = "en-us";

/// Cost per minute used by the custom route rate card.
pub const SAMPLE_COST_PER_MINUTE: f64 = 1.1;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Request for a single route between two waypoints.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ComputeRoutesRequest {
    #[prost(message, optional, tag = "1")]
    pub origin: Option<Waypoint>,
    #[prost(message, optional, tag = "2")]
    pub destination: Option<Waypoint>,
    #[prost(message, repeated, tag = "3")]
    pub intermediates: Vec<Waypoint>,
    #[prost(enumeration = "RouteTravelMode", tag = "4")]
    pub travel_mode: i32,
    #[prost(enumeration = "RoutingPreference", tag = "5")]
    pub routing_preference: i32,
    #[prost(enumeration = "PolylineQuality", tag = "6")]
    pub polyline_quality: i32,
    #[prost(enumeration = "PolylineEncoding", tag = "12")]
    pub polyline_encoding: i32,
    #[prost(message, optional, tag = "7")]
    pub departure_time: Option<::prost_types::Timestamp>,
    #[prost(bool, tag = "8")]
    pub compute_alternative_routes: bool,
    #[prost(message, optional, tag = "9")]
    pub route_modifiers: Option<RouteModifiers>,
    /// BCP-47 language code for the textual parts of the response.
    #[prost(string, tag = "10")]
    pub language_code: String,
    #[prost(enumeration = "Units", tag = "11")]
    pub units: i32,
    #[prost(bool, tag = "13")]
    pub optimize_waypoint_order: bool,
}

/// One origin of a route matrix, with optional per-origin modifiers.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteMatrixOrigin {
    #[prost(message, optional, tag = "1")]
    pub waypoint: Option<Waypoint>,
    #[prost(message, optional, tag = "2")]
    pub route_modifiers: Option<RouteModifiers>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteMatrixDestination {
    #[prost(message, optional, tag = "1")]
    pub waypoint: Option<Waypoint>,
}

/// Request for an origins x destinations matrix of route summaries.
///
/// The server answers with one streamed element per (origin, destination)
/// pair, in an order of its choosing.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ComputeRouteMatrixRequest {
    #[prost(message, repeated, tag = "1")]
    pub origins: Vec<RouteMatrixOrigin>,
    #[prost(message, repeated, tag = "2")]
    pub destinations: Vec<RouteMatrixDestination>,
    #[prost(enumeration = "RouteTravelMode", tag = "3")]
    pub travel_mode: i32,
    #[prost(enumeration = "RoutingPreference", tag = "4")]
    pub routing_preference: i32,
    #[prost(message, optional, tag = "5")]
    pub departure_time: Option<::prost_types::Timestamp>,
}

/// Request for a route ranked by a caller-supplied objective.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ComputeCustomRoutesRequest {
    #[prost(message, optional, tag = "1")]
    pub origin: Option<Waypoint>,
    #[prost(message, optional, tag = "2")]
    pub destination: Option<Waypoint>,
    #[prost(message, repeated, tag = "3")]
    pub intermediates: Vec<Waypoint>,
    #[prost(enumeration = "RouteTravelMode", tag = "4")]
    pub travel_mode: i32,
    #[prost(enumeration = "RoutingPreference", tag = "5")]
    pub routing_preference: i32,
    #[prost(enumeration = "PolylineQuality", tag = "6")]
    pub polyline_quality: i32,
    #[prost(enumeration = "PolylineEncoding", tag = "13")]
    pub polyline_encoding: i32,
    #[prost(message, optional, tag = "7")]
    pub departure_time: Option<::prost_types::Timestamp>,
    #[prost(message, optional, tag = "11")]
    pub route_modifiers: Option<RouteModifiers>,
    #[prost(message, optional, tag = "12")]
    pub route_objective: Option<RouteObjective>,
    #[prost(string, tag = "9")]
    pub language_code: String,
    #[prost(enumeration = "Units", tag = "10")]
    pub units: i32,
}

impl ComputeRouteMatrixRequest {
    /// Number of elements a complete response stream carries.
    pub fn element_count(&self) -> usize {
        self.origins.len() * self.destinations.len()
    }
}

// ---------------------------------------------------------------------------
// Demonstration requests
// ---------------------------------------------------------------------------

/// A single driving route in Mountain View, with alternatives.
pub fn simple_route_request() -> ComputeRoutesRequest {
    ComputeRoutesRequest {
        origin: Some(waypoint(37.420761, -122.081356)),
        destination: Some(waypoint(37.420999, -122.086894)),
        travel_mode: RouteTravelMode::Drive as i32,
        routing_preference: RoutingPreference::TrafficAware as i32,
        compute_alternative_routes: true,
        units: Units::Metric as i32,
        language_code: SAMPLE_LANGUAGE_CODE.to_string(),
        route_modifiers: Some(RouteModifiers::avoid_highways_and_ferries()),
        polyline_quality: PolylineQuality::Overview as i32,
        ..Default::default()
    }
}

/// A 2x2 driving matrix. Only the first origin carries its own modifiers.
pub fn route_matrix_request() -> ComputeRouteMatrixRequest {
    ComputeRouteMatrixRequest {
        origins: vec![
            RouteMatrixOrigin {
                waypoint: Some(waypoint(37.420761, -122.081356)),
                route_modifiers: Some(RouteModifiers::avoid_highways_and_ferries()),
            },
            RouteMatrixOrigin {
                waypoint: Some(waypoint(37.403184, -122.097371)),
                route_modifiers: None,
            },
        ],
        destinations: vec![
            RouteMatrixDestination {
                waypoint: Some(waypoint(37.420999, -122.086894)),
            },
            RouteMatrixDestination {
                waypoint: Some(waypoint(37.383047, -122.044651)),
            },
        ],
        travel_mode: RouteTravelMode::Drive as i32,
        routing_preference: RoutingPreference::TrafficAware as i32,
        departure_time: None,
    }
}

/// The simple route again, ranked by a time-only rate card.
pub fn custom_route_request() -> ComputeCustomRoutesRequest {
    ComputeCustomRoutesRequest {
        origin: Some(waypoint(37.420761, -122.081356)),
        destination: Some(waypoint(37.420999, -122.086894)),
        route_objective: Some(RouteObjective::cost_per_minute(SAMPLE_COST_PER_MINUTE)),
        travel_mode: RouteTravelMode::Drive as i32,
        routing_preference: RoutingPreference::TrafficAware as i32,
        units: Units::Metric as i32,
        language_code: SAMPLE_LANGUAGE_CODE.to_string(),
        route_modifiers: Some(RouteModifiers::avoid_highways_and_ferries()),
        polyline_quality: PolylineQuality::Overview as i32,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn assembler_is_deterministic() {
        assert_eq!(simple_route_request(), simple_route_request());
        assert_eq!(
            simple_route_request().encode_to_vec(),
            simple_route_request().encode_to_vec()
        );

        assert_eq!(route_matrix_request(), route_matrix_request());
        assert_eq!(
            route_matrix_request().encode_to_vec(),
            route_matrix_request().encode_to_vec()
        );

        assert_eq!(custom_route_request(), custom_route_request());
        assert_eq!(
            custom_route_request().encode_to_vec(),
            custom_route_request().encode_to_vec()
        );
    }

    #[test]
    fn simple_request_uses_sample_parameters() {
        let req = simple_route_request();
        assert_eq!(req.travel_mode(), RouteTravelMode::Drive);
        assert_eq!(req.routing_preference(), RoutingPreference::TrafficAware);
        assert_eq!(req.units(), Units::Metric);
        assert_eq!(req.polyline_quality(), PolylineQuality::Overview);
        assert!(req.compute_alternative_routes);
        assert_eq!(req.language_code, "en-us");

        let modifiers = req.route_modifiers.expect("modifiers");
        assert!(!modifiers.avoid_tolls);
        assert!(modifiers.avoid_highways);
        assert!(modifiers.avoid_ferries);
    }

    #[test]
    fn matrix_request_is_two_by_two() {
        let req = route_matrix_request();
        assert_eq!(req.origins.len(), 2);
        assert_eq!(req.destinations.len(), 2);
        assert_eq!(req.element_count(), 4);
        assert!(req.origins[0].route_modifiers.is_some());
        assert!(req.origins[1].route_modifiers.is_none());
    }

    #[test]
    fn custom_request_carries_rate_card() {
        let req = custom_route_request();
        let card = req
            .route_objective
            .as_ref()
            .and_then(|o| o.rate_card())
            .expect("rate card");
        assert_eq!(card.cost_per_minute.map(|c| c.value), Some(1.1));
        assert_eq!(req.route_modifiers, simple_route_request().route_modifiers);
    }
}
