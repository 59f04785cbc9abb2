// crates/routes-core/src/responses.rs
//
// Response messages returned by the RoutesAlpha service.
//
// Only the fields the sample programs log or summarize are declared. Fields
// the server sends beyond these are skipped by the decoder.

use crate::requests::ComputeRouteMatrixRequest;

/// `google.rpc.Status`, without the `details` payload.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RpcStatus {
    #[prost(int32, tag = "1")]
    pub code: i32,
    #[prost(string, tag = "2")]
    pub message: String,
}

impl RpcStatus {
    /// Code 0 (`OK`): the element was computed.
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FallbackRoutingMode {
    FallbackRoutingModeUnspecified = 0,
    FallbackTrafficUnaware = 1,
    FallbackTrafficAware = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FallbackReason {
    FallbackReasonUnspecified = 0,
    ServerError = 1,
    LatencyExceeded = 2,
}

/// Present when the server could not honour the requested routing
/// preference and fell back to another mode.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct FallbackInfo {
    #[prost(enumeration = "FallbackRoutingMode", tag = "1")]
    pub routing_mode: i32,
    #[prost(enumeration = "FallbackReason", tag = "2")]
    pub reason: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Polyline {
    #[prost(oneof = "PolylineType", tags = "1")]
    pub polyline_type: Option<PolylineType>,
}

#[derive(Clone, PartialEq, ::prost::Oneof)]
pub enum PolylineType {
    #[prost(string, tag = "1")]
    EncodedPolyline(String),
}

/// A route summary: distance, duration, and overview polyline.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Route {
    #[prost(int32, tag = "2")]
    pub distance_meters: i32,
    #[prost(message, optional, tag = "3")]
    pub duration: Option<::prost_types::Duration>,
    /// Duration without taking traffic into account.
    #[prost(message, optional, tag = "4")]
    pub static_duration: Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "5")]
    pub polyline: Option<Polyline>,
    #[prost(string, tag = "6")]
    pub description: String,
    #[prost(string, repeated, tag = "7")]
    pub warnings: Vec<String>,
    #[prost(int32, repeated, tag = "10")]
    pub optimized_intermediate_waypoint_index: Vec<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ComputeRoutesResponse {
    /// The primary route first, then alternatives when requested.
    #[prost(message, repeated, tag = "1")]
    pub routes: Vec<Route>,
    #[prost(message, optional, tag = "2")]
    pub fallback_info: Option<FallbackInfo>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum RouteMatrixElementCondition {
    Unspecified = 0,
    RouteExists = 1,
    RouteNotFound = 2,
}

/// One cell of a route matrix, as streamed by ComputeRouteMatrix.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RouteMatrixElement {
    /// Zero-based index of the origin in the request.
    #[prost(int32, tag = "1")]
    pub origin_index: i32,
    /// Zero-based index of the destination in the request.
    #[prost(int32, tag = "2")]
    pub destination_index: i32,
    /// Per-element error, if this cell could not be computed.
    #[prost(message, optional, tag = "3")]
    pub status: Option<RpcStatus>,
    #[prost(enumeration = "RouteMatrixElementCondition", tag = "9")]
    pub condition: i32,
    #[prost(int32, tag = "4")]
    pub distance_meters: i32,
    #[prost(message, optional, tag = "5")]
    pub duration: Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "6")]
    pub static_duration: Option<::prost_types::Duration>,
    #[prost(message, optional, tag = "8")]
    pub fallback_info: Option<FallbackInfo>,
}

impl RouteMatrixElement {
    /// Whether this element's indices fall inside the request's matrix.
    pub fn fits(&self, request: &ComputeRouteMatrixRequest) -> bool {
        usize::try_from(self.origin_index).is_ok_and(|i| i < request.origins.len())
            && usize::try_from(self.destination_index)
                .is_ok_and(|j| j < request.destinations.len())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum FallbackRouteObjective {
    FallbackRouteObjectiveUnspecified = 0,
    /// The rate card was applied without toll prices.
    FallbackRatecardWithoutTollPriceData = 1,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct CustomRoutesFallbackInfo {
    #[prost(enumeration = "FallbackRoutingMode", tag = "1")]
    pub routing_mode: i32,
    #[prost(enumeration = "FallbackRouteObjective", tag = "2")]
    pub route_objective: i32,
}

/// A route chosen under the custom objective, with an opaque token the
/// navigation SDK can use to reconstruct it.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CustomRoute {
    #[prost(message, optional, tag = "11")]
    pub route: Option<Route>,
    #[prost(string, tag = "12")]
    pub token: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ComputeCustomRoutesResponse {
    /// Routes ranked by the objective, best first.
    #[prost(message, repeated, tag = "7")]
    pub routes: Vec<CustomRoute>,
    #[prost(message, optional, tag = "5")]
    pub fastest_route: Option<CustomRoute>,
    #[prost(message, optional, tag = "6")]
    pub shortest_route: Option<CustomRoute>,
    #[prost(message, optional, tag = "8")]
    pub fallback_info: Option<CustomRoutesFallbackInfo>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::route_matrix_request;
    use prost::Message;

    #[test]
    fn element_indices_checked_against_request() {
        let req = route_matrix_request();
        let inside = RouteMatrixElement {
            origin_index: 1,
            destination_index: 0,
            ..Default::default()
        };
        let outside = RouteMatrixElement {
            origin_index: 2,
            destination_index: 0,
            ..Default::default()
        };
        let negative = RouteMatrixElement {
            origin_index: 0,
            destination_index: -1,
            ..Default::default()
        };
        assert!(inside.fits(&req));
        assert!(!outside.fits(&req));
        assert!(!negative.fits(&req));
    }

    #[test]
    fn unknown_fields_are_skipped() {
        // A route with an extra field 1 (legs) and a known distance.
        let mut buf = Vec::new();
        // field 1, wire type 2 (length-delimited), empty message
        buf.extend_from_slice(&[0x0a, 0x00]);
        // field 2, wire type 0 (varint), 1234
        buf.extend_from_slice(&[0x10, 0xd2, 0x09]);
        let route = Route::decode(buf.as_slice()).unwrap();
        assert_eq!(route.distance_meters, 1234);
    }

    #[test]
    fn zero_status_is_ok() {
        assert!(RpcStatus::default().is_ok());
        let failed = RpcStatus {
            code: 5,
            message: "not found".into(),
        };
        assert!(!failed.is_ok());
    }
}
