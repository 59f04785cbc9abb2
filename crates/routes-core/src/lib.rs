// crates/routes-core/src/lib.rs
//
// routes-core: Wire types, request assembly, configuration, and errors for the
// Routes Preferred sample clients.
//
// This is the leaf crate of the workspace. It defines the protobuf messages
// exchanged with the `google.maps.routes.v1alpha.RoutesAlpha` service, the
// demonstration requests the sample programs send, and the shared
// `ClientConfig` and `RoutesError` types.

pub mod config;
pub mod error;
pub mod requests;
pub mod responses;
pub mod types;
pub mod waypoint;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use routes_core::ComputeRoutesRequest;`

// Waypoint types
pub use waypoint::{waypoint, LatLng, Location, LocationType, Waypoint};

// Shared enums and modifiers
pub use types::{
    MonetaryCost, Objective, PolylineEncoding, PolylineQuality, RateCard, RouteModifiers,
    RouteObjective, RouteTravelMode, RoutingPreference, Units,
};

// Request types and the demonstration assembler
pub use requests::{
    custom_route_request, route_matrix_request, simple_route_request, ComputeCustomRoutesRequest,
    ComputeRouteMatrixRequest, ComputeRoutesRequest, RouteMatrixDestination, RouteMatrixOrigin,
};

// Response types
pub use responses::{
    ComputeCustomRoutesResponse, ComputeRoutesResponse, CustomRoute, FallbackInfo, Polyline,
    Route, RouteMatrixElement, RouteMatrixElementCondition, RpcStatus,
};

// Configuration
pub use config::ClientConfig;

// Error type
pub use error::RoutesError;
