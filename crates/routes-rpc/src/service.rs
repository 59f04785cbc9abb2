// crates/routes-rpc/src/service.rs

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;
use tonic::{Request, Status};

use routes_core::{
    ComputeCustomRoutesRequest, ComputeCustomRoutesResponse, ComputeRouteMatrixRequest,
    ComputeRoutesRequest, ComputeRoutesResponse, RouteMatrixElement,
};

/// Server-streamed route matrix elements, in the order the server sends them.
///
/// Finite and not restartable: once it yields `None` it is exhausted.
pub type MatrixStream = Pin<Box<dyn Stream<Item = Result<RouteMatrixElement, Status>> + Send>>;

/// The three remote methods the sample programs call.
///
/// Implemented by `RoutesAlphaClient` over a TLS channel. Tests supply their
/// own implementations to script responses and failures.
#[async_trait]
pub trait RoutesService: Send {
    /// Unary: compute one route (plus alternatives if requested).
    async fn compute_routes(
        &mut self,
        request: Request<ComputeRoutesRequest>,
    ) -> Result<ComputeRoutesResponse, Status>;

    /// Server streaming: open the route matrix stream.
    async fn compute_route_matrix(
        &mut self,
        request: Request<ComputeRouteMatrixRequest>,
    ) -> Result<MatrixStream, Status>;

    /// Unary: compute routes ranked by a custom objective.
    async fn compute_custom_routes(
        &mut self,
        request: Request<ComputeCustomRoutesRequest>,
    ) -> Result<ComputeCustomRoutesResponse, Status>;
}
