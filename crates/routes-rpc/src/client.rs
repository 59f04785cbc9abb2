// crates/routes-rpc/src/client.rs
//
// gRPC client for `google.maps.routes.v1alpha.RoutesAlpha`.
//
// Written by hand in the shape tonic's code generator produces, so the
// workspace needs no protoc or build script. Messages are encoded with the
// prost codec.

use async_trait::async_trait;
use tonic::codec::{ProstCodec, Streaming};
use tonic::codegen::http::uri::PathAndQuery;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::Channel;
use tonic::{GrpcMethod, Request, Response, Status};

use routes_core::{
    ComputeCustomRoutesRequest, ComputeCustomRoutesResponse, ComputeRouteMatrixRequest,
    ComputeRoutesRequest, ComputeRoutesResponse, RouteMatrixElement,
};

use crate::channel::SecuredChannel;
use crate::middleware::{logging_interceptor, LoggingInterceptor};
use crate::service::{MatrixStream, RoutesService};

/// Fully-qualified gRPC service name.
pub const SERVICE_NAME: &str = "google.maps.routes.v1alpha.RoutesAlpha";

pub const COMPUTE_ROUTES: &str = "ComputeRoutes";
pub const COMPUTE_ROUTE_MATRIX: &str = "ComputeRouteMatrix";
pub const COMPUTE_CUSTOM_ROUTES: &str = "ComputeCustomRoutes";

const COMPUTE_ROUTES_PATH: &str = "/google.maps.routes.v1alpha.RoutesAlpha/ComputeRoutes";
const COMPUTE_ROUTE_MATRIX_PATH: &str =
    "/google.maps.routes.v1alpha.RoutesAlpha/ComputeRouteMatrix";
const COMPUTE_CUSTOM_ROUTES_PATH: &str =
    "/google.maps.routes.v1alpha.RoutesAlpha/ComputeCustomRoutes";

type InterceptedChannel = InterceptedService<Channel, LoggingInterceptor>;

/// RoutesAlpha client bound to one secured channel.
///
/// Owns the channel, so dropping the client releases the connection.
pub struct RoutesAlphaClient {
    inner: tonic::client::Grpc<InterceptedChannel>,
    channel: SecuredChannel,
}

impl std::fmt::Debug for RoutesAlphaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutesAlphaClient")
            .field("channel", &self.channel)
            .finish()
    }
}

impl RoutesAlphaClient {
    pub fn new(channel: SecuredChannel) -> Self {
        let intercepted =
            InterceptedService::new(channel.channel(), logging_interceptor as LoggingInterceptor);
        Self {
            inner: tonic::client::Grpc::new(intercepted),
            channel,
        }
    }

    async fn ready(&mut self) -> Result<(), Status> {
        self.inner
            .ready()
            .await
            .map_err(|e| Status::unknown(format!("Service was not ready: {}", e)))
    }

    pub async fn compute_routes(
        &mut self,
        request: Request<ComputeRoutesRequest>,
    ) -> Result<Response<ComputeRoutesResponse>, Status> {
        self.ready().await?;
        let codec = ProstCodec::default();
        let path = PathAndQuery::from_static(COMPUTE_ROUTES_PATH);
        let mut req = request;
        req.extensions_mut()
            .insert(GrpcMethod::new(SERVICE_NAME, COMPUTE_ROUTES));
        self.inner.unary(req, path, codec).await
    }

    pub async fn compute_route_matrix(
        &mut self,
        request: Request<ComputeRouteMatrixRequest>,
    ) -> Result<Response<Streaming<RouteMatrixElement>>, Status> {
        self.ready().await?;
        let codec = ProstCodec::default();
        let path = PathAndQuery::from_static(COMPUTE_ROUTE_MATRIX_PATH);
        let mut req = request;
        req.extensions_mut()
            .insert(GrpcMethod::new(SERVICE_NAME, COMPUTE_ROUTE_MATRIX));
        self.inner.server_streaming(req, path, codec).await
    }

    pub async fn compute_custom_routes(
        &mut self,
        request: Request<ComputeCustomRoutesRequest>,
    ) -> Result<Response<ComputeCustomRoutesResponse>, Status> {
        self.ready().await?;
        let codec = ProstCodec::default();
        let path = PathAndQuery::from_static(COMPUTE_CUSTOM_ROUTES_PATH);
        let mut req = request;
        req.extensions_mut()
            .insert(GrpcMethod::new(SERVICE_NAME, COMPUTE_CUSTOM_ROUTES));
        self.inner.unary(req, path, codec).await
    }
}

#[async_trait]
impl RoutesService for RoutesAlphaClient {
    async fn compute_routes(
        &mut self,
        request: Request<ComputeRoutesRequest>,
    ) -> Result<ComputeRoutesResponse, Status> {
        RoutesAlphaClient::compute_routes(self, request)
            .await
            .map(Response::into_inner)
    }

    async fn compute_route_matrix(
        &mut self,
        request: Request<ComputeRouteMatrixRequest>,
    ) -> Result<MatrixStream, Status> {
        let response = RoutesAlphaClient::compute_route_matrix(self, request).await?;
        Ok(Box::pin(response.into_inner()))
    }

    async fn compute_custom_routes(
        &mut self,
        request: Request<ComputeCustomRoutesRequest>,
    ) -> Result<ComputeCustomRoutesResponse, Status> {
        RoutesAlphaClient::compute_custom_routes(self, request)
            .await
            .map(Response::into_inner)
    }
}
