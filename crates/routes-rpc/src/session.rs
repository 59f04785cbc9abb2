// crates/routes-rpc/src/session.rs
//
// Session driver: connect once, build the call context once, run a sample
// program's calls in sequence, release the connection.

use async_trait::async_trait;

use routes_core::config::API_KEY_ENV_VAR;
use routes_core::{
    custom_route_request, route_matrix_request, simple_route_request, ClientConfig,
    ComputeCustomRoutesResponse, ComputeRoutesResponse, RouteMatrixElement, RoutesError,
};

use crate::channel::SecuredChannel;
use crate::client::RoutesAlphaClient;
use crate::context::CallContext;
use crate::dispatcher::{self, MatrixSummary};
use crate::service::RoutesService;

/// Produces a connected `RoutesService`.
#[async_trait]
pub trait Connector: Send + Sync {
    type Service: RoutesService;

    async fn connect(&self, config: &ClientConfig) -> Result<Self::Service, RoutesError>;
}

/// Connects to the configured endpoint over TLS.
#[derive(Debug, Default, Clone, Copy)]
pub struct TlsConnector;

#[async_trait]
impl Connector for TlsConnector {
    type Service = RoutesAlphaClient;

    async fn connect(&self, config: &ClientConfig) -> Result<Self::Service, RoutesError> {
        let channel = SecuredChannel::connect(config).await?;
        Ok(RoutesAlphaClient::new(channel))
    }
}

/// The sample programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    /// ComputeRoutes, then ComputeRouteMatrix.
    Routes,
    /// ComputeCustomRoutes.
    CustomRoutes,
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Program::Routes => write!(f, "compute-routes"),
            Program::CustomRoutes => write!(f, "compute-custom-routes"),
        }
    }
}

/// Everything one program run received.
#[derive(Debug, Default)]
pub struct ProgramReport {
    pub routes: Option<ComputeRoutesResponse>,
    pub matrix: Vec<RouteMatrixElement>,
    pub matrix_summary: Option<MatrixSummary>,
    pub custom_routes: Option<ComputeCustomRoutesResponse>,
}

/// One connection plus one call context, shared by sequential calls.
pub struct Session<S: RoutesService> {
    service: S,
    context: CallContext,
}

impl<S: RoutesService> Session<S> {
    /// Connect through `connector`, then start the deadline clock.
    ///
    /// A connection failure returns before any request is built. An empty
    /// API key is only a warning; the remote service rejects the calls.
    pub async fn open<C>(connector: &C, config: &ClientConfig) -> Result<Self, RoutesError>
    where
        C: Connector<Service = S>,
    {
        config.validate()?;
        if config.api_key.is_empty() {
            tracing::warn!("{} is empty; sending calls without an API key", API_KEY_ENV_VAR);
        }
        let service = connector.connect(config).await?;
        let context = CallContext::new(config)?;
        Ok(Self { service, context })
    }

    pub async fn compute_routes(&mut self) -> Result<ComputeRoutesResponse, RoutesError> {
        dispatcher::call_compute_routes(&mut self.service, &self.context, simple_route_request())
            .await
    }

    pub async fn compute_route_matrix<F>(&mut self, on_element: F) -> Result<MatrixSummary, RoutesError>
    where
        F: FnMut(RouteMatrixElement),
    {
        dispatcher::call_compute_route_matrix(
            &mut self.service,
            &self.context,
            route_matrix_request(),
            on_element,
        )
        .await
    }

    pub async fn compute_custom_routes(&mut self) -> Result<ComputeCustomRoutesResponse, RoutesError> {
        dispatcher::call_compute_custom_routes(
            &mut self.service,
            &self.context,
            custom_route_request(),
        )
        .await
    }

    /// Run `program`'s calls in order, stopping at the first failure.
    pub async fn run(&mut self, program: Program) -> Result<ProgramReport, RoutesError> {
        let mut report = ProgramReport::default();
        match program {
            Program::Routes => {
                report.routes = Some(self.compute_routes().await?);
                let mut elements = Vec::new();
                let summary = self.compute_route_matrix(|e| elements.push(e)).await?;
                report.matrix = elements;
                report.matrix_summary = Some(summary);
            }
            Program::CustomRoutes => {
                report.custom_routes = Some(self.compute_custom_routes().await?);
            }
        }
        Ok(report)
    }

    /// Release the connection.
    pub fn close(self) {
        tracing::debug!("Closing session");
        drop(self.service);
    }
}

/// Open a session, run `program`, and close the session on every path.
pub async fn run_program<C>(
    connector: &C,
    config: &ClientConfig,
    program: Program,
) -> Result<ProgramReport, RoutesError>
where
    C: Connector,
{
    tracing::info!("Running {}", program);
    let mut session = Session::open(connector, config).await?;
    let result = session.run(program).await;
    session.close();
    result
}
