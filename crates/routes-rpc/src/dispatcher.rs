// crates/routes-rpc/src/dispatcher.rs
//
// Call dispatcher: attaches the call context to a request, invokes the remote
// method under the context deadline, and logs what goes out and what comes
// back.
//
// Requests are sent as assembled; checking them is the remote service's job.
// Nothing here retries or recovers. Every failure is returned to the caller
// as a `RoutesError`.

use std::future::Future;

use tonic::Status;

use routes_core::{
    ComputeCustomRoutesRequest, ComputeCustomRoutesResponse, ComputeRouteMatrixRequest,
    ComputeRoutesRequest, ComputeRoutesResponse, RouteMatrixElement, RouteObjective, RoutesError,
};

use crate::client::{COMPUTE_CUSTOM_ROUTES, COMPUTE_ROUTES, COMPUTE_ROUTE_MATRIX};
use crate::consumer::{StreamConsumer, StreamSummary};
use crate::context::CallContext;
use crate::service::RoutesService;

/// How a drained route matrix stream compared with its request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixSummary {
    /// Consumer outcome; `received` counts every element the server sent.
    pub stream: StreamSummary,
    /// Origins times destinations.
    pub expected: usize,
    /// Elements handed to the caller, never more than `expected`.
    pub emitted: usize,
    /// Emitted elements whose indices point outside the request's matrix.
    pub out_of_range: usize,
}

impl MatrixSummary {
    /// Elements the server sent beyond `expected`. They were read and dropped.
    pub fn surplus(&self) -> usize {
        self.stream.received - self.emitted
    }

    /// Exactly one in-range element per origin/destination pair arrived.
    pub fn is_complete(&self) -> bool {
        self.stream.received == self.expected && self.out_of_range == 0
    }
}

/// Run `call` until it completes or the context deadline passes.
async fn within_deadline<T, Fut>(
    ctx: &CallContext,
    method: &'static str,
    call: Fut,
) -> Result<T, RoutesError>
where
    Fut: Future<Output = Result<T, Status>>,
{
    match tokio::time::timeout_at(ctx.deadline(), call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(status)) => Err(RoutesError::Call { method, status }),
        Err(_) => Err(RoutesError::DeadlineExceeded { method }),
    }
}

/// Compute a single route.
pub async fn call_compute_routes<S>(
    service: &mut S,
    ctx: &CallContext,
    request: ComputeRoutesRequest,
) -> Result<ComputeRoutesResponse, RoutesError>
where
    S: RoutesService + ?Sized,
{
    tracing::info!("Sending request: \n{:#?}", request);

    let request = ctx.request(COMPUTE_ROUTES, request)?;
    let result = within_deadline(ctx, COMPUTE_ROUTES, service.compute_routes(request)).await?;

    tracing::info!("Result: {:#?}", result);
    Ok(result)
}

/// Compute a route matrix and drain its stream.
///
/// `on_element` sees elements in arrival order, at most origins times
/// destinations of them. Elements are logged as they arrive; a failure after
/// some elements leaves those already logged and handed out. Anything the
/// server sends past the expected count is still read to the end of the
/// stream, then dropped with a WARN.
pub async fn call_compute_route_matrix<S, F>(
    service: &mut S,
    ctx: &CallContext,
    request: ComputeRouteMatrixRequest,
    mut on_element: F,
) -> Result<MatrixSummary, RoutesError>
where
    S: RoutesService + ?Sized,
    F: FnMut(RouteMatrixElement),
{
    tracing::info!("Sending request: \n{:#?}", request);
    let expected = request.element_count();
    let mut emitted = 0usize;
    let mut out_of_range = 0usize;

    // The request is kept to check element indices against.
    let outgoing = ctx.request(COMPUTE_ROUTE_MATRIX, request.clone())?;
    let stream =
        within_deadline(ctx, COMPUTE_ROUTE_MATRIX, service.compute_route_matrix(outgoing)).await?;

    let mut consumer = StreamConsumer::new(COMPUTE_ROUTE_MATRIX, ctx.deadline());
    let stream = consumer
        .drain(stream, |element| {
            if emitted == expected {
                tracing::warn!(
                    "Dropping ComputeRouteMatrix element ({}, {}) beyond the expected {}",
                    element.origin_index,
                    element.destination_index,
                    expected
                );
                return;
            }
            tracing::info!("Element: {:#?}", element);
            if !element.fits(&request) {
                out_of_range += 1;
                tracing::warn!(
                    "ComputeRouteMatrix element ({}, {}) is outside the {}x{} matrix",
                    element.origin_index,
                    element.destination_index,
                    request.origins.len(),
                    request.destinations.len()
                );
            }
            emitted += 1;
            on_element(element);
        })
        .await?;

    let summary = MatrixSummary {
        stream,
        expected,
        emitted,
        out_of_range,
    };
    if summary.stream.received != expected {
        tracing::warn!(
            "ComputeRouteMatrix stream ended after {} elements, expected {}",
            summary.stream.received,
            expected
        );
    }
    Ok(summary)
}

/// Compute routes ranked by the request's objective.
pub async fn call_compute_custom_routes<S>(
    service: &mut S,
    ctx: &CallContext,
    request: ComputeCustomRoutesRequest,
) -> Result<ComputeCustomRoutesResponse, RoutesError>
where
    S: RoutesService + ?Sized,
{
    tracing::info!("Sending request: \n{:#?}", request);
    if let Some(card) = request
        .route_objective
        .as_ref()
        .and_then(RouteObjective::rate_card)
    {
        tracing::debug!("Ranking routes by rate card {:?}", card);
    }

    let request = ctx.request(COMPUTE_CUSTOM_ROUTES, request)?;
    let result = within_deadline(
        ctx,
        COMPUTE_CUSTOM_ROUTES,
        service.compute_custom_routes(request),
    )
    .await?;

    tracing::info!("Result: {:#?}", result);
    Ok(result)
}
