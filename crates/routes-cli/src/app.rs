// crates/routes-cli/src/app.rs
//
// Shared driver for the sample binaries: logging setup, configuration, one
// program run, and the mapping of its outcome to an exit status.

use routes_core::{ClientConfig, RoutesError};
use routes_rpc::{run_program, Connector, Program, ProgramReport, TlsConnector};

use crate::args::ClientArgs;
use crate::output;

/// Exit status for a completed run.
pub const EXIT_OK: i32 = 0;

/// Exit status for any failure.
pub const EXIT_FAILURE: i32 = 1;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` (e.g. `info`).
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

/// Run `program` over TLS with settings from `args`.
///
/// Returns the process exit status. Failures are logged at ERROR here; the
/// binaries only exit with the status.
pub async fn run(program: Program, args: &ClientArgs, print_table: bool) -> i32 {
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => return fail(program, &e),
    };
    execute(&TlsConnector, &config, program, print_table).await
}

/// Run `program` through any connector. Split out from `run` for tests.
pub async fn execute<C: Connector>(
    connector: &C,
    config: &ClientConfig,
    program: Program,
    print_table: bool,
) -> i32 {
    if config.field_mask_is_wildcard() {
        tracing::warn!(
            "Field mask is '*': every response field is requested. \
             Use an explicit mask such as routes.distanceMeters,routes.duration in production."
        );
    }

    match run_program(connector, config, program).await {
        Ok(report) => {
            finish(&report, print_table);
            EXIT_OK
        }
        Err(e) => fail(program, &e),
    }
}

fn finish(report: &ProgramReport, print_table: bool) {
    if let Some(summary) = report.matrix_summary {
        tracing::info!(
            "ComputeRouteMatrix stream {} with {} of {} elements",
            summary.stream.state,
            summary.stream.received,
            summary.expected
        );
        if print_table {
            println!("{}", output::format_matrix(&report.matrix));
        }
    }
}

fn fail(program: Program, error: &RoutesError) -> i32 {
    match error.status() {
        Some(status) => tracing::error!(
            "{} failed: {} (code: {:?}, message: {})",
            program,
            error,
            status.code(),
            status.message()
        ),
        None => tracing::error!("{} failed: {}", program, error),
    }
    EXIT_FAILURE
}
