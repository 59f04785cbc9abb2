// crates/routes-cli/src/bin/compute_routes.rs
//
// Sample client: computes one route between two points, then a 2x2 route
// matrix, logging every request, result, and matrix element.

use clap::Parser;

use routes_cli::ClientArgs;
use routes_rpc::Program;

/// Call ComputeRoutes and ComputeRouteMatrix on the Routes Preferred API.
#[derive(Parser, Debug)]
#[command(name = "compute-routes", version = "0.1.0", about = "Routes Preferred ComputeRoutes sample")]
struct Cli {
    #[command(flatten)]
    client: ClientArgs,

    /// Print a table of the received matrix elements.
    #[arg(long)]
    table: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    routes_cli::init_tracing(&cli.client.log_level);

    let status = routes_cli::run(Program::Routes, &cli.client, cli.table).await;
    std::process::exit(status);
}
