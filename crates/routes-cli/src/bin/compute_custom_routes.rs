// crates/routes-cli/src/bin/compute_custom_routes.rs
//
// Sample client: computes routes ranked by a rate card objective.

use clap::Parser;

use routes_cli::ClientArgs;
use routes_rpc::Program;

/// Call ComputeCustomRoutes on the Routes Preferred API.
#[derive(Parser, Debug)]
#[command(
    name = "compute-custom-routes",
    version = "0.1.0",
    about = "Routes Preferred ComputeCustomRoutes sample"
)]
struct Cli {
    #[command(flatten)]
    client: ClientArgs,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    routes_cli::init_tracing(&cli.client.log_level);

    let status = routes_cli::run(Program::CustomRoutes, &cli.client, false).await;
    std::process::exit(status);
}
