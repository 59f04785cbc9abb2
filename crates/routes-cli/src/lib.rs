// crates/routes-cli/src/lib.rs
//
// routes-cli: shared pieces of the `compute-routes` and
// `compute-custom-routes` sample binaries.

pub mod app;
pub mod args;
pub mod output;

pub use app::{execute, init_tracing, run, EXIT_FAILURE, EXIT_OK};
pub use args::ClientArgs;
