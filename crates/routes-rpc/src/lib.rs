// crates/routes-rpc/src/lib.rs
//
// routes-rpc: gRPC plumbing for the Routes Preferred sample clients.
//
// Opens the secured channel, attaches the call context (deadline, API key,
// field mask), dispatches the three RoutesAlpha methods, and drains the
// route matrix stream. There is no proto codegen step; the client is written
// against tonic's low-level `Grpc` type with the prost codec.

pub mod channel;
pub mod client;
pub mod consumer;
pub mod context;
pub mod dispatcher;
pub mod middleware;
pub mod service;
pub mod session;

// Re-export the main types for ergonomic access.
pub use channel::SecuredChannel;
pub use client::RoutesAlphaClient;
pub use consumer::{ConsumerState, StreamConsumer, StreamSummary};
pub use context::CallContext;
pub use dispatcher::MatrixSummary;
pub use service::{MatrixStream, RoutesService};
pub use session::{run_program, Connector, Program, ProgramReport, Session, TlsConnector};
