//! Headless binary-analysis worker.
//!
//! A worker process owns exactly one binary for its whole lifetime and
//! exposes analysis over Connect-style unary RPC: protobuf bodies in plain
//! HTTP/1.1 frames on a Unix domain socket, one request per connection.
//! The analysis backend sits behind [`engine::AnalysisEngine`]; everything
//! else in this crate is transport, routing and session state.

pub mod codec;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod proto;
pub mod server;
pub mod session;

pub use engine::{AnalysisEngine, EngineError, OpenStatus};
pub use error::WorkerError;
pub use server::Server;
pub use session::Session;
