use thiserror::Error;

use crate::engine::EngineError;

/// Everything a request can fail with between path parsing and response
/// encoding. The dispatch layer renders these as plain-text HTTP errors;
/// the `Display` string is the response body, verbatim.
#[derive(Debug, Error)]
pub enum WorkerError {
    /// Request path did not contain a service and a method segment.
    #[error("Invalid path")]
    InvalidPath,

    /// Path parsed, but the service is not one this worker exposes.
    #[error("Unknown service: {0}")]
    UnknownService(String),

    /// Known service, but the method is not in the registry.
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// Request-level validation failed before the engine was consulted.
    #[error("{0}")]
    Validation(String),

    /// Request body was not a valid protobuf message.
    #[error("{0}")]
    Decode(#[from] prost::DecodeError),

    /// The analysis engine rejected the operation.
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// The open-database precondition could not be satisfied.
    #[error("{0}")]
    DatabaseNotOpen(String),
}

impl WorkerError {
    /// HTTP status code the transport frames this error with.
    pub fn status(&self) -> u16 {
        match self {
            WorkerError::InvalidPath => 400,
            WorkerError::UnknownService(_) => 404,
            WorkerError::UnknownMethod(_)
            | WorkerError::Validation(_)
            | WorkerError::Decode(_)
            | WorkerError::Engine(_)
            | WorkerError::DatabaseNotOpen(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_class() {
        assert_eq!(WorkerError::InvalidPath.status(), 400);
        assert_eq!(WorkerError::UnknownService("Foo".into()).status(), 404);
        assert_eq!(WorkerError::UnknownMethod("Bar".into()).status(), 500);
        assert_eq!(WorkerError::Validation("bad".into()).status(), 500);
        assert_eq!(WorkerError::DatabaseNotOpen("closed".into()).status(), 500);
    }

    #[test]
    fn messages_render_bare() {
        assert_eq!(WorkerError::InvalidPath.to_string(), "Invalid path");
        assert_eq!(
            WorkerError::UnknownService("Foo".into()).to_string(),
            "Unknown service: Foo"
        );
        assert_eq!(
            WorkerError::UnknownMethod("DoThing".into()).to_string(),
            "Unknown method: DoThing"
        );
        assert_eq!(
            WorkerError::Validation("Size must be positive".into()).to_string(),
            "Size must be positive"
        );
    }
}
