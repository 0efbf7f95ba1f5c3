//! One function per RPC method.
//!
//! Handlers share a shape: decode the request, make one session or engine
//! call, populate the response, encode. Preconditions, activity tracking,
//! and error framing all live in [`crate::dispatch`], so a handler body
//! reads as the method's semantics and nothing else.

use regex::{Regex, RegexBuilder};

use crate::error::WorkerError;

pub mod annotations;
pub mod health;
pub mod listing;
pub mod memory;
pub mod metadata;
pub mod search;
pub mod session_control;
pub mod types;
pub mod xrefs;

/// Compile the optional regex filter carried by the listing requests.
/// An empty pattern means no filter; matching is case-insensitive unless
/// the request asks otherwise.
pub(crate) fn compile_filter(
    pattern: &str,
    case_sensitive: bool,
) -> Result<Option<Regex>, WorkerError> {
    if pattern.is_empty() {
        return Ok(None);
    }
    RegexBuilder::new(pattern)
        .case_insensitive(!case_sensitive)
        .build()
        .map(Some)
        .map_err(|err| WorkerError::Validation(err.to_string()))
}
