use prost::Message;

use crate::codec;
use crate::error::WorkerError;
use crate::proto::v1 as pb;
use crate::session::{unix_now, Session};

pub fn handle_ping(_session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::PingRequest = codec::decode(body)?;
    let resp = pb::PingResponse { alive: true };
    Ok(resp.encode_to_vec())
}

/// Unary despite its name: one snapshot per call, kept for wire
/// compatibility with clients that still address the streaming method.
/// The in-flight counter includes the request being served, so a quiet
/// worker reports 1 here.
pub fn handle_status_stream(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::StatusStreamRequest = codec::decode(body)?;
    let resp = pb::WorkerStatus {
        timestamp: unix_now() as i64,
        memory_bytes: 0, // TODO: report RSS once the engine trait exposes it
        dirty: false,
        last_activity: session.last_activity_secs(),
        pending_requests: session.pending_requests() as i32,
    };
    Ok(resp.encode_to_vec())
}
