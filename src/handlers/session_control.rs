//! Session lifecycle methods.
//!
//! `OpenBinary`, `SaveDatabase`, and `CloseSession` report expected
//! failures in the response body (`success = false` plus a message) while
//! still returning HTTP 200; only decode failures escape as transport
//! errors.

use prost::Message;

use crate::codec;
use crate::error::WorkerError;
use crate::proto::v1 as pb;
use crate::session::Session;

pub fn handle_open_binary(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::OpenBinaryRequest = codec::decode(body)?;
    let mut resp = pb::OpenBinaryResponse::default();
    // The worker is bound to one binary at spawn time; the path in the
    // request is advisory and the session's own path is authoritative,
    // echoed back whether or not the open succeeded.
    resp.binary_path = session.binary_path().display().to_string();
    match session.open(req.auto_analyze) {
        Ok(()) => {
            resp.success = true;
            resp.has_decompiler = session.has_decompiler();
        }
        Err(err) => {
            resp.error = err.to_string();
        }
    }
    Ok(resp.encode_to_vec())
}

pub fn handle_close_session(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::CloseSessionRequest = codec::decode(body)?;
    let mut resp = pb::CloseSessionResponse::default();
    if session.close(req.save) {
        resp.success = true;
    } else {
        resp.error = "Failed to close database".to_string();
    }
    Ok(resp.encode_to_vec())
}

pub fn handle_save_database(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::SaveDatabaseRequest = codec::decode(body)?;
    let outcome = session.save();
    let mut resp = pb::SaveDatabaseResponse {
        success: outcome.success,
        timestamp: outcome.timestamp,
        dirty: outcome.dirty,
        ..Default::default()
    };
    if !outcome.success {
        resp.error = "Failed to save database".to_string();
    }
    Ok(resp.encode_to_vec())
}

pub fn handle_plan_and_wait(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::PlanAndWaitRequest = codec::decode(body)?;
    let outcome = session.plan_and_wait();
    let resp = pb::PlanAndWaitResponse {
        success: outcome.success,
        duration_seconds: outcome.duration_seconds,
        error: outcome.error.unwrap_or_default(),
    };
    Ok(resp.encode_to_vec())
}

pub fn handle_get_session_info(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::GetSessionInfoRequest = codec::decode(body)?;
    let info = session.info();
    let resp = pb::GetSessionInfoResponse {
        binary_path: info.binary_path,
        opened_at: info.opened_at,
        last_activity: info.last_activity,
        has_decompiler: info.has_decompiler,
        auto_running: info.auto_running,
        auto_state: info.auto_state,
    };
    Ok(resp.encode_to_vec())
}
