//! Range searches over the image.
//!
//! A zero `start` resolves to the image's minimum address and a zero
//! `end` to its maximum, so a default-constructed request scans
//! everything.

use prost::Message;

use crate::codec;
use crate::error::WorkerError;
use crate::proto::v1 as pb;
use crate::session::Session;

pub fn handle_find_binary(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::FindBinaryRequest = codec::decode(body)?;
    let start = if req.start == 0 {
        session.engine().min_address()
    } else {
        req.start
    };
    let end = if req.end == 0 {
        session.engine().max_address()
    } else {
        req.end
    };
    let addresses = session
        .engine()
        .find_binary(start, end, &req.pattern, req.search_up)?;
    Ok(pb::FindBinaryResponse { addresses }.encode_to_vec())
}

pub fn handle_find_text(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::FindTextRequest = codec::decode(body)?;
    let start = if req.start == 0 {
        session.engine().min_address()
    } else {
        req.start
    };
    let end = if req.end == 0 {
        session.engine().max_address()
    } else {
        req.end
    };
    let addresses =
        session
            .engine()
            .find_text(start, end, &req.needle, req.case_sensitive, req.unicode)?;
    Ok(pb::FindTextResponse { addresses }.encode_to_vec())
}
