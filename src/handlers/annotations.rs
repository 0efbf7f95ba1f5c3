//! Comments, names, and function creation.
//!
//! Mutators surface the engine's accept/reject boolean in the response
//! body; only engine failures with a message become transport errors.

use prost::Message;

use crate::codec;
use crate::error::WorkerError;
use crate::proto::v1 as pb;
use crate::session::Session;

pub fn handle_set_comment(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::SetCommentRequest = codec::decode(body)?;
    let success = session
        .engine()
        .set_comment(req.address, &req.comment, req.repeatable)?;
    Ok(pb::SetCommentResponse { success }.encode_to_vec())
}

pub fn handle_get_comment(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetCommentRequest = codec::decode(body)?;
    let comment = session.engine().comment_at(req.address, req.repeatable)?;
    Ok(pb::GetCommentResponse { comment }.encode_to_vec())
}

pub fn handle_set_func_comment(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::SetFuncCommentRequest = codec::decode(body)?;
    let success = session
        .engine()
        .set_func_comment(req.address, &req.comment)?;
    Ok(pb::SetFuncCommentResponse { success }.encode_to_vec())
}

pub fn handle_get_func_comment(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetFuncCommentRequest = codec::decode(body)?;
    let comment = session.engine().func_comment_at(req.address)?;
    Ok(pb::GetFuncCommentResponse { comment }.encode_to_vec())
}

pub fn handle_set_decompiler_comment(
    session: &mut Session,
    body: &[u8],
) -> Result<Vec<u8>, WorkerError> {
    let req: pb::SetDecompilerCommentRequest = codec::decode(body)?;
    let success =
        session
            .engine()
            .set_decompiler_comment(req.function_address, req.address, &req.comment)?;
    Ok(pb::SetDecompilerCommentResponse { success }.encode_to_vec())
}

pub fn handle_set_name(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::SetNameRequest = codec::decode(body)?;
    let success = session.engine().set_name(req.address, &req.name)?;
    Ok(pb::SetNameResponse { success }.encode_to_vec())
}

pub fn handle_get_name(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetNameRequest = codec::decode(body)?;
    let name = session.engine().name_at(req.address)?;
    Ok(pb::GetNameResponse { name }.encode_to_vec())
}

pub fn handle_delete_name(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::DeleteNameRequest = codec::decode(body)?;
    let success = session.engine().delete_name(req.address)?;
    Ok(pb::DeleteNameResponse { success }.encode_to_vec())
}

pub fn handle_make_function(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::MakeFunctionRequest = codec::decode(body)?;
    let success = session.engine().make_function(req.address)?;
    Ok(pb::MakeFunctionResponse { success }.encode_to_vec())
}
