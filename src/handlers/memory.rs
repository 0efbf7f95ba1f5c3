//! Memory and code reads.

use prost::Message;

use crate::codec;
use crate::engine::EngineError;
use crate::error::WorkerError;
use crate::proto::v1 as pb;
use crate::session::Session;

/// Hard cap on a single `GetBytes` read.
const MAX_READ_BYTES: i64 = 10 * 1024 * 1024;

/// Default for `DataReadString` when the request leaves `max_length`
/// unset.
const DEFAULT_CSTRING_LENGTH: usize = 256;

pub fn handle_get_bytes(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetBytesRequest = codec::decode(body)?;
    if req.size <= 0 {
        return Err(WorkerError::Validation("Size must be positive".to_string()));
    }
    if req.size > MAX_READ_BYTES {
        return Err(WorkerError::Validation(
            "Size too large (max 10MB)".to_string(),
        ));
    }
    let data = session.engine().bytes_at(req.address, req.size as usize)?;
    Ok(pb::GetBytesResponse { data }.encode_to_vec())
}

pub fn handle_get_disasm(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetDisasmRequest = codec::decode(body)?;
    let disasm = session.engine().disasm_at(req.address)?;
    Ok(pb::GetDisasmResponse { disasm }.encode_to_vec())
}

pub fn handle_get_function_disasm(
    session: &mut Session,
    body: &[u8],
) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetFunctionDisasmRequest = codec::decode(body)?;
    let lines = session.engine().function_disasm(req.address)?;
    let disassembly = lines
        .iter()
        .map(|line| format!("{:08X}: {}", line.address, line.text))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(pb::GetFunctionDisasmResponse { disassembly }.encode_to_vec())
}

pub fn handle_get_decompiled(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetDecompiledRequest = codec::decode(body)?;
    if !session.has_decompiler() {
        return Err(EngineError::NoDecompiler.into());
    }
    let code = session.engine().decompile(req.address)?;
    Ok(pb::GetDecompiledResponse { code }.encode_to_vec())
}

pub fn handle_get_function_name(
    session: &mut Session,
    body: &[u8],
) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetFunctionNameRequest = codec::decode(body)?;
    let name = session.engine().function_name(req.address)?;
    Ok(pb::GetFunctionNameResponse { name }.encode_to_vec())
}

pub fn handle_get_dword_at(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetDwordAtRequest = codec::decode(body)?;
    let value = session.engine().dword_at(req.address)?;
    Ok(pb::GetDwordAtResponse { value }.encode_to_vec())
}

pub fn handle_get_qword_at(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetQwordAtRequest = codec::decode(body)?;
    let value = session.engine().qword_at(req.address)?;
    Ok(pb::GetQwordAtResponse { value }.encode_to_vec())
}

pub fn handle_get_instruction_length(
    session: &mut Session,
    body: &[u8],
) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetInstructionLengthRequest = codec::decode(body)?;
    let length = session.engine().instruction_length(req.address)?;
    Ok(pb::GetInstructionLengthResponse { length }.encode_to_vec())
}

pub fn handle_data_read_string(
    session: &mut Session,
    body: &[u8],
) -> Result<Vec<u8>, WorkerError> {
    let req: pb::DataReadStringRequest = codec::decode(body)?;
    let max_length = if req.max_length > 0 {
        req.max_length as usize
    } else {
        DEFAULT_CSTRING_LENGTH
    };
    let value = session.engine().read_cstring(req.address, max_length)?;
    Ok(pb::DataReadStringResponse { value }.encode_to_vec())
}

pub fn handle_data_read_byte(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::DataReadByteRequest = codec::decode(body)?;
    let value = session.engine().byte_at(req.address)? as u32;
    Ok(pb::DataReadByteResponse { value }.encode_to_vec())
}
