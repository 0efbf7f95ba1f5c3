//! Type system queries and edits: prototypes, locals, globals, structs,
//! enums, and per-address type information.

use prost::Message;

use crate::codec;
use crate::error::WorkerError;
use crate::proto::v1 as pb;
use crate::session::Session;

use super::compile_filter;

pub fn handle_set_function_type(
    session: &mut Session,
    body: &[u8],
) -> Result<Vec<u8>, WorkerError> {
    let req: pb::SetFunctionTypeRequest = codec::decode(body)?;
    let success = session
        .engine()
        .set_function_type(req.address, &req.prototype)?;
    Ok(pb::SetFunctionTypeResponse { success }.encode_to_vec())
}

pub fn handle_set_lvar_type(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::SetLvarTypeRequest = codec::decode(body)?;
    let success =
        session
            .engine()
            .set_lvar_type(req.function_address, &req.lvar_name, &req.lvar_type)?;
    Ok(pb::SetLvarTypeResponse { success }.encode_to_vec())
}

pub fn handle_rename_lvar(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::RenameLvarRequest = codec::decode(body)?;
    let success =
        session
            .engine()
            .rename_lvar(req.function_address, &req.lvar_name, &req.new_name)?;
    Ok(pb::RenameLvarResponse { success }.encode_to_vec())
}

pub fn handle_get_globals(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::GetGlobalsRequest = codec::decode(body)?;
    let globals = session
        .engine()
        .globals()?
        .into_iter()
        .map(|g| pb::GlobalVariable {
            address: g.address,
            name: g.name,
            r#type: g.ty,
        })
        .collect();
    Ok(pb::GetGlobalsResponse { globals }.encode_to_vec())
}

pub fn handle_set_global_type(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::SetGlobalTypeRequest = codec::decode(body)?;
    let success = session.engine().set_global_type(req.address, &req.r#type)?;
    Ok(pb::SetGlobalTypeResponse { success }.encode_to_vec())
}

pub fn handle_rename_global(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::RenameGlobalRequest = codec::decode(body)?;
    let success = session.engine().rename_global(req.address, &req.new_name)?;
    Ok(pb::RenameGlobalResponse { success }.encode_to_vec())
}

pub fn handle_list_structs(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::ListStructsRequest = codec::decode(body)?;
    let filter = compile_filter(&req.regex, req.case_sensitive)?;
    let mut summaries = session.engine().list_structs()?;
    if let Some(pattern) = filter {
        summaries.retain(|s| pattern.is_match(&s.name));
    }
    let structs = summaries
        .into_iter()
        .map(|s| pb::StructSummary {
            name: s.name,
            id: s.id,
            size: s.size,
        })
        .collect();
    Ok(pb::ListStructsResponse { structs }.encode_to_vec())
}

pub fn handle_get_struct(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetStructRequest = codec::decode(body)?;
    let def = session.engine().get_struct(&req.name)?;
    let resp = pb::GetStructResponse {
        name: def.name,
        id: def.id,
        size: def.size,
        members: def
            .members
            .into_iter()
            .map(|m| pb::StructMember {
                name: m.name,
                offset: m.offset,
                size: m.size,
                r#type: m.ty,
            })
            .collect(),
    };
    Ok(resp.encode_to_vec())
}

pub fn handle_list_enums(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::ListEnumsRequest = codec::decode(body)?;
    let filter = compile_filter(&req.regex, req.case_sensitive)?;
    let mut summaries = session.engine().list_enums()?;
    if let Some(pattern) = filter {
        summaries.retain(|e| pattern.is_match(&e.name));
    }
    let enums = summaries
        .into_iter()
        .map(|e| pb::EnumSummary {
            name: e.name,
            id: e.id,
        })
        .collect();
    Ok(pb::ListEnumsResponse { enums }.encode_to_vec())
}

pub fn handle_get_enum(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetEnumRequest = codec::decode(body)?;
    let def = session.engine().get_enum(&req.name)?;
    let resp = pb::GetEnumResponse {
        name: def.name,
        id: def.id,
        members: def
            .members
            .into_iter()
            .map(|m| pb::EnumMember {
                name: m.name,
                value: m.value,
            })
            .collect(),
    };
    Ok(resp.encode_to_vec())
}

pub fn handle_get_function_info(
    session: &mut Session,
    body: &[u8],
) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetFunctionInfoRequest = codec::decode(body)?;
    let info = session.engine().function_info(req.address)?;
    let resp = pb::GetFunctionInfoResponse {
        address: info.address,
        name: info.name,
        start: info.start,
        end: info.end,
        size: info.size,
        frame_size: info.frame_size,
        flags: Some(pb::FunctionFlags {
            is_library: info.flags.is_library,
            is_thunk: info.flags.is_thunk,
            no_return: info.flags.no_return,
            has_farseg: info.flags.has_farseg,
            is_static: info.flags.is_static,
        }),
        calling_convention: info.calling_convention,
        return_type: info.return_type,
        num_args: info.num_args,
    };
    Ok(resp.encode_to_vec())
}

pub fn handle_get_type_at(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetTypeAtRequest = codec::decode(body)?;
    let info = session.engine().type_at(req.address)?;
    let resp = pb::GetTypeAtResponse {
        address: req.address,
        r#type: info.ty,
        size: info.size,
        is_ptr: info.is_ptr,
        is_func: info.is_func,
        is_array: info.is_array,
        is_struct: info.is_struct,
        is_union: info.is_union,
        is_enum: info.is_enum,
        has_type: info.has_type,
    };
    Ok(resp.encode_to_vec())
}
