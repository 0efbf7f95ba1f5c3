//! Whole-image listings: segments, functions, imports, exports, entry
//! point, and the paginated string table.

use prost::Message;

use crate::codec;
use crate::error::WorkerError;
use crate::proto::v1 as pb;
use crate::session::Session;

use super::compile_filter;

/// Page size applied when the request leaves `limit` unset.
const DEFAULT_STRING_LIMIT: usize = 1000;

pub fn handle_get_segments(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::GetSegmentsRequest = codec::decode(body)?;
    let segments = session
        .engine()
        .segments()?
        .into_iter()
        .map(|s| pb::Segment {
            start: s.start,
            end: s.end,
            name: s.name,
            seg_class: s.class,
            permissions: s.permissions,
            bitness: s.bitness,
        })
        .collect();
    Ok(pb::GetSegmentsResponse { segments }.encode_to_vec())
}

pub fn handle_get_functions(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::GetFunctionsRequest = codec::decode(body)?;
    let functions = session
        .engine()
        .functions()?
        .into_iter()
        .map(|f| pb::Function {
            address: f.address,
            name: f.name,
        })
        .collect();
    Ok(pb::GetFunctionsResponse { functions }.encode_to_vec())
}

pub fn handle_get_imports(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::GetImportsRequest = codec::decode(body)?;
    let imports = session
        .engine()
        .imports()?
        .into_iter()
        .map(|i| pb::Import {
            module: i.module,
            address: i.address,
            name: i.name,
            ordinal: i.ordinal,
        })
        .collect();
    Ok(pb::GetImportsResponse { imports }.encode_to_vec())
}

pub fn handle_get_exports(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::GetExportsRequest = codec::decode(body)?;
    let exports = session
        .engine()
        .exports()?
        .into_iter()
        .map(|e| pb::Export {
            index: e.index,
            ordinal: e.ordinal,
            address: e.address,
            name: e.name,
        })
        .collect();
    Ok(pb::GetExportsResponse { exports }.encode_to_vec())
}

pub fn handle_get_entry_point(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let _req: pb::GetEntryPointRequest = codec::decode(body)?;
    let address = session.engine().entry_point()?;
    Ok(pb::GetEntryPointResponse { address }.encode_to_vec())
}

/// String table with optional regex filtering. The filter is applied
/// before pagination, so `total` counts matches, not image strings.
pub fn handle_get_strings(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetStringsRequest = codec::decode(body)?;
    let offset = if req.offset > 0 { req.offset as usize } else { 0 };
    let limit = if req.limit > 0 {
        req.limit as usize
    } else {
        DEFAULT_STRING_LIMIT
    };
    let filter = compile_filter(&req.regex, req.case_sensitive)?;

    let mut items = session.engine().strings()?;
    if let Some(pattern) = filter {
        items.retain(|item| pattern.is_match(&item.value));
    }

    let total = items.len();
    let strings: Vec<pb::StringItem> = items
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|item| pb::StringItem {
            address: item.address,
            value: item.value,
        })
        .collect();

    let resp = pb::GetStringsResponse {
        total: total as i32,
        offset: offset as i32,
        count: strings.len() as i32,
        strings,
    };
    Ok(resp.encode_to_vec())
}
