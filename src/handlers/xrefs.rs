//! Cross-reference queries.

use prost::Message;

use crate::codec;
use crate::error::WorkerError;
use crate::proto::v1 as pb;
use crate::session::Session;

pub fn handle_get_xrefs_to(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetXRefsToRequest = codec::decode(body)?;
    let xrefs = session
        .engine()
        .xrefs_to(req.address)?
        .into_iter()
        .map(|x| pb::XRef {
            from: x.from,
            to: x.to,
            r#type: x.kind,
        })
        .collect();
    Ok(pb::GetXRefsToResponse { xrefs }.encode_to_vec())
}

pub fn handle_get_xrefs_from(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetXRefsFromRequest = codec::decode(body)?;
    let xrefs = session
        .engine()
        .xrefs_from(req.address)?
        .into_iter()
        .map(|x| pb::XRef {
            from: x.from,
            to: x.to,
            r#type: x.kind,
        })
        .collect();
    Ok(pb::GetXRefsFromResponse { xrefs }.encode_to_vec())
}

pub fn handle_get_data_refs(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetDataRefsRequest = codec::decode(body)?;
    let refs = session
        .engine()
        .data_refs(req.address)?
        .into_iter()
        .map(|r| pb::DataRef {
            from: r.from,
            r#type: r.kind,
        })
        .collect();
    Ok(pb::GetDataRefsResponse { refs }.encode_to_vec())
}

pub fn handle_get_string_xrefs(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::GetStringXRefsRequest = codec::decode(body)?;
    let xrefs = session
        .engine()
        .string_xrefs(req.address)?
        .into_iter()
        .map(|x| pb::StringXRef {
            address: x.address,
            function_address: x.function_address,
            function_name: x.function_name,
        })
        .collect();
    Ok(pb::GetStringXRefsResponse { xrefs }.encode_to_vec())
}
