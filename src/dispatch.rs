//! Path routing and the request/response boundary.
//!
//! Every RPC funnels through [`handle`]: the in-flight counter is bumped,
//! the path is resolved against the static method table, the open-database
//! precondition runs for methods that need it, and the handler outcome is
//! framed. This is the single place worker errors become HTTP responses.

use tracing::{debug, error};

use crate::codec;
use crate::error::WorkerError;
use crate::handlers::{
    annotations, health, listing, memory, metadata, search, session_control, types, xrefs,
};
use crate::session::Session;

pub type HandlerFn = fn(&mut Session, &[u8]) -> Result<Vec<u8>, WorkerError>;

pub struct Method {
    pub service: &'static str,
    pub name: &'static str,
    /// Whether the open-database precondition applies before the handler
    /// runs.
    pub requires_db: bool,
    pub handler: HandlerFn,
}

pub const SESSION_CONTROL: &str = "SessionControl";
pub const ANALYSIS_TOOLS: &str = "AnalysisTools";
pub const HEALTHCHECK: &str = "Healthcheck";

/// Services this worker exposes. A path naming anything else is a 404;
/// a known service with an unregistered method is an internal error, so
/// clients can tell a wrong endpoint from a missing handler.
const SERVICES: &[&str] = &[SESSION_CONTROL, ANALYSIS_TOOLS, HEALTHCHECK];

pub static METHODS: &[Method] = &[
    // Session lifecycle. Only SaveDatabase and PlanAndWait force the
    // database open; the others must work in any state.
    Method {
        service: SESSION_CONTROL,
        name: "OpenBinary",
        requires_db: false,
        handler: session_control::handle_open_binary,
    },
    Method {
        service: SESSION_CONTROL,
        name: "CloseSession",
        requires_db: false,
        handler: session_control::handle_close_session,
    },
    Method {
        service: SESSION_CONTROL,
        name: "SaveDatabase",
        requires_db: true,
        handler: session_control::handle_save_database,
    },
    Method {
        service: SESSION_CONTROL,
        name: "PlanAndWait",
        requires_db: true,
        handler: session_control::handle_plan_and_wait,
    },
    Method {
        service: SESSION_CONTROL,
        name: "GetSessionInfo",
        requires_db: false,
        handler: session_control::handle_get_session_info,
    },
    // Health surface; must answer even when the binary cannot be opened.
    Method {
        service: HEALTHCHECK,
        name: "Ping",
        requires_db: false,
        handler: health::handle_ping,
    },
    Method {
        service: HEALTHCHECK,
        name: "StatusStream",
        requires_db: false,
        handler: health::handle_status_stream,
    },
    // Memory and code reads.
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetBytes",
        requires_db: true,
        handler: memory::handle_get_bytes,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetDisasm",
        requires_db: true,
        handler: memory::handle_get_disasm,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetFunctionDisasm",
        requires_db: true,
        handler: memory::handle_get_function_disasm,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetDecompiled",
        requires_db: true,
        handler: memory::handle_get_decompiled,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetFunctionName",
        requires_db: true,
        handler: memory::handle_get_function_name,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetDwordAt",
        requires_db: true,
        handler: memory::handle_get_dword_at,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetQwordAt",
        requires_db: true,
        handler: memory::handle_get_qword_at,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetInstructionLength",
        requires_db: true,
        handler: memory::handle_get_instruction_length,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "DataReadString",
        requires_db: true,
        handler: memory::handle_data_read_string,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "DataReadByte",
        requires_db: true,
        handler: memory::handle_data_read_byte,
    },
    // Listings.
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetSegments",
        requires_db: true,
        handler: listing::handle_get_segments,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetFunctions",
        requires_db: true,
        handler: listing::handle_get_functions,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetImports",
        requires_db: true,
        handler: listing::handle_get_imports,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetExports",
        requires_db: true,
        handler: listing::handle_get_exports,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetEntryPoint",
        requires_db: true,
        handler: listing::handle_get_entry_point,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetStrings",
        requires_db: true,
        handler: listing::handle_get_strings,
    },
    // Cross references.
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetXRefsTo",
        requires_db: true,
        handler: xrefs::handle_get_xrefs_to,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetXRefsFrom",
        requires_db: true,
        handler: xrefs::handle_get_xrefs_from,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetDataRefs",
        requires_db: true,
        handler: xrefs::handle_get_data_refs,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetStringXRefs",
        requires_db: true,
        handler: xrefs::handle_get_string_xrefs,
    },
    // Annotation and naming.
    Method {
        service: ANALYSIS_TOOLS,
        name: "SetComment",
        requires_db: true,
        handler: annotations::handle_set_comment,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetComment",
        requires_db: true,
        handler: annotations::handle_get_comment,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "SetFuncComment",
        requires_db: true,
        handler: annotations::handle_set_func_comment,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetFuncComment",
        requires_db: true,
        handler: annotations::handle_get_func_comment,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "SetDecompilerComment",
        requires_db: true,
        handler: annotations::handle_set_decompiler_comment,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "SetName",
        requires_db: true,
        handler: annotations::handle_set_name,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetName",
        requires_db: true,
        handler: annotations::handle_get_name,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "DeleteName",
        requires_db: true,
        handler: annotations::handle_delete_name,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "MakeFunction",
        requires_db: true,
        handler: annotations::handle_make_function,
    },
    // Types.
    Method {
        service: ANALYSIS_TOOLS,
        name: "SetFunctionType",
        requires_db: true,
        handler: types::handle_set_function_type,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "SetLvarType",
        requires_db: true,
        handler: types::handle_set_lvar_type,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "RenameLvar",
        requires_db: true,
        handler: types::handle_rename_lvar,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetGlobals",
        requires_db: true,
        handler: types::handle_get_globals,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "SetGlobalType",
        requires_db: true,
        handler: types::handle_set_global_type,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "RenameGlobal",
        requires_db: true,
        handler: types::handle_rename_global,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "ListStructs",
        requires_db: true,
        handler: types::handle_list_structs,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetStruct",
        requires_db: true,
        handler: types::handle_get_struct,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "ListEnums",
        requires_db: true,
        handler: types::handle_list_enums,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetEnum",
        requires_db: true,
        handler: types::handle_get_enum,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetFunctionInfo",
        requires_db: true,
        handler: types::handle_get_function_info,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "GetTypeAt",
        requires_db: true,
        handler: types::handle_get_type_at,
    },
    // Search.
    Method {
        service: ANALYSIS_TOOLS,
        name: "FindBinary",
        requires_db: true,
        handler: search::handle_find_binary,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "FindText",
        requires_db: true,
        handler: search::handle_find_text,
    },
    // Bulk metadata import.
    Method {
        service: ANALYSIS_TOOLS,
        name: "ImportIl2Cpp",
        requires_db: true,
        handler: metadata::handle_import_il2cpp,
    },
    Method {
        service: ANALYSIS_TOOLS,
        name: "ImportFlutter",
        requires_db: true,
        handler: metadata::handle_import_flutter,
    },
];

/// Serve one request, returning the complete response frame. Never
/// panics on bad input; every failure maps to an error frame here.
pub fn handle(session: &mut Session, path: &str, body: &[u8]) -> Vec<u8> {
    session.begin_request();
    let framed = match route(session, path, body) {
        Ok(encoded) => codec::frame_success(&encoded),
        Err(err) => {
            let status = err.status();
            if status == 500 {
                error!(%path, error = %err, "request failed");
            } else {
                debug!(%path, status, error = %err, "request rejected");
            }
            codec::frame_error(status, &err.to_string())
        }
    };
    session.end_request();
    framed
}

fn route(session: &mut Session, path: &str, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let (service, method_name) = parse_path(path)?;
    let method = lookup(service, method_name)?;
    if method.requires_db {
        ensure_open(session)?;
        session.touch();
    }
    debug!(service = method.service, method = method.name, "dispatching");
    (method.handler)(session, body)
}

/// Split `/<package>.<Service>/<Method>` into service and method names.
/// Empty segments are dropped, and the package prefix is ignored so
/// clients may use bare or fully qualified service names.
fn parse_path(path: &str) -> Result<(&str, &str), WorkerError> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() < 2 {
        return Err(WorkerError::InvalidPath);
    }
    let service_segment = segments[segments.len() - 2];
    let method = segments[segments.len() - 1];
    let service = service_segment.split('.').last().unwrap_or(service_segment);
    Ok((service, method))
}

fn lookup(service: &str, method: &str) -> Result<&'static Method, WorkerError> {
    if let Some(found) = METHODS
        .iter()
        .find(|m| m.service == service && m.name == method)
    {
        return Ok(found);
    }
    if SERVICES.contains(&service) {
        Err(WorkerError::UnknownMethod(method.to_string()))
    } else {
        Err(WorkerError::UnknownService(service.to_string()))
    }
}

/// Open the database lazily for methods that need it, with auto-analysis
/// off. On failure the stored open error is reported; the generic text
/// covers sessions that failed without recording one.
fn ensure_open(session: &mut Session) -> Result<(), WorkerError> {
    if session.is_open() {
        return Ok(());
    }
    debug!("database not open, opening implicitly");
    if session.open(false).is_ok() {
        return Ok(());
    }
    let msg = session
        .last_error()
        .unwrap_or("IDA database is not open. Call OpenBinary first.")
        .to_string();
    Err(WorkerError::DatabaseNotOpen(msg))
}
