//! Bulk metadata imports from external dumper output.

use std::path::Path;
use std::time::Instant;

use prost::Message;

use crate::codec;
use crate::error::WorkerError;
use crate::proto::v1 as pb;
use crate::session::Session;

/// Apply an Il2CppDumper script/header pair. The handler reads both files
/// so the engine only sees contents; header parse problems are reported
/// in `error` without failing the import.
pub fn handle_import_il2cpp(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::ImportIl2CppRequest = codec::decode(body)?;
    if req.script_path.is_empty() || req.il2cpp_path.is_empty() {
        return Err(WorkerError::Validation(
            "script_path and il2cpp_path are required".to_string(),
        ));
    }
    let script = std::fs::read_to_string(&req.script_path).map_err(|err| {
        WorkerError::Validation(format!("Failed to read {}: {}", req.script_path, err))
    })?;
    let header = std::fs::read_to_string(&req.il2cpp_path).map_err(|err| {
        WorkerError::Validation(format!("Failed to read {}: {}", req.il2cpp_path, err))
    })?;

    let started = Instant::now();
    let report = session.engine().import_il2cpp(&script, &header, &req.fields)?;
    let resp = pb::ImportIl2CppResponse {
        success: true,
        duration_seconds: started.elapsed().as_secs_f64(),
        functions_defined: report.functions_defined,
        functions_named: report.functions_named,
        strings_named: report.strings_named,
        metadata_named: report.metadata_named,
        metadata_methods: report.metadata_methods,
        signatures_applied: report.signatures_applied,
        error: report.error.unwrap_or_default(),
    };
    Ok(resp.encode_to_vec())
}

/// Apply a blutter output directory to the database.
pub fn handle_import_flutter(session: &mut Session, body: &[u8]) -> Result<Vec<u8>, WorkerError> {
    let req: pb::ImportFlutterRequest = codec::decode(body)?;
    if req.blutter_output_path.is_empty() {
        return Err(WorkerError::Validation(
            "blutter_output_path is required".to_string(),
        ));
    }
    let started = Instant::now();
    let report = session
        .engine()
        .import_flutter(Path::new(&req.blutter_output_path))?;
    let resp = pb::ImportFlutterResponse {
        success: true,
        duration_seconds: started.elapsed().as_secs_f64(),
        functions_created: report.functions_created,
        functions_named: report.functions_named,
        error: String::new(),
    };
    Ok(resp.encode_to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::ScriptedEngine;

    fn session() -> Session {
        let (engine, _state) = ScriptedEngine::new();
        Session::new("/nonexistent".into(), "t".into(), Box::new(engine))
    }

    #[test]
    fn il2cpp_requires_both_paths() {
        let mut session = session();
        let req = pb::ImportIl2CppRequest {
            script_path: "script.json".to_string(),
            ..Default::default()
        }
        .encode_to_vec();
        let err = handle_import_il2cpp(&mut session, &req).unwrap_err();
        assert_eq!(err.to_string(), "script_path and il2cpp_path are required");
    }

    #[test]
    fn flutter_requires_the_output_path() {
        let mut session = session();
        let req = pb::ImportFlutterRequest::default().encode_to_vec();
        let err = handle_import_flutter(&mut session, &req).unwrap_err();
        assert_eq!(err.to_string(), "blutter_output_path is required");
    }

    #[test]
    fn il2cpp_reports_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session();
        let req = pb::ImportIl2CppRequest {
            script_path: dir.path().join("missing.json").display().to_string(),
            il2cpp_path: dir.path().join("missing.h").display().to_string(),
            ..Default::default()
        }
        .encode_to_vec();
        let err = handle_import_il2cpp(&mut session, &req).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read "));
    }
}
