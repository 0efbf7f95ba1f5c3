//! End-to-end tests over a real Unix socket: raw HTTP framing in,
//! protobuf or plain-text bodies out, one connection per request.

mod support;

use prost::Message;

use ida_worker::engine::StringItem;
use ida_worker::proto::v1 as pb;
use ida_worker::OpenStatus;
use support::worker;

const PING: &str = "/idagrpc.v1.Healthcheck/Ping";
const STATUS: &str = "/idagrpc.v1.Healthcheck/StatusStream";
const OPEN: &str = "/idagrpc.v1.SessionControl/OpenBinary";
const CLOSE: &str = "/idagrpc.v1.SessionControl/CloseSession";
const SAVE: &str = "/idagrpc.v1.SessionControl/SaveDatabase";
const PLAN: &str = "/idagrpc.v1.SessionControl/PlanAndWait";
const INFO: &str = "/idagrpc.v1.SessionControl/GetSessionInfo";

#[tokio::test]
async fn ping_answers_on_the_fully_qualified_path() {
    let mut w = worker();
    let resp = w.call(PING, pb::PingRequest {}.encode_to_vec()).await;
    assert_eq!(resp.status, 200);
    assert_eq!(resp.content_type, "application/proto");
    let ping: pb::PingResponse = resp.decode();
    assert!(ping.alive);
}

#[tokio::test]
async fn ping_answers_on_abbreviated_package_paths() {
    let mut w = worker();
    let resp = w.call("/ns.Healthcheck/Ping", Vec::new()).await;
    let ping: pb::PingResponse = resp.decode();
    assert!(ping.alive);
}

#[tokio::test]
async fn open_binary_reports_the_bound_path() {
    let mut w = worker();
    let req = pb::OpenBinaryRequest {
        binary_path: "ignored.bin".to_string(),
        auto_analyze: true,
    };
    let resp = w.call(OPEN, req.encode_to_vec()).await;
    let open: pb::OpenBinaryResponse = resp.decode();

    assert!(open.success);
    assert_eq!(open.binary_path, w.binary.display().to_string());
    assert!(open.error.is_empty());
    // The requested flag travels to the engine untouched.
    assert_eq!(w.state.borrow().open_calls, vec![true]);
}

#[tokio::test]
async fn open_failure_is_reported_in_band() {
    let mut w = worker();
    w.state
        .borrow_mut()
        .open_results
        .push_back(OpenStatus::FileNotFound);

    let resp = w.call(OPEN, Vec::new()).await;
    let open: pb::OpenBinaryResponse = resp.decode();
    assert!(!open.success);
    assert_eq!(open.error, "File not found or cannot be opened");
    // The bound path is echoed on failure too.
    assert_eq!(open.binary_path, w.binary.display().to_string());
}

#[tokio::test]
async fn opening_a_missing_binary_fails_cleanly() {
    let mut w = worker();
    std::fs::remove_file(&w.binary).unwrap();

    let resp = w.call(OPEN, Vec::new()).await;
    let open: pb::OpenBinaryResponse = resp.decode();
    assert!(!open.success);
    assert!(open.error.starts_with("Binary file not found: "));
    // The engine is never consulted for a file that does not exist.
    assert!(w.state.borrow().open_calls.is_empty());
}

#[tokio::test]
async fn corruption_recovery_deletes_stale_artifacts_and_retries() {
    let mut w = worker();
    let stale_db = w.dir.path().join("target.bin.i64");
    let stale_id0 = w.dir.path().join("target.bin.id0");
    std::fs::write(&stale_db, b"junk").unwrap();
    std::fs::write(&stale_id0, b"junk").unwrap();
    w.state
        .borrow_mut()
        .open_results
        .push_back(OpenStatus::Corrupt);

    let resp = w.call(OPEN, Vec::new()).await;
    let open: pb::OpenBinaryResponse = resp.decode();

    assert!(open.success);
    assert!(!stale_db.exists());
    assert!(!stale_id0.exists());
    assert!(w.binary.exists());
    // Retry is forced to auto-analyze regardless of the request.
    assert_eq!(w.state.borrow().open_calls, vec![false, true]);
}

#[tokio::test]
async fn reopening_preserves_the_first_open() {
    let mut w = worker();
    w.call(OPEN, Vec::new()).await;
    let first: pb::GetSessionInfoResponse = w.call(INFO, Vec::new()).await.decode();
    w.call(OPEN, Vec::new()).await;
    let second: pb::GetSessionInfoResponse = w.call(INFO, Vec::new()).await.decode();

    assert!(first.opened_at > 0);
    assert_eq!(first.opened_at, second.opened_at);
    assert_eq!(w.state.borrow().open_calls, vec![false]);
}

#[tokio::test]
async fn session_info_does_not_open_the_database() {
    let mut w = worker();
    let info: pb::GetSessionInfoResponse = w.call(INFO, Vec::new()).await.decode();
    assert_eq!(info.binary_path, w.binary.display().to_string());
    assert_eq!(info.opened_at, 0);
    assert_eq!(info.auto_state, "not_started");
    assert!(w.state.borrow().open_calls.is_empty());
}

#[tokio::test]
async fn close_session_is_idempotent() {
    let mut w = worker();
    w.call(OPEN, Vec::new()).await;

    let req = pb::CloseSessionRequest { save: false }.encode_to_vec();
    let first: pb::CloseSessionResponse = w.call(CLOSE, req.clone()).await.decode();
    let second: pb::CloseSessionResponse = w.call(CLOSE, req).await.decode();

    assert!(first.success);
    assert!(second.success);
    assert_eq!(w.state.borrow().close_calls, 1);

    // A later analysis call reopens from scratch.
    w.call("/idagrpc.v1.AnalysisTools/GetStrings", Vec::new())
        .await;
    assert_eq!(w.state.borrow().open_calls, vec![false, false]);
}

#[tokio::test]
async fn malformed_paths_are_rejected_with_400() {
    let mut w = worker();
    for path in ["/OpenBinary", "//"] {
        let resp = w.call(path, Vec::new()).await;
        assert_eq!(resp.status, 400, "{path}");
        assert_eq!(resp.content_type, "text/plain");
        assert_eq!(resp.text(), "Invalid path");
    }
}

#[tokio::test]
async fn unknown_service_is_a_404() {
    let mut w = worker();
    let resp = w.call("/idagrpc.v1.Bogus/Ping", Vec::new()).await;
    assert_eq!(resp.status, 404);
    assert_eq!(resp.text(), "Unknown service: Bogus");
}

#[tokio::test]
async fn unknown_method_on_a_known_service_is_a_500() {
    let mut w = worker();
    let resp = w
        .call("/idagrpc.v1.SessionControl/Nope", Vec::new())
        .await;
    assert_eq!(resp.status, 500);
    assert_eq!(resp.text(), "Unknown method: Nope");
}

#[tokio::test]
async fn analysis_methods_open_the_database_implicitly() {
    let mut w = worker();
    let resp = w
        .call("/idagrpc.v1.AnalysisTools/GetStrings", Vec::new())
        .await;
    let strings: pb::GetStringsResponse = resp.decode();
    assert_eq!(strings.total, 0);
    // Implicit opens never auto-analyze.
    assert_eq!(w.state.borrow().open_calls, vec![false]);
}

#[tokio::test]
async fn get_bytes_validates_the_requested_size() {
    let mut w = worker();

    let negative = pb::GetBytesRequest {
        address: 0x1000,
        size: -1,
    };
    let resp = w
        .call(
            "/idagrpc.v1.AnalysisTools/GetBytes",
            negative.encode_to_vec(),
        )
        .await;
    assert_eq!(resp.status, 500);
    assert_eq!(resp.content_type, "text/plain");
    assert_eq!(resp.text(), "Size must be positive");

    let oversized = pb::GetBytesRequest {
        address: 0x1000,
        size: 11 * 1024 * 1024,
    };
    let resp = w
        .call(
            "/idagrpc.v1.AnalysisTools/GetBytes",
            oversized.encode_to_vec(),
        )
        .await;
    assert_eq!(resp.status, 500);
    assert_eq!(resp.text(), "Size too large (max 10MB)");

    let ok = pb::GetBytesRequest {
        address: 0x1000,
        size: 4,
    };
    let resp = w
        .call("/idagrpc.v1.AnalysisTools/GetBytes", ok.encode_to_vec())
        .await;
    let bytes: pb::GetBytesResponse = resp.decode();
    assert_eq!(bytes.data, vec![0x90; 4]);
}

#[tokio::test]
async fn names_round_trip_through_the_engine() {
    let mut w = worker();
    let set = pb::SetNameRequest {
        address: 0x4000,
        name: "init".to_string(),
    };
    let resp: pb::SetNameResponse = w
        .call("/idagrpc.v1.AnalysisTools/SetName", set.encode_to_vec())
        .await
        .decode();
    assert!(resp.success);

    let get = pb::GetNameRequest { address: 0x4000 }.encode_to_vec();
    let named: pb::GetNameResponse = w
        .call("/idagrpc.v1.AnalysisTools/GetName", get.clone())
        .await
        .decode();
    assert_eq!(named.name, "init");

    let del = pb::DeleteNameRequest { address: 0x4000 }.encode_to_vec();
    let deleted: pb::DeleteNameResponse = w
        .call("/idagrpc.v1.AnalysisTools/DeleteName", del)
        .await
        .decode();
    assert!(deleted.success);

    let unnamed: pb::GetNameResponse = w
        .call("/idagrpc.v1.AnalysisTools/GetName", get)
        .await
        .decode();
    assert_eq!(unnamed.name, "");
}

#[tokio::test]
async fn get_function_name_resolves_through_the_engine() {
    let mut w = worker();
    w.state
        .borrow_mut()
        .names
        .insert(0x401000, "main".to_string());

    let req = pb::GetFunctionNameRequest { address: 0x401000 }.encode_to_vec();
    let resp = w
        .call("/idagrpc.v1.AnalysisTools/GetFunctionName", req)
        .await;
    assert_eq!(resp.status, 200);
    let named: pb::GetFunctionNameResponse = resp.decode();
    assert_eq!(named.name, "main");
}

#[tokio::test]
async fn repeatable_and_regular_comments_are_separate_namespaces() {
    let mut w = worker();
    for (text, repeatable) in [("stack cookie", false), ("canary check", true)] {
        let set = pb::SetCommentRequest {
            address: 0x5000,
            comment: text.to_string(),
            repeatable,
        };
        let resp: pb::SetCommentResponse = w
            .call("/idagrpc.v1.AnalysisTools/SetComment", set.encode_to_vec())
            .await
            .decode();
        assert!(resp.success);
    }

    // Each kind reads back its own comment; the flag is not dropped on
    // either leg of the round trip.
    for (expected, repeatable) in [("stack cookie", false), ("canary check", true)] {
        let get = pb::GetCommentRequest {
            address: 0x5000,
            repeatable,
        };
        let found: pb::GetCommentResponse = w
            .call("/idagrpc.v1.AnalysisTools/GetComment", get.encode_to_vec())
            .await
            .decode();
        assert_eq!(found.comment, expected);
    }
}

#[tokio::test]
async fn get_strings_filters_before_paginating() {
    let mut w = worker();
    {
        let mut state = w.state.borrow_mut();
        state.strings = vec![
            StringItem {
                address: 0x100,
                value: "alpha".to_string(),
            },
            StringItem {
                address: 0x200,
                value: "beta".to_string(),
            },
            StringItem {
                address: 0x300,
                value: "ALPHA".to_string(),
            },
            StringItem {
                address: 0x400,
                value: "alphabet".to_string(),
            },
        ];
    }

    let req = pb::GetStringsRequest {
        offset: 1,
        limit: 2,
        regex: "alpha".to_string(),
        case_sensitive: false,
    };
    let page: pb::GetStringsResponse = w
        .call("/idagrpc.v1.AnalysisTools/GetStrings", req.encode_to_vec())
        .await
        .decode();

    // Total counts every match; the page starts after the first one.
    assert_eq!(page.total, 3);
    assert_eq!(page.offset, 1);
    assert_eq!(page.count, 2);
    let values: Vec<&str> = page.strings.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, ["ALPHA", "alphabet"]);

    let sensitive = pb::GetStringsRequest {
        offset: 0,
        limit: 0,
        regex: "alpha".to_string(),
        case_sensitive: true,
    };
    let page: pb::GetStringsResponse = w
        .call(
            "/idagrpc.v1.AnalysisTools/GetStrings",
            sensitive.encode_to_vec(),
        )
        .await
        .decode();
    assert_eq!(page.total, 2);
    let values: Vec<&str> = page.strings.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, ["alpha", "alphabet"]);
}

#[tokio::test]
async fn invalid_string_filters_are_rejected() {
    let mut w = worker();
    let req = pb::GetStringsRequest {
        offset: 0,
        limit: 0,
        regex: "[unclosed".to_string(),
        case_sensitive: false,
    };
    let resp = w
        .call("/idagrpc.v1.AnalysisTools/GetStrings", req.encode_to_vec())
        .await;
    assert_eq!(resp.status, 500);
    assert!(resp.text().contains("regex"));
}

#[tokio::test]
async fn status_stream_counts_itself_in_flight() {
    let mut w = worker();
    let status: pb::WorkerStatus = w.call(STATUS, Vec::new()).await.decode();
    assert_eq!(status.pending_requests, 1);
    assert!(status.timestamp > 0);
    assert!(!status.dirty);
}

#[tokio::test]
async fn save_failure_is_reported_in_band() {
    let mut w = worker();
    w.call(OPEN, Vec::new()).await;
    {
        let mut state = w.state.borrow_mut();
        state.save_result = false;
        state.dirty = true;
    }

    let saved: pb::SaveDatabaseResponse = w.call(SAVE, Vec::new()).await.decode();
    assert!(!saved.success);
    assert_eq!(saved.error, "Failed to save database");
    assert!(saved.dirty);
    assert!(saved.timestamp > 0);

    // The worker keeps serving after a failed save.
    let ping: pb::PingResponse = w.call(PING, Vec::new()).await.decode();
    assert!(ping.alive);
}

#[tokio::test]
async fn plan_and_wait_reports_duration_and_errors() {
    let mut w = worker();
    w.call(OPEN, Vec::new()).await;

    let planned: pb::PlanAndWaitResponse = w.call(PLAN, Vec::new()).await.decode();
    assert!(planned.success);
    assert!(planned.duration_seconds >= 0.0);
    assert!(planned.error.is_empty());

    w.state.borrow_mut().plan_error = Some("autoanalysis failed".to_string());
    let failed: pb::PlanAndWaitResponse = w.call(PLAN, Vec::new()).await.decode();
    assert!(!failed.success);
    assert_eq!(failed.error, "autoanalysis failed");
}

#[tokio::test]
async fn engine_rejections_become_internal_errors() {
    let mut w = worker();
    let req = pb::GetDisasmRequest { address: 0x1000 }.encode_to_vec();
    let resp = w.call("/idagrpc.v1.AnalysisTools/GetDisasm", req).await;
    assert_eq!(resp.status, 500);
    assert_eq!(resp.text(), "not scripted");
}

#[tokio::test]
async fn missing_decompiler_is_reported() {
    let mut w = worker();
    let req = pb::GetDecompiledRequest { address: 0x4000 }.encode_to_vec();
    let resp = w.call("/idagrpc.v1.AnalysisTools/GetDecompiled", req).await;
    assert_eq!(resp.status, 500);
    assert_eq!(resp.text(), "Decompiler not available");
}

#[tokio::test]
async fn find_binary_defaults_to_the_whole_address_space() {
    let mut w = worker();
    w.state.borrow_mut().find_result = vec![0x1234, 0x1240];

    let sentinel = pb::FindBinaryRequest {
        start: 0,
        end: 0,
        pattern: "90 90".to_string(),
        search_up: false,
    };
    let found: pb::FindBinaryResponse = w
        .call(
            "/idagrpc.v1.AnalysisTools/FindBinary",
            sentinel.encode_to_vec(),
        )
        .await
        .decode();
    assert_eq!(found.addresses, vec![0x1234, 0x1240]);

    let bounded = pb::FindBinaryRequest {
        start: 0x2000,
        end: 0x3000,
        pattern: "cc".to_string(),
        search_up: true,
    };
    w.call(
        "/idagrpc.v1.AnalysisTools/FindBinary",
        bounded.encode_to_vec(),
    )
    .await;

    let state = w.state.borrow();
    assert_eq!(state.find_calls[0], (0x1000, 0x9000, "90 90".to_string(), false));
    assert_eq!(state.find_calls[1], (0x2000, 0x3000, "cc".to_string(), true));
}
