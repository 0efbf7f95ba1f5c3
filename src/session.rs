//! Session lifecycle: one binary, one database, one state machine.
//!
//! The session owns the engine and is the only place lifecycle rules
//! live: lazy idempotent open, corruption recovery, save/close ordering,
//! and the activity timestamps surfaced by `GetSessionInfo`.

use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::engine::{AnalysisEngine, OpenStatus};

/// Extensions the backend appends to the binary path for its on-disk
/// artifacts. All of them are deleted during corruption recovery.
const DB_ARTIFACT_EXTENSIONS: &[&str] =
    &[".i64", ".idb", ".id0", ".id1", ".id2", ".nam", ".til"];

/// A failed open, carrying the operator-facing message.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct OpenError(pub String);

/// Auto-analysis state tracked next to the engine. Used when the engine
/// cannot report its own status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisState {
    NotStarted,
    Idle,
    Running,
    Unknown,
}

impl AnalysisState {
    fn name(&self) -> &'static str {
        match self {
            AnalysisState::NotStarted => "not_started",
            AnalysisState::Idle => "idle",
            AnalysisState::Running => "running",
            AnalysisState::Unknown => "unknown",
        }
    }
}

/// Result of a save attempt. `dirty` is sampled before the save so the
/// caller sees whether there was anything to write.
#[derive(Debug, Clone, Copy)]
pub struct SaveOutcome {
    pub success: bool,
    pub timestamp: i64,
    pub dirty: bool,
}

#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub success: bool,
    pub duration_seconds: f64,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub binary_path: String,
    pub opened_at: i64,
    pub last_activity: i64,
    pub has_decompiler: bool,
    pub auto_running: bool,
    pub auto_state: String,
}

pub struct Session {
    binary_path: PathBuf,
    session_id: String,
    engine: Box<dyn AnalysisEngine>,
    db_open: bool,
    has_decompiler: bool,
    opened_at: Option<u64>,
    last_activity: Option<u64>,
    analysis_state: AnalysisState,
    last_error: Option<String>,
    /// In-flight request count. The worker serves one request at a time,
    /// so this only ever reads 0 or 1; it is kept because the status
    /// surface reports it.
    pending_requests: u32,
}

impl Session {
    pub fn new(binary_path: PathBuf, session_id: String, engine: Box<dyn AnalysisEngine>) -> Session {
        Session {
            binary_path,
            session_id,
            engine,
            db_open: false,
            has_decompiler: false,
            opened_at: None,
            last_activity: None,
            analysis_state: AnalysisState::NotStarted,
            last_error: None,
            pending_requests: 0,
        }
    }

    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    pub fn is_open(&self) -> bool {
        self.db_open
    }

    pub fn has_decompiler(&self) -> bool {
        self.has_decompiler
    }

    /// Most recent open or save failure, cleared by a successful open.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn last_activity_secs(&self) -> i64 {
        self.last_activity.unwrap_or(0) as i64
    }

    pub fn engine(&mut self) -> &mut dyn AnalysisEngine {
        self.engine.as_mut()
    }

    /// Refresh the activity timestamp. Called once per database-touching
    /// request.
    pub fn touch(&mut self) {
        self.last_activity = Some(unix_now());
    }

    pub fn begin_request(&mut self) {
        self.pending_requests += 1;
    }

    pub fn end_request(&mut self) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
    }

    pub fn pending_requests(&self) -> u32 {
        self.pending_requests
    }

    /// Open the database for the bound binary. Idempotent: an open
    /// session returns immediately and keeps its timestamps.
    ///
    /// A corrupt database is recovered by deleting the backend's artifact
    /// files and retrying once with auto-analysis forced on.
    pub fn open(&mut self, auto_analyze: bool) -> Result<(), OpenError> {
        if self.db_open {
            return Ok(());
        }
        if !self.binary_path.exists() {
            let msg = format!("Binary file not found: {}", self.binary_path.display());
            self.last_error = Some(msg.clone());
            return Err(OpenError(msg));
        }

        info!(
            session = %self.session_id,
            binary = %self.binary_path.display(),
            auto_analyze,
            "opening database"
        );
        let mut status = self.engine.open_database(&self.binary_path, auto_analyze);
        if status.is_corruption() {
            warn!(
                session = %self.session_id,
                status = %status.message(),
                "database unusable, removing artifacts and retrying"
            );
            self.remove_database_artifacts();
            status = self.engine.open_database(&self.binary_path, true);
        }
        if status != OpenStatus::Opened {
            let msg = status.message();
            warn!(session = %self.session_id, error = %msg, "open failed");
            self.last_error = Some(msg.clone());
            return Err(OpenError(msg));
        }

        let now = unix_now();
        self.db_open = true;
        self.opened_at = Some(now);
        self.last_activity = Some(now);
        self.analysis_state = AnalysisState::Idle;
        self.last_error = None;
        self.has_decompiler = self.engine.init_decompiler();
        if !self.has_decompiler {
            debug!(session = %self.session_id, "no decompiler for this session");
        }
        info!(
            session = %self.session_id,
            has_decompiler = self.has_decompiler,
            "database open"
        );
        Ok(())
    }

    /// Write the database to disk. The engine decides what a save means;
    /// the session records the failure message for later reporting.
    pub fn save(&mut self) -> SaveOutcome {
        let dirty = self.engine.is_dirty();
        let success = self.engine.save_database();
        if !success {
            warn!(session = %self.session_id, "database save failed");
            self.last_error = Some("Failed to save database".to_string());
        }
        SaveOutcome {
            success,
            timestamp: unix_now() as i64,
            dirty,
        }
    }

    /// Close the session. Idempotent: a closed session reports success
    /// with no side effects. A failing save never blocks the close.
    pub fn close(&mut self, save: bool) -> bool {
        if !self.db_open {
            return true;
        }
        if save {
            let outcome = self.save();
            if !outcome.success {
                warn!(session = %self.session_id, "save before close failed, closing anyway");
            }
        }
        let closed = self.engine.close_database(save);
        self.db_open = false;
        self.has_decompiler = false;
        self.analysis_state = AnalysisState::NotStarted;
        info!(session = %self.session_id, saved = save, "session closed");
        closed
    }

    /// Run auto-analysis to completion. Blocks the whole worker; there is
    /// no timeout and no cancellation.
    pub fn plan_and_wait(&mut self) -> PlanOutcome {
        info!(session = %self.session_id, "running auto-analysis to completion");
        self.analysis_state = AnalysisState::Running;
        let started = Instant::now();
        let result = self.engine.plan_and_wait();
        let duration_seconds = started.elapsed().as_secs_f64();
        match result {
            Ok(()) => {
                self.analysis_state = AnalysisState::Idle;
                info!(session = %self.session_id, duration_seconds, "auto-analysis finished");
                PlanOutcome {
                    success: true,
                    duration_seconds,
                    error: None,
                }
            }
            Err(err) => {
                self.analysis_state = AnalysisState::Unknown;
                warn!(session = %self.session_id, error = %err, "auto-analysis failed");
                PlanOutcome {
                    success: false,
                    duration_seconds,
                    error: Some(err.to_string()),
                }
            }
        }
    }

    /// Session snapshot, valid in any state. Prefers the engine's own
    /// auto-analysis report and falls back to the tracked state.
    pub fn info(&self) -> SessionInfo {
        let (auto_running, auto_state) = match self.engine.auto_status() {
            Some(status) => (status.running, status.state),
            None => (
                self.analysis_state == AnalysisState::Running,
                self.analysis_state.name().to_string(),
            ),
        };
        SessionInfo {
            binary_path: self.binary_path.display().to_string(),
            opened_at: self.opened_at.unwrap_or(0) as i64,
            last_activity: self.last_activity.unwrap_or(0) as i64,
            has_decompiler: self.has_decompiler,
            auto_running,
            auto_state,
        }
    }

    /// Delete the backend's on-disk artifacts next to the binary. Missing
    /// files are fine; deletion failures are logged and skipped.
    fn remove_database_artifacts(&self) {
        for ext in DB_ARTIFACT_EXTENSIONS {
            let mut os = self.binary_path.as_os_str().to_os_string();
            os.push(ext);
            let candidate = PathBuf::from(os);
            if !candidate.exists() {
                continue;
            }
            match std::fs::remove_file(&candidate) {
                Ok(()) => debug!(file = %candidate.display(), "removed database artifact"),
                Err(err) => {
                    warn!(file = %candidate.display(), error = %err, "could not remove artifact")
                }
            }
        }
    }
}

pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
