//! Run log for patcov.
//!
//! Each `check` and `verify-examples` run can be appended to an NDJSON file
//! (one JSON object per line) so that coverage drift can be audited over time.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `check` or `verify_examples`
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `passed`: whether the run passed
//! - `details`: freeform object with run-specific counts
//!
//! ```no_run
//! use patcov::events::{Event, EventAction, append_event};
//! use serde_json::json;
//!
//! let event = Event::new(EventAction::Check, true).with_details(json!({"required": 12}));
//! append_event("events.ndjson", &event)?;
//! # Ok::<(), patcov::error::CoverageError>(())
//! ```

use crate::error::{CoverageError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Runs that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Coverage reconciliation
    Check,
    /// Example verification against the regex engine
    VerifyExamples,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Check => write!(f, "check"),
            EventAction::VerifyExamples => write!(f, "verify_examples"),
        }
    }
}

/// An event record for the run log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the run finished.
    pub ts: DateTime<Utc>,

    /// The run that was performed.
    pub action: EventAction,

    /// Who ran it (e.g., `user@HOST`).
    pub actor: String,

    /// Whether the run passed.
    pub passed: bool,

    /// Freeform details object with run-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction, passed: bool) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            passed,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            CoverageError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the log at `path`.
///
/// The file and its parent directory are created if missing. Each append
/// writes exactly one line with a trailing newline.
pub fn append_event<P: AsRef<Path>>(path: P, event: &Event) -> Result<()> {
    let events_file = path.as_ref();
    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = events_file.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| {
            CoverageError::UserError(format!(
                "failed to create events directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(events_file)
        .map_err(|e| {
            CoverageError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        CoverageError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}
