//! Intake layer for the cinemeta extraction pipeline.
//! Receives document submissions, settles their identity, sanitizes
//! metadata, and resolves the declared MIME type against the supported
//! format set, producing a checked submission ready for dispatch.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

mod config;
mod types;

pub use config::IngestConfig;
pub use types::{CheckedSubmission, DeclaredType, Payload, RawSubmission};

/// Intake entry point. Never fails: identity is generated when absent, the
/// timestamp is stamped when absent, metadata is sanitized per config, and
/// an unsupported declared type simply resolves to `format: None` for the
/// dispatcher to reject.
pub fn check(raw: RawSubmission, cfg: &IngestConfig) -> CheckedSubmission {
    let RawSubmission {
        id,
        declared_type,
        payload,
        filename,
        received_at,
    } = raw;

    let id = sanitize_optional_string(Some(id), cfg.strip_control_chars)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let filename = sanitize_optional_string(filename, cfg.strip_control_chars);
    let received_at = received_at.unwrap_or_else(Utc::now);
    let format = DeclaredType::from_mime(&declared_type);

    debug!(
        submission_id = %id,
        declared = %declared_type,
        resolved = format.map(|f| f.mime()),
        payload_bytes = payload.len(),
        "submission checked"
    );

    CheckedSubmission {
        id,
        declared_type,
        format,
        payload,
        filename,
        received_at,
    }
}

fn sanitize_optional_string(value: Option<String>, strip_control: bool) -> Option<String> {
    value.and_then(|raw| {
        let filtered = if strip_control {
            raw.chars().filter(|c| !c.is_control()).collect::<String>()
        } else {
            raw
        };
        let trimmed = filtered.trim().to_string();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    })
}
