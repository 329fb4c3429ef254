//! Workspace umbrella crate for cinemeta.
//!
//! This crate stitches together submission intake, format decoding, field
//! extraction, and validation so callers can turn a document payload into a
//! canonical four-field movie record with a single API entry point.
//!
//! ## Pipeline
//!
//! raw bytes + declared MIME type → [`dispatch`] → format decoder →
//! (structured record | text blob) → [`extract_fields`] when text →
//! normalization → validation → [`ExtractionOutcome`].
//!
//! Dispatch is total: it never panics and never returns an error — every
//! fault is folded into exactly one [`ExtractionOutcome`] variant. Each
//! submission derives its own record end-to-end; nothing is shared or
//! retained across submissions.
//!
//! ## Example Usage
//!
//! ```
//! use cinemeta::{dispatch_bytes, ExtractionOutcome};
//!
//! let payload = br#"{"movie":{"title":"Inception","director":"Nolan",
//!                    "producer":"Thomas","musicComposer":"Zimmer"}}"#;
//! let outcome = dispatch_bytes(payload.to_vec(), "application/json");
//!
//! let ExtractionOutcome::Success(record) = outcome else {
//!     panic!("expected a complete record");
//! };
//! assert_eq!(record.title, "Inception");
//! ```

pub use cine_decode::{DecodeError, DecodedPayload};
pub use cine_fields::{
    CanonicalRecord, FieldLabel, NOT_AVAILABLE, PartialRecord, extract_fields, missing_fields,
};
pub use cine_ingest::{
    CheckedSubmission, DeclaredType, IngestConfig, Payload, RawSubmission, check,
};

mod config;
mod session;

pub use config::{CinemetaConfig, ConfigLoadError};
pub use session::{SessionController, SessionState, SubmissionToken};

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{Level, info, warn};

/// The one unit the pipeline hands back to callers. Exactly one variant is
/// ever populated per submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// Decode and validation both succeeded; the record is complete.
    Success(CanonicalRecord),
    /// Decode succeeded but one or more fields are missing. The labels are
    /// always in fixed report order.
    ValidationFailure { missing: Vec<FieldLabel> },
    /// Container-level fault. `reason` carries the detail for logs; the
    /// user-facing text stays fixed per format.
    DecodeFailure { format: DeclaredType, reason: String },
    /// The declared MIME type is outside the supported set; no decoder ran.
    UnsupportedType { declared: String },
}

impl ExtractionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionOutcome::Success(_))
    }

    /// The fixed human-readable failure message, `None` for success.
    pub fn message(&self) -> Option<String> {
        match self {
            ExtractionOutcome::Success(_) => None,
            ExtractionOutcome::ValidationFailure { missing } => {
                let labels: Vec<&str> = missing.iter().map(|label| label.label()).collect();
                Some(format!("Data missing: {}", labels.join(", ")))
            }
            ExtractionOutcome::DecodeFailure { format, .. } => {
                Some(decode_message(*format).to_string())
            }
            ExtractionOutcome::UnsupportedType { .. } => Some(
                "Unsupported file type. Please upload JSON, TXT, PDF, DOCX, or XLSX files."
                    .to_string(),
            ),
        }
    }
}

fn decode_message(format: DeclaredType) -> &'static str {
    match format {
        DeclaredType::Json => "Invalid JSON file format.",
        DeclaredType::PlainText => "Error processing TXT file.",
        DeclaredType::Pdf => "Error processing PDF file. Please ensure it contains valid text.",
        DeclaredType::Docx => "Error processing DOCX file.",
        DeclaredType::Xlsx => "Error processing XLSX file.",
    }
}

/// Pipeline entry point: one submission in, one outcome out.
pub fn dispatch(raw: RawSubmission, cfg: &IngestConfig) -> ExtractionOutcome {
    let start = Instant::now();
    let submission = cine_ingest::check(raw, cfg);

    let span = tracing::span!(
        Level::INFO,
        "cinemeta.dispatch",
        submission_id = %submission.id,
        declared = %submission.declared_type
    );
    let _guard = span.enter();

    let outcome = run(&submission, cfg);
    match &outcome {
        ExtractionOutcome::Success(_) => {
            info!(
                elapsed_micros = start.elapsed().as_micros(),
                "dispatch_success"
            );
        }
        failure => {
            warn!(
                elapsed_micros = start.elapsed().as_micros(),
                reason = failure.message().as_deref().unwrap_or("unknown"),
                "dispatch_failure"
            );
        }
    }
    outcome
}

/// Convenience wrapper over [`dispatch`] for callers that only have bytes
/// and a declared type, using the default intake configuration.
pub fn dispatch_bytes(bytes: Vec<u8>, declared_type: &str) -> ExtractionOutcome {
    dispatch(
        RawSubmission::new(Payload::Bytes(bytes), declared_type),
        &IngestConfig::default(),
    )
}

fn run(submission: &CheckedSubmission, cfg: &IngestConfig) -> ExtractionOutcome {
    let Some(format) = submission.format else {
        return ExtractionOutcome::UnsupportedType {
            declared: submission.declared_type.clone(),
        };
    };

    if let Some(limit) = cfg.max_payload_bytes {
        let got = submission.payload.len();
        if got > limit {
            return ExtractionOutcome::DecodeFailure {
                format,
                reason: format!("payload exceeds {limit} bytes (got {got})"),
            };
        }
    }

    let decoded = match decode_payload(format, &submission.payload) {
        Ok(decoded) => decoded,
        Err(err) => {
            return ExtractionOutcome::DecodeFailure {
                format,
                reason: err.to_string(),
            };
        }
    };

    let partial = match decoded {
        DecodedPayload::Record(partial) => partial,
        DecodedPayload::Text(text) => extract_fields(&text),
    };

    let record = partial.into_canonical();
    let missing = missing_fields(&record);
    if missing.is_empty() {
        ExtractionOutcome::Success(record)
    } else {
        ExtractionOutcome::ValidationFailure { missing }
    }
}

fn decode_payload(format: DeclaredType, payload: &Payload) -> Result<DecodedPayload, DecodeError> {
    match format {
        DeclaredType::Json => cine_decode::json::decode(payload.as_bytes()),
        DeclaredType::PlainText => Ok(DecodedPayload::Text(match payload {
            // Already text; nothing to decode.
            Payload::Text(text) => text.clone(),
            Payload::Bytes(bytes) => cine_decode::plain::decode(bytes),
        })),
        DeclaredType::Pdf => cine_decode::pdf::decode(payload.as_bytes()).map(DecodedPayload::Text),
        DeclaredType::Docx => {
            cine_decode::docx::decode(payload.as_bytes()).map(DecodedPayload::Text)
        }
        DeclaredType::Xlsx => {
            cine_decode::sheet::decode(payload.as_bytes()).map(DecodedPayload::Record)
        }
    }
}
