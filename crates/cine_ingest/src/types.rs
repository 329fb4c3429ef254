//! Core data model types for the `cine_ingest` crate.
//!
//! These types represent the shape of a document submission and the checked
//! form the extraction dispatcher consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of formats the pipeline can decode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeclaredType {
    Json,
    PlainText,
    Pdf,
    Docx,
    Xlsx,
}

impl DeclaredType {
    /// Every format the pipeline accepts, in dispatch order.
    pub const ALL: [DeclaredType; 5] = [
        DeclaredType::Json,
        DeclaredType::PlainText,
        DeclaredType::Pdf,
        DeclaredType::Docx,
        DeclaredType::Xlsx,
    ];

    /// Maps a declared MIME type onto a decodable format. Anything outside
    /// the accepted set returns `None` and is rejected before any decoder
    /// runs.
    pub fn from_mime(mime: &str) -> Option<DeclaredType> {
        match mime {
            "application/json" => Some(DeclaredType::Json),
            "text/plain" => Some(DeclaredType::PlainText),
            "application/pdf" => Some(DeclaredType::Pdf),
            "application/msword"
            | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(DeclaredType::Docx)
            }
            "application/vnd.ms-excel"
            | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(DeclaredType::Xlsx)
            }
            _ => None,
        }
    }

    /// The canonical MIME string for this format.
    pub fn mime(self) -> &'static str {
        match self {
            DeclaredType::Json => "application/json",
            DeclaredType::PlainText => "text/plain",
            DeclaredType::Pdf => "application/pdf",
            DeclaredType::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DeclaredType::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// Maps a file extension (without the dot) onto a format, the way the
    /// legacy picker's accept list did.
    pub fn from_extension(extension: &str) -> Option<DeclaredType> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(DeclaredType::Json),
            "txt" => Some(DeclaredType::PlainText),
            "pdf" => Some(DeclaredType::Pdf),
            "docx" => Some(DeclaredType::Docx),
            "xlsx" => Some(DeclaredType::Xlsx),
            _ => None,
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclaredType::Json => "JSON",
            DeclaredType::PlainText => "TXT",
            DeclaredType::Pdf => "PDF",
            DeclaredType::Docx => "DOCX",
            DeclaredType::Xlsx => "XLSX",
        };
        f.write_str(name)
    }
}

/// Raw payload content provided with a submission. Text is kept as-is;
/// anything else arrives as bytes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Bytes(Vec<u8>),
}

impl Payload {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Payload::Text(text) => text.as_bytes(),
            Payload::Bytes(bytes) => bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

/// One document submission. Created per user action and consumed exactly
/// once by the dispatcher; no history is retained across submissions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawSubmission {
    /// Optional caller-supplied id; a fresh one is generated when empty.
    pub id: String,
    /// Declared MIME type, exactly as the caller supplied it.
    pub declared_type: String,
    pub payload: Payload,
    /// Original filename, when the submission came from a file picker.
    pub filename: Option<String>,
    /// Submission moment; stamped at intake when absent.
    pub received_at: Option<DateTime<Utc>>,
}

impl RawSubmission {
    /// Convenience constructor for callers that only have bytes and a type.
    pub fn new(payload: Payload, declared_type: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            declared_type: declared_type.into(),
            payload,
            filename: None,
            received_at: None,
        }
    }
}

/// A submission after intake: identity settled, metadata sanitized, declared
/// type resolved against the supported set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckedSubmission {
    pub id: String,
    /// Raw declared MIME string, kept for logs and rejection reports.
    pub declared_type: String,
    /// Resolved format; `None` means the declared type is unsupported.
    pub format: Option<DeclaredType>,
    pub payload: Payload,
    pub filename: Option<String>,
    pub received_at: DateTime<Utc>,
}
