//! # cinemeta format decoders
//!
//! One decoder per supported container format. Each decoder is a pure
//! function over the payload bytes that produces either a [`PartialRecord`]
//! directly (structured sources: JSON's nested shape, spreadsheet cells) or a
//! plain-text blob for the field extractor (plain text, PDF, DOCX, JSON's
//! free-text fallback).
//!
//! Decoders report container-level faults through [`DecodeError`]; a missing
//! individual field is never a fault here — it stays unset in the partial
//! record and is handled by normalization and validation downstream.

use cine_fields::PartialRecord;
use thiserror::Error;

pub mod docx;
pub mod json;
pub mod pdf;
pub mod plain;
pub mod sheet;

/// What a decoder hands back: a structured record, or text that still needs
/// field extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPayload {
    Record(PartialRecord),
    Text(String),
}

/// Container-level decode faults. These carry the detailed reason for logs;
/// callers surface a fixed per-format message instead.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed PDF container: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("No text extracted from PDF.")]
    EmptyPdfText,

    #[error("malformed document container: {0}")]
    Container(#[from] zip::result::ZipError),

    #[error("malformed document XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed XLSX workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("workbook contains no sheets")]
    EmptyWorkbook,

    #[error("I/O fault reading container entry: {0}")]
    Io(#[from] std::io::Error),
}
