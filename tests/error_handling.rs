//! Failure-path coverage: every fault is folded into one outcome variant
//! with its fixed user-facing message, and nothing ever propagates as a
//! panic or error.

use cinemeta::{
    DeclaredType, ExtractionOutcome, FieldLabel, IngestConfig, Payload, RawSubmission, dispatch,
    dispatch_bytes,
};

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

/// A structurally valid single-page PDF whose content stream shows no text.
fn pdf_without_text() -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let content = Content {
        operations: vec![Operation::new("BT", vec![]), Operation::new("ET", vec![])],
    };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("content encodes"),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).expect("pdf serializes");
    out
}

#[test]
fn unsupported_mime_type_is_rejected_pre_decode() {
    for mime in ["image/png", "application/octet-stream", "text/html", ""] {
        let outcome = dispatch_bytes(vec![1, 2, 3], mime);
        assert_eq!(
            outcome,
            ExtractionOutcome::UnsupportedType {
                declared: mime.into(),
            },
            "mime: {mime}"
        );
        assert_eq!(
            outcome.message().as_deref(),
            Some("Unsupported file type. Please upload JSON, TXT, PDF, DOCX, or XLSX files.")
        );
    }
}

#[test]
fn malformed_json_surfaces_the_json_message() {
    let outcome = dispatch_bytes(b"{\"movie\": ".to_vec(), "application/json");
    assert!(matches!(
        outcome,
        ExtractionOutcome::DecodeFailure {
            format: DeclaredType::Json,
            ..
        }
    ));
    assert_eq!(outcome.message().as_deref(), Some("Invalid JSON file format."));
}

#[test]
fn textless_pdf_surfaces_the_pdf_message() {
    let outcome = dispatch_bytes(pdf_without_text(), "application/pdf");

    let ExtractionOutcome::DecodeFailure { format, reason } = &outcome else {
        panic!("expected decode failure, got {outcome:?}");
    };
    assert_eq!(*format, DeclaredType::Pdf);
    assert_eq!(reason, "No text extracted from PDF.");
    assert_eq!(
        outcome.message().as_deref(),
        Some("Error processing PDF file. Please ensure it contains valid text.")
    );
}

#[test]
fn garbage_pdf_bytes_surface_the_pdf_message() {
    let outcome = dispatch_bytes(b"not a pdf at all".to_vec(), "application/pdf");
    assert!(matches!(
        outcome,
        ExtractionOutcome::DecodeFailure {
            format: DeclaredType::Pdf,
            ..
        }
    ));
    assert_eq!(
        outcome.message().as_deref(),
        Some("Error processing PDF file. Please ensure it contains valid text.")
    );
}

#[test]
fn garbage_docx_bytes_surface_the_docx_message() {
    let outcome = dispatch_bytes(
        b"not a zip container".to_vec(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    );
    assert_eq!(outcome.message().as_deref(), Some("Error processing DOCX file."));
}

#[test]
fn garbage_xlsx_bytes_surface_the_xlsx_message() {
    let outcome = dispatch_bytes(b"not a workbook".to_vec(), "application/vnd.ms-excel");
    assert_eq!(outcome.message().as_deref(), Some("Error processing XLSX file."));
}

#[test]
fn validation_failure_lists_every_missing_field_in_fixed_order() {
    let raw = RawSubmission::new(
        Payload::Text("Producer: Thomas".into()),
        "text/plain",
    );
    let outcome = dispatch(raw, &IngestConfig::default());

    assert_eq!(
        outcome,
        ExtractionOutcome::ValidationFailure {
            missing: vec![
                FieldLabel::Title,
                FieldLabel::Director,
                FieldLabel::MusicComposer,
            ],
        }
    );
    assert_eq!(
        outcome.message().as_deref(),
        Some("Data missing: Title, Director, Music Composer")
    );
}

#[test]
fn json_with_sentinel_values_still_fails_validation() {
    let payload = br#"{"movie":{"title":"Not Available","director":"Nolan","producer":"Thomas","musicComposer":"Zimmer"}}"#;
    let outcome = dispatch_bytes(payload.to_vec(), "application/json");

    assert_eq!(
        outcome,
        ExtractionOutcome::ValidationFailure {
            missing: vec![FieldLabel::Title],
        }
    );
}

#[test]
fn failed_submission_is_not_retried_each_outcome_is_final() {
    // Two dispatches of the same broken payload fail identically; there is
    // no retry state carried between submissions.
    let first = dispatch_bytes(b"{broken".to_vec(), "application/json");
    let second = dispatch_bytes(b"{broken".to_vec(), "application/json");
    assert_eq!(first, second);
}
