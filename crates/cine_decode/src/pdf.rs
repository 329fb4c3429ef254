//! PDF decoder.
//!
//! Walks pages in document order, decodes each page's content stream, and
//! collects the text-show operands. Runs within a page are joined with a
//! single space and pages with a newline, so downstream line-anchored field
//! extraction sees one line per page.

use crate::DecodeError;
use lopdf::Document;
use lopdf::Object;
use lopdf::content::Content;
use tracing::debug;

pub fn decode(bytes: &[u8]) -> Result<String, DecodeError> {
    let doc = Document::load_mem(bytes)?;

    let mut pages_text = Vec::new();
    for (_number, page_id) in doc.get_pages() {
        let data = doc.get_page_content(page_id)?;
        let content = Content::decode(&data)?;

        let mut runs: Vec<String> = Vec::new();
        for operation in &content.operations {
            match operation.operator.as_str() {
                "Tj" | "'" | "\"" => collect_strings(&operation.operands, &mut runs),
                "TJ" => {
                    // A TJ array interleaves show strings with kerning
                    // offsets; the offsets are dropped.
                    if let Some(Object::Array(parts)) = operation.operands.first() {
                        let mut run = String::new();
                        for part in parts {
                            if let Object::String(text, _) = part {
                                run.push_str(&String::from_utf8_lossy(text));
                            }
                        }
                        if !run.is_empty() {
                            runs.push(run);
                        }
                    }
                }
                _ => {}
            }
        }
        pages_text.push(runs.join(" "));
    }

    debug!(pages = pages_text.len(), "decoded pdf text runs");

    let text = pages_text.join("\n");
    if text.trim().is_empty() {
        return Err(DecodeError::EmptyPdfText);
    }
    Ok(text)
}

fn collect_strings(operands: &[Object], runs: &mut Vec<String>) {
    for operand in operands {
        if let Object::String(text, _) = operand {
            runs.push(String::from_utf8_lossy(text).into_owned());
        }
    }
}
