//! DOCX decoder.
//!
//! Opens the ZIP container and stream-parses `word/document.xml`, collecting
//! `w:t` text. Each paragraph end emits a newline; run and style structure is
//! otherwise discarded — only the flattened text matters.

use crate::DecodeError;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::Cursor;
use zip::ZipArchive;

pub fn decode(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let entry = archive.by_name("word/document.xml")?;
    let xml = std::io::read_to_string(entry)?;

    let mut reader = Reader::from_str(&xml);
    let mut in_text = false;
    let mut out = String::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                out.push_str(&t.unescape().map_err(quick_xml::Error::from)?);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out)
}
