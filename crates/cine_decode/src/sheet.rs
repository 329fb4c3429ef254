//! Spreadsheet decoder.
//!
//! Reads the first sheet of the workbook only. The sheet's first row is the
//! header row; only the first data row beneath it is consulted. Columns are
//! located by exact, case-sensitive header text. A missing column or a
//! missing data row leaves the field unset — only a container-level fault
//! fails the decode.

use crate::DecodeError;
use calamine::{Data, Reader, Xlsx};
use cine_fields::PartialRecord;
use std::io::Cursor;

pub fn decode(bytes: &[u8]) -> Result<PartialRecord, DecodeError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(DecodeError::EmptyWorkbook)?;
    let range = workbook.worksheet_range(&sheet)?;

    let mut rows = range.rows();
    let (Some(header), Some(row)) = (rows.next(), rows.next()) else {
        return Ok(PartialRecord::default());
    };

    Ok(PartialRecord {
        title: field(header, row, "Title"),
        director: field(header, row, "Director"),
        producer: field(header, row, "Producer"),
        music_composer: field(header, row, "Music Composer"),
    })
}

fn field(header: &[Data], row: &[Data], name: &str) -> Option<String> {
    let column = header
        .iter()
        .position(|cell| cell_text(cell).as_deref() == Some(name))?;
    row.get(column).and_then(cell_text)
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.clone(),
        other => other.to_string(),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
