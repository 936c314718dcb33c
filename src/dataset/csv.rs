//! CSV parsing for held-out evaluation splits.
//!
//! Supported format:
//! - UTF-8, comma-separated, `\n` or `\r\n` record endings
//! - The first non-blank record is always the header row
//! - Double-quoted fields may contain commas, line breaks and `""` escapes;
//!   a quote left open at the end of the buffer is an error
//! - Leading and trailing whitespace is trimmed from every cell, header and
//!   data alike, quoted or not
//! - Blank records are skipped
//!
//! Reading the bytes from disk or network is the caller's job.

use log::debug;

use crate::dataset::table::Table;
use crate::error::{EvalError, Result};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses CSV bytes into a `Table`.
pub fn parse_table(data: &[u8]) -> Result<Table> {
    let text = std::str::from_utf8(data)
        .map_err(|_| EvalError::Csv("CSV file is not valid UTF-8".into()))?;

    let mut records = parse_records(text)?.into_iter();

    let headers = records.next()
        .ok_or_else(|| EvalError::Csv("CSV contains no header row".into()))?;

    let mut table = Table::new(headers)?;
    for record in records {
        table.push_row(record)?;
    }

    debug!(
        "parsed CSV table: {} rows x {} columns",
        table.len(),
        table.headers().len()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Splits the whole buffer into records of trimmed cells.
///
/// Quote state carries across line breaks, so a quoted field may span lines.
fn parse_records(text: &str) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // Escaped quote inside quoted field.
                    current.push('"');
                    chars.next();
                    continue;
                }
                in_quotes = !in_quotes;
                quoted = true;
            }
            ',' if !in_quotes => fields.push(take_cell(&mut current)),
            '\r' if !in_quotes && chars.peek() == Some(&'\n') => {}
            '\n' if !in_quotes => {
                fields.push(take_cell(&mut current));
                end_record(&mut records, std::mem::take(&mut fields), quoted);
                quoted = false;
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err(EvalError::Csv(format!(
            "{}: unterminated quoted field",
            record_label(records.len())
        )));
    }
    fields.push(take_cell(&mut current));
    end_record(&mut records, fields, quoted);
    Ok(records)
}

fn take_cell(current: &mut String) -> String {
    let cell = current.trim().to_string();
    current.clear();
    cell
}

/// Keeps `fields` unless it is a blank record (one empty, unquoted cell).
fn end_record(records: &mut Vec<Vec<String>>, fields: Vec<String>, quoted: bool) {
    let blank = !quoted && fields.len() == 1 && fields[0].is_empty();
    if !blank {
        records.push(fields);
    }
}

/// Names the record at `index` the way `Table` numbers rows (header excluded).
fn record_label(index: usize) -> String {
    if index == 0 {
        "Header row".to_string()
    } else {
        format!("Row {}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_records_with_quotes() {
        assert_eq!(
            parse_records(r#"1,"a, b","say ""hi""""#).unwrap(),
            vec![vec!["1", "a, b", r#"say "hi""#]]
        );
        assert_eq!(parse_records("a,,b").unwrap(), vec![vec!["a", "", "b"]]);
    }

    #[test]
    fn test_parse_table() {
        let csv = b"id,name,loss\r\n1,\"x, y\",0.25\r\n\r\n2,z,1.5\r\n";
        let table = parse_table(csv).unwrap();
        assert_eq!(table.headers(), &["id", "name", "loss"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("loss").unwrap(), vec![0.25, 1.5]);
    }

    #[test]
    fn test_quoted_field_spans_lines() {
        let csv = b"id,note,loss\n1,\"line one\nline two\",2.0\n2,x,4.0\n";
        let table = parse_table(csv).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column("loss").unwrap(), vec![2.0, 4.0]);

        let records = parse_records("a,\"x\r\n\r\ny\"\n").unwrap();
        assert_eq!(records, vec![vec!["a", "x\r\n\r\ny"]]);
    }

    #[test]
    fn test_unterminated_quote() {
        match parse_table(b"id,loss\n1,\"2.0\n").unwrap_err() {
            EvalError::Csv(msg) => {
                assert_eq!(msg, "Row 1: unterminated quoted field");
            }
            other => panic!("unexpected error: {other}"),
        }
        match parse_table(b"id,\"loss\n").unwrap_err() {
            EvalError::Csv(msg) => assert!(msg.starts_with("Header row"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_cells_trimmed_everywhere() {
        let table = parse_table(b"\" loss \", id\n\" 1.5 \", 2 \n\" x \",3\n").unwrap();
        assert_eq!(table.headers(), &["loss", "id"]);
        assert_eq!(table.column("id").unwrap(), vec![2.0, 3.0]);
        match table.column("loss").unwrap_err() {
            EvalError::NonNumericCell { row, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(value, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_header_only() {
        let table = parse_table(b"loss\n").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(parse_table(b"").unwrap_err(), EvalError::Csv(_)));
        assert!(matches!(parse_table(b"\n  \n").unwrap_err(), EvalError::Csv(_)));
        assert!(matches!(parse_table(&[0xff, 0xfe]).unwrap_err(), EvalError::Csv(_)));
        assert!(matches!(
            parse_table(b"loss,loss\n1,2\n").unwrap_err(),
            EvalError::Csv(_)
        ));

        let err = parse_table(b"a,b\n1,2\n3\n").unwrap_err();
        match err {
            EvalError::Csv(msg) => assert!(msg.contains("Row 2"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
