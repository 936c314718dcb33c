use crate::dataset::csv;
use crate::error::{EvalError, Result};

/// A held-out tabular split: a header row plus raw string cells.
///
/// Cells stay as text until a column is requested, so non-numeric feature
/// columns do not prevent extracting a numeric target.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given column names.
    ///
    /// Fails if a name appears twice.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Result<Table> {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        for (i, name) in headers.iter().enumerate() {
            if headers[..i].contains(name) {
                return Err(EvalError::Csv(format!("duplicate column name '{}'", name)));
            }
        }
        Ok(Table { headers, rows: Vec::new() })
    }

    /// Parses a CSV buffer whose first non-blank line is the header.
    pub fn from_csv(data: &[u8]) -> Result<Table> {
        csv::parse_table(data)
    }

    /// Appends one data row; its width must match the header.
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) -> Result<()> {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.headers.len() {
            return Err(EvalError::Csv(format!(
                "Row {}: expected {} cells, got {}",
                self.rows.len() + 1,
                self.headers.len(),
                cells.len()
            )));
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Extracts column `name` as `f64` values.
    ///
    /// Blank cells are missing values and become NaN. Row numbers in errors
    /// are 1-based data rows.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let idx = self.headers.iter()
            .position(|h| h == name)
            .ok_or_else(|| EvalError::ColumnNotFound(name.to_string()))?;

        self.rows.iter()
            .enumerate()
            .map(|(row_idx, row)| {
                let cell = row[idx].trim();
                if cell.is_empty() {
                    return Ok(f64::NAN);
                }
                cell.parse::<f64>().map_err(|_| EvalError::NonNumericCell {
                    column: name.to_string(),
                    row: row_idx + 1,
                    value: row[idx].clone(),
                })
            })
            .collect()
    }
}
