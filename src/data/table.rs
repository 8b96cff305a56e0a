// ---------------------------------------------------------------------------
// Table – a schemaless grid of text cells
// ---------------------------------------------------------------------------

/// A loaded delimited-text table.  Cells stay as text; numeric interpretation
/// happens on access so that one bad cell never poisons a whole column.
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// Column names when the source file had a header row.
    headers: Option<Vec<String>>,
    /// Data rows, all padded to the same width.
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Table { headers, rows }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Index of the column with exactly this header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .as_ref()?
            .iter()
            .position(|h| h == name)
    }

    /// First row whose first cell *contains* `needle` (case-sensitive).
    ///
    /// Deliberately a substring match: instrument exports vary the exact
    /// label text ("RF Input", "RF Input Impedance", ...).
    pub fn find_row(&self, needle: &str) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|row| row.first().is_some_and(|cell| cell.contains(needle)))
            .map(Vec::as_slice)
    }

    /// All values of one column that parse as numbers, in row order.
    /// Non-numeric and empty cells are dropped.
    pub fn numeric_column(&self, index: usize) -> Vec<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.get(index)?.trim().parse::<f64>().ok())
            .collect()
    }

    /// Row-aligned numeric (x, y) pairs from two columns, in row order.
    /// Rows where either cell fails to parse are dropped.
    pub fn numeric_pairs(&self, x_index: usize, y_index: usize) -> Vec<[f64; 2]> {
        self.rows
            .iter()
            .filter_map(|row| {
                let x = row.get(x_index)?.trim().parse::<f64>().ok()?;
                let y = row.get(y_index)?.trim().parse::<f64>().ok()?;
                Some([x, y])
            })
            .collect()
    }
}
