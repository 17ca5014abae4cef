// src/sheets/row.rs

/// A single spreadsheet cell, already collapsed to the two shapes the
/// upstream sheets actually produce. Date serials arrive as `Number`;
/// everything typed by hand arrives as `Text`. Empty cells are simply
/// absent from the row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Render a cell for display. Whole numbers (years, TRV numbers)
    /// drop the trailing ".0" the float representation would carry.
    pub fn as_display(&self) -> String {
        match self {
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

/// One spreadsheet row: column name to cell value, preserving the sheet's
/// column order so the detail view renders fields the way the sheet lays
/// them out. Rows are small (a dozen or two columns), so lookup is a scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.push((column.into(), value));
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(name, value)| (name.as_str(), value))
    }
}
