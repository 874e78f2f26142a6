//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.width(),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row; columns grow to fit its display width.
    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        push_line(&mut out, &self.columns, &header);

        let rule: Vec<String> = self.columns.iter().map(|c| "-".repeat(c.width)).collect();
        let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
        push_line(&mut out, &self.columns, &rule);

        // Rows
        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            push_line(&mut out, &self.columns, &cells);
        }

        out
    }
}

// `{:<width$}` pads by char count, which is wrong for wide glyphs.
fn push_line(out: &mut String, columns: &[Column], cells: &[&str]) {
    let mut line = String::new();
    for (i, col) in columns.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        line.push_str(cell);
        line.push_str(&" ".repeat(col.width.saturating_sub(cell.width()) + 1));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
