/// Column alignment within a `Table`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Align {
    Left,
    Right,
}

/// A simple text-based table generator for terminal reports
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    aligns: Vec<Align>,
}

/// Display width of a cell, counted in chars so block glyphs line up
fn cell_width(s: &str) -> usize {
    s.chars().count()
}

impl Table {
    /// Create a new table with the given headers, all columns left-aligned
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| cell_width(h)).collect();
        let aligns = vec![Align::Left; headers.len()];
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
            aligns,
        }
    }

    /// Set the alignment of one column
    pub fn align(mut self, column: usize, align: Align) -> Self {
        if let Some(slot) = self.aligns.get_mut(column) {
            *slot = align;
        }
        self
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(cell_width(col));
            }
        }

        self.rows.push(row);
    }

    /// Render the table as lines: header, separator, then rows
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(self.render_row(&self.headers, true));
        lines.push(self.render_separator());
        for row in &self.rows {
            lines.push(self.render_row(row, false));
        }
        lines
    }

    /// Render a single row with proper spacing
    fn render_row(&self, row: &[String], is_header: bool) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i >= self.col_widths.len() {
                break;
            }
            let pad = self.col_widths[i].saturating_sub(cell_width(col));
            let is_last = i == row.len() - 1;
            match (self.aligns[i], is_header) {
                (Align::Right, false) => {
                    line.push_str(&" ".repeat(pad));
                    line.push_str(col);
                }
                _ => {
                    line.push_str(col);
                    // No trailing padding on the last column
                    if !is_last {
                        line.push_str(&" ".repeat(pad));
                    }
                }
            }
            if !is_last {
                line.push_str(" | ");
            }
        }
        line
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}
