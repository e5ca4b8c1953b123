//! Fixed-width text rendering of tabular data.
//!
//! The prompt format was tuned against a dataframe-style default rendering:
//! an unlabeled index column followed by right-aligned value columns, two
//! spaces between columns. This module reproduces that shape.

/// A parsed table held as strings, ready to render.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Widest row wins; short rows are padded with empty cells when rendering.
    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    pub fn render(&self) -> String {
        let columns = self.column_count();
        let index_width = self.rows.len().saturating_sub(1).to_string().len();

        let mut widths = vec![0usize; columns];
        for (i, header) in self.headers.iter().enumerate() {
            widths[i] = header.chars().count();
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(render_line("", index_width, &self.headers, &widths));
        for (index, row) in self.rows.iter().enumerate() {
            lines.push(render_line(&index.to_string(), index_width, row, &widths));
        }
        lines.join("\n")
    }
}

fn render_line(index: &str, index_width: usize, cells: &[String], widths: &[usize]) -> String {
    let mut line = format!("{index:>index_width$}");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push_str("  ");
        line.push_str(&pad_left(cell, *width));
    }
    line
}

fn pad_left(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    let mut padded = " ".repeat(width.saturating_sub(len));
    padded.push_str(cell);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[&str]]) -> TextTable {
        let mut t = TextTable::new(headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            t.push_row(row.iter().map(|c| c.to_string()).collect());
        }
        t
    }

    #[test]
    fn renders_index_and_aligned_columns() {
        let t = table(&["A", "B"], &[&["1", "2"], &["3", "4"]]);
        assert_eq!(t.render(), "   A  B\n0  1  2\n1  3  4");
    }

    #[test]
    fn wide_cells_stretch_their_column() {
        let t = table(&["name", "dose"], &[&["amoxicillin", "500mg"], &["ibuprofen", "200mg"]]);
        let rendered = t.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        // all lines share a width
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert_eq!(lines[1].chars().count(), lines[2].chars().count());
        assert!(lines[1].contains("amoxicillin"));
        assert!(lines[2].ends_with("200mg"));
    }

    #[test]
    fn short_rows_are_padded() {
        let t = table(&["A", "B", "C"], &[&["1"]]);
        let rendered = t.render();
        assert!(rendered.contains('1'));
        assert_eq!(rendered.lines().count(), 2);
    }

    #[test]
    fn index_column_widens_past_ten_rows() {
        let mut t = table(&["v"], &[]);
        for i in 0..11 {
            t.push_row(vec![i.to_string()]);
        }
        let rendered = t.render();
        assert!(rendered.lines().last().unwrap().starts_with("10"));
        // header line indented to match the two-digit index
        assert!(rendered.lines().next().unwrap().starts_with("  "));
    }

    #[test]
    fn headers_only_still_renders() {
        let t = table(&["A", "B"], &[]);
        assert_eq!(t.render(), "   A  B");
    }

    #[test]
    fn empty_table_reports_empty() {
        assert!(TextTable::default().is_empty());
        assert!(!table(&["A"], &[]).is_empty());
    }
}
