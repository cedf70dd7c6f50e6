//! Report table model and text rendering
//!
//! Rows keep their styling as data so they can be compared in tests;
//! ANSI sequences are only produced by [`ReportTable::render_colored`].

use colored::Colorize;
use std::fmt;

/// Column headers of the inspection table
pub const COLUMNS: [&str; 4] = ["Handles", "Service > Characteristics", "Properties", "Data"];

/// Cosmetic emphasis for a piece of cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    #[default]
    Plain,
    Bold,
    Dim,
    Green,
    Yellow,
    Red,
}

impl CellStyle {
    fn paint(self, text: &str) -> String {
        match self {
            CellStyle::Plain => text.to_string(),
            CellStyle::Bold => text.bold().to_string(),
            CellStyle::Dim => text.dimmed().to_string(),
            CellStyle::Green => text.green().to_string(),
            CellStyle::Yellow => text.yellow().to_string(),
            CellStyle::Red => text.red().to_string(),
        }
    }
}

/// A table cell made of differently styled segments
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    segments: Vec<(String, CellStyle)>,
}

impl Cell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, CellStyle::Plain)
    }

    pub fn styled(text: impl Into<String>, style: CellStyle) -> Self {
        let mut cell = Self::default();
        cell.push(text, style);
        cell
    }

    pub fn push(&mut self, text: impl Into<String>, style: CellStyle) {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push((text, style));
        }
    }

    pub fn segments(&self) -> &[(String, CellStyle)] {
        &self.segments
    }

    /// Cell text without styling
    pub fn text(&self) -> String {
        self.segments.iter().map(|(text, _)| text.as_str()).collect()
    }

    fn width(&self) -> usize {
        self.segments
            .iter()
            .map(|(text, _)| text.chars().count())
            .sum()
    }

    fn colored(&self) -> String {
        self.segments
            .iter()
            .map(|(text, style)| style.paint(text))
            .collect()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (text, _) in &self.segments {
            f.write_str(text)?;
        }
        Ok(())
    }
}

/// Whether a row heads a service or lists one of its characteristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Service,
    Characteristic,
}

/// One line of the inspection table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub kind: RowKind,
    pub handles: Cell,
    pub label: Cell,
    pub properties: Cell,
    pub data: Cell,
}

impl ReportRow {
    fn cells(&self) -> [&Cell; 4] {
        [&self.handles, &self.label, &self.properties, &self.data]
    }
}

/// Rows accumulated over one inspection pass, in discovery order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportTable {
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render with ANSI colours applied to styled segments.
    pub fn render_colored(&self) -> String {
        self.render(Cell::colored)
    }

    /// Render without any styling.
    pub fn render_plain(&self) -> String {
        self.render(Cell::text)
    }

    fn column_widths(&self) -> [usize; 4] {
        let mut widths = COLUMNS.map(|c| c.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }

    fn render(&self, paint: fn(&Cell) -> String) -> String {
        let widths = self.column_widths();
        let border = |left: char, mid: char, right: char| {
            let mut line = String::new();
            line.push(left);
            for (i, width) in widths.iter().enumerate() {
                if i > 0 {
                    line.push(mid);
                }
                line.push_str(&"─".repeat(width + 2));
            }
            line.push(right);
            line.push('\n');
            line
        };

        let mut out = border('┌', '┬', '┐');
        out.push('│');
        for (header, width) in COLUMNS.iter().zip(widths) {
            out.push_str(&format!(" {:<width$} │", header, width = width));
        }
        out.push('\n');
        out.push_str(&border('├', '┼', '┤'));

        for row in &self.rows {
            out.push('│');
            for (cell, width) in row.cells().into_iter().zip(widths) {
                // Pad on the unstyled width; escape sequences take no columns.
                let pad = width - cell.width();
                out.push(' ');
                out.push_str(&paint(cell));
                out.push_str(&" ".repeat(pad));
                out.push_str(" │");
            }
            out.push('\n');
        }
        out.push_str(&border('└', '┴', '┘'));
        out
    }
}

impl fmt::Display for ReportTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(handles: &str, label: &str, props: &str, data: &str) -> ReportRow {
        ReportRow {
            kind: RowKind::Characteristic,
            handles: Cell::plain(handles),
            label: Cell::plain(label),
            properties: Cell::plain(props),
            data: Cell::plain(data),
        }
    }

    #[test]
    fn test_cell_text_joins_segments() {
        let mut cell = Cell::styled("Battery Level", CellStyle::Green);
        cell.push(" (", CellStyle::Plain);
        cell.push("2a19", CellStyle::Dim);
        cell.push(")", CellStyle::Plain);
        cell.push("", CellStyle::Red);
        assert_eq!(cell.text(), "Battery Level (2a19)");
        assert_eq!(cell.segments().len(), 4);
        assert_eq!(cell.to_string(), cell.text());
    }

    #[test]
    fn test_plain_render_alignment() {
        let mut table = ReportTable::new();
        table.push(row("0003", "    Device Name", "read", "ring"));
        let rendered = table.render_plain();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("│ Handles │ Service > Characteristics │"));
        assert!(lines[3].contains("│ 0003    │     Device Name"));
        assert!(lines[3].contains("│ read       │ ring │"));
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
    }

    #[test]
    fn test_empty_table_renders_header() {
        let table = ReportTable::new();
        assert!(table.is_empty());
        assert_eq!(table.render_plain().lines().count(), 4);
    }
}
