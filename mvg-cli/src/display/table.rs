//! Box-drawn terminal tables.
//!
//! Cells hold one or more lines, each a sequence of [`Styled`] runs.
//! Widths are measured on the plain text so escapes never skew alignment.

use super::style::{Style, Styled};

/// Horizontal alignment within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone)]
struct Column {
    header: String,
    align: Align,
    style: Style,
}

/// One line of a cell.
pub type CellLine = Vec<Styled>;

/// A cell: zero or more lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub lines: Vec<CellLine>,
}

impl Cell {
    /// A single-line cell with one run.
    pub fn text(styled: Styled) -> Self {
        Self {
            lines: vec![vec![styled]],
        }
    }

    /// A single-line plain cell.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::text(Styled::plain(text))
    }

    pub fn multiline(lines: Vec<CellLine>) -> Self {
        Self { lines }
    }

    fn height(&self) -> usize {
        self.lines.len().max(1)
    }

    fn width(&self) -> usize {
        self.lines.iter().map(|l| line_width(l)).max().unwrap_or(0)
    }
}

fn line_width(line: &[Styled]) -> usize {
    line.iter().map(Styled::width).sum()
}

#[derive(Debug, Clone)]
struct Row {
    cells: Vec<Cell>,
    style: Style,
}

/// A titled table.
#[derive(Debug, Clone)]
pub struct Table {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Row>,
    row_separators: bool,
}

impl Table {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            row_separators: false,
        }
    }

    /// Add a column.
    pub fn column(self, header: &str, align: Align) -> Self {
        self.styled_column(header, align, Style::PLAIN)
    }

    /// Add a column whose cells all carry `style`.
    pub fn styled_column(mut self, header: &str, align: Align, style: Style) -> Self {
        self.columns.push(Column {
            header: header.to_string(),
            align,
            style,
        });
        self
    }

    /// Draw a rule between body rows.
    pub fn with_row_separators(mut self) -> Self {
        self.row_separators = true;
        self
    }

    /// Append a row. Missing trailing cells render empty; extras are dropped.
    pub fn add_row(&mut self, cells: Vec<Cell>, style: Style) {
        self.rows.push(Row { cells, style });
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let body = self
                    .rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(Cell::width)
                    .max()
                    .unwrap_or(0);
                body.max(col.header.chars().count())
            })
            .collect()
    }

    /// Render to a string, with ANSI styling when `color` is set.
    pub fn render(&self, color: bool) -> String {
        let widths = self.widths();
        let total: usize = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
        let mut out = String::new();

        let title_width = self.title.chars().count();
        let indent = total.saturating_sub(title_width) / 2;
        out.push_str(&" ".repeat(indent));
        Styled::new(self.title.as_str(), Style::bold()).render(Style::PLAIN, color, &mut out);
        out.push('\n');

        rule(&mut out, &widths, ('┌', '┬', '┐'));
        let header = self
            .columns
            .iter()
            .map(|c| Cell::text(Styled::new(c.header.as_str(), Style::bold())))
            .collect::<Vec<_>>();
        self.write_row(&mut out, &widths, &header, Style::PLAIN, color);
        rule(&mut out, &widths, ('├', '┼', '┤'));

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 && self.row_separators {
                rule(&mut out, &widths, ('├', '┼', '┤'));
            }
            self.write_row(&mut out, &widths, &row.cells, row.style, color);
        }

        rule(&mut out, &widths, ('└', '┴', '┘'));
        out
    }

    fn write_row(
        &self,
        out: &mut String,
        widths: &[usize],
        cells: &[Cell],
        row_style: Style,
        color: bool,
    ) {
        let height = cells.iter().map(Cell::height).max().unwrap_or(1);
        for line_idx in 0..height {
            out.push('│');
            for (col_idx, col) in self.columns.iter().enumerate() {
                let line = cells
                    .get(col_idx)
                    .and_then(|c| c.lines.get(line_idx))
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                let base = row_style.patch(col.style);

                let width = widths[col_idx];
                let gap = width.saturating_sub(line_width(line));
                let (left, right) = match col.align {
                    Align::Left => (0, gap),
                    Align::Right => (gap, 0),
                    Align::Center => (gap / 2, gap - gap / 2),
                };

                out.push(' ');
                out.push_str(&" ".repeat(left));
                for run in line {
                    run.render(base, color, out);
                }
                out.push_str(&" ".repeat(right));
                out.push_str(" │");
            }
            out.push('\n');
        }
    }
}

fn rule(out: &mut String, widths: &[usize], (left, mid, right): (char, char, char)) {
    out.push(left);
    for (i, w) in widths.iter().enumerate() {
        if i > 0 {
            out.push(mid);
        }
        out.push_str(&"─".repeat(w + 2));
    }
    out.push(right);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::style::Color;

    fn sample() -> Table {
        let mut table = Table::new("Stops")
            .column("In", Align::Right)
            .column("Name", Align::Left)
            .column("Pl", Align::Center);
        table.add_row(
            vec![Cell::plain("3 min"), Cell::plain("Münchner Freiheit"), Cell::plain("1")],
            Style::PLAIN,
        );
        table.add_row(
            vec![Cell::plain("12 min"), Cell::plain("Giesing")],
            Style::dim(),
        );
        table
    }

    #[test]
    fn renders_aligned_plain_table() {
        let rendered = sample().render(false);
        let expected = [
            "               Stops",
            "┌────────┬───────────────────┬────┐",
            "│     In │ Name              │ Pl │",
            "├────────┼───────────────────┼────┤",
            "│  3 min │ Münchner Freiheit │ 1  │",
            "│ 12 min │ Giesing           │    │",
            "└────────┴───────────────────┴────┘",
            "",
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn multiline_cells_and_separators() {
        let mut table = Table::new("T")
            .column("A", Align::Left)
            .column("B", Align::Left)
            .with_row_separators();
        table.add_row(
            vec![
                Cell::plain("x"),
                Cell::multiline(vec![vec![Styled::plain("one")], vec![Styled::plain("two")]]),
            ],
            Style::PLAIN,
        );
        table.add_row(vec![Cell::plain("y"), Cell::plain("three")], Style::PLAIN);

        let rendered = table.render(false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[4], "│ x │ one   │");
        assert_eq!(lines[5], "│   │ two   │");
        assert_eq!(lines[6], "├───┼───────┤");
        assert_eq!(lines[7], "│ y │ three │");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn color_does_not_change_layout() {
        let mut table = Table::new("T").column("Line", Align::Left);
        table.add_row(
            vec![Cell::text(Styled::new("U3", Style::fg(Color::Red)))],
            Style::PLAIN,
        );
        let colored = table.render(true);
        assert!(colored.contains("\x1b[31mU3\x1b[0m"));
        assert!(colored.contains("│ \x1b[31mU3\x1b[0m   │"));
        assert!(!table.render(false).contains('\x1b'));
    }
}
