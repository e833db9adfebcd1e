//! Ledger grid model.
//!
//! The grid is rendered from a two-dimensional array of free text and read
//! back cell by cell. Row 0 decides how many columns are shown.

use crate::constants::{GRID_DEFAULT_COLS, GRID_DEFAULT_ROWS};
use crate::types::SheetData;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

pub fn grid_size(data: &[Vec<String>]) -> GridSize {
    let cols = match data.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => GRID_DEFAULT_COLS,
    };
    GridSize {
        rows: data.len().max(GRID_DEFAULT_ROWS),
        cols,
    }
}

/// `A`..`Z`, then `AA`, `AB`, ...
pub fn column_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        label.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    label.iter().rev().collect()
}

pub fn cell_text(data: &[Vec<String>], row: usize, col: usize) -> &str {
    data.get(row)
        .and_then(|cells| cells.get(col))
        .map(String::as_str)
        .unwrap_or("")
}

/// Parses the `data-row` / `data-col` attribute pair of a rendered cell.
pub fn parse_cell_position(row: &str, col: &str) -> Option<(usize, usize)> {
    let row = row.trim().parse::<usize>().ok()?;
    let col = col.trim().parse::<usize>().ok()?;
    Some((row, col))
}

/// The data exactly as the grid shows it.
pub fn padded(data: &[Vec<String>], size: GridSize) -> SheetData {
    (0..size.rows)
        .map(|row| (0..size.cols).map(|col| cell_text(data, row, col).to_string()).collect())
        .collect()
}

/// Rebuilds sheet data from cells visited in any order.
#[derive(Debug, Default, Clone)]
pub struct GridReader {
    rows: Vec<Option<Vec<String>>>,
}

impl GridReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, row: usize, col: usize, text: String) {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, None);
        }
        let cells = self.rows[row].get_or_insert_with(Vec::new);
        if cells.len() <= col {
            cells.resize(col + 1, String::new());
        }
        cells[col] = text;
    }

    pub fn finish(self) -> SheetData {
        self.rows.into_iter().map(Option::unwrap_or_default).collect()
    }
}

impl FromIterator<(usize, usize, String)> for GridReader {
    fn from_iter<I: IntoIterator<Item=(usize, usize, String)>>(iter: I) -> Self {
        let mut reader = GridReader::new();
        for (row, col, text) in iter {
            reader.put(row, col, text);
        }
        reader
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[&[&str]]) -> SheetData {
        rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect()
    }

    /// Every cell the grid would render, as (row, col, text).
    fn rendered_cells(data: &[Vec<String>]) -> Vec<(usize, usize, String)> {
        let size = grid_size(data);
        let mut cells = vec![];
        for row in 0..size.rows {
            for col in 0..size.cols {
                cells.push((row, col, cell_text(data, row, col).to_string()));
            }
        }
        cells
    }

    #[test]
    fn empty_sheet_uses_default_dimensions() {
        assert_eq!(grid_size(&[]), GridSize { rows: 50, cols: 10 });
        assert_eq!(grid_size(&[vec![]]), GridSize { rows: 50, cols: 10 });
    }

    #[test]
    fn first_row_decides_column_count() {
        let data = sheet(&[&["a", "b", "c"], &["d"]]);
        assert_eq!(grid_size(&data), GridSize { rows: 50, cols: 3 });

        let tall = vec![vec!["x".to_string(); 2]; 80];
        assert_eq!(grid_size(&tall), GridSize { rows: 80, cols: 2 });
    }

    #[test]
    fn column_labels_continue_past_z() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(9), "J");
        assert_eq!(column_label(25), "Z");
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(27), "AB");
        assert_eq!(column_label(701), "ZZ");
        assert_eq!(column_label(702), "AAA");
    }

    #[test]
    fn read_back_without_edits_returns_padded_input() {
        let data = sheet(&[&["Data", "Histórico", "Valor"], &["01/03", "Aluguel"], &[], &["", "", "120,00"]]);
        let read = rendered_cells(&data).into_iter().collect::<GridReader>().finish();

        assert_eq!(read, padded(&data, grid_size(&data)));
        assert_eq!(read.len(), 50);
        assert_eq!(read[1], vec!["01/03", "Aluguel", ""]);
        assert_eq!(read[3][2], "120,00");
    }

    #[test]
    fn ragged_rows_are_cut_to_first_row_width() {
        let data = sheet(&[&["a"], &["b", "c", "d"]]);
        let read = rendered_cells(&data).into_iter().collect::<GridReader>().finish();
        assert_eq!(read[1], vec!["b"]);
    }

    #[test]
    fn reader_accepts_any_visit_order() {
        let mut reader = GridReader::new();
        reader.put(1, 1, "d".to_string());
        reader.put(0, 0, "a".to_string());
        reader.put(1, 0, "c".to_string());
        reader.put(0, 1, "b".to_string());
        assert_eq!(reader.finish(), sheet(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn reader_fills_holes() {
        let mut reader = GridReader::new();
        reader.put(2, 1, "x".to_string());
        assert_eq!(reader.finish(), sheet(&[&[], &[], &["", "x"]]));
    }

    #[test]
    fn cell_position_rejects_garbage() {
        assert_eq!(parse_cell_position("3", "4"), Some((3, 4)));
        assert_eq!(parse_cell_position("", "4"), None);
        assert_eq!(parse_cell_position("-1", "0"), None);
    }
}
