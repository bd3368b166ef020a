use serde::{Deserialize, Serialize};
use tracing::trace;

/// Row
pub(crate) type Row = Vec<String>;

/// Table
///
/// Rows are addressed by position only and may differ in width.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub(crate) struct Table {
    pub(crate) rows: Vec<Row>,
}

impl Table {
    /// Rectangular table of empty cells.
    pub(crate) fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows: vec![vec![String::new(); columns]; rows],
        }
    }

    pub(crate) fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    /// Width of the first row, zero for an empty table.
    pub(crate) fn first_width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub(crate) fn add_row(&mut self, columns: usize) {
        self.rows.push(vec![String::new(); columns]);
    }

    pub(crate) fn add_row_like_first(&mut self) {
        self.add_row(self.first_width());
    }

    pub(crate) fn remove_row(&mut self, row: usize) {
        if row < self.rows.len() {
            self.rows.remove(row);
        }
    }

    pub(crate) fn add_column(&mut self, row: usize) {
        if let Some(row) = self.rows.get_mut(row) {
            row.push(String::new());
        }
    }

    pub(crate) fn remove_column(&mut self, row: usize, column: usize) {
        if let Some(row) = self.rows.get_mut(row) {
            if column < row.len() {
                row.remove(column);
            }
        }
    }

    pub(crate) fn set_cell(&mut self, row: usize, column: usize, value: String) {
        if let Some(cell) = self
            .rows
            .get_mut(row)
            .and_then(|row| row.get_mut(column))
        {
            *cell = value;
        }
    }

    /// Truncates or pads every row with empty cells to exactly `columns`.
    pub(crate) fn resize_columns(&mut self, columns: usize) {
        for row in &mut self.rows {
            row.resize(columns, String::new());
        }
    }
}

/// Editor action
///
/// Editors emit actions while drawing; they are applied once the frame's
/// editor pass is done.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Action {
    AddRow,
    RemoveRow(usize),
    AddColumn(usize),
    RemoveColumn(usize, usize),
    SetCell(usize, usize, String),
    ResizeColumns(usize),
    Replace(Table),
}

impl Action {
    pub(crate) fn apply(self, table: &mut Table, columns: Option<usize>) {
        trace!(action = ?self);
        match self {
            Self::AddRow => match columns {
                Some(columns) => table.add_row(columns),
                None => table.add_row_like_first(),
            },
            Self::RemoveRow(row) => table.remove_row(row),
            Self::AddColumn(row) => table.add_column(row),
            Self::RemoveColumn(row, column) => table.remove_column(row, column),
            Self::SetCell(row, column, value) => table.set_cell(row, column, value),
            Self::ResizeColumns(columns) => table.resize_columns(columns),
            Self::Replace(replacement) => *table = replacement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(rows: &[&[&str]]) -> Table {
        Table::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn new_is_rectangular_and_empty() {
        let table = Table::new(3, 2);
        assert_eq!(table.len(), 3);
        assert!(table.rows.iter().all(|row| row == &["", ""]));
    }

    #[test]
    fn row_count_follows_adds_and_removes() {
        let mut table = Table::new(1, 2);
        let mut expected = 1usize;
        for step in [true, true, false, false, false, false, true, false, true] {
            if step {
                table.add_row(2);
                expected += 1;
            } else {
                table.remove_row(0);
                expected = expected.saturating_sub(1);
            }
            assert_eq!(table.len(), expected);
        }
    }

    #[test]
    fn add_row_like_first_uses_first_width() {
        let mut table = table(&[&["a", "b", "c"], &["d"]]);
        table.add_row_like_first();
        assert_eq!(table.rows[2], vec![""; 3]);
    }

    #[test]
    fn add_row_to_empty_table_has_no_columns() {
        let mut table = Table::default();
        table.add_row_like_first();
        assert_eq!(table.rows, vec![Vec::<String>::new()]);
    }

    #[test]
    fn remove_last_row_leaves_empty_table() {
        let mut table = Table::new(1, 2);
        table.remove_row(0);
        assert!(table.is_empty());
        assert_eq!(table.first_width(), 0);
    }

    #[test]
    fn column_edits_touch_one_row() {
        let mut table = table(&[&["a", "1"], &["b", "2"]]);
        table.add_column(1);
        assert_eq!(table, self::table(&[&["a", "1"], &["b", "2", ""]]));
        table.remove_column(0, 0);
        assert_eq!(table, self::table(&[&["1"], &["b", "2", ""]]));
    }

    #[test]
    fn set_cell_changes_exactly_one_cell() {
        let mut table = table(&[&["a", "1"], &["b", "2"]]);
        table.set_cell(1, 1, "9".to_owned());
        assert_eq!(table, self::table(&[&["a", "1"], &["b", "9"]]));
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let original = table(&[&["a", "1"]]);
        let mut table = original.clone();
        table.remove_row(5);
        table.add_column(5);
        table.remove_column(0, 5);
        table.set_cell(0, 5, "x".to_owned());
        table.set_cell(5, 0, "x".to_owned());
        assert_eq!(table, original);
    }

    #[test]
    fn resize_columns_pads_and_truncates() {
        let mut table = table(&[&["a"], &["b", "2", "x"], &[]]);
        table.resize_columns(2);
        assert_eq!(table, self::table(&[&["a", ""], &["b", "2"], &["", ""]]));
        table.resize_columns(1);
        assert_eq!(table, self::table(&[&["a"], &["b"], &[""]]));
    }

    #[test]
    fn add_row_action_width_depends_on_columns() {
        let mut fixed = table(&[&["a"]]);
        Action::AddRow.apply(&mut fixed, Some(3));
        assert_eq!(fixed.rows[1].len(), 3);
        let mut free = table(&[&["a"]]);
        Action::AddRow.apply(&mut free, None);
        assert_eq!(free.rows[1].len(), 1);
    }
}
