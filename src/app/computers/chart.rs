use crate::{app::data::Table, utils::hashed::Hashed};
use egui::util::cache::{ComputerMut, FrameCache};
use indexmap::IndexMap;
use tracing::instrument;

/// Chart computed
pub(in crate::app) type Computed = FrameCache<Value, Computer>;

/// Chart computer
#[derive(Default)]
pub(in crate::app) struct Computer;

impl ComputerMut<Key<'_>, Value> for Computer {
    #[instrument(skip(self, key), fields(hash = key.table.hash))]
    fn compute(&mut self, key: Key) -> Value {
        let points = project(key.table);
        let series = series(key.table);
        let lines = series
            .iter()
            .map(|series| Line {
                segments: segments(&points, &series.name),
                series: series.clone(),
            })
            .collect();
        Value {
            points,
            series,
            lines,
        }
    }
}

/// Key
#[derive(Clone, Copy, Debug, Hash)]
pub(in crate::app) struct Key<'a> {
    pub(in crate::app) table: &'a Hashed<Table>,
}

/// Value
#[derive(Clone, Debug, Default, PartialEq)]
pub(in crate::app) struct Value {
    pub(in crate::app) points: Vec<ChartPoint>,
    pub(in crate::app) series: Vec<Series>,
    pub(in crate::app) lines: Vec<Line>,
}

/// Chart point
///
/// One per row, labeled by position.
#[derive(Clone, Debug, Default, PartialEq)]
pub(in crate::app) struct ChartPoint {
    pub(in crate::app) name: String,
    pub(in crate::app) columns: IndexMap<String, String>,
}

impl ChartPoint {
    pub(in crate::app) fn get(&self, series: &str) -> Option<&str> {
        self.columns.get(series).map(String::as_str)
    }
}

/// Series
#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) struct Series {
    pub(in crate::app) index: usize,
    pub(in crate::app) name: String,
}

/// Plottable line of one series, split at cells that are not numbers.
#[derive(Clone, Debug, PartialEq)]
pub(in crate::app) struct Line {
    pub(in crate::app) series: Series,
    pub(in crate::app) segments: Vec<Vec<[f64; 2]>>,
}

pub(in crate::app) fn row_name(index: usize) -> String {
    format!("Row {}", index + 1)
}

pub(in crate::app) fn column_name(index: usize) -> String {
    format!("Column {}", index + 1)
}

/// Projects every row onto a chart point.
pub(in crate::app) fn project(table: &Table) -> Vec<ChartPoint> {
    table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| ChartPoint {
            name: row_name(index),
            columns: row
                .iter()
                .enumerate()
                .map(|(index, cell)| (column_name(index), cell.clone()))
                .collect(),
        })
        .collect()
}

/// Series drawn on the chart: one per column of the first row.
pub(in crate::app) fn series(table: &Table) -> Vec<Series> {
    (0..table.first_width())
        .map(|index| Series {
            index,
            name: column_name(index),
        })
        .collect()
}

pub(in crate::app) fn coerce(cell: &str) -> Option<f64> {
    cell.trim().parse().ok().filter(|value: &f64| value.is_finite())
}

fn segments(points: &[ChartPoint], series: &str) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut segment = Vec::new();
    for (x, point) in points.iter().enumerate() {
        match point.get(series).and_then(coerce) {
            Some(y) => segment.push([x as f64, y]),
            None if !segment.is_empty() => segments.push(std::mem::take(&mut segment)),
            None => {}
        }
    }
    if !segment.is_empty() {
        segments.push(segment);
    }
    segments
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

    fn point(name: &str, columns: &[(&str, &str)]) -> ChartPoint {
        ChartPoint {
            name: name.to_owned(),
            columns: columns
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }

    #[test]
    fn edited_cell_shows_up_in_projection() {
        let mut table = table(&[&["a", "1"], &["b", "2"]]);
        table.set_cell(1, 1, "9".to_owned());
        assert_eq!(
            project(&table),
            vec![
                point("Row 1", &[("Column 1", "a"), ("Column 2", "1")]),
                point("Row 2", &[("Column 1", "b"), ("Column 2", "9")]),
            ],
        );
    }

    #[test]
    fn names_are_positional() {
        let mut table = Table::new(4, 1);
        table.remove_row(0);
        table.remove_row(1);
        table.add_row(1);
        let names: Vec<_> = project(&table).into_iter().map(|point| point.name).collect();
        assert_eq!(names, ["Row 1", "Row 2", "Row 3"]);
    }

    #[test]
    fn shorter_rows_lack_later_columns() {
        let points = project(&table(&[&["1", "2", "3"], &["4"]]));
        assert_eq!(points[1].get("Column 1"), Some("4"));
        assert_eq!(points[1].get("Column 3"), None);
    }

    #[test]
    fn series_follow_first_row_only() {
        let mut table = Table::new(2, 2);
        table.add_column(1);
        assert_eq!(series(&table).len(), 2);
        table.add_column(0);
        assert_eq!(
            series(&table),
            vec![
                Series {
                    index: 0,
                    name: "Column 1".to_owned(),
                },
                Series {
                    index: 1,
                    name: "Column 2".to_owned(),
                },
                Series {
                    index: 2,
                    name: "Column 3".to_owned(),
                },
            ],
        );
    }

    #[test]
    fn empty_table_projects_to_nothing() {
        let table = Hashed::new(Table::default());
        let value = Computer.compute(Key { table: &table });
        assert_eq!(value, Value::default());
    }

    #[test]
    fn lines_split_at_non_numbers() {
        let table = Hashed::new(table(&[
            &["1", "x"],
            &[" 2 ", ""],
            &["abc", "5"],
            &["4"],
            &["5.5", "7"],
        ]));
        let value = Computer.compute(Key { table: &table });
        assert_eq!(value.points.len(), 5);
        assert_eq!(
            value.lines[0].segments,
            vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[3.0, 4.0], [4.0, 5.5]]],
        );
        assert_eq!(value.lines[1].segments, vec![vec![[2.0, 5.0]], vec![[4.0, 7.0]]]);
    }

    #[test]
    fn coerce_rejects_non_finite() {
        assert_eq!(coerce("1e3"), Some(1000.0));
        assert_eq!(coerce("NaN"), None);
        assert_eq!(coerce("inf"), None);
        assert_eq!(coerce(""), None);
    }
}
