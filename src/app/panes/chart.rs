use super::settings::Settings;
use crate::{
    app::computers::{ChartValue, chart::column_name},
    localization::titlecase,
};
use egui::{Direction, Layout, Response, Sense, Ui, Widget, emath::round_to_decimals};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points, uniform_grid_spacer};

/// Chart plot
pub(crate) struct PlotWidget<'a> {
    pub(crate) value: &'a ChartValue,
    pub(crate) settings: &'a Settings,
}

impl Widget for PlotWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let names: Vec<_> = self.value.points.iter().map(|point| point.name.clone()).collect();
        let mut plot = Plot::new("chart");
        if self.settings.legend {
            plot = plot.legend(Legend::default());
        }
        let labels = names.clone();
        plot.allow_drag(self.settings.drag)
            .allow_scroll(self.settings.scroll)
            .allow_zoom(self.settings.zoom)
            .x_grid_spacer(uniform_grid_spacer(|_| [1.0, 5.0, 10.0]))
            .x_axis_formatter(move |mark, _| category(&names, mark.value).unwrap_or_default())
            .label_formatter(move |name, value| {
                let y = round_to_decimals(value.y, 6);
                match category(&labels, value.x) {
                    Some(row) if !name.is_empty() => format!("{name}\n{row}: {y}"),
                    Some(row) => format!("{row}: {y}"),
                    None => String::new(),
                }
            })
            .show(ui, |ui| {
                for line in &self.value.lines {
                    let name = &line.series.name;
                    let color = self.settings.palette.color(line.series.index);
                    for segment in &line.segments {
                        if segment.len() > 1 {
                            ui.line(
                                Line::new(name, PlotPoints::new(segment.clone()))
                                    .color(color)
                                    .width(self.settings.width),
                            );
                        }
                        let radius = if segment.len() > 1 {
                            self.settings.radius
                        } else {
                            // A lone value has no line to sit on.
                            self.settings.radius.max(2.0 * self.settings.width)
                        };
                        if radius > 0.0 {
                            ui.points(
                                Points::new(name, segment.clone())
                                    .color(color)
                                    .radius(radius),
                            );
                        }
                    }
                }
            })
            .response
    }
}

/// Row label at an integer x position.
fn category(names: &[String], x: f64) -> Option<String> {
    let rounded = x.round();
    if (x - rounded).abs() > f64::EPSILON || rounded < 0.0 {
        return None;
    }
    names.get(rounded as usize).cloned()
}

/// Chart points as a grid
pub(crate) struct TableWidget<'a> {
    pub(crate) value: &'a ChartValue,
}

impl Widget for TableWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let height = ui.spacing().interact_size.y;
        let points = &self.value.points;
        let columns = points
            .iter()
            .map(|point| point.columns.len())
            .max()
            .unwrap_or_default();
        TableBuilder::new(ui)
            .cell_layout(Layout::centered_and_justified(Direction::LeftToRight))
            .column(Column::auto())
            .columns(Column::auto().resizable(true), columns)
            .auto_shrink(false)
            .striped(true)
            .header(height, |mut row| {
                row.col(|ui| {
                    ui.heading(titlecase!("row"));
                });
                for index in 0..columns {
                    row.col(|ui| {
                        ui.heading(column_name(index));
                    });
                }
            })
            .body(|body| {
                body.rows(height, points.len(), |mut row| {
                    let point = &points[row.index()];
                    row.col(|ui| {
                        ui.label(&point.name);
                    });
                    for index in 0..columns {
                        row.col(|ui| {
                            if let Some(value) = point.get(&column_name(index)) {
                                ui.label(value);
                            }
                        });
                    }
                });
            });
        ui.allocate_response(Default::default(), Sense::hover())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_only_at_rows() {
        let names = vec!["Row 1".to_owned(), "Row 2".to_owned()];
        assert_eq!(category(&names, 0.0).as_deref(), Some("Row 1"));
        assert_eq!(category(&names, 1.0).as_deref(), Some("Row 2"));
        assert_eq!(category(&names, 0.5), None);
        assert_eq!(category(&names, -1.0), None);
        assert_eq!(category(&names, 2.0), None);
    }
}
