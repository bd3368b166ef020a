use crate::localization::titlecase;
use egui::{Response, RichText, Ui, Widget};
use egui_phosphor::regular::{CHART_LINE, TABLE};
use serde::{Deserialize, Serialize};

/// View
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
pub(crate) enum View {
    #[default]
    Plot,
    Table,
}

impl View {
    pub(crate) fn text(&self) -> String {
        match self {
            Self::Plot => titlecase!("plot"),
            Self::Table => titlecase!("table"),
        }
    }

    pub(crate) const fn icon(&self) -> &str {
        match self {
            Self::Plot => CHART_LINE,
            Self::Table => TABLE,
        }
    }
}

/// View widget
#[derive(Debug)]
pub(crate) struct ViewWidget<'a> {
    view: &'a mut View,
}

impl<'a> ViewWidget<'a> {
    pub(crate) fn new(view: &'a mut View) -> Self {
        Self { view }
    }
}

impl Widget for ViewWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        ui.menu_button(RichText::new(self.view.icon()).heading(), |ui| {
            let mut response = ui.selectable_value(
                self.view,
                View::Plot,
                format!("{} {}", View::Plot.icon(), View::Plot.text()),
            );
            response |= ui.selectable_value(
                self.view,
                View::Table,
                format!("{} {}", View::Table.icon(), View::Table.text()),
            );
            if response.changed() {
                ui.close_menu();
            }
        })
        .response
        .on_hover_text(self.view.text())
    }
}
