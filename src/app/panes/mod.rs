use self::{
    chart::{PlotWidget, TableWidget},
    editor::Editor,
    view::{View, ViewWidget},
};
use super::{
    computers::{ChartComputed, ChartKey},
    data::Action,
    state::State,
};
use crate::localization::titlecase;
use egui::{RichText, Ui};
use egui_phosphor::regular::{CHART_LINE, TABLE};
use serde::{Deserialize, Serialize};

/// Pane
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) enum Pane {
    Editor,
    Chart { view: View },
}

impl Pane {
    pub(crate) const fn icon(&self) -> &str {
        match self {
            Self::Editor => TABLE,
            Self::Chart { .. } => CHART_LINE,
        }
    }

    pub(crate) fn title(&self) -> String {
        match self {
            Self::Editor => titlecase!("editor"),
            Self::Chart { .. } => titlecase!("chart"),
        }
    }
}

impl Pane {
    pub(crate) fn header(&mut self, ui: &mut Ui) -> egui::Response {
        let response = ui.heading(format!("{} {}", self.icon(), self.title()));
        if let Self::Chart { view } = self {
            ui.separator();
            ui.add(ViewWidget::new(view));
        }
        response
    }

    pub(crate) fn body(
        &mut self,
        ui: &mut Ui,
        state: &State,
        settings: &settings::Settings,
        actions: &mut Vec<Action>,
    ) {
        match self {
            Self::Editor => Editor {
                table: &state.table,
                variant: state.variant,
                actions,
            }
            .show(ui),
            Self::Chart { view } => {
                let value = ui.memory_mut(|memory| {
                    memory.caches.cache::<ChartComputed>().get(ChartKey {
                        table: &state.table,
                    })
                });
                if value.points.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new(titlecase!("empty_table")).weak());
                    });
                    return;
                }
                match view {
                    View::Plot => ui.add(PlotWidget {
                        value: &value,
                        settings,
                    }),
                    View::Table => ui.add(TableWidget { value: &value }),
                };
            }
        }
    }
}

pub(crate) mod behavior;
pub(crate) mod chart;
pub(crate) mod editor;
pub(crate) mod settings;
pub(crate) mod view;
