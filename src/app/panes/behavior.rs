use super::{Pane, settings::Settings};
use crate::app::{data::Action, state::State};
use egui::{CentralPanel, CursorIcon, Sense, TextStyle, TopBottomPanel, Ui, Vec2, WidgetText, vec2};
use egui_tiles::{TileId, UiResponse};

const MARGIN: Vec2 = vec2(4.0, 2.0);

/// Behavior
///
/// Borrows the shared state for the duration of one frame.
pub(crate) struct Behavior<'a> {
    pub(crate) state: &'a State,
    pub(crate) settings: &'a Settings,
    pub(crate) actions: &'a mut Vec<Action>,
}

impl egui_tiles::Behavior<Pane> for Behavior<'_> {
    fn tab_title_for_pane(&mut self, pane: &Pane) -> WidgetText {
        format!("{} {}", pane.icon(), pane.title()).into()
    }

    fn pane_ui(&mut self, ui: &mut Ui, _tile_id: TileId, pane: &mut Pane) -> UiResponse {
        let response = TopBottomPanel::top(ui.auto_id_with("TopPanel"))
            .show_inside(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.set_height(ui.text_style_height(&TextStyle::Heading) + 2.0 * MARGIN.y);
                    pane.header(ui)
                        .interact(Sense::drag())
                        .on_hover_cursor(CursorIcon::Grab)
                })
                .inner
            })
            .inner;
        CentralPanel::default().show_inside(ui, |ui| {
            pane.body(ui, self.state, self.settings, self.actions);
        });
        if response.drag_started() {
            UiResponse::DragStarted
        } else {
            UiResponse::None
        }
    }
}
