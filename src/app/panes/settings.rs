use crate::localization::titlecase;
use egui::{Color32, ComboBox, DragValue, Grid, RichText, Ui, Vec2b};
use serde::{Deserialize, Serialize};

/// Stable series colors, indexed by column.
const PALETTE: [Color32; 10] = [
    Color32::from_rgb(0x4e, 0x79, 0xa7),
    Color32::from_rgb(0xf2, 0x8e, 0x2b),
    Color32::from_rgb(0xe1, 0x57, 0x59),
    Color32::from_rgb(0x76, 0xb7, 0xb2),
    Color32::from_rgb(0x59, 0xa1, 0x4f),
    Color32::from_rgb(0xed, 0xc9, 0x48),
    Color32::from_rgb(0xb0, 0x7a, 0xa1),
    Color32::from_rgb(0xff, 0x9d, 0xa7),
    Color32::from_rgb(0x9c, 0x75, 0x5f),
    Color32::from_rgb(0xba, 0xb0, 0xac),
];

/// Plot settings
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Settings {
    pub(crate) drag: Vec2b,
    pub(crate) legend: bool,
    pub(crate) scroll: bool,
    pub(crate) zoom: Vec2b,
    pub(crate) palette: Palette,
    pub(crate) width: f32,
    pub(crate) radius: f32,
}

impl Settings {
    pub(crate) const fn new() -> Self {
        Self {
            drag: Vec2b { x: true, y: true },
            legend: true,
            scroll: false,
            zoom: Vec2b { x: true, y: true },
            palette: Palette::Stable,
            width: 1.5,
            radius: 0.0,
        }
    }
}

impl Settings {
    pub(crate) fn show(&mut self, ui: &mut Ui) {
        ui.collapsing(RichText::new(titlecase!("plot")).heading(), |ui| {
            Grid::new(ui.next_auto_id()).show(ui, |ui| {
                // Legend
                ui.label(titlecase!("legend"));
                ui.checkbox(&mut self.legend, "");
                ui.end_row();
                // Drag
                ui.label(titlecase!("drag"));
                ui.horizontal(|ui| {
                    ui.checkbox(&mut self.drag.x, "x");
                    ui.checkbox(&mut self.drag.y, "y");
                });
                ui.end_row();
                // Scroll
                ui.label(titlecase!("scroll"));
                ui.checkbox(&mut self.scroll, "");
                ui.end_row();
                // Zoom
                ui.label(titlecase!("zoom"));
                ui.horizontal(|ui| {
                    ui.checkbox(&mut self.zoom.x, "x");
                    ui.checkbox(&mut self.zoom.y, "y");
                });
                ui.end_row();
                // Palette
                ui.label(titlecase!("palette"));
                ComboBox::from_id_salt("palette")
                    .selected_text(self.palette.text())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.palette,
                            Palette::Stable,
                            Palette::Stable.text(),
                        );
                        ui.selectable_value(
                            &mut self.palette,
                            Palette::Random,
                            Palette::Random.text(),
                        );
                    });
                ui.end_row();
                // Line
                ui.label(titlecase!("line_width"));
                ui.add(DragValue::new(&mut self.width).range(0.5..=8.0).speed(0.1));
                ui.end_row();
                // Markers
                ui.label(titlecase!("marker_radius"));
                ui.add(DragValue::new(&mut self.radius).range(0.0..=16.0).speed(0.1));
            });
        });
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Series palette
#[derive(Clone, Copy, Debug, Default, Deserialize, Hash, PartialEq, Serialize)]
pub(crate) enum Palette {
    /// Fixed color per column index.
    #[default]
    Stable,
    /// Fresh random color for every series on every frame.
    Random,
}

impl Palette {
    fn text(&self) -> String {
        match self {
            Self::Stable => titlecase!("palette_stable"),
            Self::Random => titlecase!("palette_random"),
        }
    }

    pub(crate) fn color(&self, index: usize) -> Color32 {
        match self {
            Self::Stable => PALETTE[index % PALETTE.len()],
            Self::Random => {
                let [r, g, b] = rand::random::<[u8; 3]>();
                Color32::from_rgb(r, g, b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_palette_is_keyed_by_column() {
        let palette = Palette::Stable;
        assert_eq!(palette.color(1), palette.color(1));
        assert_ne!(palette.color(0), palette.color(1));
        assert_eq!(palette.color(0), palette.color(PALETTE.len()));
    }

    #[test]
    fn random_palette_is_opaque() {
        assert!((0..16).all(|index| Palette::Random.color(index).is_opaque()));
    }
}
