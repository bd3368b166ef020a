use crate::localization::titlecase;
use egui::{Response, RichText, Ui, Widget};
use egui_phosphor::regular::{CLOUD_ARROW_DOWN, COLUMNS, SLIDERS_HORIZONTAL};
use serde::{Deserialize, Serialize};

/// Variant
#[derive(Clone, Copy, Debug, Default, Deserialize, Hash, PartialEq, Serialize)]
pub(crate) enum Variant {
    /// One global column count, resized with a stepper.
    #[default]
    Fixed,
    /// Columns are added and removed per row.
    Free,
    /// Free columns, prefilled from exchange rates.
    Remote,
}

impl Variant {
    pub(crate) const fn icon(&self) -> &'static str {
        match self {
            Self::Fixed => SLIDERS_HORIZONTAL,
            Self::Free => COLUMNS,
            Self::Remote => CLOUD_ARROW_DOWN,
        }
    }

    pub(crate) fn text(&self) -> String {
        match self {
            Self::Fixed => titlecase!("variant_fixed"),
            Self::Free => titlecase!("variant_free"),
            Self::Remote => titlecase!("variant_remote"),
        }
    }

    /// Whether rows can be widened or narrowed one at a time.
    pub(crate) const fn per_row_columns(&self) -> bool {
        !matches!(self, Self::Fixed)
    }
}

/// Variant widget
#[derive(Debug)]
pub(crate) struct VariantWidget<'a> {
    variant: &'a mut Variant,
}

impl<'a> VariantWidget<'a> {
    pub(crate) fn new(variant: &'a mut Variant) -> Self {
        Self { variant }
    }
}

impl Widget for VariantWidget<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let mut changed = false;
        let mut response = ui
            .menu_button(RichText::new(self.variant.icon()).heading(), |ui| {
                for variant in [Variant::Fixed, Variant::Free, Variant::Remote] {
                    changed |= ui
                        .selectable_value(
                            self.variant,
                            variant,
                            format!("{} {}", variant.icon(), variant.text()),
                        )
                        .changed();
                }
                if changed {
                    ui.close_menu();
                }
            })
            .response
            .on_hover_text(format!("{}: {}", titlecase!("variant"), self.variant.text()));
        if changed {
            response.mark_changed();
        }
        response
    }
}
