use crate::{
    app::{
        computers::chart::column_name,
        data::{Action, Table},
        variant::Variant,
    },
    localization::titlecase,
};
use egui::{Frame, RichText, ScrollArea, TextEdit, Ui};
use egui_phosphor::regular::{PLUS, TRASH, X};

const CELL_WIDTH: f32 = 96.0;

/// Table editor
///
/// One block per row. Edits are reported as actions, the table itself is
/// never touched here.
pub(crate) struct Editor<'a> {
    pub(crate) table: &'a Table,
    pub(crate) variant: Variant,
    pub(crate) actions: &'a mut Vec<Action>,
}

impl Editor<'_> {
    pub(crate) fn show(self, ui: &mut Ui) {
        ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            if self.table.is_empty() {
                ui.label(titlecase!("empty_table"));
            }
            for (row_index, row) in self.table.rows.iter().enumerate() {
                Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} {}", titlecase!("row"), row_index + 1))
                                .heading(),
                        );
                        if ui
                            .button(TRASH)
                            .on_hover_text(titlecase!("remove_row"))
                            .clicked()
                        {
                            self.actions.push(Action::RemoveRow(row_index));
                        }
                    });
                    ui.horizontal_wrapped(|ui| {
                        for (column_index, cell) in row.iter().enumerate() {
                            let mut value = cell.clone();
                            let response = TextEdit::singleline(&mut value)
                                .id_salt((row_index, column_index))
                                .hint_text(column_name(column_index))
                                .desired_width(CELL_WIDTH)
                                .show(ui)
                                .response;
                            if response.changed() {
                                self.actions
                                    .push(Action::SetCell(row_index, column_index, value));
                            }
                            if self.variant.per_row_columns()
                                && ui
                                    .small_button(X)
                                    .on_hover_text(titlecase!("remove_column"))
                                    .clicked()
                            {
                                self.actions
                                    .push(Action::RemoveColumn(row_index, column_index));
                            }
                        }
                        if self.variant.per_row_columns()
                            && ui
                                .button(PLUS)
                                .on_hover_text(titlecase!("add_column"))
                                .clicked()
                        {
                            self.actions.push(Action::AddColumn(row_index));
                        }
                    });
                });
            }
            if ui
                .button(format!("{PLUS} {}", titlecase!("add_row")))
                .clicked()
            {
                self.actions.push(Action::AddRow);
            }
        });
    }
}
