use super::{
    data::{Action, Table},
    variant::Variant,
};
use crate::utils::hashed::Hashed;
use serde::{Deserialize, Serialize};
use tracing::debug;

const ROWS: usize = 3;
const COLUMNS: usize = 2;

/// Largest column count the stepper accepts.
pub(crate) const MAX_COLUMNS: usize = 1024;

/// Table state store
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub(crate) struct State {
    pub(crate) variant: Variant,
    /// Global column count, used by the fixed variant. Not persisted: it
    /// must match the width of the freshly built table.
    #[serde(skip)]
    pub(crate) columns: usize,
    #[serde(skip)]
    pub(crate) table: Hashed<Table>,
}

impl State {
    pub(crate) fn new(variant: Variant) -> Self {
        Self {
            variant,
            columns: COLUMNS,
            table: Hashed::new(Table::new(ROWS, COLUMNS)),
        }
    }

    /// Switches variant, starting over from its initial table.
    pub(crate) fn switch(&mut self, variant: Variant) {
        debug!(?variant, "switch variant");
        *self = Self::new(variant);
    }

    pub(crate) fn reset(&mut self) {
        self.switch(self.variant);
    }

    pub(crate) fn apply(&mut self, mut action: Action) {
        if let Action::ResizeColumns(columns) = &mut action {
            *columns = (*columns).clamp(1, MAX_COLUMNS);
            self.columns = *columns;
        }
        let columns = (!self.variant.per_row_columns()).then_some(self.columns);
        self.table.update(|table| action.apply(table, columns));
        // A replacement sets the width every later fixed row follows.
        if !self.variant.per_row_columns() && !self.table.is_empty() {
            let width = self.table.first_width().clamp(1, MAX_COLUMNS);
            if width != self.columns || self.table.rows.iter().any(|row| row.len() != width) {
                self.columns = width;
                self.table.update(|table| table.resize_columns(width));
            }
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}
