use self::{
    data::Action,
    notices::Notices,
    panes::{Pane, behavior::Behavior, settings::Settings, view::View},
    rates::{Loader, URL},
    state::{MAX_COLUMNS, State},
    variant::{Variant, VariantWidget},
};
use crate::localization::{self, Locale, titlecase};
use eframe::{APP_KEY, CreationContext, Storage, get_value, set_value};
use egui::{
    Align, CentralPanel, DragValue, FontDefinitions, Layout, RichText, ScrollArea, SidePanel,
    Spinner, TextEdit, TopBottomPanel, Ui, menu::bar, warn_if_debug_build,
    widgets::global_theme_preference_switch,
};
use egui_phosphor::{
    Variant as IconVariant, add_to_fonts,
    regular::{
        ARROW_COUNTER_CLOCKWISE, ARROWS_CLOCKWISE, CLOUD_ARROW_DOWN, SIDEBAR_SIMPLE, TRANSLATE,
    },
};
use egui_tiles::Tree;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const SIZE: f32 = 32.0;

macro_rules! icon {
    ($icon:expr) => {
        RichText::new($icon).size(SIZE)
    };
}

/// We derive Deserialize/Serialize so we can persist UI preferences on
/// shutdown. Table contents are never persisted.
#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    left_panel: bool,
    locale: Locale,
    url: String,

    state: State,
    settings: Settings,
    tree: Tree<Pane>,

    #[serde(skip)]
    loader: Loader,
    #[serde(skip)]
    notices: Notices,
}

impl Default for App {
    fn default() -> Self {
        Self {
            left_panel: false,
            locale: Locale::En,
            url: URL.to_owned(),
            state: State::default(),
            settings: Settings::new(),
            tree: Tree::new_vertical(
                "tree",
                vec![Pane::Editor, Pane::Chart { view: View::Plot }],
            ),
            loader: Loader::default(),
            notices: Notices::default(),
        }
    }
}

impl App {
    /// Called once before the first frame.
    pub fn new(cc: &CreationContext) -> Self {
        let mut fonts = FontDefinitions::default();
        add_to_fonts(&mut fonts, IconVariant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Load previous preferences (if any).
        let app: Self = cc
            .storage
            .and_then(|storage| get_value(storage, APP_KEY))
            .unwrap_or_default();
        localization::set(app.locale);
        info!(variant = ?app.state.variant, "started");
        app
    }

    fn rates(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        let now = ctx.input(|input| input.time);
        for result in self.loader.poll() {
            if let Some(table) = self.loader.complete(result, &mut self.notices, now) {
                actions.push(Action::Replace(table));
            }
        }
    }

    fn apply(&mut self, ctx: &egui::Context, actions: Vec<Action>) {
        if actions.is_empty() {
            return;
        }
        for action in actions {
            self.state.apply(action);
        }
        debug!(rows = self.state.table.len(), hash = self.state.table.hash);
        ctx.request_repaint();
    }
}

impl App {
    fn panels(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        self.top_panel(ctx, actions);
        self.bottom_panel(ctx);
        self.left_panel(ctx);
        self.central_panel(ctx, actions);
    }

    // Bottom panel
    fn bottom_panel(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                warn_if_debug_build(ui);
                ui.label(RichText::new(env!("CARGO_PKG_VERSION")).small());
                ui.separator();
            });
        });
    }

    // Central panel
    fn central_panel(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        CentralPanel::default().show(ctx, |ui| {
            let mut behavior = Behavior {
                state: &self.state,
                settings: &self.settings,
                actions,
            };
            self.tree.ui(&mut behavior, ui);
        });
    }

    // Left panel
    fn left_panel(&mut self, ctx: &egui::Context) {
        SidePanel::left("left_panel")
            .frame(egui::Frame::side_top_panel(&ctx.style()))
            .resizable(true)
            .show_animated(ctx, self.left_panel, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    self.settings.show(ui);
                    ui.collapsing(RichText::new(titlecase!("source")).heading(), |ui| {
                        ui.horizontal(|ui| {
                            ui.label(titlecase!("endpoint"));
                            ui.add(TextEdit::singleline(&mut self.url));
                            if ui
                                .button(ARROW_COUNTER_CLOCKWISE)
                                .on_hover_text(URL)
                                .clicked()
                            {
                                self.url = URL.to_owned();
                            }
                        });
                    });
                    ui.separator();
                });
            });
    }

    // Top panel
    fn top_panel(&mut self, ctx: &egui::Context, actions: &mut Vec<Action>) {
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            bar(ui, |ui| {
                // Left panel
                ui.toggle_value(&mut self.left_panel, icon!(SIDEBAR_SIMPLE))
                    .on_hover_text(titlecase!("left_panel"));
                ui.separator();
                global_theme_preference_switch(ui);
                ui.separator();
                if ui
                    .button(icon!(ARROW_COUNTER_CLOCKWISE))
                    .on_hover_text(titlecase!("reset_table"))
                    .clicked()
                {
                    self.state.reset();
                }
                if ui
                    .button(icon!(ARROWS_CLOCKWISE))
                    .on_hover_text(titlecase!("reset_gui"))
                    .clicked()
                {
                    ui.memory_mut(|memory| *memory = Default::default());
                }
                ui.separator();
                // Variant
                let mut variant = self.state.variant;
                if ui.add(VariantWidget::new(&mut variant)).changed() {
                    self.state.switch(variant);
                }
                match self.state.variant {
                    Variant::Fixed => self.columns(ui, actions),
                    Variant::Free => {}
                    Variant::Remote => self.fetch(ui),
                }
                ui.separator();
                // Locale
                ui.menu_button(icon!(TRANSLATE), |ui| {
                    let mut changed = ui
                        .selectable_value(&mut self.locale, Locale::En, Locale::En.text())
                        .changed();
                    changed |= ui
                        .selectable_value(&mut self.locale, Locale::Ru, Locale::Ru.text())
                        .changed();
                    if changed {
                        localization::set(self.locale);
                    }
                })
                .response
                .on_hover_text(titlecase!("language"));
            });
        });
    }

    fn columns(&mut self, ui: &mut Ui, actions: &mut Vec<Action>) {
        ui.label(titlecase!("columns"));
        let mut columns = self.state.columns;
        if ui
            .add(DragValue::new(&mut columns).range(1..=MAX_COLUMNS))
            .changed()
        {
            actions.push(Action::ResizeColumns(columns));
        }
    }

    fn fetch(&mut self, ui: &mut Ui) {
        if self.loader.is_loading() {
            ui.add(Spinner::new().size(SIZE));
        }
        // Overlapping fetches are allowed.
        if ui
            .button(icon!(CLOUD_ARROW_DOWN))
            .on_hover_text(titlecase!("fetch_rates"))
            .clicked()
        {
            self.loader.fetch(ui.ctx(), &self.url);
        }
        if let Some(rates) = &self.loader.last {
            if let Some(base) = &rates.base {
                ui.label(format!("{}: {base}", titlecase!("base")));
            }
            if let Some(date) = &rates.date {
                ui.label(format!("{}: {date}", titlecase!("date")));
            }
        }
    }
}

impl eframe::App for App {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn Storage) {
        set_value(storage, APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        self.rates(ctx, &mut actions);
        self.panels(ctx, &mut actions);
        self.apply(ctx, actions);
        self.notices.show(ctx);
    }
}

mod computers;
mod data;
mod notices;
mod panes;
mod rates;
mod state;
mod variant;
