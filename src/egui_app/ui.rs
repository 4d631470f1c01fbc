//! egui renderer for the application UI.

mod applications_panel;
mod jobs_panel;
mod prompts;
mod search_panel;
pub mod style;
mod top_bar;
mod upload_panel;

use std::sync::Arc;

use eframe::egui::{self, Frame, RichText, Ui, Vec2};

use crate::backend::BackendClient;
use crate::egui_app::controller::EguiController;
use crate::egui_app::state::ActiveTab;

/// Smallest window the four panes still render legibly in.
pub const MIN_VIEWPORT_SIZE: Vec2 = Vec2::new(760.0, 520.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app and start the initial background reads.
    pub fn new(backend: BackendClient) -> Self {
        let mut controller = EguiController::new(Arc::new(backend));
        controller.initial_load();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_center(&mut self, ui: &mut Ui) {
        match self.controller.ui.tab {
            ActiveTab::Upload => self.render_upload_panel(ui),
            ActiveTab::Search => self.render_search_panel(ui),
            ActiveTab::Jobs => self.render_jobs_panel(ui),
            ActiveTab::Applications => self.render_applications_panel(ui),
        }
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::NONE.fill(palette.bg_primary))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        9.0,
                        status.badge_color,
                    );
                    ui.add_space(24.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_muted));
                });
            });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_center(ui);
        });
        self.render_prompts(ctx);
        ctx.request_repaint();
    }
}
