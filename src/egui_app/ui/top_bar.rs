use eframe::egui::{self, Frame, RichText};

use super::{EguiApp, style};
use crate::egui_app::state::ActiveTab;

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(Frame::NONE.fill(palette.bg_secondary))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Job Auto-Apply")
                            .strong()
                            .color(palette.text_primary),
                    );
                    ui.add_space(8.0);
                    ui.separator();
                    let current = self.controller.ui.tab;
                    for tab in ActiveTab::ALL {
                        if ui.selectable_label(tab == current, tab.label()).clicked() {
                            self.controller.select_tab(tab);
                        }
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Close").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
    }
}
