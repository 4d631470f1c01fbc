use eframe::egui::{self, Align2, RichText};

use super::{EguiApp, style};

impl EguiApp {
    pub(super) fn render_prompts(&mut self, ctx: &egui::Context) {
        self.render_alert(ctx);
        self.render_auto_apply_prompt(ctx);
    }

    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(alert) = self.controller.ui.alert.clone() else {
            return;
        };
        let mut open = true;
        let mut dismiss = false;
        egui::Window::new(alert.title)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_min_width(320.0);
                ui.label(alert.message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismiss = true;
                }
            });
        if dismiss || !open {
            self.controller.dismiss_alert();
        }
    }

    fn render_auto_apply_prompt(&mut self, ctx: &egui::Context) {
        let Some(prompt) = self.controller.ui.auto_apply_prompt else {
            return;
        };
        let palette = style::palette();
        let mut open = true;
        let mut confirm = false;
        let mut cancel = false;
        egui::Window::new("Confirm auto-apply")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_min_width(340.0);
                ui.label(
                    RichText::new("Applications will be submitted on your behalf.")
                        .strong()
                        .color(style::status_badge_color(style::StatusTone::Warning)),
                );
                ui.label(
                    RichText::new(format!(
                        "Jobs scoring at least {}% are applied to, up to {} applications.",
                        prompt.limits.min_match_score, prompt.limits.max_applications
                    ))
                    .color(palette.text_primary),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Start auto-apply").clicked() {
                        confirm = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });
        if confirm {
            self.controller.confirm_auto_apply();
            return;
        }
        if cancel || !open {
            self.controller.cancel_auto_apply();
        }
    }
}
