use eframe::egui::{self, Frame, Margin, RichText, Ui};

use super::{EguiApp, style};
use crate::egui_app::view_model::ApplicationStatus;

impl EguiApp {
    pub(super) fn render_applications_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            ui.heading("Applications");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let refreshing = self.controller.applications_refresh_pending();
                if ui
                    .add_enabled(!refreshing, egui::Button::new("Refresh"))
                    .clicked()
                {
                    self.controller.refresh_applications();
                }
            });
        });
        ui.add_space(6.0);

        let rows = self.controller.ui.applications.rows.clone();
        if rows.is_empty() {
            ui.label(
                RichText::new("No applications submitted yet.").color(palette.text_muted),
            );
            return;
        }
        egui::ScrollArea::vertical()
            .id_salt("applications_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in &rows {
                    Frame::NONE
                        .fill(palette.bg_tertiary)
                        .stroke(style::outer_border())
                        .inner_margin(Margin::same(8))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&row.job_title).strong());
                                let color = match &row.status {
                                    ApplicationStatus::Applied => palette.success,
                                    ApplicationStatus::Interview => palette.accent_ice,
                                    ApplicationStatus::Other(_) => palette.text_muted,
                                };
                                ui.label(RichText::new(row.status.label()).color(color));
                            });
                            ui.label(RichText::new(&row.company).color(palette.text_muted));
                            if !row.application_date.is_empty() {
                                ui.label(
                                    RichText::new(format!("Applied {}", row.application_date))
                                        .color(palette.text_muted),
                                );
                            }
                            if !row.cover_letter.is_empty() {
                                egui::CollapsingHeader::new("Cover letter")
                                    .id_salt(("cover_letter", &row.id))
                                    .show(ui, |ui| {
                                        ui.label(&row.cover_letter);
                                    });
                            }
                        });
                    ui.add_space(6.0);
                }
            });
    }
}
