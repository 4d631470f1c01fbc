use eframe::egui::{self, Frame, Margin, RichText, Ui};

use super::{EguiApp, style};
use crate::egui_app::view_model::JobRowView;

impl EguiApp {
    pub(super) fn render_jobs_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let count = self.controller.ui.jobs.rows.len();
        ui.horizontal(|ui| {
            ui.heading(format!("Jobs ({count})"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let refreshing = self.controller.jobs_refresh_pending();
                if ui
                    .add_enabled(!refreshing, egui::Button::new("Refresh"))
                    .clicked()
                {
                    self.controller.refresh_jobs();
                }
                let auto_applying = self.controller.auto_apply_pending();
                let label = if auto_applying {
                    "Auto-applying..."
                } else {
                    "Auto-apply to matches"
                };
                if ui
                    .add_enabled(!auto_applying, egui::Button::new(label))
                    .clicked()
                {
                    self.controller.request_auto_apply();
                }
            });
        });
        ui.add_space(6.0);

        let rows = self.controller.ui.jobs.rows.clone();
        if rows.is_empty() {
            ui.label(
                RichText::new("No jobs loaded. Run a search to populate this list.")
                    .color(palette.text_muted),
            );
            return;
        }
        egui::ScrollArea::vertical()
            .id_salt("jobs_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for row in &rows {
                    self.render_job_row(ui, row);
                    ui.add_space(6.0);
                }
            });
    }

    fn render_job_row(&mut self, ui: &mut Ui, row: &JobRowView) {
        let palette = style::palette();
        Frame::NONE
            .fill(palette.bg_tertiary)
            .stroke(style::outer_border())
            .inner_margin(Margin::same(8))
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&row.title).strong());
                    ui.label(
                        RichText::new(&row.score_label)
                            .color(style::match_band_color(row.band)),
                    );
                    if row.applied {
                        ui.label(RichText::new("applied").color(palette.success));
                    }
                });
                ui.label(
                    RichText::new(format!("{} · {}", row.company, row.location))
                        .color(palette.text_muted),
                );
                if !row.posted_date.is_empty() {
                    ui.label(
                        RichText::new(format!("Posted {}", row.posted_date))
                            .color(palette.text_muted),
                    );
                }
                if !row.description.is_empty() {
                    egui::CollapsingHeader::new("Details")
                        .id_salt(("job_details", &row.id))
                        .show(ui, |ui| {
                            ui.label(&row.description);
                            if !row.requirements.is_empty() {
                                ui.add_space(4.0);
                                ui.label(
                                    RichText::new(format!(
                                        "Requirements: {}",
                                        row.requirements
                                    ))
                                    .color(palette.text_muted),
                                );
                            }
                        });
                }
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let applying = self.controller.apply_pending_for(&row.id);
                    let label = if applying {
                        "Applying..."
                    } else if row.applied {
                        "Applied"
                    } else {
                        "Apply"
                    };
                    let enabled = !row.applied && !self.controller.apply_pending();
                    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                        self.controller.apply_to_job(&row.id);
                    }
                    if !row.url.is_empty() && ui.button("Open listing").clicked() {
                        self.controller.open_job_url(&row.url);
                    }
                });
            });
    }
}
