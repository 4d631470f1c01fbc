use eframe::egui::{self, RichText, Ui};

use super::{EguiApp, style};
use crate::backend::{ExperienceLevel, JobSearchRequest};

impl EguiApp {
    pub(super) fn render_search_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Search Jobs");
        ui.add_space(6.0);

        egui::Grid::new("search_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                let search = &mut self.controller.ui.search;
                ui.label("Keywords");
                ui.add(
                    egui::TextEdit::singleline(&mut search.keywords)
                        .hint_text("e.g. backend, rust, data")
                        .desired_width(320.0),
                );
                ui.end_row();

                ui.label("Location");
                ui.add(
                    egui::TextEdit::singleline(&mut search.location).desired_width(320.0),
                );
                ui.end_row();

                ui.label("Experience level");
                egui::ComboBox::from_id_salt("experience_level")
                    .selected_text(search.experience_level.label())
                    .show_ui(ui, |ui| {
                        for level in ExperienceLevel::ALL {
                            ui.selectable_value(
                                &mut search.experience_level,
                                level,
                                level.label(),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Max results");
                egui::ComboBox::from_id_salt("max_results")
                    .selected_text(search.max_results.to_string())
                    .show_ui(ui, |ui| {
                        for choice in JobSearchRequest::MAX_RESULTS_CHOICES {
                            ui.selectable_value(
                                &mut search.max_results,
                                choice,
                                choice.to_string(),
                            );
                        }
                    });
                ui.end_row();
            });

        ui.add_space(10.0);
        let pending = self.controller.search_pending();
        let label = if pending { "Searching..." } else { "Search" };
        if ui.add_enabled(!pending, egui::Button::new(label)).clicked() {
            self.controller.search_jobs();
        }
        if !self.controller.ui.upload.has_cv {
            ui.add_space(6.0);
            ui.label(
                RichText::new("A CV must be uploaded before searching.")
                    .color(palette.text_muted),
            );
        }
    }
}
