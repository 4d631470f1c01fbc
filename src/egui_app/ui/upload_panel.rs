use eframe::egui::{self, Frame, Margin, RichText, Ui};

use super::{EguiApp, style};

impl EguiApp {
    pub(super) fn render_upload_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.heading("Upload CV");
        ui.add_space(6.0);
        let pending = self.controller.upload_pending();
        ui.horizontal(|ui| {
            let label = if pending {
                "Uploading..."
            } else {
                "Choose PDF..."
            };
            if ui.add_enabled(!pending, egui::Button::new(label)).clicked() {
                self.controller.upload_cv_via_dialog();
            }
            if let Some(name) = self.controller.ui.upload.file_name.clone() {
                ui.label(RichText::new(name).color(palette.text_muted));
            }
        });
        ui.add_space(10.0);

        if !self.controller.ui.upload.has_cv {
            ui.label(
                RichText::new("Upload a PDF CV to unlock job search and auto-apply.")
                    .color(palette.text_muted),
            );
            return;
        }

        let upload = self.controller.ui.upload.clone();
        egui::ScrollArea::vertical()
            .id_salt("upload_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if !upload.summary.is_empty() {
                    ui.label(RichText::new("Summary").strong());
                    ui.label(&upload.summary);
                    ui.add_space(8.0);
                }
                if !upload.skill_tags.is_empty() {
                    ui.label(RichText::new("Skills").strong());
                    ui.horizontal_wrapped(|ui| {
                        for tag in &upload.skill_tags {
                            Frame::NONE
                                .fill(style::tag_fill())
                                .stroke(style::outer_border())
                                .inner_margin(Margin::symmetric(6, 2))
                                .show(ui, |ui| {
                                    ui.label(RichText::new(tag).color(palette.text_primary));
                                });
                        }
                    });
                    ui.add_space(8.0);
                }
                render_lines(ui, "Experience", &upload.experience);
                render_lines(ui, "Education", &upload.education);
            });
    }
}

fn render_lines(ui: &mut Ui, title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    ui.label(RichText::new(title).strong());
    for line in lines {
        ui.label(format!("· {line}"));
    }
    ui.add_space(8.0);
}
