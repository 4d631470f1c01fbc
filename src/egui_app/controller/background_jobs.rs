//! Per-frame draining of finished background work.

use super::EguiController;
use super::jobs::JobMessage;
use crate::egui_app::state::{ActiveTab, AlertPrompt};
use crate::egui_app::ui::style::StatusTone;

impl EguiController {
    /// Drain all finished worker results and fold them into UI state.
    ///
    /// Called once per frame by the renderer. Pending flags are cleared
    /// here for success and failure alike, so no action can be left
    /// permanently disabled.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => break,
            };

            match message {
                JobMessage::CvUploaded { file_name, result } => {
                    self.jobs.clear_upload();
                    match result {
                        Ok(upload) => {
                            let summary = if upload.message.is_empty() {
                                format!(
                                    "CV analyzed: {} skills found",
                                    upload.analysis.skills.len()
                                )
                            } else {
                                upload.message.clone()
                            };
                            self.apply_cv(file_name, upload.analysis);
                            self.set_status(summary, StatusTone::Info);
                        }
                        Err(err) => {
                            self.ui.alert =
                                Some(AlertPrompt::new("Upload failed", err.to_string()));
                            self.set_status("CV upload failed", StatusTone::Error);
                        }
                    }
                }
                JobMessage::SearchFinished(result) => {
                    self.jobs.clear_search();
                    match result {
                        Ok(jobs) => {
                            let found = jobs.len();
                            self.apply_job_list(jobs);
                            self.ui.tab = ActiveTab::Jobs;
                            self.set_status(
                                format!("Found {found} matching jobs"),
                                StatusTone::Info,
                            );
                        }
                        Err(err) => {
                            self.ui.alert =
                                Some(AlertPrompt::new("Search failed", err.to_string()));
                            self.set_status("Job search failed", StatusTone::Error);
                        }
                    }
                }
                JobMessage::Applied { job_id, result } => {
                    self.jobs.clear_apply();
                    match result {
                        Ok(outcome) => {
                            let text = if outcome.message.is_empty() {
                                "Application submitted".to_string()
                            } else {
                                outcome.message
                            };
                            self.set_status(text, StatusTone::Info);
                            // Backend state is authoritative: re-fetch
                            // instead of patching the applied flag locally.
                            self.refresh_jobs();
                            self.refresh_applications();
                        }
                        Err(err) => {
                            tracing::warn!(job_id, "apply failed: {err}");
                            self.ui.alert =
                                Some(AlertPrompt::new("Application failed", err.to_string()));
                            self.set_status("Application failed", StatusTone::Error);
                        }
                    }
                }
                JobMessage::AutoApplied(result) => {
                    self.jobs.clear_auto_apply();
                    match result {
                        Ok(message) => {
                            // The backend summary is shown verbatim.
                            self.ui.alert = Some(AlertPrompt::new("Auto-apply", message));
                            self.set_status("Auto-apply finished", StatusTone::Info);
                            self.refresh_jobs();
                            self.refresh_applications();
                        }
                        Err(err) => {
                            self.ui.alert =
                                Some(AlertPrompt::new("Auto-apply failed", err.to_string()));
                            self.set_status("Auto-apply failed", StatusTone::Error);
                        }
                    }
                }
                JobMessage::JobsFetched(result) => {
                    self.jobs.clear_fetch_jobs();
                    match result {
                        Ok(jobs) => self.apply_job_list(jobs),
                        // Background reconciliation read; never alerted.
                        Err(err) => tracing::warn!("jobs refresh failed: {err}"),
                    }
                }
                JobMessage::ApplicationsFetched(result) => {
                    self.jobs.clear_fetch_applications();
                    match result {
                        Ok(applications) => self.apply_applications(applications),
                        Err(err) => tracing::warn!("applications refresh failed: {err}"),
                    }
                }
            }
        }
    }
}
