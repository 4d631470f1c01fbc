//! Maintains app state and bridges backend calls to the egui UI.

mod background_jobs;
mod jobs;
#[cfg(test)]
mod test_support;

use std::path::Path;
use std::sync::Arc;

use rfd::FileDialog;

use crate::backend::{ApplicationRecord, CvAnalysis, JobBoard, JobListing};
use crate::egui_app::state::{ActiveTab, AlertPrompt, AutoApplyPrompt, UiState};
use crate::egui_app::ui::style::{self, StatusTone};
use crate::egui_app::view_model;
use jobs::ControllerJobs;

/// Maintains app state and dispatches backend work to worker threads.
pub struct EguiController {
    pub ui: UiState,
    jobs: ControllerJobs,
    cv: Option<CvAnalysis>,
    job_list: Vec<JobListing>,
    applications: Vec<ApplicationRecord>,
}

impl EguiController {
    pub fn new(backend: Arc<dyn JobBoard>) -> Self {
        Self {
            ui: UiState::default(),
            jobs: ControllerJobs::new(backend),
            cv: None,
            job_list: Vec::new(),
            applications: Vec::new(),
        }
    }

    /// Kick off the initial background reads for both lists.
    pub fn initial_load(&mut self) {
        self.refresh_jobs();
        self.refresh_applications();
    }

    /// Switch the active pane. Purely local: no requests, no state loss.
    pub fn select_tab(&mut self, tab: ActiveTab) {
        self.ui.tab = tab;
    }

    /// Pick a PDF via the native file dialog and upload it.
    pub fn upload_cv_via_dialog(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("PDF", &["pdf"])
            .pick_file()
        else {
            return;
        };
        self.upload_cv_from_path(&path);
    }

    /// Upload the file at `path` as the CV.
    pub fn upload_cv_from_path(&mut self, path: &Path) {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.show_alert("Upload failed", format!("Could not read file: {err}"));
                self.set_status("CV upload failed", StatusTone::Error);
                return;
            }
        };
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("cv.pdf")
            .to_string();
        self.upload_cv_bytes(file_name, bytes);
    }

    /// Upload raw PDF bytes under `file_name`.
    pub fn upload_cv_bytes(&mut self, file_name: String, bytes: Vec<u8>) {
        if self.jobs.upload_in_progress() {
            return;
        }
        self.set_status(
            format!("Uploading and analyzing {file_name}..."),
            StatusTone::Busy,
        );
        self.jobs.begin_upload(file_name, bytes);
    }

    /// Run a job search with the current form fields.
    ///
    /// Refused locally when no CV analysis is loaded; the backend never
    /// sees the request in that case.
    pub fn search_jobs(&mut self) {
        if !self.require_cv("Upload a CV before searching for jobs.") {
            return;
        }
        if self.jobs.search_in_progress() {
            return;
        }
        let request = self.ui.search.clone();
        self.set_status("Searching for matching jobs...", StatusTone::Busy);
        self.jobs.begin_search(request);
    }

    /// Apply to a single job by id.
    pub fn apply_to_job(&mut self, job_id: &str) {
        if self.jobs.apply_in_progress() {
            return;
        }
        self.set_status("Submitting application...", StatusTone::Busy);
        self.jobs.begin_apply(job_id.to_string());
    }

    /// Open the auto-apply confirmation dialog. No network effect yet.
    pub fn request_auto_apply(&mut self) {
        if !self.require_cv("Upload a CV before running auto-apply.") {
            return;
        }
        if self.jobs.auto_apply_in_progress() {
            return;
        }
        self.ui.auto_apply_prompt = Some(AutoApplyPrompt::default());
    }

    /// User accepted the confirmation dialog: start the auto-apply run.
    pub fn confirm_auto_apply(&mut self) {
        let Some(prompt) = self.ui.auto_apply_prompt.take() else {
            return;
        };
        if self.jobs.auto_apply_in_progress() {
            return;
        }
        self.set_status("Auto-applying to matching jobs...", StatusTone::Busy);
        self.jobs.begin_auto_apply(prompt.limits);
    }

    /// User declined the confirmation dialog.
    pub fn cancel_auto_apply(&mut self) {
        self.ui.auto_apply_prompt = None;
    }

    /// Background re-fetch of the job list. Failures are logged only.
    pub fn refresh_jobs(&mut self) {
        self.jobs.begin_fetch_jobs();
    }

    /// Background re-fetch of the applications list. Failures are logged
    /// only.
    pub fn refresh_applications(&mut self) {
        self.jobs.begin_fetch_applications();
    }

    /// Open a job listing in the system browser.
    pub fn open_job_url(&mut self, url: &str) {
        if url.trim().is_empty() {
            return;
        }
        if let Err(err) = open::that(url) {
            self.set_status(
                format!("Could not open browser: {err}"),
                StatusTone::Warning,
            );
        }
    }

    /// Dismiss the blocking message dialog.
    pub fn dismiss_alert(&mut self) {
        self.ui.alert = None;
    }

    pub fn upload_pending(&self) -> bool {
        self.jobs.upload_in_progress()
    }

    pub fn search_pending(&self) -> bool {
        self.jobs.search_in_progress()
    }

    pub fn apply_pending(&self) -> bool {
        self.jobs.apply_in_progress()
    }

    /// Whether the apply for this specific job is still in flight.
    pub fn apply_pending_for(&self, job_id: &str) -> bool {
        self.jobs.pending_apply_job() == Some(job_id)
    }

    pub fn auto_apply_pending(&self) -> bool {
        self.jobs.auto_apply_in_progress()
    }

    pub fn jobs_refresh_pending(&self) -> bool {
        self.jobs.jobs_fetch_in_progress()
    }

    pub fn applications_refresh_pending(&self) -> bool {
        self.jobs.applications_fetch_in_progress()
    }

    /// Gate actions that need an analyzed CV; warns without any request.
    fn require_cv(&mut self, message: &str) -> bool {
        if self.cv.is_some() {
            return true;
        }
        self.show_alert("CV required", message);
        self.set_status("No CV loaded", StatusTone::Warning);
        false
    }

    fn show_alert(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.ui.alert = Some(AlertPrompt::new(title, message));
    }

    fn apply_cv(&mut self, file_name: String, analysis: CvAnalysis) {
        self.ui.upload.file_name = Some(file_name);
        self.ui.upload.skill_tags = view_model::skill_tags(&analysis);
        self.ui.upload.experience = analysis.experience.clone();
        self.ui.upload.education = analysis.education.clone();
        self.ui.upload.summary = analysis.summary.clone();
        self.ui.upload.has_cv = true;
        self.cv = Some(analysis);
    }

    fn apply_job_list(&mut self, jobs: Vec<JobListing>) {
        self.ui.jobs.rows = view_model::job_rows(&jobs);
        self.job_list = jobs;
    }

    fn apply_applications(&mut self, applications: Vec<ApplicationRecord>) {
        self.ui.applications.rows = view_model::application_rows(&applications);
        self.applications = applications;
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = style::status_badge_label(tone).to_string();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }

    #[cfg(test)]
    pub(crate) fn set_cv_for_tests(&mut self, analysis: CvAnalysis) {
        self.apply_cv("test.pdf".to_string(), analysis);
    }
}
