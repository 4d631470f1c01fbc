//! Shared state types for the egui UI.

use egui::Color32;

use crate::backend::{AutoApplyLimits, JobSearchRequest};
use crate::egui_app::ui::style;
use crate::egui_app::view_model::{ApplicationRowView, JobRowView};

/// The four exclusive panes of the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    Upload,
    Search,
    Jobs,
    Applications,
}

impl ActiveTab {
    /// Tabs in display order.
    pub const ALL: [ActiveTab; 4] = [
        ActiveTab::Upload,
        ActiveTab::Search,
        ActiveTab::Jobs,
        ActiveTab::Applications,
    ];

    /// Label shown on the tab strip.
    pub fn label(self) -> &'static str {
        match self {
            ActiveTab::Upload => "Upload CV",
            ActiveTab::Search => "Search",
            ActiveTab::Jobs => "Jobs",
            ActiveTab::Applications => "Applications",
        }
    }
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub tab: ActiveTab,
    pub status: StatusBarState,
    pub upload: UploadPaneState,
    /// Search form fields, posted as-is on submit.
    pub search: JobSearchRequest,
    pub jobs: JobsPaneState,
    pub applications: ApplicationsPaneState,
    /// Blocking message dialog; dismissed with a single button.
    pub alert: Option<AlertPrompt>,
    /// Pending auto-apply confirmation; no network effect until accepted.
    pub auto_apply_prompt: Option<AutoApplyPrompt>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            tab: ActiveTab::default(),
            status: StatusBarState::idle(),
            upload: UploadPaneState::default(),
            search: JobSearchRequest::default(),
            jobs: JobsPaneState::default(),
            applications: ApplicationsPaneState::default(),
            alert: None,
            auto_apply_prompt: None,
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Upload a CV to get started".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}

/// Upload pane: analysis summary of the current CV, if any.
#[derive(Clone, Debug, Default)]
pub struct UploadPaneState {
    /// Name of the uploaded file, for display next to the picker.
    pub file_name: Option<String>,
    /// Capped list of skill tags to render.
    pub skill_tags: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub summary: String,
    /// Whether an analysis is loaded (gates search/auto-apply).
    pub has_cv: bool,
}

/// Jobs pane rows plus derived counts.
#[derive(Clone, Debug, Default)]
pub struct JobsPaneState {
    pub rows: Vec<JobRowView>,
}

/// Applications pane rows.
#[derive(Clone, Debug, Default)]
pub struct ApplicationsPaneState {
    pub rows: Vec<ApplicationRowView>,
}

/// Content of the blocking message dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertPrompt {
    pub title: String,
    pub message: String,
}

impl AlertPrompt {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Confirmation dialog shown before a bulk auto-apply run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AutoApplyPrompt {
    /// Thresholds that will be sent once confirmed.
    pub limits: AutoApplyLimits,
}
