//! Helpers to convert backend records into egui-facing view structs.

use crate::backend::{ApplicationRecord, CvAnalysis, JobListing};

/// Upper bound on skill tags rendered in the upload pane.
pub const MAX_SKILL_TAGS: usize = 8;

/// Visual band for a 0-100 match score. Boundaries are inclusive on the
/// upper side: 80 is already high, 60 already medium.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchBand {
    High,
    Medium,
    Low,
}

impl MatchBand {
    /// Band for a raw backend score.
    pub fn for_score(score: f32) -> Self {
        if score >= 80.0 {
            MatchBand::High
        } else if score >= 60.0 {
            MatchBand::Medium
        } else {
            MatchBand::Low
        }
    }
}

/// Render-friendly job row.
#[derive(Clone, Debug)]
pub struct JobRowView {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub posted_date: String,
    pub score_label: String,
    pub band: MatchBand,
    pub applied: bool,
    pub description: String,
    pub requirements: String,
    pub url: String,
}

/// Badge classification for an application's status string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Other(String),
}

impl ApplicationStatus {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "applied" => ApplicationStatus::Applied,
            "interview" => ApplicationStatus::Interview,
            _ => ApplicationStatus::Other(raw.trim().to_string()),
        }
    }

    /// Badge text.
    pub fn label(&self) -> &str {
        match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Other(raw) if raw.is_empty() => "unknown",
            ApplicationStatus::Other(raw) => raw,
        }
    }
}

/// Render-friendly application row.
#[derive(Clone, Debug)]
pub struct ApplicationRowView {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub application_date: String,
    pub status: ApplicationStatus,
    pub cover_letter: String,
}

/// Convert a job listing into a UI row.
pub fn job_row(job: &JobListing) -> JobRowView {
    JobRowView {
        id: job.id.clone(),
        title: or_placeholder(&job.title, "Untitled role"),
        company: or_placeholder(&job.company, "Unknown company"),
        location: job.location.clone(),
        posted_date: job.posted_date.clone(),
        score_label: format!("{:.0}%", job.match_score.clamp(0.0, 100.0)),
        band: MatchBand::for_score(job.match_score),
        applied: job.applied,
        description: job.description.clone(),
        requirements: job.requirements.clone(),
        url: job.url.clone(),
    }
}

/// Build UI rows for the whole job list, preserving backend order.
pub fn job_rows(jobs: &[JobListing]) -> Vec<JobRowView> {
    jobs.iter().map(job_row).collect()
}

/// Convert an application record into a UI row.
pub fn application_row(record: &ApplicationRecord) -> ApplicationRowView {
    ApplicationRowView {
        id: record.id.clone(),
        job_title: or_placeholder(&record.job_title, "Unknown role"),
        company: record.company.clone(),
        application_date: record.application_date.clone(),
        status: ApplicationStatus::parse(&record.status),
        cover_letter: record.cover_letter.clone(),
    }
}

/// Build UI rows for all applications, preserving backend order.
pub fn application_rows(records: &[ApplicationRecord]) -> Vec<ApplicationRowView> {
    records.iter().map(application_row).collect()
}

/// Skill tags for the upload pane, capped at [`MAX_SKILL_TAGS`].
pub fn skill_tags(analysis: &CvAnalysis) -> Vec<String> {
    analysis
        .skills
        .iter()
        .filter(|skill| !skill.trim().is_empty())
        .take(MAX_SKILL_TAGS)
        .map(|skill| skill.trim().to_string())
        .collect()
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
