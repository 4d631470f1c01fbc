//! Wire types shared with the backend.
//!
//! The backend owns these shapes; no field is trusted to be present.
//! Everything parses with defaults so a lean or evolving response
//! degrades to empty values instead of a hard failure.

use serde::{Deserialize, Serialize};

/// Structured summary the backend derives from an uploaded CV.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CvAnalysis {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<String>,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

/// Successful upload response: the analysis plus backend bookkeeping.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CvUpload {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub cv_id: String,
    #[serde(default)]
    pub analysis: CvAnalysis,
}

/// One job listing with its backend-computed match score (0-100).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct JobListing {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub posted_date: String,
    #[serde(default)]
    pub match_score: f32,
    #[serde(default)]
    pub applied: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub url: String,
}

/// A submitted application as reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ApplicationRecord {
    pub id: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub application_date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cover_letter: String,
}

/// Experience level filter understood by the search endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    EntryLevel,
    #[default]
    MidLevel,
    SeniorLevel,
}

impl ExperienceLevel {
    /// All selectable levels in display order.
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::EntryLevel,
        ExperienceLevel::MidLevel,
        ExperienceLevel::SeniorLevel,
    ];

    /// Human-readable label for combo boxes.
    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "Entry level",
            ExperienceLevel::MidLevel => "Mid level",
            ExperienceLevel::SeniorLevel => "Senior level",
        }
    }
}

/// Search parameters posted as-is to the backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JobSearchRequest {
    pub keywords: String,
    pub location: String,
    pub experience_level: ExperienceLevel,
    pub max_results: u32,
}

impl JobSearchRequest {
    /// Result count options offered by the UI.
    pub const MAX_RESULTS_CHOICES: [u32; 3] = [10, 20, 50];
}

impl Default for JobSearchRequest {
    fn default() -> Self {
        Self {
            keywords: String::new(),
            location: "Remote".to_string(),
            experience_level: ExperienceLevel::default(),
            max_results: 20,
        }
    }
}

/// Successful apply response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApplyOutcome {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub application_id: String,
    #[serde(default)]
    pub cover_letter: String,
}

/// Fixed thresholds sent with every auto-apply request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoApplyLimits {
    /// Listings scoring below this are skipped.
    pub min_match_score: u32,
    /// Upper bound on applications submitted in one run.
    pub max_applications: u32,
}

impl Default for AutoApplyLimits {
    fn default() -> Self {
        Self {
            min_match_score: 70,
            max_applications: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_listing_tolerates_missing_fields() {
        let job: JobListing = serde_json::from_str(r#"{ "id": "j1" }"#).unwrap();
        assert_eq!(job.id, "j1");
        assert_eq!(job.match_score, 0.0);
        assert!(!job.applied);
        assert!(job.title.is_empty());
    }

    #[test]
    fn search_request_serializes_kebab_case_level() {
        let request = JobSearchRequest {
            keywords: "rust".into(),
            ..JobSearchRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["keywords"], "rust");
        assert_eq!(json["location"], "Remote");
        assert_eq!(json["experience_level"], "mid-level");
        assert_eq!(json["max_results"], 20);
    }

    #[test]
    fn auto_apply_limits_default_to_fixed_thresholds() {
        let limits = AutoApplyLimits::default();
        assert_eq!(limits.min_match_score, 70);
        assert_eq!(limits.max_applications, 5);
    }

    #[test]
    fn cv_upload_parses_nested_analysis() {
        let body = r#"{
            "message": "CV uploaded and analyzed successfully",
            "cv_id": "abc",
            "analysis": { "skills": ["Python", "Go"], "summary": "dev" }
        }"#;
        let upload: CvUpload = serde_json::from_str(body).unwrap();
        assert_eq!(upload.analysis.skills, vec!["Python", "Go"]);
        assert!(upload.analysis.education.is_empty());
    }
}
