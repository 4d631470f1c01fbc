//! Typed client for the job-platform backend HTTP API.

mod api;
mod config;
mod models;
mod multipart;

pub use api::{ApiError, BackendClient, JobBoard};
pub use config::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL, backend_url_from_env};
pub use models::{
    ApplicationRecord, ApplyOutcome, AutoApplyLimits, CvAnalysis, CvUpload, ExperienceLevel,
    JobListing, JobSearchRequest,
};
