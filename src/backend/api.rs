//! HTTP client for the six backend endpoints.

use serde::Deserialize;

use super::config;
use super::models::{
    ApplicationRecord, ApplyOutcome, AutoApplyLimits, CvUpload, JobListing, JobSearchRequest,
};
use super::multipart;
use crate::http_client;

const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// Errors surfaced by backend calls.
///
/// `Backend` carries the `detail` string from the error body so alerts can
/// show it verbatim; the other variants render their own message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response; `detail` comes from the JSON error body when
    /// present, otherwise the raw body or the status line.
    #[error("{detail}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Backend-provided error description.
        detail: String,
    },
    /// Connection, TLS, or IO failure before a response arrived.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    Json(String),
}

/// The backend operations the UI depends on.
///
/// `BackendClient` is the production implementation; controller tests use
/// recording stubs.
pub trait JobBoard: Send + Sync + 'static {
    /// Upload a CV as a PDF and return the backend's analysis.
    fn upload_cv(&self, file_name: &str, bytes: &[u8]) -> Result<CvUpload, ApiError>;
    /// Run a job search; the result replaces any previous job list.
    fn search_jobs(&self, request: &JobSearchRequest) -> Result<Vec<JobListing>, ApiError>;
    /// Apply to a single job by id.
    fn apply_to_job(&self, job_id: &str) -> Result<ApplyOutcome, ApiError>;
    /// Bulk-apply to matching jobs; returns the backend summary message.
    fn auto_apply(&self, limits: AutoApplyLimits) -> Result<String, ApiError>;
    /// Fetch the current job list.
    fn fetch_jobs(&self) -> Result<Vec<JobListing>, ApiError>;
    /// Fetch all submitted applications.
    fn fetch_applications(&self) -> Result<Vec<ApplicationRecord>, ApiError>;
}

/// Client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct BackendClient {
    base_url: String,
}

impl BackendClient {
    /// Client for an explicit base URL (tests, custom hosts).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Client configured from `JOBPILOT_BACKEND_URL`.
    pub fn from_env() -> Self {
        Self::new(config::backend_url_from_env())
    }

    /// The resolved base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl JobBoard for BackendClient {
    fn upload_cv(&self, file_name: &str, bytes: &[u8]) -> Result<CvUpload, ApiError> {
        let part = multipart::pdf_file_body(file_name, bytes);
        let request = http_client::agent()
            .post(&self.url("/api/upload-cv"))
            .set("Accept", "application/json")
            .set("Content-Type", &part.content_type);
        let response = unwrap_response(request.send_bytes(&part.bytes))?;
        parse_json(response)
    }

    fn search_jobs(&self, request: &JobSearchRequest) -> Result<Vec<JobListing>, ApiError> {
        let req = http_client::agent()
            .post(&self.url("/api/search-jobs"))
            .set("Accept", "application/json");
        let response = unwrap_response(req.send_json(request))?;
        let wire: JobsWire = parse_json(response)?;
        Ok(wire.jobs)
    }

    fn apply_to_job(&self, job_id: &str) -> Result<ApplyOutcome, ApiError> {
        let request = http_client::agent()
            .post(&self.url(&format!("/api/apply-job/{job_id}")))
            .set("Accept", "application/json");
        let response = unwrap_response(request.call())?;
        parse_json(response)
    }

    fn auto_apply(&self, limits: AutoApplyLimits) -> Result<String, ApiError> {
        let request = http_client::agent()
            .post(&self.url("/api/auto-apply"))
            .query("min_match_score", &limits.min_match_score.to_string())
            .query("max_applications", &limits.max_applications.to_string())
            .set("Accept", "application/json");
        let response = unwrap_response(request.call())?;
        let wire: MessageWire = parse_json(response)?;
        Ok(wire.message)
    }

    fn fetch_jobs(&self) -> Result<Vec<JobListing>, ApiError> {
        let request = http_client::agent()
            .get(&self.url("/api/jobs"))
            .set("Accept", "application/json");
        let response = unwrap_response(request.call())?;
        let wire: JobsWire = parse_json(response)?;
        Ok(wire.jobs)
    }

    fn fetch_applications(&self) -> Result<Vec<ApplicationRecord>, ApiError> {
        let request = http_client::agent()
            .get(&self.url("/api/applications"))
            .set("Accept", "application/json");
        let response = unwrap_response(request.call())?;
        let wire: ApplicationsWire = parse_json(response)?;
        Ok(wire.applications)
    }
}

#[derive(Debug, Default, Deserialize)]
struct JobsWire {
    #[serde(default)]
    jobs: Vec<JobListing>,
}

#[derive(Debug, Default, Deserialize)]
struct ApplicationsWire {
    #[serde(default)]
    applications: Vec<ApplicationRecord>,
}

#[derive(Debug, Default, Deserialize)]
struct MessageWire {
    #[serde(default)]
    message: String,
}

fn unwrap_response(result: Result<ureq::Response, ureq::Error>) -> Result<ureq::Response, ApiError> {
    match result {
        Ok(response) => Ok(response),
        Err(ureq::Error::Status(status, response)) => Err(ApiError::Backend {
            status,
            detail: extract_detail(status, response),
        }),
        Err(ureq::Error::Transport(err)) => Err(ApiError::Transport(err.to_string())),
    }
}

/// Pull the `detail` string out of a FastAPI-style error body.
fn extract_detail(status: u16, response: ureq::Response) -> String {
    let body = read_body(response).unwrap_or_default();
    detail_from_body(status, &body)
}

fn detail_from_body(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(detail) = value.get("detail").and_then(|detail| detail.as_str()) {
            return detail.to_string();
        }
    }
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_string()
    }
}

fn parse_json<T: for<'de> Deserialize<'de>>(response: ureq::Response) -> Result<T, ApiError> {
    let body = read_body(response)?;
    serde_json::from_str(&body).map_err(|err| ApiError::Json(err.to_string()))
}

fn read_body(response: ureq::Response) -> Result<String, ApiError> {
    let bytes = http_client::read_response_bytes(response, MAX_RESPONSE_BYTES)
        .map_err(|err| ApiError::Json(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ApiError::Json(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::test_server::{json_response, serve_once};

    fn received(rx: std::sync::mpsc::Receiver<Vec<u8>>) -> String {
        String::from_utf8_lossy(&rx.recv().unwrap()).to_string()
    }

    #[test]
    fn search_posts_parameters_and_parses_jobs() {
        let body = r#"{ "jobs": [ { "id": "j1", "title": "Backend Developer", "match_score": 82.5 } ] }"#;
        let (url, rx) = serve_once(json_response(200, "OK", body));
        let client = BackendClient::new(url);
        let request = JobSearchRequest {
            keywords: "rust".into(),
            ..JobSearchRequest::default()
        };
        let jobs = client.search_jobs(&request).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Backend Developer");
        let raw = received(rx);
        assert!(raw.starts_with("POST /api/search-jobs HTTP/1.1"));
        assert!(raw.contains(r#""keywords":"rust""#));
        assert!(raw.contains(r#""experience_level":"mid-level""#));
    }

    #[test]
    fn missing_jobs_array_is_an_empty_list() {
        let (url, _rx) = serve_once(json_response(200, "OK", r#"{ "message": "ok" }"#));
        let client = BackendClient::new(url);
        let jobs = client.fetch_jobs().unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn backend_detail_is_surfaced_verbatim() {
        let body = r#"{ "detail": "Please upload your CV first" }"#;
        let (url, _rx) = serve_once(json_response(400, "Bad Request", body));
        let client = BackendClient::new(url);
        let err = client
            .search_jobs(&JobSearchRequest::default())
            .unwrap_err();
        match err {
            ApiError::Backend { status, ref detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Please upload your CV first");
            }
            other => panic!("expected backend error, got {other:?}"),
        }
        assert_eq!(err.to_string(), "Please upload your CV first");
    }

    #[test]
    fn error_body_without_detail_falls_back_to_raw_text() {
        assert_eq!(detail_from_body(502, "bad gateway"), "bad gateway");
        assert_eq!(detail_from_body(502, ""), "HTTP 502");
        assert_eq!(
            detail_from_body(500, r#"{ "detail": "boom" }"#),
            "boom"
        );
    }

    #[test]
    fn auto_apply_sends_fixed_thresholds_as_query() {
        let body = r#"{ "message": "Auto-applied to 3 jobs" }"#;
        let (url, rx) = serve_once(json_response(200, "OK", body));
        let client = BackendClient::new(url);
        let message = client.auto_apply(AutoApplyLimits::default()).unwrap();
        assert_eq!(message, "Auto-applied to 3 jobs");
        let raw = received(rx);
        let request_line = raw.lines().next().unwrap();
        assert!(request_line.starts_with("POST /api/auto-apply?"));
        assert!(request_line.contains("min_match_score=70"));
        assert!(request_line.contains("max_applications=5"));
    }

    #[test]
    fn apply_targets_the_job_id_path() {
        let body = r#"{ "message": "Application submitted successfully", "application_id": "a1" }"#;
        let (url, rx) = serve_once(json_response(200, "OK", body));
        let client = BackendClient::new(url);
        let outcome = client.apply_to_job("job-42").unwrap();
        assert_eq!(outcome.application_id, "a1");
        let raw = received(rx);
        assert!(raw.starts_with("POST /api/apply-job/job-42 HTTP/1.1"));
    }

    #[test]
    fn upload_sends_multipart_pdf() {
        let body = r#"{ "cv_id": "cv1", "analysis": { "skills": ["Python"] } }"#;
        let (url, rx) = serve_once(json_response(200, "OK", body));
        let client = BackendClient::new(url);
        let upload = client.upload_cv("resume.pdf", b"%PDF-1.4").unwrap();
        assert_eq!(upload.cv_id, "cv1");
        assert_eq!(upload.analysis.skills, vec!["Python"]);
        let raw = received(rx);
        assert!(raw.starts_with("POST /api/upload-cv HTTP/1.1"));
        assert!(raw.contains("multipart/form-data; boundary=jobpilot-"));
        assert!(raw.contains("name=\"file\"; filename=\"resume.pdf\""));
        assert!(raw.contains("%PDF-1.4"));
    }

    #[test]
    fn applications_fetch_parses_records() {
        let body = r#"{ "applications": [ {
            "id": "a1",
            "job_title": "DevOps Engineer",
            "company": "Spotify",
            "application_date": "2026-08-01T12:00:00",
            "status": "applied",
            "cover_letter": "Dear Hiring Manager"
        } ] }"#;
        let (url, _rx) = serve_once(json_response(200, "OK", body));
        let client = BackendClient::new(url);
        let applications = client.fetch_applications().unwrap();
        assert_eq!(applications.len(), 1);
        assert_eq!(applications[0].status, "applied");
    }
}
