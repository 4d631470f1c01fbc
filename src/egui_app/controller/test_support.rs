use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use super::EguiController;
use crate::backend::{
    ApiError, ApplicationRecord, ApplyOutcome, AutoApplyLimits, CvAnalysis, CvUpload, JobBoard,
    JobListing, JobSearchRequest,
};

/// One recorded backend invocation.
#[derive(Clone, Debug, PartialEq)]
pub(super) enum BoardCall {
    UploadCv(String),
    SearchJobs(JobSearchRequest),
    ApplyToJob(String),
    AutoApply(AutoApplyLimits),
    FetchJobs,
    FetchApplications,
}

/// Recording stub standing in for the HTTP backend.
#[derive(Default)]
pub(super) struct StubBoard {
    pub calls: Mutex<Vec<BoardCall>>,
    pub analysis: CvAnalysis,
    pub search_results: Vec<JobListing>,
    pub jobs: Vec<JobListing>,
    pub applications: Vec<ApplicationRecord>,
    pub auto_apply_message: String,
    /// Error `detail` returned from every call when set.
    pub fail_with_detail: Option<String>,
    /// Per-call delay, for exercising in-progress guards.
    pub delay: Option<Duration>,
}

impl StubBoard {
    fn record(&self, call: BoardCall) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }
        match &self.fail_with_detail {
            Some(detail) => Err(ApiError::Backend {
                status: 500,
                detail: detail.clone(),
            }),
            None => Ok(()),
        }
    }

    pub(super) fn count(&self, matcher: impl Fn(&BoardCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|call| matcher(call)).count()
    }

    pub(super) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl JobBoard for StubBoard {
    fn upload_cv(&self, file_name: &str, _bytes: &[u8]) -> Result<CvUpload, ApiError> {
        self.record(BoardCall::UploadCv(file_name.to_string()))?;
        Ok(CvUpload {
            message: String::new(),
            cv_id: "cv-1".into(),
            analysis: self.analysis.clone(),
        })
    }

    fn search_jobs(&self, request: &JobSearchRequest) -> Result<Vec<JobListing>, ApiError> {
        self.record(BoardCall::SearchJobs(request.clone()))?;
        Ok(self.search_results.clone())
    }

    fn apply_to_job(&self, job_id: &str) -> Result<ApplyOutcome, ApiError> {
        self.record(BoardCall::ApplyToJob(job_id.to_string()))?;
        Ok(ApplyOutcome::default())
    }

    fn auto_apply(&self, limits: AutoApplyLimits) -> Result<String, ApiError> {
        self.record(BoardCall::AutoApply(limits))?;
        Ok(self.auto_apply_message.clone())
    }

    fn fetch_jobs(&self) -> Result<Vec<JobListing>, ApiError> {
        self.record(BoardCall::FetchJobs)?;
        Ok(self.jobs.clone())
    }

    fn fetch_applications(&self) -> Result<Vec<ApplicationRecord>, ApiError> {
        self.record(BoardCall::FetchApplications)?;
        Ok(self.applications.clone())
    }
}

pub(super) fn controller_with(stub: StubBoard) -> (EguiController, Arc<StubBoard>) {
    let stub = Arc::new(stub);
    let controller = EguiController::new(stub.clone());
    (controller, stub)
}

pub(super) fn analyzed_cv() -> CvAnalysis {
    CvAnalysis {
        skills: vec!["Python".into(), "Go".into()],
        experience: vec!["Backend Developer 2020-2023".into()],
        education: vec!["B.S. Computer Science 2019".into()],
        summary: "Backend developer".into(),
    }
}

pub(super) fn job(id: &str, score: f32) -> JobListing {
    JobListing {
        id: id.to_string(),
        title: format!("Role {id}"),
        company: "Tech Innovators Inc".into(),
        match_score: score,
        ..JobListing::default()
    }
}

/// Poll the controller until `done` holds or a deadline passes.
pub(super) fn wait_until(
    controller: &mut EguiController,
    mut done: impl FnMut(&EguiController) -> bool,
) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.poll_background_jobs();
        if done(controller) {
            return;
        }
        assert!(
            Instant::now() < deadline,
            "timed out waiting for background jobs"
        );
        thread::sleep(Duration::from_millis(5));
    }
}
