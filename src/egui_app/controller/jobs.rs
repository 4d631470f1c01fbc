//! Background worker dispatch for backend calls.
//!
//! Every action owns its own in-progress flag so an in-flight request only
//! disables its own control. Workers report back over one mpsc channel
//! that the controller drains once per frame.

use std::sync::{
    Arc,
    mpsc::{Receiver, Sender, TryRecvError, channel},
};
use std::thread;

use crate::backend::{
    ApiError, ApplicationRecord, ApplyOutcome, AutoApplyLimits, CvUpload, JobBoard, JobListing,
    JobSearchRequest,
};

pub(crate) enum JobMessage {
    CvUploaded {
        file_name: String,
        result: Result<CvUpload, ApiError>,
    },
    SearchFinished(Result<Vec<JobListing>, ApiError>),
    Applied {
        job_id: String,
        result: Result<ApplyOutcome, ApiError>,
    },
    AutoApplied(Result<String, ApiError>),
    JobsFetched(Result<Vec<JobListing>, ApiError>),
    ApplicationsFetched(Result<Vec<ApplicationRecord>, ApiError>),
}

pub(crate) struct ControllerJobs {
    backend: Arc<dyn JobBoard>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    upload_in_progress: bool,
    search_in_progress: bool,
    pending_apply: Option<String>,
    auto_apply_in_progress: bool,
    jobs_fetch_in_progress: bool,
    applications_fetch_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new(backend: Arc<dyn JobBoard>) -> Self {
        let (message_tx, message_rx) = channel();
        Self {
            backend,
            message_tx,
            message_rx,
            upload_in_progress: false,
            search_in_progress: false,
            pending_apply: None,
            auto_apply_in_progress: false,
            jobs_fetch_in_progress: false,
            applications_fetch_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn begin_upload(&mut self, file_name: String, bytes: Vec<u8>) {
        if self.upload_in_progress {
            return;
        }
        self.upload_in_progress = true;
        let backend = self.backend.clone();
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.upload_cv(&file_name, &bytes);
            let _ = tx.send(JobMessage::CvUploaded { file_name, result });
        });
    }

    pub(super) fn clear_upload(&mut self) {
        self.upload_in_progress = false;
    }

    pub(super) fn upload_in_progress(&self) -> bool {
        self.upload_in_progress
    }

    pub(super) fn begin_search(&mut self, request: JobSearchRequest) {
        if self.search_in_progress {
            return;
        }
        self.search_in_progress = true;
        let backend = self.backend.clone();
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.search_jobs(&request);
            let _ = tx.send(JobMessage::SearchFinished(result));
        });
    }

    pub(super) fn clear_search(&mut self) {
        self.search_in_progress = false;
    }

    pub(super) fn search_in_progress(&self) -> bool {
        self.search_in_progress
    }

    pub(super) fn begin_apply(&mut self, job_id: String) {
        if self.pending_apply.is_some() {
            return;
        }
        self.pending_apply = Some(job_id.clone());
        let backend = self.backend.clone();
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.apply_to_job(&job_id);
            let _ = tx.send(JobMessage::Applied { job_id, result });
        });
    }

    pub(super) fn clear_apply(&mut self) {
        self.pending_apply = None;
    }

    pub(super) fn apply_in_progress(&self) -> bool {
        self.pending_apply.is_some()
    }

    pub(super) fn pending_apply_job(&self) -> Option<&str> {
        self.pending_apply.as_deref()
    }

    pub(super) fn begin_auto_apply(&mut self, limits: AutoApplyLimits) {
        if self.auto_apply_in_progress {
            return;
        }
        self.auto_apply_in_progress = true;
        let backend = self.backend.clone();
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.auto_apply(limits);
            let _ = tx.send(JobMessage::AutoApplied(result));
        });
    }

    pub(super) fn clear_auto_apply(&mut self) {
        self.auto_apply_in_progress = false;
    }

    pub(super) fn auto_apply_in_progress(&self) -> bool {
        self.auto_apply_in_progress
    }

    pub(super) fn begin_fetch_jobs(&mut self) {
        if self.jobs_fetch_in_progress {
            return;
        }
        self.jobs_fetch_in_progress = true;
        let backend = self.backend.clone();
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.fetch_jobs();
            let _ = tx.send(JobMessage::JobsFetched(result));
        });
    }

    pub(super) fn clear_fetch_jobs(&mut self) {
        self.jobs_fetch_in_progress = false;
    }

    pub(super) fn jobs_fetch_in_progress(&self) -> bool {
        self.jobs_fetch_in_progress
    }

    pub(super) fn begin_fetch_applications(&mut self) {
        if self.applications_fetch_in_progress {
            return;
        }
        self.applications_fetch_in_progress = true;
        let backend = self.backend.clone();
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = backend.fetch_applications();
            let _ = tx.send(JobMessage::ApplicationsFetched(result));
        });
    }

    pub(super) fn clear_fetch_applications(&mut self) {
        self.applications_fetch_in_progress = false;
    }

    pub(super) fn applications_fetch_in_progress(&self) -> bool {
        self.applications_fetch_in_progress
    }
}
