//! The job client: submit → poll → fetch result against the remote service.
//!
//! Tracks at most one job at a time. Each operation is user-triggered and
//! issues at most one request; a second call to the same operation while one
//! is in flight is rejected instead of racing it, so whatever state the slot
//! holds always came from the most recently completed request.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use log::{debug, warn};

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::job::{Job, JobStatus};
use crate::remote;

/// Single-flight gate for one operation. `enter` fails while a previous
/// guard is still alive.
struct OpGate {
    name: &'static str,
    busy: AtomicBool,
}

impl OpGate {
    const fn new(name: &'static str) -> Self {
        Self {
            name,
            busy: AtomicBool::new(false),
        }
    }

    fn enter(&self) -> Result<OpGuard<'_>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ClientError::Busy(self.name));
        }
        Ok(OpGuard { gate: self })
    }
}

struct OpGuard<'a> {
    gate: &'a OpGate,
}

impl Drop for OpGuard<'_> {
    fn drop(&mut self) {
        self.gate.busy.store(false, Ordering::Release);
    }
}

pub struct JobClient {
    http: reqwest::Client,
    config: Config,
    job: Mutex<Job>,
    upload_gate: OpGate,
    status_gate: OpGate,
    result_gate: OpGate,
}

impl JobClient {
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            http,
            config,
            job: Mutex::new(Job::default()),
            upload_gate: OpGate::new("upload"),
            status_gate: OpGate::new("status"),
            result_gate: OpGate::new("result"),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the currently tracked job.
    pub fn job(&self) -> Job {
        self.job.lock().unwrap().clone()
    }

    /// Forget the tracked job without contacting the service.
    pub fn reset(&self) {
        *self.job.lock().unwrap() = Job::default();
    }

    /// Resume tracking a job id obtained earlier (e.g. from a previous
    /// invocation). Discards whatever was tracked before.
    pub fn track(&self, id: impl Into<String>) {
        *self.job.lock().unwrap() = Job::submitted(id.into());
    }

    /// Upload a media file and start tracking the returned job id. Any
    /// previously tracked job is discarded. Fails before issuing a request
    /// when no usable file path is given; on a failed request the previous
    /// job is left untouched.
    pub async fn submit(&self, media_path: &Path) -> Result<String> {
        if media_path.as_os_str().is_empty() || !media_path.is_file() {
            return Err(ClientError::MissingInput);
        }
        let _guard = self.upload_gate.enter()?;

        debug!("[upload] submitting {}", media_path.display());
        match remote::upload_media(&self.http, &self.config.base_url, media_path).await {
            Ok(id) => {
                debug!("[upload] accepted, job id={}", id);
                *self.job.lock().unwrap() = Job::submitted(id.clone());
                Ok(id)
            }
            Err(e) => {
                warn!("[upload] failed: {}", e);
                Err(e)
            }
        }
    }

    /// Look up the status of the tracked job. A no-op returning `Ok(None)`
    /// when no job has been submitted; no request is issued in that case.
    pub async fn poll(&self) -> Result<Option<JobStatus>> {
        let Some(id) = self.job.lock().unwrap().id.clone() else {
            debug!("[status] no job tracked, skipping");
            return Ok(None);
        };
        let _guard = self.status_gate.enter()?;

        match remote::fetch_status(&self.http, &self.config.base_url, &id).await {
            Ok(raw) => {
                let status = JobStatus::parse(&raw);
                debug!("[status] job {}: {:?} (raw: {:?})", id, status, raw);
                let mut job = self.job.lock().unwrap();
                // A submit may have replaced the job while we were waiting.
                if job.id.as_deref() == Some(id.as_str()) {
                    job.status = Some(status.clone());
                }
                Ok(Some(status))
            }
            Err(e) => {
                warn!("[status] job {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Fetch the transcription text for the tracked job. Same no-op and
    /// failure contract as [`poll`](Self::poll). Deliberately does not
    /// require a terminal status first; the service decides whether a
    /// result exists yet.
    pub async fn fetch_result(&self) -> Result<Option<String>> {
        let Some(id) = self.job.lock().unwrap().id.clone() else {
            debug!("[result] no job tracked, skipping");
            return Ok(None);
        };
        let _guard = self.result_gate.enter()?;

        match remote::fetch_result(&self.http, &self.config.base_url, &id).await {
            Ok(text) => {
                debug!("[result] job {}: {} chars", id, text.len());
                let mut job = self.job.lock().unwrap();
                if job.id.as_deref() == Some(id.as_str()) {
                    job.result = Some(text.clone());
                }
                Ok(Some(text))
            }
            Err(e) => {
                warn!("[result] job {}: {}", id, e);
                Err(e)
            }
        }
    }
}
