//! Job lifecycle types.
//!
//! The transcription service reports job status as free-form text. Rather
//! than surfacing that verbatim, statuses are parsed into a closed set;
//! anything the service invents that we do not recognize lands in
//! [`JobStatus::Unknown`] with the raw text preserved.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a remote transcription job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Queued,
    Processing,
    Done,
    Failed,
    /// Status string the service returned that we do not recognize.
    Unknown(String),
}

impl JobStatus {
    /// Parse the verbatim status string from the service.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "queued" | "pending" => JobStatus::Queued,
            "processing" | "in_progress" | "running" => JobStatus::Processing,
            "done" | "completed" | "finished" => JobStatus::Done,
            "failed" | "error" => JobStatus::Failed,
            _ => JobStatus::Unknown(raw.to_string()),
        }
    }

    /// Whether the job can make no further progress.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Failed)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Queued => write!(f, "queued"),
            JobStatus::Processing => write!(f, "processing"),
            JobStatus::Done => write!(f, "done"),
            JobStatus::Failed => write!(f, "failed"),
            JobStatus::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

/// The single job tracked by the client. Replaced wholesale when a new
/// upload succeeds; the previous job is simply forgotten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Job {
    pub id: Option<String>,
    pub status: Option<JobStatus>,
    pub result: Option<String>,
}

impl Job {
    pub fn submitted(id: String) -> Self {
        Self {
            id: Some(id),
            status: None,
            result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses_case_insensitively() {
        assert_eq!(JobStatus::parse("queued"), JobStatus::Queued);
        assert_eq!(JobStatus::parse("Processing"), JobStatus::Processing);
        assert_eq!(JobStatus::parse("DONE"), JobStatus::Done);
        assert_eq!(JobStatus::parse(" failed "), JobStatus::Failed);
    }

    #[test]
    fn parses_service_synonyms() {
        assert_eq!(JobStatus::parse("pending"), JobStatus::Queued);
        assert_eq!(JobStatus::parse("in_progress"), JobStatus::Processing);
        assert_eq!(JobStatus::parse("completed"), JobStatus::Done);
        assert_eq!(JobStatus::parse("error"), JobStatus::Failed);
    }

    #[test]
    fn unrecognized_status_becomes_unknown_with_raw_text() {
        let status = JobStatus::parse("transmogrifying");
        assert_eq!(status, JobStatus::Unknown("transmogrifying".to_string()));
        assert_eq!(status.to_string(), "transmogrifying");
        assert!(!status.is_terminal());
    }

    #[test]
    fn terminal_states() {
        assert!(JobStatus::Done.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
    }

    #[test]
    fn submitted_job_has_no_status_or_result() {
        let job = Job::submitted("42".to_string());
        assert_eq!(job.id.as_deref(), Some("42"));
        assert!(job.status.is_none());
        assert!(job.result.is_none());
    }
}
