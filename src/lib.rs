//! Client for the EduTranscribe remote transcription service.
//!
//! The service exposes a three-step job lifecycle: upload a media file,
//! poll the job's status, fetch the finished transcription. [`JobClient`]
//! drives that lifecycle; [`Session`] holds the simulated URL-input flow
//! and its seeded [`history`].

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod job;
pub mod logging;
pub mod paths;
pub mod remote;
pub mod session;

pub use client::JobClient;
pub use config::Config;
pub use error::{ClientError, Result};
pub use history::HistoryEntry;
pub use job::{Job, JobStatus};
pub use session::Session;
