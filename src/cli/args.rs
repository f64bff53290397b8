//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// EduTranscribe - upload media and track remote transcription jobs
#[derive(Parser)]
#[command(name = "edu-transcribe")]
#[command(about = "Upload media to the EduTranscribe service and track transcription jobs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Service base URL (overrides settings.json and EDU_TRANSCRIBE_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upload a media file and print the assigned job id
    Upload(UploadArgs),
    /// Check the status of a job
    Status {
        /// Job id returned by upload
        job_id: String,
    },
    /// Fetch the transcription text for a job
    Result {
        /// Job id returned by upload
        job_id: String,
    },
    /// Upload, poll until the job finishes, then print the transcription
    Watch(WatchArgs),
    /// List the seeded transcription history
    History,
}

#[derive(Parser)]
pub struct UploadArgs {
    /// Path to the audio or video file to upload
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct WatchArgs {
    /// Path to the audio or video file to upload
    pub input: PathBuf,

    /// Seconds between status checks
    #[arg(long, default_value_t = 2)]
    pub interval_secs: u64,
}
