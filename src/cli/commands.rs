//! Command handlers. Each maps a subcommand onto one or more job-client
//! operations and reports failures as plain user-facing messages.

use std::time::Duration;

use log::info;

use crate::cli::args::{Commands, UploadArgs, WatchArgs};
use crate::client::JobClient;
use crate::error::ClientError;
use crate::history;
use crate::job::JobStatus;

pub async fn run(client: &JobClient, command: Commands) -> Result<(), String> {
    match command {
        Commands::Upload(args) => upload(client, args).await,
        Commands::Status { job_id } => status(client, &job_id).await,
        Commands::Result { job_id } => result(client, &job_id).await,
        Commands::Watch(args) => watch(client, args).await,
        Commands::History => {
            print_history();
            Ok(())
        }
    }
}

/// The library signals "nothing tracked" as `Ok(None)`; at the CLI boundary
/// that is a user-facing error.
fn require_job<T>(value: Option<T>) -> Result<T, String> {
    value.ok_or_else(|| ClientError::NoJob.to_string())
}

async fn upload(client: &JobClient, args: UploadArgs) -> Result<(), String> {
    let id = client.submit(&args.input).await.map_err(|e| e.to_string())?;
    println!("{}", id);
    Ok(())
}

async fn status(client: &JobClient, job_id: &str) -> Result<(), String> {
    client.track(job_id);
    let status = require_job(client.poll().await.map_err(|e| e.to_string())?)?;
    println!("{}", status);
    Ok(())
}

async fn result(client: &JobClient, job_id: &str) -> Result<(), String> {
    client.track(job_id);
    let text = require_job(client.fetch_result().await.map_err(|e| e.to_string())?)?;
    println!("{}", text);
    Ok(())
}

/// Upload, then poll at a fixed interval until the job reaches a terminal
/// status. Prints the transcription on success.
async fn watch(client: &JobClient, args: WatchArgs) -> Result<(), String> {
    let id = client
        .submit(&args.input)
        .await
        .map_err(|e| e.to_string())?;
    info!("[watch] job {} submitted", id);
    eprintln!("job {} submitted, waiting...", id);

    loop {
        tokio::time::sleep(Duration::from_secs(args.interval_secs)).await;
        let status = require_job(client.poll().await.map_err(|e| e.to_string())?)?;
        eprintln!("status: {}", status);
        match status {
            JobStatus::Done => break,
            JobStatus::Failed => return Err(format!("job {} failed", id)),
            _ => {}
        }
    }

    let text = require_job(client.fetch_result().await.map_err(|e| e.to_string())?)?;
    println!("{}", text);
    Ok(())
}

fn print_history() {
    for entry in history::seed() {
        println!(
            "{}  {}  ({})  {}\n    {}",
            entry.id, entry.date, entry.duration, entry.title, entry.url
        );
    }
}
