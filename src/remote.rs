//! HTTP surface of the remote transcription service.
//!
//! Three endpoints, consumed one request at a time:
//! `POST {base}/upload` (multipart, field `file`), `GET {base}/status/{id}`,
//! `GET {base}/result/{id}`. The server side is an external collaborator;
//! nothing here retries or interprets beyond pulling one JSON field out of
//! each response.

use std::path::Path;

use crate::error::{ClientError, Result};

/// Upload a media file. Returns the job identifier from the `id` field.
pub async fn upload_media(
    client: &reqwest::Client,
    base_url: &str,
    media_path: &Path,
) -> Result<String> {
    let bytes = std::fs::read(media_path)?;
    let file_name = media_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("media.bin")
        .to_string();

    let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
    let form = reqwest::multipart::Form::new().part("file", part);

    let url = format!("{}/upload", base_url);
    let response = client.post(&url).multipart(form).send().await?;
    let json = read_json(response).await?;

    json.get("id")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| ClientError::MalformedResponse("expected { id: ... } in upload response".into()))
}

/// Look up job status. Returns the `status` field verbatim.
pub async fn fetch_status(
    client: &reqwest::Client,
    base_url: &str,
    job_id: &str,
) -> Result<String> {
    let url = format!("{}/status/{}", base_url, job_id);
    let response = client.get(&url).send().await?;
    let json = read_json(response).await?;

    json.get("status")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| ClientError::MalformedResponse("expected { status: ... } in status response".into()))
}

/// Fetch the finished transcription. Returns the `text` field.
pub async fn fetch_result(
    client: &reqwest::Client,
    base_url: &str,
    job_id: &str,
) -> Result<String> {
    let url = format!("{}/result/{}", base_url, job_id);
    let response = client.get(&url).send().await?;
    let json = read_json(response).await?;

    json.get("text")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| ClientError::MalformedResponse("expected { text: ... } in result response".into()))
}

/// Guard against non-2xx, then parse the body as JSON.
async fn read_json(response: reqwest::Response) -> Result<serde_json::Value> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Api { status, body });
    }
    response
        .json()
        .await
        .map_err(|e| ClientError::MalformedResponse(e.to_string()))
}
