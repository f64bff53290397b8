//! Path utilities for app data, settings, and logs directories.

use std::path::PathBuf;

/// Get the app data directory (e.g. %APPDATA%/edu-transcribe on Windows).
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("edu-transcribe"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the path to the settings file.
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("edu-transcribe"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("settings.json")
}

/// Get the log directory, creating it if necessary.
pub fn log_dir() -> PathBuf {
    let dir = app_data_dir().join("logs");
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Get the log file path (e.g. %APPDATA%/edu-transcribe/logs/edu-transcribe.log on Windows).
pub fn log_file_path() -> PathBuf {
    log_dir().join("edu-transcribe.log")
}
