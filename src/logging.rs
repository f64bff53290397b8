//! Logger setup: stderr plus a log file under the app data dir. Stderr, not
//! stdout — the CLI prints job ids and transcription text on stdout.

use crate::paths;

pub fn init_logger() -> Result<std::path::PathBuf, fern::InitError> {
    let log_file = paths::log_file_path();

    let format = |out: fern::FormatCallback<'_>,
                  message: &std::fmt::Arguments<'_>,
                  record: &log::Record| {
        out.finish(format_args!(
            "[{}][{}][{}][{:?}] {}",
            chrono::Local::now().format("%Y-%m-%d"),
            chrono::Local::now().format("%H:%M:%S"),
            record.target(),
            record.level(),
            message
        ))
    };

    fern::Dispatch::new()
        .format(format)
        .level(log::LevelFilter::Debug)
        .level_for("reqwest", log::LevelFilter::Info)
        .level_for("hyper", log::LevelFilter::Info)
        .chain(std::io::stderr())
        .chain(fern::log_file(&log_file)?)
        .apply()?;

    Ok(log_file)
}
