use clap::Parser;
use edu_transcribe::cli::{commands, Cli};
use edu_transcribe::{Config, JobClient};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let _log_path = edu_transcribe::logging::init_logger().ok();

    let mut config = Config::load_default();
    if let Some(url) = cli.base_url {
        config.base_url = url.trim().trim_end_matches('/').to_string();
    }
    let client = JobClient::new(config);

    if let Err(e) = commands::run(&client, cli.command).await {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
