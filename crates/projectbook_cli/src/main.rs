//! CLI smoke entry point.
//!
//! # Responsibility
//! - Load config, start logging and load the project book.
//! - Print a deterministic summary for quick local sanity checks.
//!
//! Usage: `projectbook [CONFIG_PATH]` (defaults to `config.json`).

use log::info;
use projectbook_core::{core_version, init_logging, Config, JsonBookStorage, Model};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const DEFAULT_CONFIG_PATH: &str = "config.json";

fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    match run(&config_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("projectbook: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: &Path) -> Result<(), String> {
    let config = Config::load(config_path).map_err(|err| err.to_string())?;

    if let Some(log_dir) = &config.log_dir {
        let log_dir = absolutize(log_dir)?;
        init_logging(&config.log_level, &log_dir)?;
    }

    let storage = JsonBookStorage::new(&config.data_file);
    let model = storage
        .read_book()
        .map_err(|err| err.to_string())?
        .unwrap_or_else(Model::new);
    info!(
        "event=cli_summary module=cli status=ok projects={} clients={} issues={}",
        model.projects().len(),
        model.clients().len(),
        model.issues().len()
    );

    println!("projectbook_core version={}", core_version());
    println!("data_file={}", storage.path().display());
    println!(
        "projects={} clients={} issues={}",
        model.projects().len(),
        model.clients().len(),
        model.issues().len()
    );
    Ok(())
}

fn absolutize(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|err| format!("failed to resolve working directory: {err}"))
}
