use anyhow::bail;
use gte_shared::telemetry;
use std::path::PathBuf;

const APP_NAME: &str = "gte_client";

/// Logs to a file in `log_folder` unless stdout was requested, falls back to
/// stdout if the file cannot be used
pub fn init(cli: &super::cli::Cli, log_folder: PathBuf) -> anyhow::Result<()> {
    fn init_to_file(log_folder: PathBuf) -> anyhow::Result<()> {
        let (file, file_path) = telemetry::create_trace_file(log_folder, APP_NAME)?;
        let subscriber = telemetry::get_subscriber(APP_NAME.into(), "info", file);

        match telemetry::init_subscriber(subscriber) {
            Ok(_) => {
                eprintln!("Tracing started to file {file_path:?}");
                Ok(())
            }
            Err(e) => {
                bail!("Failed to start tracing to file. Error: {e}");
            }
        }
    }

    if !cli.is_to_std_out {
        match init_to_file(log_folder) {
            Ok(_) => return Ok(()),
            Err(e) => {
                // Print error and fall though to logging to stdout
                eprintln!("Failed to start logging to file: {e}");
            }
        }
    }

    match tracing_subscriber::fmt().try_init() {
        Ok(_) => Ok(()),
        Err(e) => {
            bail!("Failed to start tracing. Error: {e}");
        }
    }
}
