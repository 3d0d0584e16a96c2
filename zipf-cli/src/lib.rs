//! Shared plumbing for the zipf-pi binaries

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info, warn, Level};
use zipf::ZipfError;

/// Log to stderr so stdout carries only results
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Report a fatal error and pick the exit status
pub fn fail(err: ZipfError) -> ExitCode {
    error!(code = %err.code, "{}", err.message);
    match serde_json::to_string(&err) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", err),
    }
    ExitCode::FAILURE
}

/// Hand each chart to `opener`, returning how many were shown
///
/// Display is best effort: a failure is logged and the rest are still tried.
pub fn show_charts<F>(paths: &[PathBuf], opener: F) -> usize
where
    F: Fn(&Path) -> std::io::Result<()>,
{
    let mut shown = 0;
    for path in paths {
        match opener(path) {
            Ok(()) => {
                info!(path = %path.display(), "opened chart");
                shown += 1;
            }
            Err(e) => warn!(path = %path.display(), "cannot display chart: {}", e),
        }
    }
    shown
}
