//! Renders the diagnostic charts into the working directory and opens them

use std::path::Path;
use std::process::ExitCode;
use tracing::info;
use zipf::{EstimatorConfig, Zipf};
use zipf_cli::{fail, init_logging, show_charts};

fn main() -> ExitCode {
    init_logging();

    let result = Zipf::new(EstimatorConfig::default())
        .and_then(|engine| engine.render_plots(Path::new(".")));
    match result {
        Ok(paths) => {
            info!(count = paths.len(), "charts written");
            show_charts(&paths, |p| open::that(p));
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}
