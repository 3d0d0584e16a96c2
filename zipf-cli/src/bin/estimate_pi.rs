//! Prints the letter-frequency estimate of pi

use std::process::ExitCode;
use zipf::{EstimatorConfig, Zipf};
use zipf_cli::{fail, init_logging};

fn main() -> ExitCode {
    init_logging();

    let result = Zipf::new(EstimatorConfig::default()).and_then(|engine| engine.estimate_pi());
    match result {
        Ok(estimate) => {
            println!("{}", estimate.value);
            ExitCode::SUCCESS
        }
        Err(e) => fail(e),
    }
}
