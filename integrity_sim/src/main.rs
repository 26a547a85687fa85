// integrity_sim/src/main.rs

use clap::Parser;
use integrity_sim::cli::Cli;
use integrity_sim::replay::replay;
use integrity_sim::scenario::{discover_scenarios, load_scenario};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let files = match discover_scenarios(&cli.scenario) {
        Ok(files) if !files.is_empty() => files,
        Ok(_) => {
            error!("No scenario files found under {:?}", cli.scenario);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut failures = 0;
    for path in &files {
        let outcome = load_scenario(path).and_then(|config| replay(&config, cli.fail_fast));
        match outcome {
            Ok(report) if report.passed() => {
                info!(
                    "PASS '{}' ({} steps checked)",
                    report.scenario,
                    report.steps.len()
                );
            }
            Ok(report) => {
                failures += 1;
                let failed = report.failed_steps().count();
                error!(
                    "FAIL '{}': {} of {} steps out of tolerance",
                    report.scenario,
                    failed,
                    report.steps.len()
                );
            }
            Err(e) => {
                failures += 1;
                error!("ERROR {:?}: {}", path, e);
            }
        }
    }

    info!("{} of {} scenarios passed", files.len() - failures, files.len());
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
