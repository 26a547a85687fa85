// integrity_sim/src/replay.rs

//! Walks a scenario's updates pairwise: each update is extrapolated to the
//! time of the next one and the prediction is checked against what the entity
//! actually reported.

use crate::error::ScenarioError;
use crate::scenario::ScenarioConfig;
use integrity_core::prelude::*;
use log::{info, warn};

/// The verdict for one consecutive pair of updates.
#[derive(Debug, Clone)]
pub struct StepReport {
    /// Index of the reported (later) update.
    pub index: usize,
    pub elapsed: Seconds,
    pub verdict: Verdict,
}

#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub scenario: String,
    pub entity: EntityIdentifier,
    pub steps: Vec<StepReport>,
    /// Pairs skipped because the entity switched algorithm between them.
    pub algorithm_changes: usize,
}

impl ReplayReport {
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|step| step.verdict.matched)
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|step| !step.verdict.matched)
    }
}

/// Replays every update of `config`.
///
/// A change of algorithm between two updates starts a new prediction base and
/// is not a failure. With `fail_fast`, replay stops after the first mismatch.
pub fn replay(config: &ScenarioConfig, fail_fast: bool) -> Result<ReplayReport, ScenarioError> {
    let scenario = config.name.clone().unwrap_or_else(|| "unnamed".to_string());
    let entity = config.entity.identifier();

    // --- 1. Decode every record up front so a bad record fails the whole run ---
    let states = config
        .updates
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .to_representation()
                .map(|state| (record.time, state))
                .map_err(|source| ScenarioError::Update { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Replaying '{}' for entity {} ({} updates)",
        scenario,
        entity,
        states.len()
    );

    // --- 2. Predict each update from the one before it ---
    let mut report = ReplayReport {
        scenario,
        entity,
        steps: Vec::new(),
        algorithm_changes: 0,
    };
    for (index, pair) in states.windows(2).enumerate() {
        let index = index + 1;
        let ((base_time, base), (time, reported)) = (&pair[0], &pair[1]);

        if base.algorithm() != reported.algorithm() {
            info!(
                "Update {}: algorithm changed {} -> {}, restarting prediction",
                index,
                base.algorithm(),
                reported.algorithm()
            );
            report.algorithm_changes += 1;
            continue;
        }

        let elapsed = time - base_time;
        let step_error = |source: IntegrityError| ScenarioError::Update { index, source };
        let predicted = predict(base, elapsed).map_err(step_error)?;
        let verdict = compare(&predicted, reported, &config.tolerances).map_err(step_error)?;

        let matched = verdict.matched;
        if matched {
            info!("Update {} (+{:.3}s): {}", index, elapsed, verdict);
        } else {
            warn!("Update {} (+{:.3}s): {}", index, elapsed, verdict);
        }
        report.steps.push(StepReport {
            index,
            elapsed,
            verdict,
        });
        if !matched && fail_fast {
            break;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::parse_scenario;
    use approx::assert_abs_diff_eq;

    const STRAIGHT_LINE: &str = r#"
        name = "straight line"

        [[updates]]
        time = 0.0
        algorithm = 2
        location = [0.0, 0.0, 0.0]
        orientation = "0.0;0.0;0.0"
        velocity = [1.0, 0.0, 0.0]

        [[updates]]
        time = 10.0
        algorithm = 2
        location = [10.00005, 0.0, 0.0]
        orientation = "0.0;0.0;0.0"
        velocity = [1.0, 0.0, 0.0]

        [[updates]]
        time = 15.0
        algorithm = 1
        location = [15.0, 0.0, 0.0]
        orientation = "0.0"

        [[updates]]
        time = 20.0
        algorithm = 1
        location = [15.0, 0.0, 0.0]
        orientation = "0.0"
    "#;

    #[test]
    fn test_conforming_scenario_passes() {
        let report = replay(&parse_scenario(STRAIGHT_LINE).unwrap(), false).unwrap();
        assert!(report.passed());
        assert_eq!(report.steps.len(), 2);
        assert_eq!(report.algorithm_changes, 1);
        assert_eq!(report.steps[0].index, 1);
        assert_abs_diff_eq!(report.steps[0].elapsed, 10.0);
        assert_eq!(report.scenario, "straight line");
    }

    #[test]
    fn test_divergent_update_fails_and_fail_fast_stops() {
        let drifting = STRAIGHT_LINE.replace("[10.00005, 0.0, 0.0]", "[12.0, 0.0, 0.0]");
        let config = parse_scenario(&drifting).unwrap();

        let report = replay(&config, false).unwrap();
        assert!(!report.passed());
        let failed: Vec<usize> = report.failed_steps().map(|step| step.index).collect();
        assert_eq!(failed, vec![1]);
        assert_eq!(report.steps.len(), 2);

        let report = replay(&config, true).unwrap();
        assert_eq!(report.steps.len(), 1);
    }

    #[test]
    fn test_time_running_backwards_is_an_error() {
        let backwards = STRAIGHT_LINE.replace("time = 10.0", "time = -1.0");
        let err = replay(&parse_scenario(&backwards).unwrap(), false).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Update {
                index: 1,
                source: IntegrityError::InvalidInput(_)
            }
        ));
    }

    #[test]
    fn test_invalid_record_is_reported_with_its_index() {
        let broken = STRAIGHT_LINE.replace("time = 15.0\n        algorithm = 1", "time = 15.0\n        algorithm = 0");
        let err = replay(&parse_scenario(&broken).unwrap(), false).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::Update {
                index: 2,
                source: IntegrityError::InvalidCombination { .. }
            }
        ));
    }

    #[test]
    fn test_bundled_scenarios_conform() {
        use crate::scenario::{discover_scenarios, load_scenario};
        use std::path::Path;

        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/scenarios");
        for file in discover_scenarios(&dir).unwrap() {
            let report = replay(&load_scenario(&file).unwrap(), false).unwrap();
            assert!(report.passed(), "{:?} failed: {:?}", file, report);
        }
    }
}
