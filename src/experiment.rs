use log::info;
use simple_error::{try_with, SimpleResult};

use crate::{
    params::{self, ExperimentParams, ScheduleParams},
    simulation::{self, SimulationResult},
    summary::ConditionSummary,
    types::HashMap,
};

pub fn run_experiment(params: &ExperimentParams) -> SimpleResult<ExperimentResult> {
    try_with!(
        params::validate_experiment_params(params),
        "invalid experiment parameters"
    );

    let mut runs = Vec::with_capacity(params.conditions.len());
    let mut name_to_run_idx = HashMap::default();

    for condition in &params.conditions {
        let result = try_with!(
            simulation::simulate(&params.schedule, &condition.params),
            "simulation of condition {} failed",
            condition.name
        );

        info!(
            "condition {}: {} samples, final weight {:.4}",
            condition.name,
            result.len(),
            result.get_weight().last().copied().unwrap_or(f64::NAN)
        );

        name_to_run_idx.insert(condition.name.clone(), runs.len());
        runs.push((condition.name.clone(), result));
    }

    Ok(ExperimentResult {
        schedule: params.schedule.clone(),
        runs,
        name_to_run_idx,
    })
}

#[derive(Debug, Clone)]
pub struct ExperimentResult {
    schedule: ScheduleParams,
    runs: Vec<(String, SimulationResult)>,
    name_to_run_idx: HashMap<String, usize>,
}

impl ExperimentResult {
    pub fn get_schedule(&self) -> &ScheduleParams {
        &self.schedule
    }

    pub fn get_runs(&self) -> &[(String, SimulationResult)] {
        &self.runs
    }

    pub fn get_condition_names(&self) -> impl Iterator<Item = &str> {
        self.runs.iter().map(|(name, _)| name.as_str())
    }

    pub fn get_result(&self, name: &str) -> Option<&SimulationResult> {
        self.name_to_run_idx
            .get(name)
            .map(|&run_idx| &self.runs[run_idx].1)
    }

    pub fn summarize(&self) -> Vec<(String, ConditionSummary)> {
        self.runs
            .iter()
            .map(|(name, result)| {
                (
                    name.clone(),
                    ConditionSummary::from_result(result, &self.schedule),
                )
            })
            .collect()
    }
}
