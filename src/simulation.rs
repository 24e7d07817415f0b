use log::debug;
use serde::Serialize;

use crate::{
    params::{self, ConditionParams, ParamsError, ScheduleParams},
    regime::{self, Regime},
    util::{get_nearest_sample_idx, get_num_samples, get_sample_time},
};

// Only built by `simulate`, which keeps `time` and `weight` index-aligned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    dt: f64,
    time: Vec<f64>,
    weight: Vec<f64>,
}

impl SimulationResult {
    pub fn get_time(&self) -> &[f64] {
        &self.time
    }

    pub fn get_weight(&self) -> &[f64] {
        &self.weight
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn get_sample(&self, idx: usize) -> Option<(f64, f64)> {
        Some((*self.time.get(idx)?, *self.weight.get(idx)?))
    }

    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.time.iter().copied().zip(self.weight.iter().copied())
    }

    pub fn index_of_time(&self, t: f64) -> usize {
        get_nearest_sample_idx(t, self.dt, self.len())
    }

    pub fn weight_at(&self, t: f64) -> Option<f64> {
        self.weight.get(self.index_of_time(t)).copied()
    }
}

pub fn simulate(
    schedule: &ScheduleParams,
    condition: &ConditionParams,
) -> Result<SimulationResult, ParamsError> {
    params::validate_schedule_params(schedule)?;
    params::validate_condition_params(condition)?;

    let dt = schedule.dt;
    let num_samples = get_num_samples(schedule.total_time, dt).max(1);

    debug!("simulating {} samples with dt = {}", num_samples, dt);

    let time: Vec<f64> = (0..num_samples).map(|idx| get_sample_time(idx, dt)).collect();
    let mut weight = Vec::with_capacity(num_samples);
    weight.push(condition.w_initial);

    let mut last_regime = Regime::Maintenance;

    for &t in time.iter().take(num_samples.saturating_sub(1)) {
        let regime = regime::classify(t, schedule);

        if regime != last_regime {
            debug!("t = {:.3}: {:?} -> {:?}", t, last_regime, regime);
            last_regime = regime;
        }

        let w = weight[weight.len() - 1];
        weight.push(regime::step_weight(regime, w, condition, dt));
    }

    Ok(SimulationResult { dt, time, weight })
}
