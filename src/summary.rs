use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::{params::ScheduleParams, simulation::SimulationResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSummary {
    pub weight_before_ltp: f64,
    pub weight_after_ltp: f64,
    pub ltp_gain: f64,
    pub weight_before_ltd: f64,
    pub weight_after_ltd: f64,
    pub ltd_change: f64,
    pub peak_weight: f64,
    pub min_weight: f64,
    pub mean_weight: f64,
    pub final_weight: f64,
}

impl ConditionSummary {
    pub fn from_result(result: &SimulationResult, schedule: &ScheduleParams) -> Self {
        let weight = result.get_weight();

        let weight_before_ltp = result.weight_at(schedule.hfs_start).unwrap_or(f64::NAN);
        let weight_after_ltp = result.weight_at(schedule.hfs_end).unwrap_or(f64::NAN);
        let weight_before_ltd = result.weight_at(schedule.lfs_start).unwrap_or(f64::NAN);
        let weight_after_ltd = result.weight_at(schedule.lfs_end).unwrap_or(f64::NAN);

        Self {
            weight_before_ltp,
            weight_after_ltp,
            ltp_gain: weight_after_ltp - weight_before_ltp,
            weight_before_ltd,
            weight_after_ltd,
            ltd_change: weight_after_ltd - weight_before_ltd,
            peak_weight: Statistics::max(weight),
            min_weight: Statistics::min(weight),
            mean_weight: Statistics::mean(weight),
            final_weight: weight.last().copied().unwrap_or(f64::NAN),
        }
    }
}
