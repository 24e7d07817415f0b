use serde::{Deserialize, Serialize};

use crate::params::{ConditionParams, ScheduleParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Ltp,
    Ltd,
    Maintenance,
}

// Windows are half-open. LTP is tested first, so it wins where the windows overlap.
pub fn classify(t: f64, schedule: &ScheduleParams) -> Regime {
    if schedule.hfs_start <= t && t < schedule.hfs_end {
        Regime::Ltp
    } else if schedule.lfs_start <= t && t < schedule.lfs_end {
        Regime::Ltd
    } else {
        Regime::Maintenance
    }
}

impl Regime {
    /// Relaxation target and rate for this regime, `None` while the weight is held.
    pub fn get_target(&self, params: &ConditionParams) -> Option<(f64, f64)> {
        match self {
            Regime::Ltp => Some((params.w_max, params.ltp_rate)),
            Regime::Ltd => Some((params.w_min, params.ltd_rate)),
            Regime::Maintenance => None,
        }
    }
}

pub fn step_weight(regime: Regime, w: f64, params: &ConditionParams, dt: f64) -> f64 {
    match regime.get_target(params) {
        Some((target, rate)) => w + rate * (target - w) * dt,
        None => w,
    }
}
