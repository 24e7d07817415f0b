use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::HashSet;

pub const HEALTHY: &str = "Healthy";
pub const ALZHEIMERS: &str = "Alzheimers";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentParams {
    pub schedule: ScheduleParams,
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub params: ConditionParams,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleParams {
    pub total_time: f64,
    pub dt: f64,
    pub hfs_start: f64,
    pub hfs_end: f64,
    pub lfs_start: f64,
    pub lfs_end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionParams {
    pub w_initial: f64,
    pub w_max: f64,
    pub w_min: f64,
    pub ltp_rate: f64,
    pub ltd_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),
    #[error("invalid condition: {0}")]
    InvalidCondition(String),
    #[error("duplicate condition: {0}")]
    DuplicateCondition(String),
}

pub fn default_params() -> ExperimentParams {
    ExperimentParams {
        schedule: ScheduleParams::default(),
        conditions: vec![
            Condition::new(HEALTHY, ConditionParams::healthy()),
            Condition::new(ALZHEIMERS, ConditionParams::alzheimers()),
        ],
    }
}

impl ExperimentParams {
    pub fn get_condition(&self, name: &str) -> Option<&ConditionParams> {
        self.conditions
            .iter()
            .find(|condition| condition.name == name)
            .map(|condition| &condition.params)
    }
}

impl Condition {
    pub fn new(name: &str, params: ConditionParams) -> Self {
        Self {
            name: name.to_string(),
            params,
        }
    }
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            total_time: 150.0,
            dt: 0.1,
            hfs_start: 40.0,
            hfs_end: 45.0,
            lfs_start: 100.0,
            lfs_end: 105.0,
        }
    }
}

impl ConditionParams {
    pub fn healthy() -> Self {
        Self {
            w_initial: 1.0,
            w_max: 2.5,
            w_min: 0.5,
            ltp_rate: 0.5,
            ltd_rate: 0.3,
        }
    }

    /// Aβ pathology: low ceiling and a tenfold slower potentiation rate,
    /// depression slightly facilitated.
    pub fn alzheimers() -> Self {
        Self {
            w_initial: 1.0,
            w_max: 1.2,
            w_min: 0.3,
            ltp_rate: 0.05,
            ltd_rate: 0.4,
        }
    }
}

pub fn validate_experiment_params(params: &ExperimentParams) -> Result<(), ParamsError> {
    validate_schedule_params(&params.schedule)?;

    let mut seen_names = HashSet::default();

    for condition in &params.conditions {
        if !seen_names.insert(condition.name.as_str()) {
            return Err(ParamsError::DuplicateCondition(condition.name.clone()));
        }

        validate_condition_params(&condition.params)?;
    }

    Ok(())
}

// Negated comparisons so that NaN is rejected too.
pub fn validate_schedule_params(schedule: &ScheduleParams) -> Result<(), ParamsError> {
    if !(schedule.dt > 0.0) {
        return Err(ParamsError::InvalidSchedule(
            "dt must be strictly positive".to_string(),
        ));
    }

    if !(schedule.total_time > 0.0) {
        return Err(ParamsError::InvalidSchedule(
            "total_time must be strictly positive".to_string(),
        ));
    }

    if !schedule.dt.is_finite() {
        return Err(ParamsError::InvalidSchedule("dt must be finite".to_string()));
    }

    if !schedule.total_time.is_finite() {
        return Err(ParamsError::InvalidSchedule(
            "total_time must be finite".to_string(),
        ));
    }

    if !(schedule.total_time / schedule.dt).is_finite() {
        return Err(ParamsError::InvalidSchedule(
            "total_time / dt must be finite".to_string(),
        ));
    }

    Ok(())
}

pub fn validate_condition_params(params: &ConditionParams) -> Result<(), ParamsError> {
    if !(params.ltp_rate > 0.0) {
        return Err(ParamsError::InvalidCondition(
            "ltp_rate must be strictly positive".to_string(),
        ));
    }

    if !(params.ltd_rate > 0.0) {
        return Err(ParamsError::InvalidCondition(
            "ltd_rate must be strictly positive".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_schedule(msg: &str) -> ParamsError {
        ParamsError::InvalidSchedule(msg.to_string())
    }

    fn invalid_condition(msg: &str) -> ParamsError {
        ParamsError::InvalidCondition(msg.to_string())
    }

    #[test]
    fn valid_params() {
        let params = default_params();
        assert!(validate_experiment_params(&params).is_ok());
    }

    #[test]
    fn default_table() {
        let params = default_params();

        let names: Vec<_> = params.conditions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, [HEALTHY, ALZHEIMERS]);

        assert_eq!(params.get_condition(HEALTHY), Some(&ConditionParams::healthy()));
        assert_eq!(
            params.get_condition(ALZHEIMERS),
            Some(&ConditionParams::alzheimers())
        );
        assert_eq!(params.get_condition("Parkinsons"), None);
    }

    #[test]
    fn impaired_potentiation() {
        let healthy = ConditionParams::healthy();
        let alzheimers = ConditionParams::alzheimers();
        assert!(alzheimers.ltp_rate < healthy.ltp_rate);
        assert!(alzheimers.w_max < healthy.w_max);
        assert!(alzheimers.w_min < healthy.w_min);
    }

    #[test]
    fn zero_dt() {
        let mut params = default_params();
        params.schedule.dt = 0.0;

        assert_eq!(
            validate_experiment_params(&params).unwrap_err(),
            invalid_schedule("dt must be strictly positive")
        );
    }

    #[test]
    fn negative_dt() {
        let mut schedule = ScheduleParams::default();
        schedule.dt = -0.1;

        assert_eq!(
            validate_schedule_params(&schedule).unwrap_err(),
            invalid_schedule("dt must be strictly positive")
        );
    }

    #[test]
    fn nan_dt() {
        let mut schedule = ScheduleParams::default();
        schedule.dt = f64::NAN;
        assert!(validate_schedule_params(&schedule).is_err());
    }

    #[test]
    fn zero_total_time() {
        let mut schedule = ScheduleParams::default();
        schedule.total_time = 0.0;

        assert_eq!(
            validate_schedule_params(&schedule).unwrap_err(),
            invalid_schedule("total_time must be strictly positive")
        );
    }

    #[test]
    fn infinite_total_time() {
        let mut schedule = ScheduleParams::default();
        schedule.total_time = f64::INFINITY;

        assert_eq!(
            validate_schedule_params(&schedule).unwrap_err(),
            invalid_schedule("total_time must be finite")
        );
    }

    #[test]
    fn infinite_dt() {
        let mut schedule = ScheduleParams::default();
        schedule.dt = f64::INFINITY;

        assert_eq!(
            validate_schedule_params(&schedule).unwrap_err(),
            invalid_schedule("dt must be finite")
        );
    }

    #[test]
    fn overflowing_sample_count() {
        let mut schedule = ScheduleParams::default();
        schedule.total_time = 1e300;
        schedule.dt = 1e-300;

        assert_eq!(
            validate_schedule_params(&schedule).unwrap_err(),
            invalid_schedule("total_time / dt must be finite")
        );
    }

    #[test]
    fn zero_ltp_rate() {
        let mut params = default_params();
        params.conditions[1].params.ltp_rate = 0.0;

        assert_eq!(
            validate_experiment_params(&params).unwrap_err(),
            invalid_condition("ltp_rate must be strictly positive")
        );
    }

    #[test]
    fn negative_ltd_rate() {
        let mut params = ConditionParams::healthy();
        params.ltd_rate = -0.3;

        assert_eq!(
            validate_condition_params(&params).unwrap_err(),
            invalid_condition("ltd_rate must be strictly positive")
        );
    }

    #[test]
    fn duplicate_condition() {
        let mut params = default_params();
        params.conditions[1].name = HEALTHY.to_string();

        assert_eq!(
            validate_experiment_params(&params).unwrap_err(),
            ParamsError::DuplicateCondition(HEALTHY.to_string())
        );
    }

    #[test]
    fn degenerate_but_accepted() {
        let mut params = default_params();
        params.schedule.lfs_start = 42.0;
        params.schedule.hfs_end = 200.0;
        params.schedule.dt = 500.0;
        params.conditions[0].params.w_max = 0.1;
        params.conditions[0].params.w_min = 3.0;

        assert!(validate_experiment_params(&params).is_ok());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            invalid_schedule("dt must be strictly positive").to_string(),
            "invalid schedule: dt must be strictly positive"
        );
        assert_eq!(
            ParamsError::DuplicateCondition(ALZHEIMERS.to_string()).to_string(),
            "duplicate condition: Alzheimers"
        );
    }
}
