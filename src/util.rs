pub fn get_num_samples(total_time: f64, dt: f64) -> usize {
    (total_time / dt).ceil() as usize
}

pub fn get_sample_time(idx: usize, dt: f64) -> f64 {
    idx as f64 * dt
}

// Float to usize casts saturate, so negative and NaN times land on sample 0.
pub fn get_nearest_sample_idx(t: f64, dt: f64, num_samples: usize) -> usize {
    let idx = (t / dt).round() as usize;
    idx.min(num_samples.saturating_sub(1))
}

#[cfg(test)]
pub mod test_util {
    use float_cmp::{assert_approx_eq, ApproxEq};
    use std::fmt::Debug;

    pub fn assert_approx_eq_slice<T>(left: &[T], right: &[T])
    where
        T: ApproxEq + Debug + Copy,
    {
        assert_eq!(left.len(), right.len());

        for item in left.iter().zip(right) {
            assert_approx_eq!(T, *item.0, *item.1);
        }
    }
}
