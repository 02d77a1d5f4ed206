use crate::float::Float;

/// Advance from `min_lag` while the autocorrelation still strictly decreases
/// and return the first local valley.
///
/// Normalized autocorrelation is always maximal at lag 0 and decays smoothly
/// through low lags; searching for a maximum before leaving that initial
/// downward slope would always land on the zero-lag neighborhood instead of
/// the fundamental period.
pub fn first_valley<T: Float>(acf: &[T], min_lag: usize, max_lag: usize) -> usize {
    let mut lag = min_lag;
    while lag + 1 <= max_lag && acf[lag] > acf[lag + 1] {
        lag += 1;
    }
    lag
}

/// Find the lag in `start..=max_lag` with the largest value of
/// `acf[lag] / zero_lag`. Returns the lag and its normalized value, or `None`
/// when the range is empty.
pub fn best_normalized_lag<T: Float>(
    acf: &[T],
    start: usize,
    max_lag: usize,
    zero_lag: T,
) -> Option<(usize, T)> {
    let mut best: Option<(usize, T)> = None;
    for lag in start..=max_lag {
        let value = acf[lag] / zero_lag;
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((lag, value));
        }
    }
    best
}

/// Fit a parabola through three adjacent normalized samples and return the
/// sub-sample offset of its vertex relative to the center sample.
///
/// Offsets of a full sample or more mean the three points do not describe a
/// local peak around the center; those are rejected, as is a degenerate
/// (collinear) fit.
pub fn parabolic_shift<T: Float>(y1: T, y2: T, y3: T) -> Option<T> {
    let half = T::from_f64(0.5).unwrap();
    let two = T::from_f64(2.0).unwrap();

    let a = (y1 + y3 - two * y2) * half;
    let b = (y3 - y1) * half;

    if a == T::zero() {
        return None;
    }

    let shift = -b / (two * a);
    if shift > -T::one() && shift < T::one() {
        Some(shift)
    } else {
        None
    }
}
