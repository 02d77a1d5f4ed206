use crate::float::Float;

pub fn new_real_buffer<T: Float>(size: usize) -> Vec<T> {
    vec![T::zero(); size]
}

/// Compute the arithmetic mean of `arr`. Returns zero for an empty slice.
pub fn mean<T>(arr: &[T]) -> T
where
    T: Float + std::iter::Sum,
{
    if arr.is_empty() {
        return T::zero();
    }
    arr.iter().copied().sum::<T>() / T::from_usize(arr.len()).unwrap()
}

/// Root-mean-square of `arr` after removing `center` from every sample.
///
/// Removing the mean first keeps a DC offset from inflating the energy
/// estimate; the silence gate compares this value against a threshold
/// calibrated for zero-centered signals.
pub fn centered_rms<T>(arr: &[T], center: T) -> T
where
    T: Float + std::iter::Sum,
{
    if arr.is_empty() {
        return T::zero();
    }
    let sum = arr.iter().map(|&s| (s - center) * (s - center)).sum::<T>();
    (sum / T::from_usize(arr.len()).unwrap()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mean_of_constant_signal() {
        let signal = vec![0.25f64; 64];
        assert_abs_diff_eq!(mean(&signal), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn rms_ignores_dc_offset() {
        // A pure offset carries no energy once the mean is removed.
        let signal = vec![0.5f64; 128];
        let center = mean(&signal);
        assert_abs_diff_eq!(centered_rms(&signal, center), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rms_of_alternating_signal() {
        let signal: Vec<f64> = (0..64).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let center = mean(&signal);
        assert_abs_diff_eq!(centered_rms(&signal, center), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_slice_statistics_are_zero() {
        let signal: [f64; 0] = [];
        assert_eq!(mean(&signal), 0.0);
        assert_eq!(centered_rms(&signal, 0.0), 0.0);
    }
}
