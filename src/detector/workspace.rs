use log::debug;

use crate::float::Float;
use crate::utils::buffer::new_real_buffer;

/// Scratch state for one detector instance: the split real/imaginary
/// transform buffers and the analysis window, all keyed to the most recent
/// frame length.
///
/// The transform length is the smallest power of two at least twice the frame
/// length. Doubling leaves the second half of the buffers zero-padded, which
/// keeps the circular autocorrelation from wrapping one end of the frame into
/// the other.
pub struct Workspace<T>
where
    T: Float,
{
    frame_len: usize,
    pub re: Vec<T>,
    pub im: Vec<T>,
    pub window: Vec<T>,
}

impl<T> Workspace<T>
where
    T: Float,
{
    /// Create an empty workspace. Buffers are allocated on the first call to
    /// [`ensure_capacity`][Self::ensure_capacity].
    pub fn new() -> Self {
        Workspace {
            frame_len: 0,
            re: Vec::new(),
            im: Vec::new(),
            window: Vec::new(),
        }
    }

    /// Size all buffers for a frame of `n` samples.
    ///
    /// A no-op when `n` matches the previous frame length and the buffers
    /// exist, so steady-state detection never allocates. `n` must be nonzero;
    /// the detector's length gate runs before this.
    pub fn ensure_capacity(&mut self, n: usize) {
        if n == self.frame_len && !self.re.is_empty() {
            return;
        }

        let transform_len = (2 * n).next_power_of_two();
        debug!(
            "resizing pitch workspace: frame_len={}, transform_len={}",
            n, transform_len
        );

        self.re = new_real_buffer(transform_len);
        self.im = new_real_buffer(transform_len);
        self.window = hann_window(n);
        self.frame_len = n;
    }

    /// The frame length the buffers are currently sized for (0 when empty).
    pub fn frame_len(&self) -> usize {
        self.frame_len
    }

    /// The transform length M (0 when empty).
    pub fn transform_len(&self) -> usize {
        self.re.len()
    }
}

impl<T> Default for Workspace<T>
where
    T: Float,
{
    fn default() -> Self {
        Workspace::new()
    }
}

/// Build a Hann window of `len` coefficients:
/// `w[i] = 0.5 − 0.5·cos(2π·i/(len−1))`, or the single coefficient 1 when
/// `len == 1`.
pub fn hann_window<T: Float>(len: usize) -> Vec<T> {
    if len <= 1 {
        return vec![T::one(); len];
    }

    let half = T::from_f64(0.5).unwrap();
    let two_pi = T::from_f64(2.0 * std::f64::consts::PI).unwrap();
    let denominator = T::from_usize(len - 1).unwrap();

    (0..len)
        .map(|i| half - half * (two_pi * T::from_usize(i).unwrap() / denominator).cos())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn transform_length_is_next_power_of_two_above_twice_the_frame() {
        let mut workspace = Workspace::<f64>::new();

        workspace.ensure_capacity(1024);
        assert_eq!(workspace.transform_len(), 2048);
        assert_eq!(workspace.window.len(), 1024);

        workspace.ensure_capacity(1000);
        assert_eq!(workspace.transform_len(), 2048);
        assert_eq!(workspace.window.len(), 1000);

        workspace.ensure_capacity(1025);
        assert_eq!(workspace.transform_len(), 4096);
    }

    #[test]
    fn unchanged_frame_length_is_a_no_op() {
        let mut workspace = Workspace::<f64>::new();
        workspace.ensure_capacity(512);

        // A no-op must leave the buffers untouched, not merely same-sized.
        workspace.re[5] = 42.0;
        workspace.ensure_capacity(512);
        assert_eq!(workspace.re[5], 42.0);

        workspace.ensure_capacity(256);
        assert_eq!(workspace.re[5], 0.0);
    }

    #[test]
    fn window_tracks_the_latest_frame_length() {
        let mut workspace = Workspace::<f32>::new();
        workspace.ensure_capacity(1024);
        workspace.ensure_capacity(2048);
        assert_eq!(workspace.window.len(), 2048);
        workspace.ensure_capacity(1024);
        assert_eq!(workspace.window.len(), 1024);
    }

    #[test]
    fn hann_window_shape() {
        let window: Vec<f64> = hann_window(9);
        assert_abs_diff_eq!(window[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(window[8], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(window[4], 1.0, epsilon = 1e-12);
        // Symmetric about the center.
        for i in 0..4 {
            assert_abs_diff_eq!(window[i], window[8 - i], epsilon = 1e-12);
        }
    }

    #[test]
    fn single_sample_window_is_unity() {
        let window: Vec<f64> = hann_window(1);
        assert_eq!(window, vec![1.0]);
    }
}
