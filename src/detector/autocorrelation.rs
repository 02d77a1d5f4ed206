//! FFT-based autocorrelation pitch detection.
//!
//! The autocorrelation of the windowed, zero-padded frame is obtained through
//! the Wiener–Khinchin relation (forward transform, squared magnitude,
//! inverse transform), which costs O(M log M) instead of the O(n²) of the
//! direct lag sum and keeps the detector viable at real-time frame rates.
//! The dominant periodicity is then searched in a frequency-bounded lag
//! window and refined to sub-sample precision by parabolic interpolation.

use log::trace;

use crate::detector::workspace::Workspace;
use crate::detector::{ConfigError, DetectorConfig, PitchDetector, MIN_FRAME_LEN};
use crate::float::Float;
use crate::transform::transform;
use crate::utils::buffer::{centered_rms, mean};
use crate::utils::peak::{best_normalized_lag, first_valley, parabolic_shift};

pub struct AutocorrelationDetector<T>
where
    T: Float,
{
    config: DetectorConfig<T>,
    workspace: Workspace<T>,
}

impl<T> AutocorrelationDetector<T>
where
    T: Float,
{
    /// Create a detector with the default configuration (50–1000 Hz, RMS
    /// gate 0.01, peak gate 0.25).
    pub fn new() -> Self {
        AutocorrelationDetector {
            config: DetectorConfig::default(),
            workspace: Workspace::new(),
        }
    }

    /// Create a detector with an explicit configuration. The configuration is
    /// validated once here and immutable afterwards.
    pub fn with_config(config: DetectorConfig<T>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(AutocorrelationDetector {
            config,
            workspace: Workspace::new(),
        })
    }

    pub fn config(&self) -> &DetectorConfig<T> {
        &self.config
    }
}

impl<T> Default for AutocorrelationDetector<T>
where
    T: Float,
{
    fn default() -> Self {
        AutocorrelationDetector::new()
    }
}

impl<T> PitchDetector<T> for AutocorrelationDetector<T>
where
    T: Float + std::iter::Sum,
{
    fn detect(&mut self, frame: &[T], sample_rate: usize) -> Option<T> {
        let n = frame.len();
        if n < MIN_FRAME_LEN {
            return None;
        }

        let mean = mean(frame);
        let rms = centered_rms(frame, mean);
        if rms < self.config.rms_threshold {
            trace!("frame gated as silence: rms={}", rms);
            return None;
        }

        self.workspace.ensure_capacity(n);
        let workspace = &mut self.workspace;

        // Window the mean-removed frame into the real buffer; everything past
        // the frame stays zero so the correlation cannot wrap around.
        workspace.re.iter_mut().for_each(|v| *v = T::zero());
        workspace.im.iter_mut().for_each(|v| *v = T::zero());
        for ((out, &sample), &weight) in workspace
            .re
            .iter_mut()
            .zip(frame.iter())
            .zip(workspace.window.iter())
        {
            *out = (sample - mean) * weight;
        }

        transform(&mut workspace.re, &mut workspace.im, false);

        // Power spectrum: each bin becomes its squared magnitude.
        for (re, im) in workspace.re.iter_mut().zip(workspace.im.iter_mut()) {
            *re = *re * *re + *im * *im;
            *im = T::zero();
        }

        transform(&mut workspace.re, &mut workspace.im, true);

        // The real buffer now holds the autocorrelation; lag 0 is the total
        // signal energy and normalizes every other lag.
        let acf = &workspace.re;
        let zero_lag = acf[0];
        if !(zero_lag > T::zero()) {
            return None;
        }

        let sample_rate = T::from_usize(sample_rate).unwrap();
        let min_lag = (sample_rate / self.config.max_freq)
            .floor()
            .to_usize()
            .unwrap_or(0)
            .max(1);
        let max_lag = (sample_rate / self.config.min_freq)
            .floor()
            .to_usize()
            .unwrap_or(0)
            .min(n - 1);
        if max_lag <= min_lag {
            return None;
        }

        let valley = first_valley(acf, min_lag, max_lag);
        let (best_lag, best_value) = best_normalized_lag(acf, valley, max_lag, zero_lag)?;
        if best_value < self.config.peak_threshold {
            return None;
        }

        let mut refined_lag = T::from_usize(best_lag).unwrap();
        if best_lag > 1 && best_lag < max_lag {
            let shift = parabolic_shift(
                acf[best_lag - 1] / zero_lag,
                best_value,
                acf[best_lag + 1] / zero_lag,
            );
            if let Some(shift) = shift {
                refined_lag = refined_lag + shift;
            }
        }

        let frequency = sample_rate / refined_lag;
        if !frequency.is_finite() || frequency <= T::zero() {
            return None;
        }
        Some(frequency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn sine(freq: f64, size: usize, sample_rate: usize) -> Vec<f64> {
        let dt = 1.0 / sample_rate as f64;
        (0..size)
            .map(|i| (2.0 * PI * freq * i as f64 * dt).sin())
            .collect()
    }

    #[test]
    fn detects_a_reference_sine() {
        let mut detector = AutocorrelationDetector::new();
        let frequency = detector.detect(&sine(440.0, 1024, 44100), 44100).unwrap();
        assert!((frequency - 440.0).abs() < 4.4, "got {}", frequency);
    }

    #[test]
    fn short_frame_is_rejected() {
        let mut detector = AutocorrelationDetector::new();
        assert_eq!(detector.detect(&sine(440.0, 31, 44100), 44100), None);
    }

    #[test]
    fn dc_only_frame_is_rejected() {
        // All energy sits in the mean; nothing remains after removal.
        let mut detector = AutocorrelationDetector::new();
        let frame = vec![0.7f64; 1024];
        assert_eq!(detector.detect(&frame, 44100), None);
    }

    #[test]
    fn out_of_range_search_window_is_rejected() {
        // At an 8 kHz rate both bounds collapse to lag 1, leaving no lags to
        // search.
        let config = DetectorConfig::<f64> {
            min_freq: 4500.0,
            max_freq: 8000.0,
            ..DetectorConfig::default()
        };
        let mut detector = AutocorrelationDetector::with_config(config).unwrap();
        assert_eq!(detector.detect(&sine(440.0, 1024, 8000), 8000), None);
    }

    #[test]
    fn invalid_config_is_refused() {
        let config = DetectorConfig::<f64> {
            min_freq: 0.0,
            ..DetectorConfig::default()
        };
        assert!(AutocorrelationDetector::with_config(config).is_err());
    }
}
