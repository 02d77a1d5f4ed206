use thiserror::Error;

use crate::float::Float;

pub mod autocorrelation;
pub mod workspace;

/// Frames shorter than this never produce an estimate; there are too few
/// samples to cover even one period of any frequency worth reporting.
pub const MIN_FRAME_LEN: usize = 32;

pub trait PitchDetector<T>
where
    T: Float,
{
    /// Estimate the fundamental frequency (Hz) of `frame`, captured at
    /// `sample_rate` Hz. Returns `None` whenever no confident estimate
    /// exists; callers cannot (and must not) distinguish the reason.
    fn detect(&mut self, frame: &[T], sample_rate: usize) -> Option<T>;
}

/// Detection parameters, fixed for a detector's lifetime.
///
/// * `min_freq`/`max_freq` bound the lag search window; lowering `min_freq`
///   searches larger lags (more work), raising `max_freq` admits smaller lags.
/// * `rms_threshold` is the silence gate on the mean-removed signal energy.
/// * `peak_threshold` rejects frames whose best normalized autocorrelation
///   peak is too weak to trust.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorConfig<T>
where
    T: Float,
{
    pub min_freq: T,
    pub max_freq: T,
    pub rms_threshold: T,
    pub peak_threshold: T,
}

impl<T> Default for DetectorConfig<T>
where
    T: Float,
{
    fn default() -> Self {
        DetectorConfig {
            min_freq: T::from_f64(50.0).unwrap(),
            max_freq: T::from_f64(1000.0).unwrap(),
            rms_threshold: T::from_f64(0.01).unwrap(),
            peak_threshold: T::from_f64(0.25).unwrap(),
        }
    }
}

impl<T> DetectorConfig<T>
where
    T: Float,
{
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_freq.is_finite()
            && self.max_freq.is_finite()
            && self.min_freq > T::zero()
            && self.min_freq < self.max_freq)
        {
            return Err(ConfigError::FrequencyRange {
                min: self.min_freq.to_f64().unwrap_or(f64::NAN),
                max: self.max_freq.to_f64().unwrap_or(f64::NAN),
            });
        }
        for (name, value) in [
            ("rms_threshold", self.rms_threshold),
            ("peak_threshold", self.peak_threshold),
        ] {
            if !(value.is_finite() && value >= T::zero()) {
                return Err(ConfigError::Threshold {
                    name,
                    value: value.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("frequency bounds must satisfy 0 < min_freq < max_freq (got {min}..{max})")]
    FrequencyRange { min: f64, max: f64 },
    #[error("{name} must be finite and non-negative (got {value})")]
    Threshold { name: &'static str, value: f64 },
}
