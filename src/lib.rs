//! # Pitch Tracker
//! *pitch_tracker* estimates the fundamental frequency of short frames of
//! time-domain audio, giving tuner-style displays the data they need for
//! visual tuning feedback. Detection runs synchronously on the caller's
//! thread, one frame at a time, and either reports a confident estimate or
//! stays silent for that frame.
//!
//! # Pipeline
//! Each call gates on signal energy, windows and zero-pads the frame,
//! derives the autocorrelation through the power spectrum, searches a
//! frequency-bounded lag window for the dominant periodicity and refines it
//! with parabolic interpolation. The [music] module converts the resulting
//! frequency to a fractional MIDI pitch for display.
//!
//! # Examples
//! ```
//! use pitch_tracker::music::freq_to_midi;
//! use pitch_tracker::AutocorrelationDetector;
//! use pitch_tracker::PitchDetector;
//!
//! fn main() {
//!     const SAMPLE_RATE: usize = 44100;
//!     const SIZE: usize = 1024;
//!
//!     // Signal coming from some source (microphone, generated, etc...)
//!     let dt = 1.0 / SAMPLE_RATE as f64;
//!     let freq = 440.0;
//!     let signal: Vec<f64> = (0..SIZE)
//!         .map(|x| (2.0 * std::f64::consts::PI * x as f64 * dt * freq).sin())
//!         .collect();
//!
//!     let mut detector = AutocorrelationDetector::new();
//!
//!     let frequency = detector.detect(&signal, SAMPLE_RATE).unwrap();
//!
//!     println!("Frequency: {}, MIDI: {}", frequency, freq_to_midi(frequency));
//! }
//! ```

pub use detector::autocorrelation::AutocorrelationDetector;
pub use detector::{ConfigError, DetectorConfig, PitchDetector};

pub mod detector;
pub mod float;
pub mod music;
pub mod transform;
pub mod utils;
