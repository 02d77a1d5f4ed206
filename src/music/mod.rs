//! Conversion from detected frequencies to musical pitch.
//!
//! The mapper is pure and stateless: a frequency becomes a fractional MIDI
//! note number (69 = A4 = 440 Hz, 12 units per octave), from which a display
//! derives the nearest note name and the deviation in cents.

use crate::float::Float;

/// Pitch-class names starting at C, using sharps.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Convert a frequency in Hz to a fractional MIDI note number:
/// `midi = 12·log2(frequency/440) + 69`.
///
/// Non-finite input propagates through unchanged in kind (NaN in, NaN out);
/// there are no other failure modes.
pub fn freq_to_midi<T: Float>(frequency: T) -> T {
    let twelve = T::from_f64(12.0).unwrap();
    let concert_a = T::from_f64(440.0).unwrap();
    let a4_midi = T::from_f64(69.0).unwrap();

    twelve * (frequency / concert_a).log2() + a4_midi
}

/// Name of the MIDI note `midi`, e.g. `69` → `"A4"`.
pub fn note_name(midi: i32) -> String {
    let octave = midi.div_euclid(12) - 1;
    let note = NOTE_NAMES[midi.rem_euclid(12) as usize];
    format!("{}{}", note, octave)
}

/// Display data derived from a fractional MIDI value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchInfo {
    /// Name of the nearest note, e.g. `"A4"`.
    pub note: String,
    /// Nearest MIDI note number.
    pub midi: i32,
    /// Signed deviation from the nearest note, in cents (hundredths of a
    /// semitone).
    pub cents: i32,
}

/// Round a fractional MIDI value to its nearest note and cents deviation.
/// Returns `None` for non-finite input.
pub fn pitch_info<T: Float>(midi: T) -> Option<PitchInfo> {
    if !midi.is_finite() {
        return None;
    }

    let nearest = midi.round();
    let hundred = T::from_f64(100.0).unwrap();
    let cents = ((midi - nearest) * hundred).round().to_i32()?;
    let nearest = nearest.to_i32()?;

    Some(PitchInfo {
        note: note_name(nearest),
        midi: nearest,
        cents,
    })
}
