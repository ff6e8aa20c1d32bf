//! Virtual piano keyboard layout, an alternative to multiple-choice answers.

use crate::codec;
use crate::pitch::{Letter, Pitch};
use serde::Serialize;

/// One key of the on-screen keyboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PianoKey {
    pub note: Pitch,
    pub is_black: bool,
    pub label: String,
}

/// Chromatic keys from C of `start_octave` to B of `end_octave`.
///
/// Black keys are spelled with sharps. An inverted span has no keys.
pub fn keyboard_keys(start_octave: i8, end_octave: i8) -> Vec<PianoKey> {
    let mut keys = Vec::new();
    for octave in start_octave..=end_octave {
        let c = Pitch::natural(Letter::C, octave).value();
        for value in c..c + 12 {
            let note = codec::decode_sharp(value);
            keys.push(PianoKey {
                is_black: !note.accidental.is_natural(),
                label: note.to_string(),
                note,
            });
        }
    }
    keys
}
