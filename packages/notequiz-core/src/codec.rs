//! # Pitch Codec
//!
//! Conversion between [`Pitch`] and its integer pitch-value.
//!
//! Encoding is total. Decoding is not unique: value 61 could be written C#4 or
//! Db4, so each decoder applies a fixed spelling table per pitch class:
//!
//! | value % 12 | 1  | 3  | 6  | 8  | 10 |
//! |------------|----|----|----|----|----|
//! | sharp      | C# | D# | F# | G# | A# |
//! | flat       | Db | Eb | Gb | Ab | Bb |
//! | distractor | C# | Eb | F# | G# | Bb |
//!
//! The distractor table mixes spellings on purpose; it is the spelling the
//! answer buttons have always used and does not follow the target's policy.

use crate::pitch::{Accidental, Letter, Pitch};

type Spelling = (Letter, Accidental);

const N: Accidental = Accidental::Natural;
const S: Accidental = Accidental::Sharp;
const F: Accidental = Accidental::Flat;

/// Sharps on every black key
const SHARP_SPELLINGS: [Spelling; 12] = [
    (Letter::C, N),
    (Letter::C, S),
    (Letter::D, N),
    (Letter::D, S),
    (Letter::E, N),
    (Letter::F, N),
    (Letter::F, S),
    (Letter::G, N),
    (Letter::G, S),
    (Letter::A, N),
    (Letter::A, S),
    (Letter::B, N),
];

/// Flats on every black key
const FLAT_SPELLINGS: [Spelling; 12] = [
    (Letter::C, N),
    (Letter::D, F),
    (Letter::D, N),
    (Letter::E, F),
    (Letter::E, N),
    (Letter::F, N),
    (Letter::G, F),
    (Letter::G, N),
    (Letter::A, F),
    (Letter::A, N),
    (Letter::B, F),
    (Letter::B, N),
];

/// Spelling used for multiple-choice distractors
const DISTRACTOR_SPELLINGS: [Spelling; 12] = [
    (Letter::C, N),
    (Letter::C, S),
    (Letter::D, N),
    (Letter::E, F),
    (Letter::E, N),
    (Letter::F, N),
    (Letter::F, S),
    (Letter::G, N),
    (Letter::G, S),
    (Letter::A, N),
    (Letter::B, F),
    (Letter::B, N),
];

/// Pitch-value of a pitch (C4 = 60)
pub fn encode(pitch: &Pitch) -> i32 {
    pitch.value()
}

/// Octave and pitch class of a value. Floors for negative values.
fn split(value: i32) -> (i8, usize) {
    let octave = value.div_euclid(12) - 1;
    let class = value.rem_euclid(12) as usize;
    (octave as i8, class)
}

fn decode_with(value: i32, table: &[Spelling; 12]) -> Pitch {
    let (octave, class) = split(value);
    let (letter, accidental) = table[class];
    Pitch::new(letter, accidental, octave)
}

/// Raw decode: black keys are spelled with sharps
pub fn decode_sharp(value: i32) -> Pitch {
    decode_with(value, &SHARP_SPELLINGS)
}

/// Decode with flats on black keys
pub fn decode_flat(value: i32) -> Pitch {
    decode_with(value, &FLAT_SPELLINGS)
}

/// Decode with the fixed distractor spelling table
pub fn decode_distractor(value: i32) -> Pitch {
    decode_with(value, &DISTRACTOR_SPELLINGS)
}

/// Natural-only spelling of a pitch.
///
/// A pitch carrying an accidental is first re-spelled with flats; when that
/// is still not natural the accidental is dropped and letter and octave kept.
/// Black keys therefore land on the natural one semitone above. Naturals pass
/// through unchanged.
pub fn respell_natural(pitch: &Pitch) -> Pitch {
    if pitch.accidental.is_natural() {
        return *pitch;
    }

    let flat = decode_flat(pitch.value());
    if flat.accidental.is_natural() {
        return flat;
    }
    flat.without_accidental()
}

/// Display name: `<LETTER><""|#|b><octave>`
pub fn display(pitch: &Pitch) -> String {
    pitch.to_string()
}
