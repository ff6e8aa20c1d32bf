//! # Staff Notation Helpers
//!
//! Formats for the staff renderer and staff geometry of a pitch.
//!
//! ## Renderer Key Format (bit-exact)
//! `<lowercase letter><""|#|b>/<octave>`, e.g. `c/4` for middle C,
//! `c#/4`, `bb/3`. The renderer parses this string, so it must not change.
//!
//! ## Staff Positions
//! Positions count diatonic steps above the bottom staff line:
//! lines sit at even positions 0..=8, spaces at odd ones.
//! - Treble clef: bottom line E4, top line F5
//! - Bass clef: bottom line G2, top line A3
//!
//! Accidentals do not move a note on the staff: C#4 sits where C4 does.

use crate::pitch::{Clef, Pitch};

/// Position of the top staff line
const TOP_LINE: i32 = 8;

/// Renderer key for a pitch. The clef does not change the key.
pub fn to_notation_key(pitch: &Pitch, _clef: Clef) -> String {
    format!(
        "{}{}/{}",
        pitch.letter.as_char().to_ascii_lowercase(),
        pitch.accidental.symbol(),
        pitch.octave
    )
}

/// Renderer clef string
pub fn clef_name(clef: Clef) -> &'static str {
    clef.name()
}

fn diatonic_index(pitch: &Pitch) -> i32 {
    pitch.octave as i32 * 7 + pitch.letter.step()
}

fn bottom_line(clef: Clef) -> i32 {
    match clef {
        Clef::Treble => 4 * 7 + 2, // E4
        Clef::Bass => 2 * 7 + 4,   // G2
    }
}

/// Diatonic steps above the bottom staff line (negative below it)
pub fn staff_position(pitch: &Pitch, clef: Clef) -> i32 {
    diatonic_index(pitch) - bottom_line(clef)
}

/// Ledger lines needed to draw the pitch above or below the staff
pub fn ledger_lines(pitch: &Pitch, clef: Clef) -> u32 {
    let position = staff_position(pitch, clef);
    if position < 0 {
        (-position / 2) as u32
    } else if position > TOP_LINE {
        ((position - TOP_LINE) / 2) as u32
    } else {
        0
    }
}
