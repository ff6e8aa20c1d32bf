//! # Pitch Model
//!
//! Types for the notes the quiz shows and asks about.
//!
//! ## Type Hierarchy
//! ```text
//! Pitch
//!   ├── letter: Letter (C D E F G A B)
//!   ├── accidental: Accidental (natural, #, b)
//!   └── octave: i8 (C4 = middle C)
//!
//! PitchRange (min..=max, ordered by pitch-value)
//! Clef (treble | bass)
//! ```
//!
//! ## Pitch-Value
//! Every pitch maps to one integer, the MIDI note number:
//! `(octave + 1) * 12 + letter_base + accidental_offset`, so C4 = 60.
//!
//! ## Equality (IMPORTANT)
//! Pitches compare, order and hash by pitch-value, not by spelling.
//! `C#4 == Db4` holds: the quiz asks "which pitch is this", not "how is it spelled".
//! Use [`Pitch::same_spelling`] when the spelling matters.
//!
//! ## Text Form
//! `<LETTER><""|#|b><octave>`, e.g. `C4`, `F#3`, `Bb5`. Parsing accepts a
//! lowercase letter too. Serde uses the same text form.

use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Lowest octave a difficulty profile may reach
pub const MIN_OCTAVE: i8 = 2;
/// Highest octave a difficulty profile may reach
pub const MAX_OCTAVE: i8 = 6;

/// Note letters C through B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Letter {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in ascending order within an octave
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Semitones above C
    pub fn base_value(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Diatonic steps above C (C = 0 ... B = 6)
    pub fn step(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

/// Accidentals: natural (none), sharp, or flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    #[default]
    Natural,
    Sharp, // #
    Flat,  // b
}

impl Accidental {
    /// Semitone offset applied to the letter
    pub fn offset(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    /// Symbol used in display names and notation keys
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }

    pub fn is_natural(self) -> bool {
        self == Accidental::Natural
    }
}

/// Staff clef. Affects where a note is drawn, never its pitch-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    Treble,
    Bass,
}

impl Clef {
    /// Clef string understood by the staff renderer
    pub fn name(self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Bass => "bass",
        }
    }
}

impl fmt::Display for Clef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Clef {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "treble" => Ok(Clef::Treble),
            "bass" => Ok(Clef::Bass),
            other => Err(QuizError::InvalidClef(other.to_string())),
        }
    }
}

/// A named musical tone
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pitch {
    pub letter: Letter,
    pub accidental: Accidental,
    pub octave: i8,
}

impl Pitch {
    pub const fn new(letter: Letter, accidental: Accidental, octave: i8) -> Self {
        Self {
            letter,
            accidental,
            octave,
        }
    }

    pub const fn natural(letter: Letter, octave: i8) -> Self {
        Self::new(letter, Accidental::Natural, octave)
    }

    /// Integer pitch-value (MIDI note number, C4 = 60)
    pub fn value(&self) -> i32 {
        (self.octave as i32 + 1) * 12 + self.letter.base_value() + self.accidental.offset()
    }

    /// True when both pitches are written identically, not merely equal in value
    pub fn same_spelling(&self, other: &Pitch) -> bool {
        self.letter == other.letter
            && self.accidental == other.accidental
            && self.octave == other.octave
    }

    /// Same letter and octave with the accidental removed
    pub fn without_accidental(&self) -> Pitch {
        Pitch::natural(self.letter, self.octave)
    }
}

impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for Pitch {}

impl Hash for Pitch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.letter.as_char(),
            self.accidental.symbol(),
            self.octave
        )
    }
}

impl FromStr for Pitch {
    type Err = QuizError;

    /// Parse `C4`, `c#4`, `Bb3`, `G-1`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || QuizError::InvalidPitch(format!("'{}' is not a note like C4, F#3 or Bb5", trimmed));

        let mut chars = trimmed.chars();
        let letter = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;
        let rest = chars.as_str();

        let (accidental, octave_text) = if let Some(r) = rest.strip_prefix('#') {
            (Accidental::Sharp, r)
        } else if let Some(r) = rest.strip_prefix('b') {
            (Accidental::Flat, r)
        } else {
            (Accidental::Natural, rest)
        };

        if octave_text.starts_with('+') {
            return Err(invalid());
        }
        let octave: i8 = octave_text.parse().map_err(|_| invalid())?;
        Ok(Pitch::new(letter, accidental, octave))
    }
}

impl TryFrom<String> for Pitch {
    type Error = QuizError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pitch> for String {
    fn from(p: Pitch) -> String {
        p.to_string()
    }
}

/// Inclusive sampling bounds, ordered by pitch-value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchRange {
    min: Pitch,
    max: Pitch,
}

impl PitchRange {
    /// Build a range. Fails when `min` sits above `max`; bounds are never swapped.
    pub fn new(min: Pitch, max: Pitch) -> Result<Self, QuizError> {
        if min.value() > max.value() {
            return Err(QuizError::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Pitch {
        self.min
    }

    pub fn max(&self) -> Pitch {
        self.max
    }

    /// True when the pitch-value lies within the closed range
    pub fn contains_value(&self, value: i32) -> bool {
        (self.min.value()..=self.max.value()).contains(&value)
    }

    pub fn contains(&self, pitch: &Pitch) -> bool {
        self.contains_value(pitch.value())
    }
}

impl fmt::Display for PitchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_c_is_60() {
        assert_eq!(Pitch::natural(Letter::C, 4).value(), 60);
        assert_eq!(Pitch::natural(Letter::A, 4).value(), 69);
        assert_eq!(Pitch::new(Letter::B, Accidental::Flat, 3).value(), 58);
    }

    #[test]
    fn test_enharmonic_pitches_are_equal() {
        let d_sharp = Pitch::new(Letter::D, Accidental::Sharp, 4);
        let e_flat = Pitch::new(Letter::E, Accidental::Flat, 4);
        assert_eq!(d_sharp, e_flat);
        assert!(!d_sharp.same_spelling(&e_flat));
    }

    #[test]
    fn test_cross_octave_enharmonics() {
        // B#3 and C4 share a value, as do Cb5 and B4
        let b_sharp = Pitch::new(Letter::B, Accidental::Sharp, 3);
        assert_eq!(b_sharp, Pitch::natural(Letter::C, 4));
        let c_flat = Pitch::new(Letter::C, Accidental::Flat, 5);
        assert_eq!(c_flat, Pitch::natural(Letter::B, 4));
    }

    #[test]
    fn test_display() {
        assert_eq!(Pitch::new(Letter::C, Accidental::Sharp, 4).to_string(), "C#4");
        assert_eq!(Pitch::new(Letter::B, Accidental::Flat, 3).to_string(), "Bb3");
        assert_eq!(Pitch::natural(Letter::G, 5).to_string(), "G5");
    }

    #[test]
    fn test_parse() {
        let p: Pitch = "c#4".parse().unwrap();
        assert!(p.same_spelling(&Pitch::new(Letter::C, Accidental::Sharp, 4)));

        let p: Pitch = " Bb3 ".parse().unwrap();
        assert!(p.same_spelling(&Pitch::new(Letter::B, Accidental::Flat, 3)));

        let p: Pitch = "bb3".parse().unwrap();
        assert!(p.same_spelling(&Pitch::new(Letter::B, Accidental::Flat, 3)));

        let p: Pitch = "b3".parse().unwrap();
        assert!(p.same_spelling(&Pitch::natural(Letter::B, 3)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("H4".parse::<Pitch>().is_err());
        assert!("C".parse::<Pitch>().is_err());
        assert!("C##4".parse::<Pitch>().is_err());
        assert!("".parse::<Pitch>().is_err());
        assert!("C+4".parse::<Pitch>().is_err());
        assert!("F#+3".parse::<Pitch>().is_err());
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let c4 = Pitch::natural(Letter::C, 4);
        let c5 = Pitch::natural(Letter::C, 5);
        assert!(PitchRange::new(c4, c5).is_ok());
        assert!(PitchRange::new(c4, c4).is_ok());

        match PitchRange::new(c5, c4) {
            Err(QuizError::InvalidRange { min, max }) => {
                assert_eq!(min, "C5");
                assert_eq!(max, "C4");
            }
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_clef_parse_and_name() {
        assert_eq!("Treble".parse::<Clef>().unwrap(), Clef::Treble);
        assert_eq!("bass".parse::<Clef>().unwrap().name(), "bass");
        assert!("alto".parse::<Clef>().is_err());
    }
}
