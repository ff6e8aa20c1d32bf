//! # Public API
//!
//! The call interface a session controller or front end uses.
//!
//! ## Functions
//!
//! - [`sample_note()`] - Random pitch in a range under an accidental policy
//! - [`generate_options()`] - Shuffled answer options around a target
//! - [`notes_equal()`] - Pitch equality by pitch-value
//! - [`display_name()`] - Label shown on answer buttons
//! - [`to_notation_key()`] - Key string for the staff renderer
//!
//! ## Typical Usage
//!
//! ```rust
//! use notequiz_core::{generate_options, notes_equal, random::create_rng, sample_note, PitchRange};
//!
//! let range = PitchRange::new("C4".parse()?, "C5".parse()?)?;
//! let mut rng = create_rng(42);
//!
//! let target = sample_note(&range, false, &mut rng);
//! let options = generate_options(&target, 4, &mut rng);
//!
//! assert_eq!(options.len(), 4);
//! assert!(options.iter().any(|o| notes_equal(o, &target)));
//! # Ok::<(), notequiz_core::QuizError>(())
//! ```

use crate::{codec, distractor, notation, sampler, Clef, Pitch, PitchRange};
use rand::Rng;

/// Sample a pitch uniformly by pitch-value from `range`.
///
/// With `allow_accidentals` false the result is always natural; see
/// [`crate::sampler`] for how black keys are clamped.
///
/// # Example
/// ```rust
/// use notequiz_core::{random::create_rng, sample_note, PitchRange};
///
/// let c4 = "C4".parse()?;
/// let range = PitchRange::new(c4, c4)?;
/// let note = sample_note(&range, true, &mut create_rng(1));
/// assert_eq!(note.to_string(), "C4");
/// # Ok::<(), notequiz_core::QuizError>(())
/// ```
pub fn sample_note<R: Rng + ?Sized>(range: &PitchRange, allow_accidentals: bool, rng: &mut R) -> Pitch {
    sampler::sample_note(range, allow_accidentals, rng)
}

/// Build `count` shuffled options containing `target`, distinct by pitch-value.
pub fn generate_options<R: Rng + ?Sized>(target: &Pitch, count: usize, rng: &mut R) -> Vec<Pitch> {
    distractor::generate_options(target, count, rng)
}

/// True when both pitches share a pitch-value (`D#4` equals `Eb4`).
///
/// # Example
/// ```rust
/// use notequiz_core::notes_equal;
///
/// assert!(notes_equal(&"D#4".parse()?, &"Eb4".parse()?));
/// assert!(!notes_equal(&"D4".parse()?, &"D5".parse()?));
/// # Ok::<(), notequiz_core::QuizError>(())
/// ```
pub fn notes_equal(a: &Pitch, b: &Pitch) -> bool {
    codec::encode(a) == codec::encode(b)
}

/// Display label, e.g. `C#4`
pub fn display_name(pitch: &Pitch) -> String {
    codec::display(pitch)
}

/// Staff renderer key, e.g. `c#/4`
///
/// # Example
/// ```rust
/// use notequiz_core::{to_notation_key, Clef};
///
/// assert_eq!(to_notation_key(&"C#4".parse()?, Clef::Treble), "c#/4");
/// assert_eq!(to_notation_key(&"Bb3".parse()?, Clef::Bass), "bb/3");
/// # Ok::<(), notequiz_core::QuizError>(())
/// ```
pub fn to_notation_key(pitch: &Pitch, clef: Clef) -> String {
    notation::to_notation_key(pitch, clef)
}
