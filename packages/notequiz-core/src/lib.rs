//! Note model and question engine for a staff-reading quiz.
//!
//! A note is drawn on a staff and the user names it from four options.
//! This crate owns everything that is not drawing: the pitch model and its
//! integer encoding, random notes within a level's range, distractor options,
//! question assembly, difficulty profiles, and a session controller that keeps
//! score.

pub mod api;
pub mod codec;
pub mod distractor;
pub mod error;
pub mod keyboard;
pub mod notation;
pub mod pitch;
pub mod profile;
pub mod question;
pub mod random;
pub mod sampler;
pub mod session;

pub use api::{display_name, generate_options, notes_equal, sample_note, to_notation_key};
pub use error::*;
pub use keyboard::{keyboard_keys, PianoKey};
pub use notation::{clef_name, ledger_lines, staff_position};
pub use pitch::{Accidental, Clef, Letter, Pitch, PitchRange, MAX_OCTAVE, MIN_OCTAVE};
pub use profile::{DifficultyLevel, DifficultyProfile, ProfileTable};
pub use question::{build_question, Question, QuestionId};
pub use session::{AnswerOutcome, Score, Session};
