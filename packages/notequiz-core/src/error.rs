//! # Error Types
//!
//! This module defines all error types for the note engine.
//!
//! Sampling and distractor generation never fail. Errors come from the edges:
//! loading difficulty profiles, parsing note text typed by a user, and the
//! session controller refusing an answer.
//!
//! ## Error Types
//! - `InvalidRange` - A pitch range whose lower bound sits above its upper bound
//! - `OctaveOutOfWindow` - A profile range end outside octaves 2..=6
//! - `NoClefs` - A profile that allows no clef at all
//! - `UnknownLevel` - A level name missing from the profile table
//! - `InvalidPitch` - Note text that is not `<letter>[#|b]<octave>`
//! - `InvalidClef` - A clef name other than treble or bass
//! - `Profile` - YAML that does not deserialize into profiles
//! - `MisnamedLevelFile` - An embedded profile file whose name differs from its level
//! - `AlreadyAnswered` - A second answer to the current question
//!
//! ## Usage
//! ```rust
//! use notequiz_core::{PitchRange, Pitch, QuizError};
//!
//! let min: Pitch = "C5".parse()?;
//! let max: Pitch = "C4".parse()?;
//! match PitchRange::new(min, max) {
//!     Ok(range) => println!("Range: {}", range),
//!     Err(QuizError::InvalidRange { min, max }) => {
//!         eprintln!("Range {}..{} is inverted", min, max);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # Ok::<(), QuizError>(())
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    /// Range with `min` above `max`.
    ///
    /// Raised when a profile is loaded, never during sampling.
    ///
    /// # Example
    /// ```
    /// # use notequiz_core::QuizError;
    /// let err = QuizError::InvalidRange {
    ///     min: "C5".to_string(),
    ///     max: "C4".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid range: C5 is above C4");
    /// ```
    #[error("Invalid range: {min} is above {max}")]
    InvalidRange { min: String, max: String },

    /// A profile range end outside the octave window.
    #[error("Pitch {pitch} is outside the octave window {low}..={high}")]
    OctaveOutOfWindow { pitch: String, low: i8, high: i8 },

    /// A profile with an empty clef list.
    #[error("Level '{level}' must allow at least one clef")]
    NoClefs { level: String },

    /// A level name that is not in the profile table.
    ///
    /// # Example
    /// ```
    /// # use notequiz_core::QuizError;
    /// let err = QuizError::UnknownLevel("virtuoso".to_string());
    /// assert_eq!(err.to_string(), "Unknown level: virtuoso");
    /// ```
    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Invalid pitch: {0}")]
    InvalidPitch(String),

    #[error("Unknown clef '{0}' (expected treble or bass)")]
    InvalidClef(String),

    /// YAML syntax or shape error in a profile document.
    #[error("Invalid profile: {0}")]
    Profile(#[from] serde_yaml::Error),

    #[error("Level file '{file}' declares level '{level}'")]
    MisnamedLevelFile { file: String, level: String },

    #[error("The current question has already been answered")]
    AlreadyAnswered,
}
