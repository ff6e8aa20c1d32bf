//! # Difficulty Profiles
//!
//! Static configuration for each practice level, read from YAML.
//!
//! ## Format
//! ```yaml
//! level: beginner
//! clefs: [treble]
//! range:
//!   min: C4
//!   max: C5
//! allow-accidentals: false
//! ledger-lines: 0
//! time-limit: 10
//! ```
//!
//! `ledger-lines` and `time-limit` are advisory. The engine never enforces
//! them; the session controller reports a slow answer and front ends may
//! choose staves accordingly.
//!
//! ## Validation
//! Profiles are checked when they are loaded, never during sampling:
//! - `range.min` must not sit above `range.max`
//! - both range ends must sound in octaves 2..=6, so `Cb2` (a B1) is refused
//! - at least one clef
//!
//! The built-in table comes from the `notequiz-levels` crate.

use crate::codec::decode_sharp;
use crate::error::QuizError;
use crate::pitch::{Clef, Pitch, PitchRange, MAX_OCTAVE, MIN_OCTAVE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

/// Practice level names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Beginner,
        DifficultyLevel::Intermediate,
        DifficultyLevel::Advanced,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DifficultyLevel {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(DifficultyLevel::Beginner),
            "intermediate" => Ok(DifficultyLevel::Intermediate),
            "advanced" => Ok(DifficultyLevel::Advanced),
            _ => Err(QuizError::UnknownLevel(s.trim().to_string())),
        }
    }
}

/// Raw profile for YAML deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawProfile {
    level: DifficultyLevel,
    clefs: Vec<Clef>,
    range: RawRange,
    allow_accidentals: bool,
    #[serde(default)]
    ledger_lines: u8,
    time_limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawRange {
    min: Pitch,
    max: Pitch,
}

/// Validated configuration for one practice level.
///
/// Only built through YAML loading, so the clef list is never empty and the
/// range always sits inside the octave window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyProfile {
    level: DifficultyLevel,
    clefs: Vec<Clef>,
    #[serde(serialize_with = "serialize_range")]
    range: PitchRange,
    allow_accidentals: bool,
    ledger_lines: u8,
    #[serde(rename = "timeLimit")]
    time_limit_secs: Option<u32>,
}

fn serialize_range<S: serde::Serializer>(range: &PitchRange, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut s = serializer.serialize_struct("PitchRange", 2)?;
    s.serialize_field("min", &range.min())?;
    s.serialize_field("max", &range.max())?;
    s.end()
}

impl DifficultyProfile {
    /// Parse and validate a single profile document
    pub fn from_yaml(yaml: &str) -> Result<Self, QuizError> {
        let raw: RawProfile = serde_yaml::from_str(yaml)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawProfile) -> Result<Self, QuizError> {
        if raw.clefs.is_empty() {
            return Err(QuizError::NoClefs {
                level: raw.level.to_string(),
            });
        }

        for end in [raw.range.min, raw.range.max] {
            let sounding = decode_sharp(end.value()).octave;
            if !(MIN_OCTAVE..=MAX_OCTAVE).contains(&sounding) {
                return Err(QuizError::OctaveOutOfWindow {
                    pitch: end.to_string(),
                    low: MIN_OCTAVE,
                    high: MAX_OCTAVE,
                });
            }
        }

        let range = PitchRange::new(raw.range.min, raw.range.max)?;

        Ok(Self {
            level: raw.level,
            clefs: raw.clefs,
            range,
            allow_accidentals: raw.allow_accidentals,
            ledger_lines: raw.ledger_lines,
            time_limit_secs: raw.time_limit,
        })
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    /// Clefs a question may be drawn on, never empty
    pub fn clefs(&self) -> &[Clef] {
        &self.clefs
    }

    pub fn range(&self) -> &PitchRange {
        &self.range
    }

    pub fn allow_accidentals(&self) -> bool {
        self.allow_accidentals
    }

    /// Maximum ledger lines (advisory)
    pub fn ledger_lines(&self) -> u8 {
        self.ledger_lines
    }

    /// Suggested time per question (advisory)
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_secs.map(|secs| Duration::from_secs(secs as u64))
    }
}

/// Profiles keyed by level
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    profiles: BTreeMap<DifficultyLevel, DifficultyProfile>,
}

impl ProfileTable {
    /// The profiles shipped with the `notequiz-levels` crate
    pub fn builtin() -> Result<Self, QuizError> {
        let mut profiles = BTreeMap::new();
        for file in notequiz_levels::level_files() {
            let profile = DifficultyProfile::from_yaml(file.content)?;
            if profile.level.name() != file.name {
                return Err(QuizError::MisnamedLevelFile {
                    file: file.name.to_string(),
                    level: profile.level.to_string(),
                });
            }
            debug!(file = file.name, "loaded built-in profile");
            profiles.insert(profile.level, profile);
        }
        Ok(Self { profiles })
    }

    /// Parse a YAML sequence of profiles. A level listed twice keeps the last entry.
    pub fn from_yaml(yaml: &str) -> Result<Self, QuizError> {
        let raw: Vec<RawProfile> = serde_yaml::from_str(yaml)?;
        let mut profiles = BTreeMap::new();
        for entry in raw {
            let profile = DifficultyProfile::from_raw(entry)?;
            profiles.insert(profile.level, profile);
        }
        Ok(Self { profiles })
    }

    pub fn get(&self, level: DifficultyLevel) -> Result<&DifficultyProfile, QuizError> {
        self.profiles
            .get(&level)
            .ok_or_else(|| QuizError::UnknownLevel(level.to_string()))
    }

    /// Profiles in level order
    pub fn iter(&self) -> impl Iterator<Item = &DifficultyProfile> {
        self.profiles.values()
    }

    pub fn levels(&self) -> Vec<DifficultyLevel> {
        self.profiles.keys().copied().collect()
    }
}
