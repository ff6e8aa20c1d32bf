//! Question assembly: one round of the quiz.

use crate::distractor::{generate_options, DEFAULT_OPTION_COUNT};
use crate::pitch::{Clef, Pitch};
use crate::profile::DifficultyProfile;
use crate::sampler::sample_note;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Display key for a question. Unique enough for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuestionId(u64);

impl QuestionId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen())
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl Serialize for QuestionId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A target note on a staff with its answer options.
///
/// `correct_answer` duplicates `note` so that what is drawn and what is
/// scored stay separate fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub note: Pitch,
    pub clef: Clef,
    pub options: Vec<Pitch>,
    pub correct_answer: Pitch,
}

impl Question {
    /// True when `answer` is the same pitch as the correct answer
    pub fn is_correct(&self, answer: &Pitch) -> bool {
        *answer == self.correct_answer
    }
}

/// Build a question for a profile: random clef, sampled target, four options.
///
/// Always succeeds for a validated profile.
pub fn build_question<R: Rng + ?Sized>(profile: &DifficultyProfile, rng: &mut R) -> Question {
    // A loaded profile always has at least one clef
    let clef = profile.clefs().choose(rng).copied().unwrap_or(Clef::Treble);
    let note = sample_note(profile.range(), profile.allow_accidentals(), rng);
    let options = generate_options(&note, DEFAULT_OPTION_COUNT, rng);
    let id = QuestionId::random(rng);

    debug!(%id, level = %profile.level(), %clef, %note, "built question");

    Question {
        id,
        note,
        clef,
        options,
        correct_answer: note,
    }
}
