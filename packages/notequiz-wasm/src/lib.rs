use notequiz_core::random::{rng_for, QuizRng};
use notequiz_core::{Clef, DifficultyLevel, Pitch, ProfileTable, QuizError, Session};
use serde::Serialize;
use std::time::Duration;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct QuizErrorJson {
    message: String,
    kind: &'static str,
}

fn error_kind(e: &QuizError) -> &'static str {
    match e {
        QuizError::InvalidRange { .. } | QuizError::OctaveOutOfWindow { .. } | QuizError::NoClefs { .. } => "profile",
        QuizError::Profile(_) | QuizError::MisnamedLevelFile { .. } => "profile",
        QuizError::UnknownLevel(_) => "level",
        QuizError::InvalidPitch(_) | QuizError::InvalidClef(_) => "input",
        QuizError::AlreadyAnswered => "session",
    }
}

fn to_js_error(e: QuizError) -> JsValue {
    let json = QuizErrorJson {
        kind: error_kind(&e),
        message: e.to_string(),
    };
    JsValue::from_str(&serde_json::to_string(&json).unwrap_or_else(|_| e.to_string()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_pitch(text: &str) -> Result<Pitch, JsValue> {
    text.parse().map_err(to_js_error)
}

fn parse_level(text: &str) -> Result<DifficultyLevel, JsValue> {
    text.parse().map_err(to_js_error)
}

fn builtin_table() -> Result<ProfileTable, JsValue> {
    ProfileTable::builtin().map_err(to_js_error)
}

/// Built-in difficulty profiles as a JSON array
#[wasm_bindgen]
pub fn levels() -> Result<String, JsValue> {
    let table = builtin_table()?;
    let profiles: Vec<_> = table.iter().collect();
    to_json(&profiles)
}

/// Build one question for a level, as JSON. A seed makes it reproducible.
#[wasm_bindgen]
pub fn next_question(level: &str, seed: Option<u64>) -> Result<String, JsValue> {
    let table = builtin_table()?;
    let profile = table.get(parse_level(level)?).map_err(to_js_error)?;
    let question = notequiz_core::build_question(profile, &mut rng_for(seed));
    to_json(&question)
}

/// True when `answer` and `correct` name the same pitch (`D#4` and `Eb4` match)
#[wasm_bindgen]
pub fn check_answer(answer: &str, correct: &str) -> Result<bool, JsValue> {
    Ok(notequiz_core::notes_equal(&parse_pitch(answer)?, &parse_pitch(correct)?))
}

/// Answer button label for a note
#[wasm_bindgen]
pub fn display_name(note: &str) -> Result<String, JsValue> {
    Ok(notequiz_core::display_name(&parse_pitch(note)?))
}

/// Staff renderer key for a note, e.g. "c#/4"
#[wasm_bindgen]
pub fn to_notation_key(note: &str, clef: &str) -> Result<String, JsValue> {
    let clef: Clef = clef.parse().map_err(to_js_error)?;
    Ok(notequiz_core::to_notation_key(&parse_pitch(note)?, clef))
}

/// Virtual keyboard keys for an octave span, as JSON
#[wasm_bindgen]
pub fn keyboard_keys(start_octave: i8, end_octave: i8) -> Result<String, JsValue> {
    to_json(&notequiz_core::keyboard_keys(start_octave, end_octave))
}

/// A practice session held by the page
#[wasm_bindgen]
pub struct PracticeSession {
    inner: Session<QuizRng>,
}

#[wasm_bindgen]
impl PracticeSession {
    #[wasm_bindgen(constructor)]
    pub fn new(level: &str, seed: Option<u64>) -> Result<PracticeSession, JsValue> {
        let inner = Session::new(builtin_table()?, parse_level(level)?, rng_for(seed)).map_err(to_js_error)?;
        Ok(PracticeSession { inner })
    }

    /// Current question as JSON
    pub fn question(&self) -> Result<String, JsValue> {
        to_json(self.inner.question())
    }

    /// Score an answer; returns the outcome as JSON
    pub fn answer(&mut self, note: &str, elapsed_ms: u32) -> Result<String, JsValue> {
        let pitch = parse_pitch(note)?;
        let outcome = self
            .inner
            .answer(&pitch, Duration::from_millis(elapsed_ms as u64))
            .map_err(to_js_error)?;
        to_json(&outcome)
    }

    #[wasm_bindgen(js_name = nextQuestion)]
    pub fn next_question(&mut self) -> Result<String, JsValue> {
        to_json(self.inner.next_question())
    }

    /// Switch level, resetting the score
    #[wasm_bindgen(js_name = changeLevel)]
    pub fn change_level(&mut self, level: &str) -> Result<String, JsValue> {
        let level = parse_level(level)?;
        let question = self.inner.change_level(level).map_err(to_js_error)?;
        to_json(question)
    }

    /// Score as JSON: correct, total, accuracy
    pub fn score(&self) -> Result<String, JsValue> {
        let score = self.inner.score();
        #[derive(Serialize)]
        struct ScoreJson {
            correct: u32,
            total: u32,
            accuracy: u32,
        }
        to_json(&ScoreJson {
            correct: score.correct,
            total: score.total,
            accuracy: score.accuracy(),
        })
    }
}
