//! # Practice Session
//!
//! The controller between a front end and the note engine.
//!
//! ## Lifecycle
//! 1. `Session::new` builds the first question for a level
//! 2. The front end draws `question()` and collects an answer
//! 3. `answer()` scores it once; a second answer is refused
//! 4. `next_question()` replaces the question (front ends usually wait
//!    a moment so the feedback can be read)
//!
//! `change_level()` throws away the current question and the score.
//! Questions are not kept once replaced.

use crate::error::QuizError;
use crate::pitch::Pitch;
use crate::profile::{DifficultyLevel, DifficultyProfile, ProfileTable};
use crate::question::{build_question, Question};
use rand::Rng;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Running score for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub correct: u32,
    pub total: u32,
    #[serde(skip)]
    pub response_time: Duration,
}

impl Score {
    pub fn incorrect(&self) -> u32 {
        self.total - self.correct
    }

    /// Whole-number percentage of correct answers, 0 before the first answer
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct as f64 / self.total as f64 * 100.0).round() as u32
    }

    pub fn average_response_time(&self) -> Option<Duration> {
        if self.total == 0 {
            return None;
        }
        Some(self.response_time / self.total)
    }
}

/// Result of answering the current question
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: Pitch,
    /// The answer took longer than the level's suggested time limit
    pub over_time_limit: bool,
}

pub struct Session<R: Rng> {
    table: ProfileTable,
    profile: DifficultyProfile,
    question: Question,
    answered: bool,
    score: Score,
    rng: R,
}

impl<R: Rng> Session<R> {
    pub fn new(table: ProfileTable, level: DifficultyLevel, mut rng: R) -> Result<Self, QuizError> {
        let profile = table.get(level)?.clone();
        let question = build_question(&profile, &mut rng);
        Ok(Self {
            table,
            profile,
            question,
            answered: false,
            score: Score::default(),
            rng,
        })
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn level(&self) -> DifficultyLevel {
        self.profile.level()
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Score an answer to the current question
    pub fn answer(&mut self, answer: &Pitch, elapsed: Duration) -> Result<AnswerOutcome, QuizError> {
        if self.answered {
            return Err(QuizError::AlreadyAnswered);
        }
        self.answered = true;

        let correct = self.question.is_correct(answer);
        self.score.total += 1;
        if correct {
            self.score.correct += 1;
        }
        self.score.response_time += elapsed;

        let over_time_limit = self
            .profile
            .time_limit()
            .map_or(false, |limit| elapsed > limit);

        debug!(
            id = %self.question.id,
            answer = %answer,
            correct,
            elapsed_ms = elapsed.as_millis() as u64,
            "answered question"
        );

        Ok(AnswerOutcome {
            correct,
            correct_answer: self.question.correct_answer,
            over_time_limit,
        })
    }

    /// Replace the current question with a fresh one
    pub fn next_question(&mut self) -> &Question {
        self.question = build_question(&self.profile, &mut self.rng);
        self.answered = false;
        &self.question
    }

    /// Switch level: resets the score and discards the current question
    pub fn change_level(&mut self, level: DifficultyLevel) -> Result<&Question, QuizError> {
        self.profile = self.table.get(level)?.clone();
        self.score = Score::default();
        Ok(self.next_question())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn session(level: DifficultyLevel) -> Session<rand_pcg::Pcg32> {
        Session::new(ProfileTable::builtin().unwrap(), level, create_rng(77)).unwrap()
    }

    fn wrong_option(q: &Question) -> Pitch {
        *q.options.iter().find(|o| **o != q.correct_answer).unwrap()
    }

    #[test]
    fn test_scoring() {
        let mut s = session(DifficultyLevel::Beginner);

        let right = s.question().correct_answer;
        let outcome = s.answer(&right, Duration::from_secs(1)).unwrap();
        assert!(outcome.correct);

        s.next_question();
        let wrong = wrong_option(s.question());
        let outcome = s.answer(&wrong, Duration::from_secs(3)).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_answer, s.question().note);

        let score = s.score();
        assert_eq!(score.correct, 1);
        assert_eq!(score.total, 2);
        assert_eq!(score.incorrect(), 1);
        assert_eq!(score.accuracy(), 50);
        assert_eq!(score.average_response_time(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_enharmonic_answer_is_correct() {
        let mut s = session(DifficultyLevel::Advanced);
        let target = s.question().correct_answer;
        let respelled = crate::codec::decode_flat(target.value());
        assert!(s.answer(&respelled, Duration::ZERO).unwrap().correct);
    }

    #[test]
    fn test_second_answer_refused() {
        let mut s = session(DifficultyLevel::Beginner);
        let right = s.question().correct_answer;
        s.answer(&right, Duration::ZERO).unwrap();
        assert!(matches!(
            s.answer(&right, Duration::ZERO),
            Err(QuizError::AlreadyAnswered)
        ));
        assert_eq!(s.score().total, 1);

        s.next_question();
        assert!(!s.is_answered());
    }

    #[test]
    fn test_change_level_resets_score() {
        let mut s = session(DifficultyLevel::Beginner);
        let right = s.question().correct_answer;
        s.answer(&right, Duration::ZERO).unwrap();

        let q = s.change_level(DifficultyLevel::Advanced).unwrap().clone();
        assert_eq!(s.level(), DifficultyLevel::Advanced);
        assert_eq!(*s.score(), Score::default());
        assert!(!s.is_answered());
        assert!(s.profile().range().contains(&q.note));
    }

    #[test]
    fn test_over_time_limit() {
        let mut s = session(DifficultyLevel::Beginner);
        let right = s.question().correct_answer;
        let outcome = s.answer(&right, Duration::from_secs(11)).unwrap();
        assert!(outcome.correct);
        assert!(outcome.over_time_limit);
    }

    #[test]
    fn test_accuracy_rounding() {
        let score = Score {
            correct: 2,
            total: 3,
            response_time: Duration::ZERO,
        };
        assert_eq!(score.accuracy(), 67);
        assert_eq!(Score::default().accuracy(), 0);
        assert_eq!(Score::default().average_response_time(), None);
    }
}
