//! Integration tests for the note engine
//!
//! Exercises the public API the way a front end does: profiles in,
//! questions out, answers scored.

use notequiz_core::random::create_rng;
use notequiz_core::{
    build_question, codec, generate_options, notes_equal, sample_note, to_notation_key, Accidental, Clef,
    DifficultyLevel, Letter, Pitch, PitchRange, ProfileTable, Session,
};
use std::collections::HashSet;
use std::time::Duration;

fn all_pitches() -> Vec<Pitch> {
    let mut pitches = Vec::new();
    for octave in 2..=6 {
        for letter in Letter::ALL {
            for accidental in [Accidental::Natural, Accidental::Sharp, Accidental::Flat] {
                pitches.push(Pitch::new(letter, accidental, octave));
            }
        }
    }
    pitches
}

#[test]
fn test_decode_encode_is_enharmonic_identity() {
    for p in all_pitches() {
        let decoded = codec::decode_sharp(codec::encode(&p));
        assert!(notes_equal(&decoded, &p), "{} decoded as {}", p, decoded);
    }
}

#[test]
fn test_equality_laws() {
    let pitches = all_pitches();
    for a in &pitches {
        assert!(notes_equal(a, a));
        for b in &pitches {
            assert_eq!(notes_equal(a, b), notes_equal(b, a));
            assert_eq!(notes_equal(a, b), codec::encode(a) == codec::encode(b));
        }
    }
    let octave_four: Vec<&Pitch> = pitches.iter().filter(|p| p.octave == 4).collect();
    for a in &octave_four {
        for b in &octave_four {
            for c in &octave_four {
                if notes_equal(a, b) && notes_equal(b, c) {
                    assert!(notes_equal(a, c));
                }
            }
        }
    }
}

#[test]
fn test_ten_thousand_draws_stay_in_range() {
    let mut rng = create_rng(2024);
    let ranges = [("C2", "G6"), ("C3", "C6"), ("F#3", "Bb3"), ("A4", "A4")];
    for (min, max) in ranges {
        let range = PitchRange::new(min.parse().unwrap(), max.parse().unwrap()).unwrap();
        for _ in 0..10_000 {
            let p = sample_note(&range, true, &mut rng);
            assert!(range.contains(&p), "{} outside {}", p, range);
        }
    }
}

#[test]
fn test_draws_without_accidentals_are_natural() {
    let mut rng = create_rng(31);
    let range = PitchRange::new("C2".parse().unwrap(), "G6".parse().unwrap()).unwrap();
    for _ in 0..10_000 {
        let p = sample_note(&range, false, &mut rng);
        assert_eq!(p.accidental, Accidental::Natural);
    }
}

#[test]
fn test_options_shape() {
    let mut rng = create_rng(55);
    for target in all_pitches() {
        let options = generate_options(&target, 4, &mut rng);
        assert_eq!(options.len(), 4);
        assert!(options.iter().any(|o| notes_equal(o, &target)));
        let values: HashSet<i32> = options.iter().map(codec::encode).collect();
        assert_eq!(values.len(), 4);
    }
}

#[test]
fn test_notation_keys() {
    let c_sharp = Pitch::new(Letter::C, Accidental::Sharp, 4);
    let b_flat = Pitch::new(Letter::B, Accidental::Flat, 3);
    assert_eq!(to_notation_key(&c_sharp, Clef::Treble), "c#/4");
    assert_eq!(to_notation_key(&b_flat, Clef::Bass), "bb/3");
}

#[test]
fn test_beginner_scenario() {
    let table = ProfileTable::builtin().unwrap();
    let beginner = table.get(DifficultyLevel::Beginner).unwrap();
    let mut rng = create_rng(10);
    for _ in 0..2_000 {
        let q = build_question(beginner, &mut rng);
        assert!(q.note.octave == 4 || q.note.octave == 5, "{}", q.note);
        assert_eq!(q.note.accidental.symbol(), "");
        assert_eq!(q.clef.name(), "treble");
    }
}

#[test]
fn test_single_note_range_always_returns_it() {
    let mut rng = create_rng(0);
    let g4: Pitch = "G4".parse().unwrap();
    let range = PitchRange::new(g4, g4).unwrap();
    for allow_accidentals in [true, false] {
        for _ in 0..1_000 {
            assert!(sample_note(&range, allow_accidentals, &mut rng).same_spelling(&g4));
        }
    }
}

#[test]
fn test_d_sharp_equals_e_flat() {
    let d_sharp = Pitch::new(Letter::D, Accidental::Sharp, 4);
    let e_flat = Pitch::new(Letter::E, Accidental::Flat, 4);
    assert!(notes_equal(&d_sharp, &e_flat));
}

#[test]
fn test_session_round_trip() {
    let table = ProfileTable::builtin().unwrap();
    let mut session = Session::new(table, DifficultyLevel::Intermediate, create_rng(3)).unwrap();

    for round in 0..20 {
        let q = session.question().clone();
        let pick = q.options[round % q.options.len()];
        let outcome = session.answer(&pick, Duration::from_millis(800)).unwrap();
        assert_eq!(outcome.correct, notes_equal(&pick, &q.correct_answer));
        session.next_question();
    }

    let score = session.score();
    assert_eq!(score.total, 20);
    assert!(score.correct <= 20);
    assert_eq!(score.average_response_time(), Some(Duration::from_millis(800)));
}
