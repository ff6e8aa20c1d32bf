//! Terminal front end for the notequiz engine.
//!
//! Draws the question's staff as ASCII art, lists the options, reads answers
//! from any `BufRead` and writes to any `Write`, so a whole session can be
//! driven by a script in tests.

use anyhow::{Context, Result};
use notequiz_core::{
    display_name, ledger_lines, staff_position, to_notation_key, Accidental, Clef, Pitch, Question, QuizError, Score,
    Session,
};
use rand::Rng;
use std::io::{BufRead, Write};
use std::time::Instant;

/// Staff position of the top line
const TOP_LINE: i32 = 8;
/// Width of a drawn staff in characters
const STAFF_WIDTH: usize = 24;
/// Column of the note head
const NOTE_COLUMN: usize = 12;

/// Draw a single note on a five-line staff.
///
/// Staff lines are `-`, the note head is `o` with its accidental to the left,
/// and ledger lines are short dashes around the head.
pub fn render_staff(pitch: &Pitch, clef: Clef) -> String {
    let position = staff_position(pitch, clef);
    let top = position.max(TOP_LINE + 1);
    let bottom = position.min(-1);

    let mut out = format!("{} clef\n", clef);
    for p in (bottom..=top).rev() {
        let on_staff = (0..=TOP_LINE).contains(&p);
        let is_line = p % 2 == 0;
        let fill = if is_line && on_staff { '-' } else { ' ' };
        let mut row = vec![fill; STAFF_WIDTH];

        let ledger = is_line && ((p < 0 && p >= position) || (p > TOP_LINE && p <= position));
        if ledger {
            for c in &mut row[NOTE_COLUMN - 2..=NOTE_COLUMN + 2] {
                *c = '-';
            }
        }

        if p == position {
            row[NOTE_COLUMN] = 'o';
            match pitch.accidental {
                Accidental::Sharp => row[NOTE_COLUMN - 1] = '#',
                Accidental::Flat => row[NOTE_COLUMN - 1] = 'b',
                Accidental::Natural => {}
            }
        }

        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Read an answer: an option number (1-based) or a note name such as `F#4`
pub fn parse_answer(input: &str, question: &Question) -> Result<Pitch, QuizError> {
    let trimmed = input.trim();
    if let Ok(n) = trimmed.parse::<usize>() {
        if (1..=question.options.len()).contains(&n) {
            return Ok(question.options[n - 1]);
        }
        return Err(QuizError::InvalidPitch(format!(
            "option {} does not exist, pick 1-{}",
            n,
            question.options.len()
        )));
    }
    trimmed.parse()
}

/// Print a question: staff, renderer key when asked, numbered options
pub fn write_question<W: Write>(out: &mut W, question: &Question, show_key: bool) -> Result<()> {
    write!(out, "{}", render_staff(&question.note, question.clef))?;
    if show_key {
        writeln!(
            out,
            "key: {} ({} ledger lines)",
            to_notation_key(&question.note, question.clef),
            ledger_lines(&question.note, question.clef)
        )?;
    }
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, display_name(option))?;
    }
    Ok(())
}

/// Run up to `rounds` questions. Stops early on end of input or `q`.
pub fn run_practice<G, I, W>(session: &mut Session<G>, rounds: u32, input: &mut I, out: &mut W) -> Result<Score>
where
    G: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Level: {} ({} questions, answer with a number or a note name, q to quit)",
        session.level(),
        rounds
    )?;

    'rounds: for round in 1..=rounds {
        let question = session.question().clone();
        writeln!(out, "\nQuestion {}/{}", round, rounds)?;
        write_question(out, &question, false)?;

        let started = Instant::now();
        let answer = loop {
            write!(out, "Your answer: ")?;
            out.flush()?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("failed to read answer")?;
            if read == 0 || matches!(line.trim(), "q" | "quit") {
                break 'rounds;
            }

            match parse_answer(&line, &question) {
                Ok(pitch) => break pitch,
                Err(e) => writeln!(out, "{}", e)?,
            }
        };

        let outcome = session.answer(&answer, started.elapsed())?;
        if outcome.correct {
            writeln!(out, "Correct!")?;
        } else {
            writeln!(out, "Incorrect, it was {}", display_name(&outcome.correct_answer))?;
        }
        if outcome.over_time_limit {
            if let Some(limit) = session.profile().time_limit() {
                writeln!(out, "(slower than the {} s limit)", limit.as_secs())?;
            }
        }

        session.next_question();
    }

    let score = *session.score();
    writeln!(
        out,
        "\nCorrect: {}  Total: {}  Accuracy: {}%",
        score.correct,
        score.total,
        score.accuracy()
    )?;
    Ok(score)
}
