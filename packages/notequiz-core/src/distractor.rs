//! # Distractor Set Generator
//!
//! Builds the multiple-choice options around a correct pitch.
//!
//! ## Algorithm
//! 1. Start the set with the correct pitch
//! 2. Draw an offset: magnitude uniform in `1..=5`, sign fair
//! 3. Skip values outside the keyboard bound `24..=96` (C1..C7)
//! 4. Spell the value with the distractor table ([`codec::decode_distractor`])
//! 5. Skip values already in the set
//! 6. Shuffle the finished set
//!
//! ## Termination
//! After [`ATTEMPTS_PER_WIDTH`] draws without a new option the magnitude
//! bound grows by one, up to the width of the keyboard bound. If the set is
//! still short, values are taken by scanning outward from the correct pitch.
//! A request for more options than the bound can hold returns what exists.

use crate::codec;
use crate::pitch::Pitch;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

/// Default number of answer options
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Lowest pitch-value a distractor may take (C1)
pub const LOWEST_OPTION_VALUE: i32 = 24;
/// Highest pitch-value a distractor may take (C7)
pub const HIGHEST_OPTION_VALUE: i32 = 96;

/// Initial largest offset in semitones
const INITIAL_MAX_OFFSET: i32 = 5;

/// Draws allowed without progress before the offset bound widens
pub const ATTEMPTS_PER_WIDTH: u32 = 64;

fn in_bound(value: i32) -> bool {
    (LOWEST_OPTION_VALUE..=HIGHEST_OPTION_VALUE).contains(&value)
}

/// Generate `count` shuffled options containing `correct`, all distinct by pitch-value.
///
/// `count` of zero is treated as one.
pub fn generate_options<R: Rng + ?Sized>(correct: &Pitch, count: usize, rng: &mut R) -> Vec<Pitch> {
    let count = count.max(1);
    let target = correct.value();
    let widest = HIGHEST_OPTION_VALUE - LOWEST_OPTION_VALUE;

    let mut options = vec![*correct];
    let mut max_offset = INITIAL_MAX_OFFSET;
    let mut misses = 0;

    while options.len() < count && max_offset <= widest {
        if misses == ATTEMPTS_PER_WIDTH {
            max_offset += 1;
            misses = 0;
            continue;
        }

        let magnitude = rng.gen_range(1..=max_offset);
        let offset = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
        let value = target + offset;

        if !in_bound(value) || options.iter().any(|o| o.value() == value) {
            misses += 1;
            continue;
        }

        options.push(codec::decode_distractor(value));
        misses = 0;
    }

    if options.len() < count {
        warn!(
            correct = %correct,
            count,
            found = options.len(),
            "random distractor search exhausted, scanning outward"
        );
        fill_by_scan(&mut options, target, count);
    }

    if options.len() < count {
        warn!(correct = %correct, count, found = options.len(), "not enough distinct options in bound");
    }

    options.shuffle(rng);
    options
}

/// Fill with the nearest unused values: +1, -1, +2, -2, ...
fn fill_by_scan(options: &mut Vec<Pitch>, target: i32, count: usize) {
    let reach = HIGHEST_OPTION_VALUE - LOWEST_OPTION_VALUE + (target - LOWEST_OPTION_VALUE).abs();
    for distance in 1..=reach {
        for value in [target + distance, target - distance] {
            if options.len() >= count {
                return;
            }
            if in_bound(value) && !options.iter().any(|o| o.value() == value) {
                options.push(codec::decode_distractor(value));
            }
        }
    }
}
