//! # Random Pitch Sampler
//!
//! Draws one pitch uniformly by pitch-value from a closed [`PitchRange`].
//!
//! ## Accidental Policy
//! With accidentals allowed the raw decode (sharps) is returned as is.
//! Without them a black key is clamped to a natural rather than re-drawn
//! (see [`codec::respell_natural`]). Clamping skews the distribution: the
//! natural above a black key is drawn twice as often as one without.
//!
//! ## Range Boundary
//! Rounding a black key up can leave the range when the draw was `max`.
//! In that case the natural below is used if it is still inside the range.
//! Only a range holding no natural at all (e.g. `A#4..A#4`) yields a note
//! outside it, one semitone above `max`.

use crate::codec;
use crate::pitch::{Pitch, PitchRange};
use rand::Rng;

/// Sample a pitch from `range`, honoring the accidental policy
pub fn sample_note<R: Rng + ?Sized>(range: &PitchRange, allow_accidentals: bool, rng: &mut R) -> Pitch {
    let value = rng.gen_range(range.min().value()..=range.max().value());
    let pitch = codec::decode_sharp(value);

    if allow_accidentals || pitch.accidental.is_natural() {
        return pitch;
    }

    clamp_to_natural(&pitch, range)
}

fn clamp_to_natural(pitch: &Pitch, range: &PitchRange) -> Pitch {
    let up = codec::respell_natural(pitch);
    if range.contains(&up) {
        return up;
    }

    let down = pitch.without_accidental();
    if down.value() < pitch.value() && range.contains(&down) {
        return down;
    }

    up
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::rngs::mock::StepRng;

    fn range(min: &str, max: &str) -> PitchRange {
        PitchRange::new(min.parse().unwrap(), max.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_samples_stay_in_range_with_accidentals() {
        let r = range("C2", "G6");
        let mut rng = create_rng(7);
        for _ in 0..10_000 {
            let p = sample_note(&r, true, &mut rng);
            assert!(r.contains(&p), "{} outside {}", p, r);
        }
    }

    #[test]
    fn test_samples_are_natural_without_accidentals() {
        let r = range("C3", "C6");
        let mut rng = create_rng(11);
        for _ in 0..10_000 {
            let p = sample_note(&r, false, &mut rng);
            assert!(p.accidental.is_natural(), "{} carries an accidental", p);
            assert!(r.contains(&p), "{} outside {}", p, r);
        }
    }

    #[test]
    fn test_both_endpoints_are_drawn() {
        let r = range("C4", "D4");
        let mut rng = create_rng(3);
        let values: Vec<i32> = (0..500).map(|_| sample_note(&r, true, &mut rng).value()).collect();
        assert!(values.contains(&60));
        assert!(values.contains(&62));
    }

    #[test]
    fn test_single_note_range() {
        let r = range("F#3", "F#3");
        let mut rng = create_rng(1);
        for _ in 0..100 {
            let p = sample_note(&r, true, &mut rng);
            assert!(p.same_spelling(&"F#3".parse().unwrap()));
        }
    }

    #[test]
    fn test_lowest_draw_with_step_rng() {
        // A zero stream always draws the lower bound
        let r = range("C#4", "E4");
        let mut rng = StepRng::new(0, 0);
        assert_eq!(sample_note(&r, true, &mut rng).to_string(), "C#4");
        assert_eq!(sample_note(&r, false, &mut rng).to_string(), "D4");
    }

    #[test]
    fn test_clamp_rounds_down_at_top_of_range() {
        let r = range("A4", "A#4");
        let black = "A#4".parse().unwrap();
        assert_eq!(clamp_to_natural(&black, &r).to_string(), "A4");
    }

    #[test]
    fn test_clamp_without_any_natural_in_range() {
        let r = range("A#4", "A#4");
        let black = "A#4".parse().unwrap();
        assert_eq!(clamp_to_natural(&black, &r).to_string(), "B4");
    }
}
