//! # Vision - The Attention / Visual-Acuity Field
//!
//! Turns eye position and attention position into per-letter evidence.
//! Attention falls off as a Gaussian around the attention center, with a
//! sharper (skewed) falloff on the left side; an additive floor keeps it
//! strictly positive everywhere. Acuity decays with retinal eccentricity
//! from the eye position and is 1 at fixation.
//!
//! The constants in this module are empirically calibrated and carried
//! as-is, not derived.
//!
//! Eccentricities are signed distances in letter positions. The skew is
//! keyed on the sign of the attention eccentricity (left/right of the
//! attention center), not on eye eccentricity.

use crate::ngram::BigramOccurrence;
use crate::stimulus::WordSpan;
use crate::MIN_ATTENTION;

/// Attention weight at a signed eccentricity from the attention center.
///
/// Left of the center (negative eccentricity) the distribution narrows by
/// the skew factor. The additive floor keeps the result at or above 0.25.
pub fn attention_skewed(attend_width: f32, attention_eccentricity: f32, attention_skew: f32) -> f32 {
    if attention_eccentricity < 0.0 {
        // Attention left
        1.0 / attend_width
            * (-attention_eccentricity.abs().powi(2)
                / (2.0 * (attend_width / attention_skew).powi(2)))
            .exp()
            + MIN_ATTENTION
    } else {
        // Attention right
        1.0 / attend_width
            * (-attention_eccentricity.abs().powi(2) / (2.0 * attend_width.powi(2))).exp()
            + MIN_ATTENTION
    }
}

/// Visual acuity at an absolute eye eccentricity.
///
/// Parameters from Harvey & Dumoulin (2007); 35.555556 makes acuity at
/// 0 degrees equal to 1. Strictly decreasing; callers pass |eccentricity|.
pub fn acuity(eye_eccentricity: f32, let_per_deg: f32) -> f32 {
    (1.0 / 35.555556) / (0.018 * (eye_eccentricity * let_per_deg + 1.0 / 0.64))
}

/// External input of one bigram occurrence: the geometric mean of its two
/// letters' attention-times-acuity products, scaled by the occurrence's
/// edge-position weight.
pub fn bigram_external_input(
    occurrence: &BigramOccurrence,
    eye_position: f32,
    attention_position: f32,
    attend_width: f32,
    let_per_deg: f32,
    attention_skew: f32,
) -> f32 {
    let attention_eccentricity1 = occurrence.first as f32 - attention_position;
    let attention_eccentricity2 = occurrence.second as f32 - attention_position;
    let eye_eccentricity1 = (occurrence.first as f32 - eye_position).abs();
    let eye_eccentricity2 = (occurrence.second as f32 - eye_position).abs();

    let attention1 = attention_skewed(attend_width, attention_eccentricity1, attention_skew);
    let attention2 = attention_skewed(attend_width, attention_eccentricity2, attention_skew);
    let acuity1 = acuity(eye_eccentricity1, let_per_deg);
    let acuity2 = acuity(eye_eccentricity2, let_per_deg);

    (attention1 * acuity1 * attention2 * acuity2).sqrt() * occurrence.weight
}

/// External input of one monogram: attention times acuity times the
/// location-weight multiplier (2.0 at the outer edge of the word being
/// scored, 0.5 inside).
pub fn monogram_external_input(
    position: f32,
    location_weight: f32,
    eye_position: f32,
    attention_position: f32,
    attend_width: f32,
    let_per_deg: f32,
    attention_skew: f32,
) -> f32 {
    let attention = attention_skewed(attend_width, position - attention_position, attention_skew);
    let visual_acuity = acuity((position - eye_position).abs(), let_per_deg);
    attention * visual_acuity * location_weight
}

/// Summed monogram input over a word span, used to weigh forward-saccade
/// targets.
///
/// Outer letters count double except on the fixated word, where only the
/// rightmost letter does - the left part is already behind the eyes when
/// planning a forward saccade.
pub fn monogram_attention_sum(
    span: WordSpan,
    eye_position: f32,
    attention_position: f32,
    attend_width: f32,
    attention_skew: f32,
    let_per_deg: f32,
    foveal_word: bool,
) -> f32 {
    let mut sum_attention_letters = 0.0;

    for letter in span.start..=span.end {
        let mut location_weight = 0.5;
        if foveal_word {
            if letter == span.end {
                location_weight = 2.0;
            }
        } else if letter == span.start || letter == span.end {
            location_weight = 2.0;
        }

        sum_attention_letters += monogram_external_input(
            letter as f32,
            location_weight,
            eye_position,
            attention_position,
            attend_width,
            let_per_deg,
            attention_skew,
        );
    }

    sum_attention_letters
}

/// Attention weights for the fixated word and every word to its right,
/// in slot order starting at the fixated slot.
///
/// The attention center is shifted rightward by
/// `round(salience_position * attend_width)` before scoring. A fixated
/// word whose last letter is already under the eyes scores 0 - there is
/// no right part left to attend.
#[allow(clippy::too_many_arguments)]
pub fn word_attention_right(
    word_edges: &[WordSpan],
    eye_position: f32,
    attention_position: f32,
    attend_width: f32,
    salience_position: f32,
    attention_skew: f32,
    let_per_deg: f32,
    fixated_slot: usize,
) -> Vec<f32> {
    let attention_position = attention_position + (salience_position * attend_width).round();

    let mut word_attention = Vec::new();
    for (slot, span) in word_edges.iter().enumerate() {
        if slot < fixated_slot {
            continue;
        }
        let foveal_word = slot == fixated_slot;

        let sum = if foveal_word && eye_position == span.end as f32 {
            0.0
        } else {
            monogram_attention_sum(
                *span,
                eye_position,
                attention_position,
                attend_width,
                attention_skew,
                let_per_deg,
                foveal_word,
            )
        };
        word_attention.push(sum);
    }

    word_attention
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 4.0;
    const SKEW: f32 = 4.0;
    const LPD: f32 = 0.3;

    #[test]
    fn test_attention_peaks_at_center() {
        let peak = attention_skewed(WIDTH, 0.0, SKEW);
        for ecc in [-6.0, -3.0, -1.0, -0.5, 0.5, 1.0, 3.0, 6.0] {
            assert!(
                attention_skewed(WIDTH, ecc, SKEW) < peak,
                "attention at eccentricity {} must be below the peak",
                ecc
            );
        }
    }

    #[test]
    fn test_attention_floor() {
        for ecc in [-50.0, -10.0, 0.0, 10.0, 50.0] {
            assert!(
                attention_skewed(WIDTH, ecc, SKEW) >= MIN_ATTENTION,
                "attention must never drop below the floor"
            );
        }
    }

    #[test]
    fn test_attention_skew_is_leftward() {
        // same absolute eccentricity falls off harder on the left
        let left = attention_skewed(WIDTH, -2.0, SKEW);
        let right = attention_skewed(WIDTH, 2.0, SKEW);
        assert!(left < right, "left side must be narrower than right");
    }

    #[test]
    fn test_acuity_is_one_at_fixation() {
        let at_zero = acuity(0.0, LPD);
        assert!(
            (at_zero - 1.0).abs() < 1e-6,
            "acuity at eccentricity 0 is 1, got {}",
            at_zero
        );
    }

    #[test]
    fn test_acuity_strictly_decreasing() {
        let mut previous = acuity(0.0, LPD);
        for ecc in [1.0, 2.0, 4.0, 8.0, 16.0] {
            let current = acuity(ecc, LPD);
            assert!(current < previous, "acuity must fall with eccentricity");
            previous = current;
        }
    }

    #[test]
    fn test_bigram_input_scales_with_edge_weight() {
        let half = BigramOccurrence {
            first: 3,
            second: 4,
            weight: 0.5,
        };
        let double = BigramOccurrence {
            weight: 2.0,
            ..half
        };
        let lo = bigram_external_input(&half, 3.0, 3.0, WIDTH, LPD, SKEW);
        let hi = bigram_external_input(&double, 3.0, 3.0, WIDTH, LPD, SKEW);
        assert!((hi - 4.0 * lo).abs() < 1e-6, "input is linear in edge weight");
    }

    #[test]
    fn test_bigram_input_is_geometric_mean() {
        let occurrence = BigramOccurrence {
            first: 2,
            second: 6,
            weight: 1.0,
        };
        let ext1 = monogram_external_input(2.0, 1.0, 4.0, 4.0, WIDTH, LPD, SKEW);
        let ext2 = monogram_external_input(6.0, 1.0, 4.0, 4.0, WIDTH, LPD, SKEW);
        let bigram = bigram_external_input(&occurrence, 4.0, 4.0, WIDTH, LPD, SKEW);
        assert!((bigram - (ext1 * ext2).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_fixated_word_at_last_letter_scores_zero() {
        let edges = [
            WordSpan { start: 0, end: 2 },
            WordSpan { start: 4, end: 6 },
        ];
        let weights = word_attention_right(&edges, 2.0, 2.0, WIDTH, 0.5, SKEW, LPD, 0);
        assert_eq!(weights.len(), 2);
        assert_eq!(weights[0], 0.0, "no right part of the fixated word left");
        assert!(weights[1] > 0.0);
    }

    #[test]
    fn test_foveal_word_discounts_its_left_edge() {
        let span = WordSpan { start: 4, end: 8 };
        let foveal = monogram_attention_sum(span, 5.0, 6.0, WIDTH, SKEW, LPD, true);
        let surrounding = monogram_attention_sum(span, 5.0, 6.0, WIDTH, SKEW, LPD, false);
        assert!(
            surrounding > foveal,
            "a surrounding word keeps both outer-letter bonuses"
        );
    }
}
