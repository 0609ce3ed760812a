//! # Threshold - When a Word Counts as Recognized
//!
//! Every word has a recognition threshold its activation must cross.
//! Frequency sets the lexical prior: frequent words get lower thresholds.
//! Contextual predictability then adjusts the prior in-context, each
//! cycle, by the analogous factor - in that order.
//!
//! A word with no known frequency keeps the maximum threshold: it is
//! treated as maximally unknown, which is a normal condition, not an
//! error.

use std::collections::HashMap;

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Smallest frequency a present word can have. A listed word with
/// frequency 0 is rarest-but-present: its threshold stays strictly below
/// an unknown word's.
const MIN_FREQUENCY: f32 = 0.01;

/// Recognition threshold from the word's frequency.
///
/// `max_threshold * ((max_frequency/freq_p) - frequency) / (max_frequency/freq_p)`
/// for a known frequency; `max_threshold` unchanged for an unknown word.
/// Non-increasing in frequency.
pub fn word_threshold(
    frequency: Option<f32>,
    max_frequency: f32,
    freq_p: f32,
    max_threshold: f32,
) -> f32 {
    match frequency {
        Some(frequency) => {
            let scale = max_frequency / freq_p;
            max_threshold * (scale - frequency.max(MIN_FREQUENCY)) / scale
        }
        None => max_threshold,
    }
}

/// Per-cycle adjustment of a threshold by the word's contextual
/// predictability at its text position, applied after the frequency
/// prior.
pub fn apply_predictability(
    threshold: f32,
    predictability: f32,
    max_predictability: f32,
    pred_p: f32,
) -> f32 {
    let scale = max_predictability / pred_p;
    threshold * (scale - predictability) / scale
}

/// Contextual predictability per (text, word position), supplied by the
/// corpus collaborator.
///
/// Lookups are integer-keyed; a position without an entry is an explicit
/// `None` and leaves the threshold unadjusted.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PredictabilityTable {
    values: HashMap<(u32, usize), f32>,
}

impl PredictabilityTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the predictability of the word at a text position
    pub fn insert(&mut self, text_id: u32, word_position: usize, predictability: f32) {
        self.values.insert((text_id, word_position), predictability);
    }

    /// Predictability at a text position, `None` when the table has no
    /// entry there
    pub fn get(&self, text_id: u32, word_position: usize) -> Option<f32> {
        self.values.get(&(text_id, word_position)).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Sample how many cycles word processing takes, one normal draw.
///
/// A recognized word processes faster: its mean is shifted down by
/// `recognized_speedup`. The sigma is the same in both branches, and the
/// result rounds to the nearest integer.
pub fn sample_recognition_duration(
    mean: f32,
    sigma: f32,
    recognized_speedup: f32,
    recognized: bool,
    rng: &mut impl Rng,
) -> i32 {
    let mu = if recognized {
        mean - recognized_speedup
    } else {
        mean
    };
    let z: f32 = rng.sample(StandardNormal);
    (mu + sigma * z).round() as i32
}
