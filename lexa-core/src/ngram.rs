//! # Ngrams - Open-Bigram Feature Extraction
//!
//! Words are recognized from sub-lexical features: open bigrams (ordered
//! letter pairs within a bounded gap) and monograms. Bigrams never span a
//! space, and pairs that sit at word boundaries carry more weight, because
//! outer letters are perceptually privileged.
//!
//! The window is padded with a boundary sentinel on each side before
//! scanning, so the first and last letters of the window form sentinel
//! bigrams (`_c`, `t_`). With a bounded gap the scan can truncate those
//! exactly where they matter most, so the two window-edge bigrams are
//! injected explicitly - edge evidence exists regardless of gap size.
//!
//! All positions in this module are in sentinel-padded coordinates:
//! position 0 is the left sentinel, position 1 the first window character.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{BOUNDARY_SENTINEL, DEFAULT_EDGE_WEIGHT, MAX_EDGE_WEIGHT};

/// One occurrence of a bigram within a stimulus
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BigramOccurrence {
    /// Position of the first member, sentinel-padded coordinates
    pub first: usize,

    /// Position of the second member, always greater than `first`
    pub second: usize,

    /// Edge-position weight, one of 0.5, 1.0, 2.0
    pub weight: f32,
}

/// All open bigrams of one stimulus window and where they occur
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StimulusNgrams {
    /// Distinct bigram strings, in discovery order
    bigrams: Vec<String>,

    /// Bigram string to its occurrence records
    locations: HashMap<String, Vec<BigramOccurrence>>,
}

impl StimulusNgrams {
    /// Extract the open bigrams of a window.
    ///
    /// `gap` bounds the number of letters allowed between the two members
    /// of a bigram (`None` = unbounded). `suffix_context` suppresses the
    /// word-initial sentinel bigram, which a suffix does not have.
    pub fn extract(stimulus: &str, gap: Option<usize>, suffix_context: bool) -> Self {
        let mut padded: Vec<char> = Vec::with_capacity(stimulus.len() + 2);
        padded.push(BOUNDARY_SENTINEL);
        padded.extend(stimulus.chars());
        padded.push(BOUNDARY_SENTINEL);
        let n = padded.len();

        let mut ngrams = Self::default();

        for first in 0..n - 1 {
            if padded[first] == ' ' {
                continue;
            }
            if suffix_context && first == 0 {
                continue;
            }
            let last = match gap {
                Some(g) => (first + g + 1).min(n - 1),
                None => n - 1,
            };
            for second in first + 1..=last {
                if padded[second] == ' ' {
                    break;
                }
                // a bigram needs at least one real letter
                if padded[first] == BOUNDARY_SENTINEL && padded[second] == BOUNDARY_SENTINEL {
                    continue;
                }
                let weight = bigram_edge_weight(&padded, first, second);
                let bigram: String = [padded[first], padded[second]].iter().collect();
                ngrams.record(bigram, first, second, weight);
            }
        }

        // A bounded scan can truncate the window-edge bigrams; inject them
        // at the true word start and true word end. Occurrences the scan
        // already produced are not duplicated.
        if gap.is_some() {
            let window_start = (1..n - 1).find(|&i| padded[i] != ' ');
            let window_end = (1..n - 1).rev().find(|&i| padded[i] != ' ');
            if let (Some(ws), Some(we)) = (window_start, window_end) {
                if !suffix_context {
                    let weight = bigram_edge_weight(&padded, ws - 1, ws);
                    let bigram: String = [BOUNDARY_SENTINEL, padded[ws]].iter().collect();
                    ngrams.record_unique(bigram, ws - 1, ws, weight);
                }
                let weight = bigram_edge_weight(&padded, we, we + 1);
                let bigram: String = [padded[we], BOUNDARY_SENTINEL].iter().collect();
                ngrams.record_unique(bigram, we, we + 1, weight);
            }
        }

        ngrams
    }

    /// Distinct bigram strings, in discovery order
    pub fn bigrams(&self) -> &[String] {
        &self.bigrams
    }

    /// All occurrences of a bigram (empty if the bigram is absent)
    pub fn occurrences(&self, bigram: &str) -> &[BigramOccurrence] {
        self.locations.get(bigram).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Does this window contain the bigram?
    pub fn contains(&self, bigram: &str) -> bool {
        self.locations.contains_key(bigram)
    }

    /// Number of distinct bigrams
    pub fn len(&self) -> usize {
        self.bigrams.len()
    }

    /// Is the window featureless?
    pub fn is_empty(&self) -> bool {
        self.bigrams.is_empty()
    }

    /// The distinct bigram strings as an owned set
    pub fn bigram_set(&self) -> std::collections::HashSet<String> {
        self.bigrams.iter().cloned().collect()
    }

    fn record(&mut self, bigram: String, first: usize, second: usize, weight: f32) {
        let occurrence = BigramOccurrence {
            first,
            second,
            weight,
        };
        match self.locations.entry(bigram) {
            Entry::Occupied(mut e) => e.get_mut().push(occurrence),
            Entry::Vacant(e) => {
                self.bigrams.push(e.key().clone());
                e.insert(vec![occurrence]);
            }
        }
    }

    fn record_unique(&mut self, bigram: String, first: usize, second: usize, weight: f32) {
        let seen = self
            .locations
            .get(&bigram)
            .map(|occs| occs.iter().any(|o| o.first == first && o.second == second))
            .unwrap_or(false);
        if !seen {
            self.record(bigram, first, second, weight);
        }
    }
}

/// Is this padded position a word boundary (a space, a sentinel, or
/// outside the window)?
fn is_boundary(padded: &[char], position: isize) -> bool {
    if position < 0 || position >= padded.len() as isize {
        return true;
    }
    let position = position as usize;
    padded[position] == ' ' || position == 0 || position == padded.len() - 1
}

/// Edge-position weight of a bigram: 2.0 when both members have a
/// boundary as outward neighbor, 1.0 when exactly one has, 0.5 otherwise.
///
/// Positions are in sentinel-padded coordinates.
pub fn bigram_edge_weight(padded: &[char], first: usize, second: usize) -> f32 {
    let outward_first = is_boundary(padded, first as isize - 1);
    let outward_second = is_boundary(padded, second as isize + 1);
    match (outward_first, outward_second) {
        (true, true) => MAX_EDGE_WEIGHT,
        (false, false) => DEFAULT_EDGE_WEIGHT,
        _ => 1.0,
    }
}

/// Edge-position weight of a monogram: 2.0 when flanked by boundaries on
/// both sides, 1.0 on one side, 0.5 otherwise.
///
/// Position is in sentinel-padded coordinates.
pub fn monogram_edge_weight(padded: &[char], position: usize) -> f32 {
    let left = is_boundary(padded, position as isize - 1);
    let right = is_boundary(padded, position as isize + 1);
    match (left, right) {
        (true, true) => MAX_EDGE_WEIGHT,
        (false, false) => DEFAULT_EDGE_WEIGHT,
        _ => 1.0,
    }
}
