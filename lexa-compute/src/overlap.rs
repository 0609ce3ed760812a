//! # Overlap - The Lexical Inhibition Matrix
//!
//! How strongly two words compete is how much they look alike: the number
//! of open bigrams and letters they share, above a minimum, and only when
//! their lengths are similar enough to be confusable at all.
//!
//! The matrix is square over lexicon indices, symmetric, with a zero
//! diagonal (a word does not inhibit itself). Construction is O(L²) but
//! every cell is independent, so rows are computed in parallel and
//! mirrored in a final merge. Once built the matrix is immutable and safe
//! to share read-only across any number of concurrent trials.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use lexa_core::config::InhibitionConfig;
use lexa_core::error::{LexaError, LexaResult};
use lexa_core::lexicon::Lexicon;

/// Are two word lengths similar enough for the words to compete?
///
/// The length difference must stay within `constant` times the longer
/// word's length.
pub fn is_similar_word_length(len1: usize, len2: usize, constant: f32) -> bool {
    let difference = len1.abs_diff(len2) as f32;
    difference < constant * len1.max(len2) as f32
}

/// Symmetric, zero-diagonal inhibition strengths over lexicon indices
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlapMatrix {
    size: usize,
    values: Vec<i32>,
}

impl OverlapMatrix {
    /// Wrap a row-major value buffer. The buffer length must be `size²`.
    pub fn from_values(size: usize, values: Vec<i32>) -> LexaResult<Self> {
        if values.len() != size * size {
            return Err(LexaError::cache(format!(
                "matrix buffer holds {} values, expected {}",
                values.len(),
                size * size
            )));
        }
        Ok(Self { size, values })
    }

    /// Number of lexicon entries the matrix covers
    pub fn size(&self) -> usize {
        self.size
    }

    /// Inhibition strength between two lexicon indices
    pub fn get(&self, i: usize, j: usize) -> i32 {
        self.values[i * self.size + j]
    }

    /// Row-major value buffer
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Total inhibition each word receives from the rest of the lexicon
    pub fn row_sums(&self) -> Vec<i64> {
        (0..self.size)
            .map(|i| {
                self.values[i * self.size..(i + 1) * self.size]
                    .iter()
                    .map(|v| *v as i64)
                    .sum()
            })
            .collect()
    }
}

/// Build the inhibition matrix for a finalized lexicon.
///
/// Every entry must carry its precomputed bigram and letter sets; a
/// missing set is a lexicon-build inconsistency and aborts construction.
pub fn build_overlap_matrix(
    lexicon: &Lexicon,
    config: &InhibitionConfig,
) -> LexaResult<OverlapMatrix> {
    let size = lexicon.len();

    // resolve every entry's sets up front so the parallel stage cannot
    // observe a half-built lexicon
    let mut features = Vec::with_capacity(size);
    for entry in lexicon.entries() {
        match (entry.bigrams(), entry.letters()) {
            (Some(bigrams), Some(letters)) => features.push((entry.length(), bigrams, letters)),
            _ => {
                return Err(LexaError::MissingNgrams {
                    word: entry.word().to_string(),
                })
            }
        }
    }

    let started = Instant::now();

    // upper triangle, row-parallel: each row's cells are independent
    let rows: Vec<Vec<i32>> = (0..size)
        .into_par_iter()
        .map(|i| {
            let (length1, bigrams1, letters1) = features[i];

            let mut row = vec![0i32; size];
            for (j, &(length2, bigrams2, letters2)) in features.iter().enumerate().skip(i + 1) {
                if !is_similar_word_length(
                    length1,
                    length2,
                    config.word_length_similarity_constant,
                ) {
                    continue;
                }
                let bigram_overlap = bigrams1.intersection(bigrams2).count();
                let monogram_overlap = letters1.intersection(letters2).count();
                let total_overlap = bigram_overlap + monogram_overlap;

                if total_overlap > config.min_overlap {
                    row[j] = (total_overlap - config.min_overlap) as i32;
                }
            }
            row
        })
        .collect();

    // mirror into the full symmetric matrix
    let mut values = vec![0i32; size * size];
    for (i, row) in rows.iter().enumerate() {
        for (j, &value) in row.iter().enumerate().skip(i + 1) {
            values[i * size + j] = value;
            values[j * size + i] = value;
        }
    }

    tracing::info!(
        words = size,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "built word overlap matrix"
    );

    OverlapMatrix::from_values(size, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(words: &[(&str, f32)]) -> Lexicon {
        let mut lexicon =
            Lexicon::from_frequencies(words.iter().map(|(w, f)| (w.to_string(), *f))).unwrap();
        lexicon.precompute_ngrams(Some(3));
        lexicon
    }

    #[test]
    fn test_matrix_symmetric_with_zero_diagonal() {
        let lexicon = lexicon(&[("cat", 50.0), ("cot", 20.0), ("dog", 80.0), ("cart", 5.0)]);
        let config = InhibitionConfig::default();
        let matrix = build_overlap_matrix(&lexicon, &config).unwrap();

        for i in 0..matrix.size() {
            assert_eq!(matrix.get(i, i), 0, "diagonal must be zero");
            for j in 0..matrix.size() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i), "matrix must be symmetric");
            }
        }
    }

    #[test]
    fn test_similar_words_inhibit_dissimilar_do_not() {
        let lexicon = lexicon(&[("cat", 50.0), ("cot", 20.0), ("dog", 80.0)]);
        let config = InhibitionConfig {
            min_overlap: 1,
            ..Default::default()
        };
        let matrix = build_overlap_matrix(&lexicon, &config).unwrap();

        let cat = 0;
        let cot = 1;
        let dog = 2;
        assert!(
            matrix.get(cat, cot) > 0,
            "cat/cot share letters and bigrams beyond the minimum"
        );
        assert_eq!(matrix.get(cat, dog), 0, "cat/dog share nothing");
    }

    #[test]
    fn test_length_gate_zeroes_cell() {
        // lengths 3 vs 10: difference 7 is far beyond 15% of 10
        let lexicon = lexicon(&[("cat", 50.0), ("catalogues", 2.0)]);
        let config = InhibitionConfig::default();
        let matrix = build_overlap_matrix(&lexicon, &config).unwrap();
        assert_eq!(
            matrix.get(0, 1),
            0,
            "length-dissimilar words never compete, whatever they share"
        );
    }

    #[test]
    fn test_length_similarity_gate() {
        assert!(is_similar_word_length(6, 6, 0.15));
        assert!(is_similar_word_length(7, 6, 0.15), "|7-6| < 0.15 * 7");
        assert!(!is_similar_word_length(8, 6, 0.15), "|8-6| >= 0.15 * 8");
        assert!(!is_similar_word_length(3, 10, 0.15));
    }

    #[test]
    fn test_min_overlap_subtracted() {
        let lexicon = lexicon(&[("cat", 50.0), ("cot", 20.0)]);
        let low = build_overlap_matrix(
            &lexicon,
            &InhibitionConfig {
                min_overlap: 1,
                ..Default::default()
            },
        )
        .unwrap();
        let high = build_overlap_matrix(
            &lexicon,
            &InhibitionConfig {
                min_overlap: 3,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            low.get(0, 1) - high.get(0, 1),
            2,
            "raising min_overlap by 2 lowers stored overlap by 2"
        );
    }

    #[test]
    fn test_missing_ngrams_is_fatal() {
        // no precompute_ngrams: entries lack their sets
        let lexicon = Lexicon::from_frequencies([("cat", 50.0)]).unwrap();
        let result = build_overlap_matrix(&lexicon, &InhibitionConfig::default());
        assert!(matches!(
            result,
            Err(LexaError::MissingNgrams { word }) if word == "cat"
        ));
    }

    #[test]
    fn test_single_word_lexicon() {
        let lexicon = lexicon(&[("cat", 50.0)]);
        let matrix = build_overlap_matrix(&lexicon, &InhibitionConfig::default()).unwrap();
        assert_eq!(matrix.size(), 1);
        assert_eq!(matrix.get(0, 0), 0);
    }

    #[test]
    fn test_row_sums() {
        let lexicon = lexicon(&[("cat", 50.0), ("cot", 20.0), ("fizz", 80.0)]);
        let config = InhibitionConfig {
            min_overlap: 1,
            ..Default::default()
        };
        let matrix = build_overlap_matrix(&lexicon, &config).unwrap();
        let sums = matrix.row_sums();
        assert_eq!(sums.len(), 3);
        assert!(sums[0] > 0, "cat receives inhibition from cot");
        assert_eq!(sums[2], 0, "fizz competes with nothing here");
    }
}
