//! # LEXA Compute
//!
//! The heavy, persistent side of LEXA: lexicon-wide overlap/inhibition
//! matrix construction and its on-disk cache.
//!
//! The matrix is O(L²) over the lexicon and depends only on the lexicon
//! content and a handful of constants, so it is built once - in parallel,
//! rows are independent - fingerprinted, and reused across runs until the
//! fingerprint changes.

pub mod cache;
pub mod overlap;

pub use cache::{MatrixCache, MatrixFingerprint};
pub use overlap::{build_overlap_matrix, is_similar_word_length, OverlapMatrix};

use lexa_core::config::ReaderConfig;
use lexa_core::error::LexaResult;
use lexa_core::lexicon::Lexicon;

/// Return the overlap matrix for a finalized lexicon, from cache when the
/// fingerprint still matches, rebuilding and re-persisting otherwise.
///
/// A failed store is logged and tolerated: the built matrix is returned
/// either way, the next run just rebuilds.
pub fn load_or_build_matrix(
    lexicon: &Lexicon,
    config: &ReaderConfig,
    cache: &MatrixCache,
) -> LexaResult<OverlapMatrix> {
    let fingerprint =
        MatrixFingerprint::new(lexicon, &config.inhibition, config.ngrams.bigram_gap);

    if let Some(matrix) = cache.load(&fingerprint) {
        tracing::info!(words = lexicon.len(), "reusing cached overlap matrix");
        return Ok(matrix);
    }

    let matrix = build_overlap_matrix(lexicon, &config.inhibition)?;

    if let Err(e) = cache.store(&matrix, &fingerprint) {
        tracing::warn!("could not persist overlap matrix ({}), continuing", e);
    }

    Ok(matrix)
}
