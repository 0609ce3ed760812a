//! # Cache - Matrix Persistence
//!
//! Building the overlap matrix is the expensive step of a simulation
//! setup, and its inputs rarely change between runs. The matrix is
//! persisted as a raw numeric array next to a JSON fingerprint record
//! derived from the lexicon content and the matrix-relevant constants.
//! On load the recorded fingerprint must match the expected one exactly;
//! anything else - missing files, unreadable artifacts, changed
//! parameters - is treated as a miss and forces a rebuild.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use lexa_core::config::InhibitionConfig;
use lexa_core::error::{LexaError, LexaResult};
use lexa_core::lexicon::Lexicon;

use crate::overlap::OverlapMatrix;

/// Identity of one matrix build: lexicon content plus every constant the
/// cell values depend on
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatrixFingerprint {
    /// SHA-256 over the ordered lexicon words
    pub lexicon_digest: String,

    /// Number of lexicon entries
    pub lexicon_size: usize,

    /// Overlap subtrahend the cells were clamped against
    pub min_overlap: usize,

    /// Length-similarity gate constant
    pub word_length_similarity_constant: f32,

    /// Gap the lexicon bigram sets were extracted with
    pub bigram_gap: Option<usize>,
}

impl MatrixFingerprint {
    /// Fingerprint a lexicon and the configuration its matrix depends on
    pub fn new(lexicon: &Lexicon, config: &InhibitionConfig, bigram_gap: Option<usize>) -> Self {
        let mut hasher = Sha256::new();
        for entry in lexicon.entries() {
            hasher.update(entry.word().as_bytes());
            // separator keeps ["ab","c"] distinct from ["a","bc"]
            hasher.update([0u8]);
        }

        Self {
            lexicon_digest: format!("{:x}", hasher.finalize()),
            lexicon_size: lexicon.len(),
            min_overlap: config.min_overlap,
            word_length_similarity_constant: config.word_length_similarity_constant,
            bigram_gap,
        }
    }
}

/// On-disk home of one cached matrix
#[derive(Clone, Debug)]
pub struct MatrixCache {
    dir: PathBuf,
}

impl MatrixCache {
    /// Cache rooted at a directory (created on first store)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the raw matrix artifact
    pub fn matrix_path(&self) -> PathBuf {
        self.dir.join("overlap_matrix.bin")
    }

    /// Path of the fingerprint companion record
    pub fn fingerprint_path(&self) -> PathBuf {
        self.dir.join("overlap_matrix.fingerprint.json")
    }

    /// Load the cached matrix if its fingerprint matches the expected
    /// one. Any mismatch or unreadable artifact is a miss.
    pub fn load(&self, expected: &MatrixFingerprint) -> Option<OverlapMatrix> {
        let recorded = match fs::read_to_string(self.fingerprint_path()) {
            Ok(json) => match serde_json::from_str::<MatrixFingerprint>(&json) {
                Ok(fingerprint) => fingerprint,
                Err(e) => {
                    tracing::warn!("unreadable matrix fingerprint ({}), rebuilding", e);
                    return None;
                }
            },
            // no fingerprint on disk: a plain miss
            Err(_) => return None,
        };

        if &recorded != expected {
            tracing::info!("matrix fingerprint changed, rebuilding");
            return None;
        }

        let bytes = match fs::read(self.matrix_path()) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("matrix artifact unreadable ({}), rebuilding", e);
                return None;
            }
        };

        let expected_len = expected.lexicon_size * expected.lexicon_size * std::mem::size_of::<i32>();
        if bytes.len() != expected_len {
            tracing::warn!(
                "matrix artifact holds {} bytes, expected {}, rebuilding",
                bytes.len(),
                expected_len
            );
            return None;
        }

        let values: Vec<i32> = bytemuck::pod_collect_to_vec(&bytes);
        OverlapMatrix::from_values(expected.lexicon_size, values).ok()
    }

    /// Persist a matrix and the fingerprint it was built under
    pub fn store(&self, matrix: &OverlapMatrix, fingerprint: &MatrixFingerprint) -> LexaResult<()> {
        fs::create_dir_all(&self.dir)?;

        fs::write(self.matrix_path(), bytemuck::cast_slice::<i32, u8>(matrix.values()))?;

        let json = serde_json::to_string_pretty(fingerprint)
            .map_err(|e| LexaError::serialization(e.to_string()))?;
        fs::write(self.fingerprint_path(), json)?;

        Ok(())
    }
}
