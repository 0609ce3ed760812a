//! # Configuration - LEXA's Model Parameters
//!
//! These parameters define how the simulated reader sees, recognizes, and
//! moves. The defaults carry the calibrated values of the model family;
//! individual runs override them through `ReaderConfig::load`.
//!
//! Numeric validity (positive widths, positive letters-per-degree) is the
//! caller's responsibility: the core functions do not re-validate and will
//! produce NaN or negative evidence if violated.

use serde::{Deserialize, Serialize};

/// Master configuration for a LEXA simulation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Open-bigram extraction settings
    pub ngrams: NgramConfig,

    /// Lexical inhibition settings
    pub inhibition: InhibitionConfig,

    /// Attention/acuity field settings
    pub attention: AttentionConfig,

    /// Recognition threshold settings
    pub recognition: RecognitionConfig,

    /// Saccade programming settings
    pub saccade: SaccadeConfig,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            ngrams: NgramConfig::default(),
            inhibition: InhibitionConfig::default(),
            attention: AttentionConfig::default(),
            recognition: RecognitionConfig::default(),
            saccade: SaccadeConfig::default(),
        }
    }
}

/// Open-bigram extraction
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NgramConfig {
    /// Maximum number of letters allowed between the two members of a
    /// bigram. `None` removes the limit.
    pub bigram_gap: Option<usize>,
}

impl Default for NgramConfig {
    fn default() -> Self {
        Self { bigram_gap: Some(3) }
    }
}

/// Lexical inhibition / overlap matrix
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InhibitionConfig {
    /// Overlap counts at or below this inhibit nothing
    pub min_overlap: usize,

    /// Two words are comparable only if their length difference is within
    /// this fraction of the longer word
    pub word_length_similarity_constant: f32,
}

impl Default for InhibitionConfig {
    fn default() -> Self {
        Self {
            min_overlap: 2,
            // length difference must stay within 15% of the longest word
            word_length_similarity_constant: 0.15,
        }
    }
}

/// Attention/acuity field
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttentionConfig {
    /// Width of the attention distribution, in letter positions
    pub width: f32,

    /// Skew factor narrowing the distribution left of the attention center
    pub skew: f32,

    /// Letters per degree of visual angle
    pub letters_per_degree: f32,

    /// Rightward shift of the attention center when weighing forward
    /// saccade targets, as a fraction of the attention width
    pub salience_position: f32,
}

impl Default for AttentionConfig {
    fn default() -> Self {
        Self {
            width: 4.0,
            skew: 4.0,
            letters_per_degree: 0.3,
            salience_position: 0.5,
        }
    }
}

/// Recognition thresholds
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// Threshold for a word with no known frequency. Must not exceed the
    /// maximum allowable word activity.
    pub max_threshold: f32,

    /// How strongly frequency weighs on the threshold (1 = max: the most
    /// frequent word gets threshold 0; smaller values weigh less)
    pub freq_p: f32,

    /// How strongly contextual predictability weighs on the threshold
    pub pred_p: f32,

    /// Upper bound of the predictability scale
    pub max_predictability: f32,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            max_threshold: 1.0,
            freq_p: 0.4,
            pred_p: 0.4,
            max_predictability: 1.0,
        }
    }
}

/// Saccade programming
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaccadeConfig {
    /// Apply motor error to programmed saccades. When false, realized
    /// error is exactly 0 for any distance.
    pub use_error: bool,

    /// Scales the systematic error (undershoot/overshoot toward the
    /// optimal distance)
    pub error_scaler: f32,

    /// Base standard deviation of the motor noise
    pub error_sigma: f32,

    /// Additional sigma per letter of saccade distance
    pub error_sigma_scaler: f32,

    /// Saccade distance with neither undershoot nor overshoot, in letters
    pub optimal_distance: f32,
}

impl Default for SaccadeConfig {
    fn default() -> Self {
        Self {
            use_error: true,
            error_scaler: 0.2,
            error_sigma: 0.17,
            error_sigma_scaler: 0.06,
            optimal_distance: 7.0,
        }
    }
}

impl ReaderConfig {
    /// Load configuration from file
    pub fn load(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Create config with the saccade motor-error model switched off,
    /// for deterministic runs
    pub fn deterministic() -> Self {
        let mut config = Self::default();
        config.saccade.use_error = false;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let config = ReaderConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ReaderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ngrams.bigram_gap, Some(3));
        assert_eq!(back.inhibition.min_overlap, 2);
        assert!(back.saccade.use_error);
    }

    #[test]
    fn test_deterministic_preset() {
        let config = ReaderConfig::deterministic();
        assert!(!config.saccade.use_error, "preset must disable motor error");
    }
}
