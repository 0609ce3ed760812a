//! # LEXA Core
//!
//! Core types and functions for LEXA - Lexical Eye-movement simulation
//! Architecture.
//!
//! LEXA simulates, cycle by cycle, how a reader's eyes move across text.
//! This crate provides the perceptual-cognitive building blocks:
//! - **Stimulus**: the currently visible text window and its word-slot map
//! - **Ngrams**: position-weighted open bigrams and monograms, the
//!   sub-lexical features words are recognized from
//! - **Vision**: the attention/acuity field that turns eye and attention
//!   position into per-letter evidence
//! - **Matching**: the order in which word slots are probed against the
//!   lexicon during a fixation
//! - **Threshold & Saccade**: when a word counts as recognized and where
//!   the eyes go next
//!
//! ## Design Philosophy
//!
//! Every component here is a pure function of the state passed in. The
//! surrounding trial loop owns the cycle: it recomputes the field, applies
//! lateral inhibition, checks thresholds, and programs the saccade. Nothing
//! in this crate mutates shared state, and all sampling takes a
//! caller-seeded random source so runs replay exactly.

pub mod config;
pub mod error;
pub mod fixation;
pub mod lexicon;
pub mod matching;
pub mod ngram;
pub mod saccade;
pub mod stimulus;
pub mod threshold;
pub mod vision;

// Re-export main types at crate root
pub use config::ReaderConfig;
pub use error::{LexaError, LexaResult};
pub use fixation::FixationState;
pub use lexicon::{Lexicon, LexiconEntry};
pub use ngram::{BigramOccurrence, StimulusNgrams};
pub use stimulus::{BlankScreen, Stimulus, WordSpan};
pub use threshold::PredictabilityTable;

/// Seeded random source for one simulation identity.
///
/// Every sampling function in this crate draws from a caller-supplied
/// source; feeding each simulation a source from its own seed makes runs
/// replay exactly.
pub fn simulation_rng(seed: u64) -> rand::rngs::StdRng {
    use rand::SeedableRng;
    rand::rngs::StdRng::seed_from_u64(seed)
}

/// Sentinel character padded onto both ends of a stimulus window
pub const BOUNDARY_SENTINEL: char = '_';

/// Additive floor of the attention distribution (attention is never below this)
pub const MIN_ATTENTION: f32 = 0.25;

/// Edge-position weight for an n-gram with boundary letters on both sides
pub const MAX_EDGE_WEIGHT: f32 = 2.0;

/// Edge-position weight for an n-gram with no boundary-adjacent letters
pub const DEFAULT_EDGE_WEIGHT: f32 = 0.5;
