//! # Fixation - Per-Cycle Eye State
//!
//! The state one simulated cycle reads: where the eyes are, where
//! attention is centered, which slot is fixated, and the word-edge map of
//! the current window. The surrounding trial loop owns and advances this
//! state once per cycle; the core components are pure functions of it.

use serde::{Deserialize, Serialize};

use crate::stimulus::{Stimulus, WordSpan};

/// Eye and attention state during one fixation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FixationState {
    /// Letter position of the eyes in the window
    pub eye_position: f32,

    /// Letter position of the attention center
    pub attention_position: f32,

    /// Slot index of the fixated word
    pub fixated_slot: usize,

    /// Word-edge map of the current window
    pub word_edges: Vec<WordSpan>,
}

impl FixationState {
    /// Start a fixation on a slot of the given window, eyes and attention
    /// at the slot's center (or the window start when the slot is empty).
    pub fn new(stimulus: &Stimulus, fixated_slot: usize) -> Self {
        let position = stimulus
            .midword_position(0, fixated_slot)
            .unwrap_or(0) as f32;
        Self {
            eye_position: position,
            attention_position: position,
            fixated_slot,
            word_edges: stimulus.word_edges().to_vec(),
        }
    }

    /// Span of the fixated word, if the slot exists in this window
    pub fn fixated_span(&self) -> Option<WordSpan> {
        self.word_edges.get(self.fixated_slot).copied()
    }

    /// Is the eye on the last letter of the fixated word?
    pub fn at_word_end(&self) -> bool {
        self.fixated_span()
            .map(|span| self.eye_position == span.end as f32)
            .unwrap_or(false)
    }
}
