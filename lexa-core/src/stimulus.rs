//! # Stimulus - The Visible Text Window
//!
//! A `Stimulus` is the ordered character sequence currently displayed to
//! the simulated reader, together with everything derived from it: the
//! positions of its spaces and the map from word-slot index to letter
//! span. A slot is a word position eligible for lexical matching during a
//! fixation; slots are numbered 0-based, left to right, by
//! alphanumeric-run boundaries.
//!
//! Stimuli are immutable. When the window moves, the trial loop builds a
//! new `Stimulus` and all derived state is recomputed.

use serde::{Deserialize, Serialize};

/// Inclusive (start, end) letter offsets of one word slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSpan {
    /// Offset of the first letter
    pub start: usize,
    /// Offset of the last letter
    pub end: usize,
}

impl WordSpan {
    /// Number of letters in the span
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A span always contains at least one letter
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// What to display between trials instead of text
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlankScreen {
    /// Nothing at all
    Blank,
    /// A hash grid masking the fovea
    HashGrid,
    /// A central fixation cross
    FixationCross,
}

/// The currently displayed text window and its derived structure
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stimulus {
    text: String,
    chars: Vec<char>,
    space_positions: Vec<usize>,
    word_edges: Vec<WordSpan>,
}

impl Stimulus {
    /// Analyze a window of text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars: Vec<char> = text.chars().collect();

        let space_positions = chars
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == ' ')
            .map(|(i, _)| i)
            .collect();

        let word_edges = find_word_edges(&chars);

        Self {
            text,
            chars,
            space_positions,
            word_edges,
        }
    }

    /// Create the inter-trial display of the given kind
    pub fn blank_screen(kind: BlankScreen) -> Self {
        match kind {
            BlankScreen::Blank => Self::new(""),
            BlankScreen::HashGrid => Self::new("#####"),
            BlankScreen::FixationCross => Self::new("+"),
        }
    }

    /// The raw window text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Window length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Is the window empty?
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Positions of the spaces in the window
    pub fn space_positions(&self) -> &[usize] {
        &self.space_positions
    }

    /// Word-slot index to inclusive letter span, left to right
    pub fn word_edges(&self) -> &[WordSpan] {
        &self.word_edges
    }

    /// Number of word slots in the window
    pub fn n_words(&self) -> usize {
        self.word_edges.len()
    }

    /// The word occupying a slot, if the slot exists
    pub fn word(&self, slot: usize) -> Option<String> {
        let span = self.word_edges.get(slot)?;
        Some(self.chars[span.start..=span.end].iter().collect())
    }

    /// Center letter offset of the word `relative` slots away from the
    /// fixated one, used to aim saccades at surrounding words.
    ///
    /// Returns `None` when that slot falls outside the window, which is a
    /// normal edge-of-stimulus condition.
    pub fn midword_position(&self, relative: isize, fixated_slot: usize) -> Option<usize> {
        let slot = fixated_slot as isize + relative;
        if slot < 0 {
            return None;
        }
        let span = self.word_edges.get(slot as usize)?;
        let center = (span.len() as f32 / 2.0).round() as usize;
        Some(span.start + center - 1)
    }
}

/// Scan alphanumeric runs into word spans
fn find_word_edges(chars: &[char]) -> Vec<WordSpan> {
    let mut edges = Vec::new();
    let mut start = None;

    for (i, c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            edges.push(WordSpan { start: s, end: i - 1 });
        }
    }
    if let Some(s) = start {
        edges.push(WordSpan {
            start: s,
            end: chars.len() - 1,
        });
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_edges_two_words() {
        let stim = Stimulus::new("cat dog");
        assert_eq!(stim.n_words(), 2);
        assert_eq!(stim.word_edges()[0], WordSpan { start: 0, end: 2 });
        assert_eq!(stim.word_edges()[1], WordSpan { start: 4, end: 6 });
        assert_eq!(stim.word(0).as_deref(), Some("cat"));
        assert_eq!(stim.word(1).as_deref(), Some("dog"));
    }

    #[test]
    fn test_word_edges_flanking_spaces() {
        let stim = Stimulus::new(" an apple ");
        assert_eq!(stim.n_words(), 2);
        assert_eq!(stim.word_edges()[0], WordSpan { start: 1, end: 2 });
        assert_eq!(stim.word_edges()[1], WordSpan { start: 4, end: 8 });
        assert_eq!(stim.space_positions(), &[0, 3, 9]);
    }

    #[test]
    fn test_midword_position() {
        let stim = Stimulus::new("cat dogs");
        // fixating "cat": its own center is offset 1
        assert_eq!(stim.midword_position(0, 0), Some(1));
        // "dogs" spans 4..=7, center letter at offset 5
        assert_eq!(stim.midword_position(1, 0), Some(5));
        // two slots to the right of "cat" is outside the window
        assert_eq!(stim.midword_position(2, 0), None);
        // left of the first word is outside the window
        assert_eq!(stim.midword_position(-1, 0), None);
    }

    #[test]
    fn test_blank_screens() {
        assert!(Stimulus::blank_screen(BlankScreen::Blank).is_empty());
        assert_eq!(Stimulus::blank_screen(BlankScreen::HashGrid).text(), "#####");
        assert_eq!(
            Stimulus::blank_screen(BlankScreen::FixationCross).text(),
            "+"
        );
        // hash marks and crosses are not alphanumeric, so no word slots
        assert_eq!(Stimulus::blank_screen(BlankScreen::HashGrid).n_words(), 0);
    }
}
