//! # Lexicon - The Word Store
//!
//! An ordered, duplicate-free collection of words. Insertion order defines
//! the stable integer indices used by the overlap matrix, and a word-to-
//! index map built at load time makes every later lookup integer-keyed -
//! a missing word is an explicit `None`, not a silent zero.
//!
//! Each entry carries the word's frequency (when known) and, after
//! `precompute_ngrams`, the bigram and letter sets the overlap engine
//! intersects. Entries that reach matrix construction without those sets
//! indicate an inconsistent lexicon build and abort it.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{LexaError, LexaResult};
use crate::ngram::StimulusNgrams;

/// One word and its precomputed recognition features
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LexiconEntry {
    word: String,
    length: usize,
    frequency: Option<f32>,
    bigrams: Option<HashSet<String>>,
    letters: Option<HashSet<char>>,
}

impl LexiconEntry {
    fn new(word: String, frequency: Option<f32>) -> Self {
        let length = word.chars().count();
        Self {
            word,
            length,
            frequency,
            bigrams: None,
            letters: None,
        }
    }

    /// The word itself
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Word length in characters
    pub fn length(&self) -> usize {
        self.length
    }

    /// Corpus frequency, if known
    pub fn frequency(&self) -> Option<f32> {
        self.frequency
    }

    /// Precomputed open-bigram set, present after `precompute_ngrams`
    pub fn bigrams(&self) -> Option<&HashSet<String>> {
        self.bigrams.as_ref()
    }

    /// Precomputed letter set, present after `precompute_ngrams`
    pub fn letters(&self) -> Option<&HashSet<char>> {
        self.letters.as_ref()
    }
}

/// Ordered, duplicate-free word store with stable indices
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    index: HashMap<String, usize>,
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from (word, frequency) pairs, keeping their order
    pub fn from_frequencies<I, S>(words: I) -> LexaResult<Self>
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let mut lexicon = Self::new();
        for (word, frequency) in words {
            lexicon.push(word, Some(frequency))?;
        }
        Ok(lexicon)
    }

    /// Append a word. Its index is stable for the lexicon's lifetime.
    pub fn push(&mut self, word: impl Into<String>, frequency: Option<f32>) -> LexaResult<usize> {
        let word = word.into();
        if word.is_empty() {
            return Err(LexaError::lexicon("empty word"));
        }
        if self.index.contains_key(&word) {
            return Err(LexaError::lexicon(format!("duplicate word '{}'", word)));
        }

        let index = self.entries.len();
        self.index.insert(word.clone(), index);
        self.entries.push(LexiconEntry::new(word, frequency));
        Ok(index)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the lexicon empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a stable index
    pub fn get(&self, index: usize) -> Option<&LexiconEntry> {
        self.entries.get(index)
    }

    /// All entries in index order
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Stable index of a word, `None` when the word is unknown
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Frequency of a word, `None` when unknown or absent
    pub fn frequency_of(&self, word: &str) -> Option<f32> {
        self.index_of(word).and_then(|i| self.entries[i].frequency)
    }

    /// Highest frequency in the lexicon
    pub fn max_frequency(&self) -> Option<f32> {
        self.entries
            .iter()
            .filter_map(|e| e.frequency)
            .fold(None, |best, f| match best {
                Some(b) if b >= f => Some(b),
                _ => Some(f),
            })
    }

    /// Fill every entry's bigram and letter sets, extracting open bigrams
    /// with the given gap. Must run before overlap-matrix construction.
    pub fn precompute_ngrams(&mut self, gap: Option<usize>) {
        for entry in &mut self.entries {
            let ngrams = StimulusNgrams::extract(&entry.word, gap, false);
            entry.bigrams = Some(ngrams.bigram_set());
            entry.letters = Some(entry.word.chars().collect());
        }
    }
}
