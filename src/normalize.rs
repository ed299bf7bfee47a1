//! Token normalization for word-frequency counting.
//!
//! Message bodies are lowercased, stripped of ASCII punctuation, re-split on
//! whitespace, and filtered against a stop-word dictionary before they reach
//! the frequency counters. Stop-words are common low-information words
//! ("the", "is", ...) that would otherwise dominate every top-word list.

use std::collections::HashSet;

use crate::counter::WordCounter;

/// Built-in English stop-word list.
///
/// A compact list of common function words; the hover labels are meant to
/// surface topical vocabulary, so anything this frequent in ordinary English
/// is noise.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "arent", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "cant", "could", "couldnt", "did", "didnt", "do", "does", "doesnt", "doing",
    "dont", "down", "during", "each", "few", "for", "from", "further", "had", "hadnt", "has",
    "hasnt", "have", "havent", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "im", "in", "into", "is", "isnt", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "shouldnt", "so", "some", "such", "than", "that", "thats", "the", "their", "theirs",
    "them", "themselves", "then", "there", "theres", "these", "they", "this", "those", "through",
    "to", "too", "under", "until", "up", "very", "was", "wasnt", "we", "were", "werent", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "wont", "would",
    "wouldnt", "you", "your", "yours", "yourself", "yourselves",
];

/// Read-only stop-word dictionary.
///
/// Safe to share across concurrent processing calls: lookups never mutate.
/// The default dictionary is the built-in English list; custom dictionaries
/// (including an empty one) can be supplied for embedders and tests.
///
/// # Example
///
/// ```rust
/// use chatpulse::normalize::StopWords;
///
/// let stop_words = StopWords::english();
/// assert!(stop_words.contains("the"));
/// assert!(!stop_words.contains("rust"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Creates the built-in English stop-word dictionary.
    pub fn english() -> Self {
        Self {
            words: ENGLISH_STOP_WORDS.iter().map(|w| (*w).to_string()).collect(),
        }
    }

    /// Creates an empty dictionary (no word is filtered).
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Creates a dictionary from a custom word list.
    ///
    /// Words are lowercased on the way in, matching the lowercasing applied
    /// to message tokens.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns `true` if `word` is a stop-word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

/// Normalizes a message body into a word-frequency multiset.
///
/// The body is lowercased, ASCII punctuation is stripped, and the result is
/// re-split on whitespace; tokens found in the stop-word dictionary are
/// dropped. An empty counter is a valid result (a message consisting only of
/// punctuation or stop-words).
///
/// # Example
///
/// ```rust
/// use chatpulse::normalize::{StopWords, normalize};
///
/// let counter = normalize("Hello, hello world!", &StopWords::english());
/// assert_eq!(counter.count("hello"), 2);
/// assert_eq!(counter.count("world"), 1);
/// ```
pub fn normalize(body: &str, stop_words: &StopWords) -> WordCounter {
    let lowered = body.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    let mut counter = WordCounter::new();
    for token in stripped.split_whitespace() {
        if !stop_words.contains(token) {
            counter.add(token);
        }
    }
    counter
}
