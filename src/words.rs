//! The fixed word list the secret word is drawn from.

use rand::Rng;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Words shipped with the game.
const BUILTIN_WORDS: [&str; 15] = [
    "apple", "banana", "grape", "lemon", "mango",
    "peach", "world", "hello", "house", "water",
    "chair", "table", "happy", "music", "cloud",
];

/// Errors raised while building a word list.
#[derive(Debug)]
pub enum WordListError {
    /// The list contained no words at all.
    Empty,
    /// An entry was blank after trimming (1-indexed position).
    BlankWord { line: usize },
    /// The word-list file could not be read.
    Io(io::Error),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListError::Empty => write!(f, "word list is empty"),
            WordListError::BlankWord { line } => {
                write!(f, "word list entry {} is blank", line)
            }
            WordListError::Io(e) => write!(f, "failed to read word list: {}", e),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WordListError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WordListError {
    fn from(e: io::Error) -> Self {
        WordListError::Io(e)
    }
}

/// A non-empty, case-normalized list of candidate secret words.
///
/// Every entry is trimmed and lowercased on construction, so guesses can be
/// compared against list entries without re-normalizing the list.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl Default for WordList {
    /// The built-in fifteen-word list.
    fn default() -> Self {
        WordList {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl WordList {
    /// Builds a word list from the given entries, normalizing each one.
    ///
    /// Fails on an empty list or on any entry that is blank after trimming.
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for (i, word) in words.into_iter().enumerate() {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                return Err(WordListError::BlankWord { line: i + 1 });
            }
            normalized.push(word);
        }
        if normalized.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(WordList { words: normalized })
    }

    /// Loads a newline-separated word list from a file.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let contents = fs::read_to_string(path)?;
        Self::new(contents.lines().filter(|line| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        }))
    }

    /// Number of words in the list. Always at least one.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The normalized words, in their original order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Picks a word uniformly at random.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}
