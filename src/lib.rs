//! # Hotter/Colder Word-Guessing Game Core
//!
//! Library core for a word-guessing game: a secret word is drawn from a
//! fixed list, the player submits guesses, and each non-winning guess is
//! reported as hotter, colder, or unchanged relative to the previous one.
//! The proximity signal is Levenshtein edit distance.
//!
//! The library owns the game logic only. It returns structured outcomes
//! and never touches a terminal; rendering belongs to whichever frontend
//! drives it (the `play` binary ships a ratatui TUI and a plain line mode).
//!
//! ## Modules
//! - [`distance`]: the edit-distance engine used as the feedback signal
//! - [`words`]: the fixed word list the secret is drawn from
//! - [`round`]: the round state machine (`start` / `submit_guess` / `give_up`)

pub mod distance;
pub mod round;
pub mod words;

pub use distance::levenshtein;
pub use round::{GuessOutcome, RoundController, RoundStart, RoundStatus};
pub use words::{WordList, WordListError};
