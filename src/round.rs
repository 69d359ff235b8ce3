//! # Round Controller - Central Game State Management
//!
//! This module provides the `RoundController` which serves as the single
//! source of truth for the state of the current round. It ensures proper
//! separation between:
//!
//! - **Authoritative Round State**: the secret word, guess count, and the
//!   previous guess's distance, owned by the controller
//! - **Frontend Render State**: the structured outcomes and read accessors
//!   a frontend turns into text and color
//!
//! The controller never reveals the secret word outside of `give_up`; the
//! round-started notification carries only the word's length.
//!
//! ## Lifecycle
//! ```text
//! Idle ──start()──▶ Active ──guess == secret──▶ Won
//!                     │                          │
//!                     └──give_up()──▶ GaveUp     │
//!                              ▲                 │
//!                              └──── start() ◀───┘   (any state restarts)
//! ```
//!
//! Calls that arrive outside the `Active` state are answered with an
//! explicit inactive outcome rather than an error, so the caller decides
//! whether to ignore or surface them.

use crate::distance::levenshtein;
use crate::words::WordList;
use rand::Rng;

/// Lifecycle state of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// No round has been started yet.
    Idle,
    /// A round is in progress and accepting guesses.
    Active,
    /// The secret word was guessed.
    Won,
    /// The player abandoned the round.
    GaveUp,
}

impl RoundStatus {
    /// Check whether the round accepts guesses.
    pub fn is_active(&self) -> bool {
        matches!(self, RoundStatus::Active)
    }
}

/// Notification returned by [`RoundController::start`].
///
/// Carries the secret word's length for hint display - never the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStart {
    /// Length of the secret word, in characters.
    pub word_length: usize,
}

/// Result of evaluating one submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess was blank after trimming; nothing was evaluated.
    EmptyInput,
    /// Closer to the secret than the previous guess (or the first guess).
    Hotter,
    /// Farther from the secret than the previous guess.
    Colder,
    /// Same distance as the previous guess.
    Same,
    /// The guess matched the secret; carries the total guesses used.
    Correct { guesses: u32 },
    /// No round is active; nothing was evaluated.
    Inactive,
}

/// One play-through from secret selection to win or give-up.
#[derive(Debug, Clone)]
struct Round {
    /// The hidden word, normalized, immutable for the round's lifetime.
    secret: String,
    /// Guesses evaluated so far (empty input does not count).
    guess_count: u32,
    /// Distance of the previous non-winning guess. `None` until the first
    /// guess is evaluated, so the first guess always reads as hotter.
    last_distance: Option<usize>,
}

/// The central controller that owns the authoritative round state.
///
/// All guesses go through the controller, which normalizes them, evaluates
/// them against the secret, and answers with a structured [`GuessOutcome`].
/// It holds no reference to any frontend; one instance per game session.
///
/// # Usage
/// ```rust,ignore
/// let mut game = RoundController::new(WordList::default(), rng);
///
/// let started = game.start();
/// println!("the word has {} letters", started.word_length);
///
/// match game.submit_guess("grape") {
///     GuessOutcome::Hotter => { /* closer than last time */ }
///     GuessOutcome::Correct { guesses } => { /* won in `guesses` tries */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RoundController<R: Rng> {
    /// The fixed list the secret is drawn from.
    words: WordList,
    /// Injected random source, seedable for reproducible rounds.
    rng: R,
    /// Current lifecycle state.
    status: RoundStatus,
    /// The live round. `Some` whenever `status != Idle`.
    round: Option<Round>,
}

impl<R: Rng> RoundController<R> {
    /// Creates a controller in the `Idle` state. No round exists until
    /// [`start`](Self::start) is called.
    pub fn new(words: WordList, rng: R) -> Self {
        Self {
            words,
            rng,
            status: RoundStatus::Idle,
            round: None,
        }
    }

    /// Starts a new round, fully replacing any previous one.
    ///
    /// Valid in any state. The secret is drawn uniformly at random from the
    /// word list and the guess count resets to zero.
    pub fn start(&mut self) -> RoundStart {
        let secret = self.words.choose(&mut self.rng).to_string();
        let word_length = secret.chars().count();
        self.round = Some(Round {
            secret,
            guess_count: 0,
            last_distance: None,
        });
        self.status = RoundStatus::Active;
        RoundStart { word_length }
    }

    /// Evaluates a guess against the current round.
    ///
    /// The raw input is trimmed and lowercased before evaluation. Blank
    /// input and calls outside the `Active` state leave the round untouched.
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        if !self.status.is_active() {
            return GuessOutcome::Inactive;
        }
        let Some(round) = self.round.as_mut() else {
            return GuessOutcome::Inactive;
        };

        let guess = raw.trim().to_lowercase();
        if guess.is_empty() {
            return GuessOutcome::EmptyInput;
        }

        round.guess_count += 1;

        if guess == round.secret {
            self.status = RoundStatus::Won;
            return GuessOutcome::Correct {
                guesses: round.guess_count,
            };
        }

        let d = levenshtein(&round.secret, &guess);
        let outcome = match round.last_distance {
            Some(prev) if d > prev => GuessOutcome::Colder,
            Some(prev) if d == prev => GuessOutcome::Same,
            // First evaluated guess, or a strict improvement.
            _ => GuessOutcome::Hotter,
        };
        round.last_distance = Some(d);
        outcome
    }

    /// Abandons the round, revealing the secret word.
    ///
    /// Returns `None` when no round is active (the inactive signal).
    pub fn give_up(&mut self) -> Option<String> {
        if !self.status.is_active() {
            return None;
        }
        let round = self.round.as_ref()?;
        self.status = RoundStatus::GaveUp;
        Some(round.secret.clone())
    }

    /// Current lifecycle state.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Whether a round is in progress.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Guesses evaluated in the current round.
    pub fn guess_count(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.guess_count)
    }

    /// Length of the current secret, for hint display.
    pub fn word_length(&self) -> Option<usize> {
        self.round.as_ref().map(|r| r.secret.chars().count())
    }

    /// The word list the secret is drawn from.
    pub fn word_list(&self) -> &WordList {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn controller(words: &[&str]) -> RoundController<Xoshiro256PlusPlus> {
        let list = WordList::new(words.iter().copied()).unwrap();
        RoundController::new(list, Xoshiro256PlusPlus::seed_from_u64(1))
    }

    #[test]
    fn test_idle_before_start() {
        let mut game = controller(&["apple"]);
        assert_eq!(game.status(), RoundStatus::Idle);
        assert_eq!(game.submit_guess("apple"), GuessOutcome::Inactive);
        assert_eq!(game.give_up(), None);
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.word_length(), None);
    }

    #[test]
    fn test_start_resets_round() {
        let mut game = controller(&["apple"]);
        let started = game.start();
        assert_eq!(started.word_length, 5);
        assert_eq!(game.status(), RoundStatus::Active);
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.word_length(), Some(5));
    }

    #[test]
    fn test_first_guess_is_hotter() {
        let mut game = controller(&["apple"]);
        game.start();
        assert_eq!(game.submit_guess("zzzzz"), GuessOutcome::Hotter);
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn test_hotter_colder_same() {
        let mut game = controller(&["apple"]);
        game.start();
        // distance 5, then 1, then 1 again, then back to 5
        assert_eq!(game.submit_guess("zzzzz"), GuessOutcome::Hotter);
        assert_eq!(game.submit_guess("appld"), GuessOutcome::Hotter);
        assert_eq!(game.submit_guess("appld"), GuessOutcome::Same);
        assert_eq!(game.submit_guess("zzzzz"), GuessOutcome::Colder);
        assert_eq!(game.guess_count(), 4);
        assert_eq!(game.status(), RoundStatus::Active);
    }

    #[test]
    fn test_correct_guess_wins() {
        let mut game = controller(&["apple"]);
        game.start();
        game.submit_guess("grape");
        assert_eq!(game.submit_guess("apple"), GuessOutcome::Correct { guesses: 2 });
        assert_eq!(game.status(), RoundStatus::Won);
    }

    #[test]
    fn test_won_round_is_frozen() {
        let mut game = controller(&["apple"]);
        game.start();
        game.submit_guess("apple");
        assert_eq!(game.submit_guess("apple"), GuessOutcome::Inactive);
        assert_eq!(game.submit_guess("grape"), GuessOutcome::Inactive);
        assert_eq!(game.give_up(), None);
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn test_guess_is_normalized() {
        let mut game = controller(&["apple"]);
        game.start();
        assert_eq!(
            game.submit_guess("  APPLE \n"),
            GuessOutcome::Correct { guesses: 1 }
        );
    }

    #[test]
    fn test_blank_guess_leaves_state_untouched() {
        let mut game = controller(&["apple"]);
        game.start();
        assert_eq!(game.submit_guess(""), GuessOutcome::EmptyInput);
        assert_eq!(game.submit_guess("   \t "), GuessOutcome::EmptyInput);
        assert_eq!(game.guess_count(), 0);
        // Next real guess still reads as the first one.
        assert_eq!(game.submit_guess("zzzzz"), GuessOutcome::Hotter);
    }

    #[test]
    fn test_give_up_reveals_secret() {
        let mut game = controller(&["apple"]);
        game.start();
        game.submit_guess("grape");
        assert_eq!(game.give_up(), Some("apple".to_string()));
        assert_eq!(game.status(), RoundStatus::GaveUp);
        assert_eq!(game.give_up(), None);
        assert_eq!(game.submit_guess("apple"), GuessOutcome::Inactive);
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn test_restart_replaces_terminated_round() {
        let mut game = controller(&["apple"]);
        game.start();
        game.submit_guess("apple");
        assert_eq!(game.status(), RoundStatus::Won);

        let started = game.start();
        assert_eq!(started.word_length, 5);
        assert_eq!(game.status(), RoundStatus::Active);
        assert_eq!(game.guess_count(), 0);
        // lastDistance reset: first guess of the new round is hotter again
        assert_eq!(game.submit_guess("zzzzz"), GuessOutcome::Hotter);
    }

    #[test]
    fn test_secret_comes_from_the_list() {
        let mut game = controller(&["hello", "world"]);
        for _ in 0..10 {
            game.start();
            let secret = game.give_up().unwrap();
            assert!(secret == "hello" || secret == "world");
        }
    }

    #[test]
    fn test_same_seed_same_secrets() {
        let list = WordList::default();
        let mut a =
            RoundController::new(list.clone(), Xoshiro256PlusPlus::seed_from_u64(99));
        let mut b = RoundController::new(list, Xoshiro256PlusPlus::seed_from_u64(99));
        for _ in 0..5 {
            a.start();
            b.start();
            assert_eq!(a.give_up(), b.give_up());
        }
    }
}
