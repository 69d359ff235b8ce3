//! # Application State
//!
//! Frontend state shared by the TUI and the plain line mode. Translates the
//! library's structured outcomes into the user-facing message strings; all
//! drawing stays in the frontends.

use hotcold::{GuessOutcome, RoundController};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Which screen the frontend is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// A round is running and the input line is live.
    Playing,
    /// The round ended (won or given up); offer a replay.
    RoundOver,
}

/// Color class of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Hotter,
    Colder,
    Correct,
    Error,
}

/// Frontend state for one game session.
pub struct App {
    /// The game core; single source of truth for round state.
    pub game: RoundController<Xoshiro256PlusPlus>,
    /// The guess being typed (TUI only; plain mode sets it per line).
    pub input: String,
    /// Latest feedback message.
    pub feedback: String,
    /// Color class of the latest feedback.
    pub tone: Tone,
    /// Feedback lines from earlier guesses this round.
    pub history: Vec<(String, Tone)>,
    /// Word-length hint shown for the whole round.
    pub hint: String,
    /// Current screen.
    pub screen: Screen,
}

impl App {
    /// Creates the app and starts the first round.
    pub fn new(game: RoundController<Xoshiro256PlusPlus>) -> Self {
        let mut app = Self {
            game,
            input: String::new(),
            feedback: String::new(),
            tone: Tone::Neutral,
            history: Vec::new(),
            hint: String::new(),
            screen: Screen::Playing,
        };
        app.start_round();
        app
    }

    /// Starts a fresh round and resets everything the player sees.
    pub fn start_round(&mut self) {
        let started = self.game.start();
        self.input.clear();
        self.history.clear();
        self.hint = format!(
            "I'm thinking of a word with {} letters.",
            started.word_length
        );
        self.feedback = "Good luck!".to_string();
        self.tone = Tone::Neutral;
        self.screen = Screen::Playing;
    }

    /// Submits the current input buffer as a guess.
    pub fn submit(&mut self) {
        let raw = std::mem::take(&mut self.input);
        let shown = raw.trim().to_lowercase();
        match self.game.submit_guess(&raw) {
            GuessOutcome::EmptyInput => {
                self.set_feedback("Please enter a guess first.", Tone::Error);
            }
            GuessOutcome::Hotter => {
                self.record(&shown, "You're getting closer! (Hotter)", Tone::Hotter);
            }
            GuessOutcome::Colder => {
                self.record(&shown, "You're getting farther! (Colder)", Tone::Colder);
            }
            GuessOutcome::Same => {
                self.record(&shown, "No change in distance. (Warm)", Tone::Neutral);
            }
            GuessOutcome::Correct { guesses } => {
                self.set_feedback(
                    format!("CORRECT! You got it in {} guesses!", guesses),
                    Tone::Correct,
                );
                self.screen = Screen::RoundOver;
            }
            // Shouldn't happen while the input line is live; ignore quietly.
            GuessOutcome::Inactive => {}
        }
    }

    /// Abandons the round and reveals the word.
    pub fn give_up(&mut self) {
        if let Some(word) = self.game.give_up() {
            self.set_feedback(
                format!(
                    "The word was: \"{}\". Better luck next time!",
                    word.to_uppercase()
                ),
                Tone::Error,
            );
            self.screen = Screen::RoundOver;
        }
    }

    /// Guesses evaluated this round.
    pub fn guess_count(&self) -> u32 {
        self.game.guess_count()
    }

    fn set_feedback(&mut self, message: impl Into<String>, tone: Tone) {
        self.feedback = message.into();
        self.tone = tone;
    }

    fn record(&mut self, guess: &str, message: &str, tone: Tone) {
        self.history.push((format!("{}: {}", guess, message), tone));
        self.set_feedback(message, tone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotcold::WordList;
    use rand::SeedableRng;

    fn app_with_secret(secret: &str) -> App {
        let list = WordList::new([secret]).unwrap();
        App::new(RoundController::new(
            list,
            Xoshiro256PlusPlus::seed_from_u64(3),
        ))
    }

    #[test]
    fn test_new_starts_a_round() {
        let app = app_with_secret("apple");
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.hint, "I'm thinking of a word with 5 letters.");
        assert_eq!(app.feedback, "Good luck!");
        assert_eq!(app.guess_count(), 0);
    }

    #[test]
    fn test_win_message_and_screen() {
        let mut app = app_with_secret("apple");
        app.input = "zzzzz".to_string();
        app.submit();
        app.input = "apple".to_string();
        app.submit();
        assert_eq!(app.screen, Screen::RoundOver);
        assert_eq!(app.tone, Tone::Correct);
        assert_eq!(app.feedback, "CORRECT! You got it in 2 guesses!");
    }

    #[test]
    fn test_give_up_reveals_uppercase() {
        let mut app = app_with_secret("apple");
        app.give_up();
        assert_eq!(app.screen, Screen::RoundOver);
        assert_eq!(
            app.feedback,
            "The word was: \"APPLE\". Better luck next time!"
        );
    }

    #[test]
    fn test_blank_input_keeps_playing() {
        let mut app = app_with_secret("apple");
        app.input = "   ".to_string();
        app.submit();
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.tone, Tone::Error);
        assert_eq!(app.feedback, "Please enter a guess first.");
        assert_eq!(app.guess_count(), 0);
        assert!(app.history.is_empty());
    }

    #[test]
    fn test_history_records_evaluated_guesses() {
        let mut app = app_with_secret("apple");
        app.input = "zzzzz".to_string();
        app.submit();
        app.input = "appld".to_string();
        app.submit();
        assert_eq!(app.history.len(), 2);
        assert_eq!(app.history[0].1, Tone::Hotter);
        assert!(app.history[0].0.starts_with("zzzzz:"));
    }

    #[test]
    fn test_replay_resets_session() {
        let mut app = app_with_secret("apple");
        app.input = "apple".to_string();
        app.submit();
        app.start_round();
        assert_eq!(app.screen, Screen::Playing);
        assert_eq!(app.guess_count(), 0);
        assert!(app.history.is_empty());
    }
}
