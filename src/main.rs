//! # Hotter or Colder
//!
//! Terminal frontend for the `hotcold` word-guessing game. A secret word is
//! drawn from a fixed list; each guess is reported as hotter or colder than
//! the previous one based on its edit distance to the secret.
//!
//! Two frontends share the same [`app::App`] state:
//! - a full-screen ratatui TUI (the default)
//! - a line-oriented `--plain` mode for dumb terminals and pipes
//!
//! ## Usage
//! Run with `cargo run --release`. Pass `--seed` for a reproducible word
//! sequence or `--words` to play with your own list.

mod app;
mod tui;

use crate::app::{App, Screen, Tone};
use clap::Parser;
use colored::Colorize;
use hotcold::{RoundController, WordList};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Newline-separated word list file (defaults to the built-in list)
    #[clap(short, long)]
    words: Option<PathBuf>,

    /// Seed for the word picker, for reproducible rounds
    #[clap(short, long)]
    seed: Option<u64>,

    /// Line-oriented mode instead of the full-screen TUI
    #[clap(long, action = clap::ArgAction::SetTrue)]
    plain: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let words = match &args.words {
        Some(path) => WordList::from_file(path),
        None => Ok(WordList::default()),
    };
    let words = match words {
        Ok(words) => words,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(2);
        }
    };

    let rng = match args.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
    };

    let mut app = App::new(RoundController::new(words, rng));
    if args.plain {
        run_plain(&mut app)
    } else {
        tui::run_tui(&mut app)
    }
}

fn print_feedback(app: &App) {
    let line = match app.tone {
        Tone::Hotter => app.feedback.red().bold().to_string(),
        Tone::Colder => app.feedback.blue().to_string(),
        Tone::Correct => app.feedback.green().bold().to_string(),
        Tone::Error => app.feedback.yellow().to_string(),
        Tone::Neutral => app.feedback.normal().to_string(),
    };
    println!("{}", line);
}

/// Line-oriented game loop: one guess per line, `:give` to reveal the word,
/// `:quit` to leave. Ends cleanly on EOF.
fn run_plain(app: &mut App) -> io::Result<()> {
    let stdin = io::stdin();
    println!("{}", app.hint);
    print_feedback(app);

    loop {
        match app.screen {
            Screen::Playing => print!("guess> "),
            Screen::RoundOver => print!("play again? [y/n] "),
        }
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let trimmed = line.trim();

        match app.screen {
            Screen::Playing => match trimmed {
                ":quit" | ":q" => return Ok(()),
                ":give" => {
                    app.give_up();
                    print_feedback(app);
                }
                _ => {
                    app.input = trimmed.to_string();
                    app.submit();
                    print_feedback(app);
                    if app.screen == Screen::Playing && app.guess_count() > 0 {
                        println!("guesses so far: {}", app.guess_count());
                    }
                }
            },
            Screen::RoundOver => {
                if trimmed.eq_ignore_ascii_case("y") || trimmed.eq_ignore_ascii_case("yes") {
                    app.start_round();
                    println!("{}", app.hint);
                    print_feedback(app);
                } else {
                    return Ok(());
                }
            }
        }
    }
}
