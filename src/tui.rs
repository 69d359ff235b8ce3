use crate::app::{App, Screen, Tone};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

pub fn run_tui(app: &mut App) -> io::Result<()> {
    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()>
where
    io::Error: From<B::Error>,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Key repeats and releases would double-type on some terminals
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Esc {
                    return Ok(());
                }
                match app.screen {
                    Screen::Playing => match key.code {
                        KeyCode::Enter => app.submit(),
                        KeyCode::Backspace => {
                            app.input.pop();
                        }
                        KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.give_up()
                        }
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.input.push(c)
                        }
                        _ => {}
                    },
                    Screen::RoundOver => match key.code {
                        KeyCode::Enter | KeyCode::Char('p') => app.start_round(),
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    },
                }
            }
        }
    }
}

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Hotter => Color::Red,
        Tone::Colder => Color::Blue,
        Tone::Correct => Color::Green,
        Tone::Error => Color::Yellow,
        Tone::Neutral => Color::White,
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // hint
            Constraint::Min(4),    // guess history
            Constraint::Length(3), // latest feedback
            Constraint::Length(3), // input line
            Constraint::Length(3), // instructions
        ])
        .split(f.area());

    let hint = Paragraph::new(app.hint.as_str())
        .block(Block::default().title("Hint").borders(Borders::ALL));
    f.render_widget(hint, chunks[0]);

    let history_lines: Vec<Line> = app
        .history
        .iter()
        .map(|(text, tone)| {
            Line::from(Span::styled(
                text.clone(),
                Style::default().fg(tone_color(*tone)),
            ))
        })
        .collect();
    let history_title = format!("Guesses: {}", app.guess_count());
    let history = Paragraph::new(history_lines)
        .block(Block::default().title(history_title).borders(Borders::ALL));
    f.render_widget(history, chunks[1]);

    let feedback = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(tone_color(app.tone)))
        .block(Block::default().title("Message").borders(Borders::ALL));
    f.render_widget(feedback, chunks[2]);

    let input = Paragraph::new(format!("> {}", app.input))
        .block(Block::default().title("Your guess").borders(Borders::ALL));
    f.render_widget(input, chunks[3]);

    let help = match app.screen {
        Screen::Playing => "Type a word and press Enter. Ctrl-G to give up, Esc to quit.",
        Screen::RoundOver => "Enter or 'p' to play again, 'q' or Esc to quit.",
    };
    let instructions = Paragraph::new(help)
        .block(Block::default().title("Instructions").borders(Borders::ALL));
    f.render_widget(instructions, chunks[4]);
}
