pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};

pub async fn run_tui(mut app: App) -> anyhow::Result<()> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();

    let mut events = EventHandler::new(250);

    let outcome = loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, &mut app)) {
            break Err(e.into());
        }

        match events.next().await {
            Some(Event::Key(key)) => handle_key_event(&mut app, key),
            Some(Event::Tick) => app.update_flash(),
            None => break Err(anyhow::anyhow!("terminal event stream closed")),
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    outcome
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Navigation
                KeyCode::Char('j') | KeyCode::Down => app.next_row(),
                KeyCode::Char('k') | KeyCode::Up => app.previous_row(),
                KeyCode::Tab => app.next_domain(),

                // Scoring
                KeyCode::Char(c @ '0'..='4') => app.set_selected(c as u8 - b'0'),
                KeyCode::Char('l') | KeyCode::Right => app.step_selected(true),
                KeyCode::Char('h') | KeyCode::Left => app.step_selected(false),
                KeyCode::Backspace | KeyCode::Delete | KeyCode::Char('-') => app.clear_selected(),

                // Actions
                KeyCode::Char('c') | KeyCode::Enter => app.calculate(),
                KeyCode::Char('R') => app.reset(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Score, ScoreCalculator};

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn test_app() -> App {
        App::new(ScoreCalculator::default(), ThemeColors::dark())
    }

    #[test]
    fn test_digit_keys_score_selected_item() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('4'));

        let first = app.rows[0];
        let second = app.rows[1];
        assert_eq!(app.calculator.score(first).map(Score::value), Some(3));
        assert_eq!(app.calculator.score(second), Some(Score::MAX));
    }

    #[test]
    fn test_digits_above_four_ignored() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.calculator.scored_count(), 0);
    }

    #[test]
    fn test_calculate_then_reset_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.calculator.result().unwrap().total_score, 2);

        press(&mut app, KeyCode::Char('R'));
        assert!(app.calculator.result().is_none());
        assert_eq!(app.calculator.scored_count(), 0);
    }

    #[test]
    fn test_clear_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.calculator.scored_count(), 0);
    }

    #[test]
    fn test_help_swallows_next_key() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.input_mode, app::InputMode::Help);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.input_mode, app::InputMode::Normal);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
        assert!(app.calculator.result().is_none());
    }
}
