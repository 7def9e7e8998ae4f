//! Terminal plumbing: raw-mode/alternate-screen lifecycle, the key-event
//! loop, and the mapping from key presses to [`Action`]s. Rendering lives in
//! [`view`].

mod view;

use std::io::{stdout, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::{Action, App};
use crate::error::Result;

const POLL_TIMEOUT: Duration = Duration::from_millis(200);

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    cleaned_up: bool,
}

impl Tui {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;

        Ok(Self {
            terminal,
            cleaned_up: false,
        })
    }

    pub fn run(&mut self, app: &mut App) -> Result<()> {
        let mut needs_redraw = true;

        loop {
            if needs_redraw {
                self.terminal.draw(|frame| view::draw(frame, app))?;
                needs_redraw = false;
            }

            if !event::poll(POLL_TIMEOUT)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('c'))
                    {
                        break;
                    }

                    if let Some(action) = map_key(app, key) {
                        app.apply(action);
                        needs_redraw = true;
                    }

                    if app.should_quit {
                        break;
                    }
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        }

        self.cleanup()
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.cleaned_up {
            return Ok(());
        }

        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        self.cleaned_up = true;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Translate a key press into an action for the current mode. While the
/// modal is open every printable key is form input.
fn map_key(app: &App, key: KeyEvent) -> Option<Action> {
    if app.form.is_some() {
        return match key.code {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Save),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('a') => Some(Action::OpenAdd),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::OpenEdit),
        KeyCode::Char('d') | KeyCode::Delete => Some(Action::Delete),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
        KeyCode::Char(c @ '1'..='9') => {
            Some(Action::GotoPage(c.to_digit(10).unwrap_or(1) as usize))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::DEFAULT_PAGE_SIZE;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn browse_keys_map_to_list_actions() {
        let app = App::new(DEFAULT_PAGE_SIZE);
        assert_eq!(map_key(&app, key(KeyCode::Char('a'))), Some(Action::OpenAdd));
        assert_eq!(map_key(&app, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(
            map_key(&app, key(KeyCode::Char('3'))),
            Some(Action::GotoPage(3))
        );
        assert_eq!(map_key(&app, key(KeyCode::Right)), Some(Action::NextPage));
        assert_eq!(map_key(&app, key(KeyCode::F(1))), None);
    }

    #[test]
    fn modal_keys_become_form_input() {
        let mut app = App::new(DEFAULT_PAGE_SIZE);
        app.apply(Action::OpenAdd);

        assert_eq!(
            map_key(&app, key(KeyCode::Char('a'))),
            Some(Action::Input('a'))
        );
        assert_eq!(
            map_key(&app, key(KeyCode::Char('3'))),
            Some(Action::Input('3'))
        );
        assert_eq!(map_key(&app, key(KeyCode::Esc)), Some(Action::Cancel));
        assert_eq!(map_key(&app, key(KeyCode::Enter)), Some(Action::Save));
        assert_eq!(map_key(&app, key(KeyCode::Tab)), Some(Action::FocusNext));
    }
}
