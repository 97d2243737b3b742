//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Adding a new keybinding is
//! a single match arm in [`handle_key_event`]; remember the help text in
//! [`crate::ui`]'s status bar.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events so that each physical keypress triggers
/// exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter | KeyCode::Char('o') => app.show_selected_link(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use socialfeed::normalize::normalize;
    use socialfeed::source::StaticFallbackClient;
    use socialfeed::view::cards;
    use socialfeed::{FeedRenderer, SourceKind};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_three() -> App {
        let posts: Vec<_> = StaticFallbackClient::posts()
            .iter()
            .take(3)
            .map(|raw| normalize(raw, SourceKind::StaticFallback))
            .collect();

        let mut app = App::new("acme");
        app.render(cards(&posts));
        app
    }

    #[test]
    fn quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = App::new("acme");
            handle_key_event(&mut app, press(code));
            assert!(app.quit);
        }
    }

    #[test]
    fn vim_and_arrow_navigation() {
        let mut app = app_with_three();

        handle_key_event(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.list_state.selected(), Some(1));
        handle_key_event(&mut app, press(KeyCode::Char('G')));
        assert_eq!(app.list_state.selected(), Some(2));
        handle_key_event(&mut app, press(KeyCode::Up));
        assert_eq!(app.list_state.selected(), Some(1));
        handle_key_event(&mut app, press(KeyCode::Home));
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn open_keys_show_the_selected_permalink() {
        for code in [KeyCode::Enter, KeyCode::Char('o')] {
            let mut app = app_with_three();
            handle_key_event(&mut app, press(KeyCode::Char('j')));
            handle_key_event(&mut app, press(code));
            assert_eq!(app.status, "Link: https://www.instagram.com/p/C2webrelaunch/");
        }
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = App::new("acme");
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert!(!app.quit);
    }
}
