use crate::app::{App, OutboundMessage};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the event loop should do with a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Dispatch(OutboundMessage),
    Quit,
}

pub fn handle_key(key: KeyEvent, app: &mut App) -> KeyOutcome {
    // Ctrl+C quits from anywhere
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyOutcome::Quit;
    }

    if app.open {
        handle_open_panel(key, app)
    } else {
        handle_closed_badge(key, app)
    }
}

fn handle_closed_badge(key: KeyEvent, app: &mut App) -> KeyOutcome {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
        KeyCode::Enter | KeyCode::Char('o') | KeyCode::Char(' ') => {
            app.toggle_open();
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

fn handle_open_panel(key: KeyEvent, app: &mut App) -> KeyOutcome {
    match key.code {
        KeyCode::Esc => {
            app.toggle_open();
            KeyOutcome::Continue
        }
        KeyCode::Tab => {
            app.cycle_language();
            KeyOutcome::Continue
        }
        // Alt+Enter inserts a literal newline; plain Enter sends
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            app.insert_newline();
            KeyOutcome::Continue
        }
        KeyCode::Enter => match app.begin_send() {
            Some(outbound) => KeyOutcome::Dispatch(outbound),
            None => KeyOutcome::Continue,
        },
        KeyCode::Backspace => {
            app.pop_char();
            KeyOutcome::Continue
        }
        KeyCode::Up => {
            app.scroll_up();
            KeyOutcome::Continue
        }
        KeyCode::Down => {
            app.scroll_down();
            KeyOutcome::Continue
        }
        KeyCode::Char(c) => {
            app.push_char(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_enter_opens_panel_when_closed() {
        let mut app = App::new();
        assert_eq!(handle_key(press(KeyCode::Enter), &mut app), KeyOutcome::Continue);
        assert!(app.open);
    }

    #[test]
    fn test_typing_only_edits_draft_when_open() {
        let mut app = App::new();
        app.toggle_open();
        for c in "hi".chars() {
            handle_key(press(KeyCode::Char(c)), &mut app);
        }
        assert_eq!(app.draft, "hi");
        handle_key(press(KeyCode::Backspace), &mut app);
        assert_eq!(app.draft, "h");
    }

    #[test]
    fn test_enter_dispatches_trimmed_draft() {
        let mut app = App::new();
        app.toggle_open();
        app.draft = " ping ".to_string();

        let outcome = handle_key(press(KeyCode::Enter), &mut app);
        assert_eq!(
            outcome,
            KeyOutcome::Dispatch(OutboundMessage {
                message: "ping".to_string(),
                lang: Language::English,
            })
        );
    }

    #[test]
    fn test_enter_with_empty_draft_does_nothing() {
        let mut app = App::new();
        app.toggle_open();

        assert_eq!(handle_key(press(KeyCode::Enter), &mut app), KeyOutcome::Continue);
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn test_alt_enter_inserts_newline_instead_of_sending() {
        let mut app = App::new();
        app.toggle_open();
        app.draft = "line one".to_string();

        let outcome = handle_key(press_with(KeyCode::Enter, KeyModifiers::ALT), &mut app);
        assert_eq!(outcome, KeyOutcome::Continue);
        assert_eq!(app.draft, "line one\n");
        assert_eq!(app.messages.len(), 1);
    }

    #[test]
    fn test_enter_while_sending_is_rejected() {
        let mut app = App::new();
        app.toggle_open();
        app.draft = "first".to_string();
        assert!(matches!(
            handle_key(press(KeyCode::Enter), &mut app),
            KeyOutcome::Dispatch(_)
        ));

        app.draft = "second".to_string();
        assert_eq!(handle_key(press(KeyCode::Enter), &mut app), KeyOutcome::Continue);
    }

    #[test]
    fn test_tab_cycles_language() {
        let mut app = App::new();
        app.toggle_open();
        handle_key(press(KeyCode::Tab), &mut app);
        assert_eq!(app.language, Language::Hindi);
    }

    #[test]
    fn test_esc_closes_panel_without_quitting() {
        let mut app = App::new();
        app.toggle_open();
        assert_eq!(handle_key(press(KeyCode::Esc), &mut app), KeyOutcome::Continue);
        assert!(!app.open);
    }

    #[test]
    fn test_ctrl_c_quits_from_open_panel() {
        let mut app = App::new();
        app.toggle_open();
        assert_eq!(
            handle_key(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app),
            KeyOutcome::Quit
        );
    }
}
