use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use folio_core::navigation::Page;
use folio_core::NAV_ITEMS;
use ratatui::layout::Rect;

use crate::app::{App, InputMode};
use crate::tui::AppEvent;

/// Convert a character index to a byte index for UTF-8 safe string operations
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

pub async fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick(elapsed) => app.tick(elapsed).await,
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Global keys that work in any mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Editing => handle_editing_mode(app, key),
    }
}

/// Shortcut digit for a nav bar entry: 1-9 then 0.
pub fn nav_shortcut(index: usize) -> Option<char> {
    match index {
        0..=8 => char::from_digit(index as u32 + 1, 10),
        9 => Some('0'),
        _ => None,
    }
}

fn nav_index_for_digit(c: char) -> Option<usize> {
    let digit = c.to_digit(10)? as usize;
    let index = if digit == 0 { 9 } else { digit - 1 };
    (index < NAV_ITEMS.len()).then_some(index)
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Scrolling
        KeyCode::Char('d') if ctrl => app.scroll_half_page_down(),
        KeyCode::Char('u') if ctrl => app.scroll_half_page_up(),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::PageDown => app.scroll_half_page_down(),
        KeyCode::PageUp => app.scroll_half_page_up(),

        // Navigation bar
        KeyCode::Char(c) if c.is_ascii_digit() => {
            if let Some(index) = nav_index_for_digit(c) {
                app.activate_nav_item(index);
            }
        }
        KeyCode::Char('s') => {
            if let Some(index) = NAV_ITEMS.iter().position(|item| item.id == "social-links") {
                app.activate_nav_item(index);
            }
        }
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => app.nav_cursor_next(),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => app.nav_cursor_prev(),
        KeyCode::Enter => app.activate_nav_item(app.nav_cursor),
        KeyCode::Char('r') => app.navigate("research"),
        KeyCode::Char('b') => app.navigate("blog"),
        KeyCode::Char('H') => app.go_home(),

        // History
        KeyCode::Backspace | KeyCode::Char('[') => app.history_back(),
        KeyCode::Char(']') => app.history_forward(),

        KeyCode::Char('L') => app.toggle_locale(),

        // Assistant
        KeyCode::Char('a') | KeyCode::Char('i') => app.open_chat(),
        KeyCode::Esc => {
            if app.chat_open {
                app.close_chat();
            } else if app.page() != Page::Home {
                app.go_home();
            }
        }
        _ => {}
    }
}

fn handle_editing_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            // The session drops empty or overlapping submissions itself.
            app.submit_chat();
        }
        KeyCode::Backspace => {
            if app.chat_cursor > 0 {
                app.chat_cursor -= 1;
                let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_pos);
            }
        }
        KeyCode::Delete => {
            let char_count = app.chat_input.chars().count();
            if app.chat_cursor < char_count {
                let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
                app.chat_input.remove(byte_pos);
            }
        }
        KeyCode::Left => {
            app.chat_cursor = app.chat_cursor.saturating_sub(1);
        }
        KeyCode::Right => {
            let char_count = app.chat_input.chars().count();
            app.chat_cursor = (app.chat_cursor + 1).min(char_count);
        }
        KeyCode::Home => {
            app.chat_cursor = 0;
        }
        KeyCode::End => {
            app.chat_cursor = app.chat_input.chars().count();
        }
        KeyCode::Up => {
            app.chat_scroll = app.chat_scroll.saturating_sub(1);
        }
        KeyCode::Down => {
            app.chat_scroll = app.chat_scroll.saturating_add(1);
        }
        KeyCode::Char(c) => {
            let byte_pos = char_to_byte_index(&app.chat_input, app.chat_cursor);
            app.chat_input.insert(byte_pos, c);
            app.chat_cursor += 1;
        }
        _ => {}
    }
}

/// Check if a point is within a rectangle
fn point_in_rect(x: u16, y: u16, rect: Rect) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let in_chat = app
        .chat_area
        .is_some_and(|r| point_in_rect(mouse.column, mouse.row, r));

    match mouse.kind {
        MouseEventKind::ScrollDown => {
            if in_chat {
                app.chat_scroll = app.chat_scroll.saturating_add(3);
            } else {
                for _ in 0..3 {
                    app.scroll_down();
                }
            }
        }
        MouseEventKind::ScrollUp => {
            if in_chat {
                app.chat_scroll = app.chat_scroll.saturating_sub(3);
            } else {
                for _ in 0..3 {
                    app.scroll_up();
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use folio_core::{Config, PortfolioContent};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> App {
        let config = Config {
            endpoint_url: "http://127.0.0.1:9/llm-api".to_string(),
            ..Config::new()
        };
        App::new(&config, PortfolioContent::embedded().unwrap(), "/").unwrap()
    }

    #[test]
    fn test_shortcut_digits_round_trip() {
        for index in 0..10 {
            let c = nav_shortcut(index).unwrap();
            assert_eq!(nav_index_for_digit(c), Some(index));
        }
        assert_eq!(nav_shortcut(10), None);
    }

    #[test]
    fn test_char_to_byte_index_multibyte() {
        assert_eq!(char_to_byte_index("বাং", 1), "ব".len());
        assert_eq!(char_to_byte_index("ab", 5), 2);
    }

    #[test]
    fn test_digit_navigates_to_section() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('5')));

        assert_eq!(app.nav.state().active_section, "certificates");
        assert_eq!(app.nav.effects().address, "/certificates");
    }

    #[test]
    fn test_research_then_escape_goes_home() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('r')));
        assert_eq!(app.page(), Page::Research);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.page(), Page::Home);
        assert_eq!(app.nav.state().active_section, "profile");
        assert_eq!(app.nav.effects().address, "/profile");
    }

    #[test]
    fn test_locale_toggle_key_keeps_view() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('b')));
        let history = app.nav.effects().history().len();

        handle_key(&mut app, press(KeyCode::Char('L')));
        assert_eq!(app.locale(), folio_core::Locale::Bn);
        assert_eq!(app.page(), Page::Blog);
        assert_eq!(app.nav.effects().history().len(), history);
    }

    #[test]
    fn test_typing_edits_chat_input_at_cursor() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.input_mode, InputMode::Editing);

        for c in "hllo".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Home));
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Char('e')));
        assert_eq!(app.chat_input, "hello");

        handle_key(&mut app, press(KeyCode::End));
        handle_key(&mut app, press(KeyCode::Backspace));
        assert_eq!(app.chat_input, "hell");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
