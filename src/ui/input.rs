//! 键盘事件映射 (Input -> Action)

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, Tab};

/// 按键对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('1') => Some(Action::SelectTab(Tab::Timeline)),
        KeyCode::Char('2') => Some(Action::SelectTab(Tab::Costs)),
        KeyCode::Char('3') => Some(Action::SelectTab(Tab::Flights)),
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => Some(Action::NextTab),
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevTab),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollUp),
        _ => None,
    }
}

/// 处理按键事件，返回 true 表示退出
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    match get_action(key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlyphStyle;
    use crate::trip_data::TRIP;

    #[test]
    fn test_shortcuts_match_tabs() {
        for tab in Tab::ALL {
            assert_eq!(
                get_action(KeyCode::Char(tab.shortcut())),
                Some(Action::SelectTab(tab))
            );
        }
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut app = App::new(&TRIP, GlyphStyle::Unicode);
        assert!(!handle_key_event(&mut app, KeyCode::Char('x')));
        assert_eq!(app.tab, Tab::Timeline);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&TRIP, GlyphStyle::Unicode);
        assert!(handle_key_event(&mut app, KeyCode::Char('q')));
        assert!(handle_key_event(&mut app, KeyCode::Esc));
    }

    #[test]
    fn test_keys_switch_tabs() {
        let mut app = App::new(&TRIP, GlyphStyle::Unicode);
        handle_key_event(&mut app, KeyCode::Char('3'));
        assert_eq!(app.tab, Tab::Flights);
        handle_key_event(&mut app, KeyCode::Tab);
        assert_eq!(app.tab, Tab::Timeline);
        handle_key_event(&mut app, KeyCode::BackTab);
        assert_eq!(app.tab, Tab::Flights);
    }

    #[test]
    fn test_scroll_keys() {
        assert_eq!(get_action(KeyCode::Char('j')), Some(Action::ScrollDown));
        assert_eq!(get_action(KeyCode::Down), Some(Action::ScrollDown));
        assert_eq!(get_action(KeyCode::Char('k')), Some(Action::ScrollUp));
        assert_eq!(get_action(KeyCode::Up), Some(Action::ScrollUp));
    }
}
