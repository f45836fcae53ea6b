use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::calendar::Direction;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    state.status_message = None;

    match key {
        KeyCode::Left | KeyCode::Char('{') => state.advance(Direction::Previous),
        KeyCode::Right | KeyCode::Char('}') => state.advance(Direction::Next),
        KeyCode::Char(' ') | KeyCode::Char('t') => state.go_to_today(),
        KeyCode::Char('h') => state.move_selection(-1),
        KeyCode::Char('l') => state.move_selection(1),
        KeyCode::Char('j') => state.move_selection(7),
        KeyCode::Char('k') => state.move_selection(-7),
        KeyCode::Char('L') => state.cycle_language(),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => toggle_help(state),
        KeyCode::Esc => state.clear_selection(),
        _ => {}
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}

fn toggle_help(state: &mut AppState) {
    state.show_help = !state.show_help;
    state.help_scroll = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::LanguageCode;
    use crate::storage::MemoryStore;
    use chrono::{Local, NaiveDate};

    fn app() -> AppState {
        let today = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        AppState::new(Box::new(MemoryStore::new()), LanguageCode::En, today)
    }

    fn month_of(state: &AppState) -> (i32, u32) {
        (state.state().year, state.state().month)
    }

    #[test]
    fn right_arrow_shows_next_month() {
        let mut state = app();
        handle_key(KeyCode::Right, &mut state);
        assert_eq!(month_of(&state), (2024, 2));
    }

    #[test]
    fn left_arrow_shows_previous_month() {
        let mut state = app();
        handle_key(KeyCode::Left, &mut state);
        assert_eq!(month_of(&state), (2024, 0));
    }

    #[test]
    fn braces_mirror_arrows() {
        let mut state = app();
        handle_key(KeyCode::Char('}'), &mut state);
        handle_key(KeyCode::Char('}'), &mut state);
        handle_key(KeyCode::Char('{'), &mut state);
        assert_eq!(month_of(&state), (2024, 2));
    }

    #[test]
    fn space_jumps_to_current_month() {
        let mut state = app();
        handle_key(KeyCode::Left, &mut state);

        handle_key(KeyCode::Char(' '), &mut state);

        assert!(state.state().shows(Local::now().date_naive()));
    }

    #[test]
    fn hjkl_move_selection() {
        let mut state = app();
        handle_key(KeyCode::Char('l'), &mut state);
        assert_eq!(state.selected_cell().map(|c| c.day_number), Some(15));

        handle_key(KeyCode::Char('j'), &mut state);
        handle_key(KeyCode::Char('h'), &mut state);
        handle_key(KeyCode::Char('k'), &mut state);

        assert_eq!(state.selected_cell().map(|c| c.day_number), Some(14));
    }

    #[test]
    fn escape_clears_selection() {
        let mut state = app();
        handle_key(KeyCode::Char('l'), &mut state);

        handle_key(KeyCode::Esc, &mut state);

        assert_eq!(state.selection(), None);
    }

    #[test]
    fn capital_l_cycles_language() {
        let mut state = app();
        handle_key(KeyCode::Char('L'), &mut state);
        assert_eq!(state.state().language, LanguageCode::De);
    }

    #[test]
    fn colon_enters_command_mode() {
        let mut state = app();
        handle_key(KeyCode::Char(':'), &mut state);
        assert_eq!(state.mode, Mode::Command);
        assert_eq!(state.command_buffer, ":");
    }

    #[test]
    fn question_mark_toggles_help() {
        let mut state = app();
        handle_key(KeyCode::Char('?'), &mut state);
        assert!(state.show_help);
        handle_key(KeyCode::Char('?'), &mut state);
        assert!(!state.show_help);
    }

    #[test]
    fn keys_clear_stale_status_message() {
        let mut state = app();
        state.status_message = Some("Unknown command: x".to_string());

        handle_key(KeyCode::Right, &mut state);

        assert_eq!(state.status_message, None);
    }
}
