use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::calendar::LanguageCode;
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Today,
    /// Year and zero-based month.
    Goto(i32, u32),
    Language(LanguageCode),
    Theme(String),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    let Some(name) = parts.first() else {
        return Command::Error("Empty command".to_string());
    };

    match *name {
        "q" | "quit" => Command::Quit,
        "today" => Command::Today,
        "help" => Command::Help,
        "goto" => match parts.get(1) {
            None => Command::Error("goto requires a month argument".to_string()),
            Some(arg) => parse_year_month(arg)
                .map(|(year, month)| Command::Goto(year, month))
                .unwrap_or_else(|| Command::Error(format!("Invalid month format: {}", arg))),
        },
        "lang" | "language" => match parts.get(1) {
            None => Command::Error("lang requires a language code".to_string()),
            Some(arg) => LanguageCode::parse(arg)
                .map(Command::Language)
                .unwrap_or_else(|| Command::Error(format!("Unknown language: {}", arg))),
        },
        "theme" => match parts.get(1) {
            None => Command::Error("theme requires a theme name".to_string()),
            Some(arg) => Command::Theme(arg.to_string()),
        },
        _ => Command::Error(format!("Unknown command: {}", name)),
    }
}

/// Parses `YYYY-MM` (also `YYYY/MM`) into a year and zero-based month.
pub fn parse_year_month(input: &str) -> Option<(i32, u32)> {
    let (year, month) = input.rsplit_once(['-', '/'])?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    (1..=12).contains(&month).then(|| (year, month - 1))
}

/// Handles one key while the command line is open. Returns `true` to quit.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            execute(command, state)
        }
        KeyCode::Esc => {
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                state.mode = Mode::Normal;
            }
            false
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            false
        }
        _ => false,
    }
}

pub fn execute(command: Command, state: &mut AppState) -> bool {
    tracing::debug!("Executing command {:?}", command);

    match command {
        Command::Quit => return true,
        Command::Today => state.go_to_today(),
        Command::Goto(year, month) => state.go_to(year, i64::from(month)),
        Command::Language(language) => state.set_language(language),
        Command::Theme(name) => match Theme::find(&name) {
            Some(theme) => state.theme = theme,
            None => state.status_message = Some(format!("Unknown theme: {}", name)),
        },
        Command::Help => {
            state.show_help = !state.show_help;
            state.help_scroll = 0;
        }
        Command::Error(message) => {
            tracing::info!("Command error: {}", message);
            state.status_message = Some(message);
        }
    }

    false
}
