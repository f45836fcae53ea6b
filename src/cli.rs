use std::{env, io};

use monthcal::{
    app::AppState,
    calendar::LanguageCode,
    command_mode::parse_year_month,
    storage::{config::Config, open_store},
    ui::month_view::{calculate_layout, render_text},
};

pub const USAGE: &str = "Usage: monthcal [--lang en|de] [--print [YYYY/MM]] [--json] [--no-persist]";

#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub language: Option<LanguageCode>,
    pub persist: bool,
    pub mode: CliMode,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliMode {
    Interactive,
    /// Print one month to stdout; `None` means the current month.
    Print { month: Option<(i32, u32)>, json: bool },
}

pub fn parse_cli_args() -> Result<Option<CliArgs>, String> {
    parse_args(env::args().skip(1))
}

/// Returns `Ok(None)` when only help was requested.
pub fn parse_args<I>(args: I) -> Result<Option<CliArgs>, String>
where
    I: IntoIterator<Item = String>,
{
    let mut language = None;
    let mut persist = true;
    let mut print = false;
    let mut month = None;
    let mut json = false;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--lang" => {
                let code = args.next().ok_or("--lang requires a language code")?;
                language = Some(
                    LanguageCode::parse(&code)
                        .ok_or_else(|| format!("Unknown language '{}'. Use en or de.", code))?,
                );
            }
            "--print" => {
                print = true;
                if let Some(next) = args.next_if(|next| !next.starts_with("--")) {
                    month = Some(
                        parse_year_month(&next)
                            .ok_or_else(|| format!("Invalid month '{}'. Use YYYY/MM.", next))?,
                    );
                }
            }
            "--json" => json = true,
            "--no-persist" => persist = false,
            "--help" | "-h" => return Ok(None),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if json && !print {
        return Err("--json requires --print".to_string());
    }

    let mode = if print {
        CliMode::Print { month, json }
    } else {
        CliMode::Interactive
    };

    Ok(Some(CliArgs { language, persist, mode }))
}

pub fn run_print_mode(config: &Config, args: &CliArgs, month: Option<(i32, u32)>, json: bool) -> Result<(), io::Error> {
    let store = open_store(&config.storage.preferences_path, args.persist);
    let today = chrono::Local::now().date_naive();
    let mut app = AppState::new(store, config.ui.default_language, today);

    if let Some(language) = args.language {
        app.set_language(language);
    }
    if let Some((year, month)) = month {
        app.go_to(year, i64::from(month));
    }

    let layout = calculate_layout(&app);

    if json {
        let output = serde_json::to_string_pretty(&layout).map_err(io::Error::other)?;
        println!("{}", output);
    } else {
        print!("{}", render_text(&layout));
    }

    Ok(())
}
