use std::io;
use std::time::Duration;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use monthcal::{
    app::{AppState, Mode, StateChange},
    calendar::LanguageCode,
    input::{command_mode, normal_mode, MouseAdapter},
    storage::{config::Config, open_store},
    ui::theme::Theme,
};
use crate::tui::{
    calendar_views::month::GridGeometry,
    presentation::{split, ui},
};

/// How long the loop waits for input before re-reading the system date.
const TODAY_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

pub struct SessionOptions {
    pub language: Option<LanguageCode>,
    pub persist: bool,
}

pub fn run_tui(config: Config, options: SessionOptions) -> Result<(), io::Error> {
    let store = open_store(&config.storage.preferences_path, options.persist);
    let today = chrono::Local::now().date_naive();
    let mut app = AppState::new(store, config.ui.default_language, today)
        .with_theme(Theme::get_by_name(&config.ui.theme));

    if let Some(language) = options.language {
        app.set_language(language);
    }

    set_title(app.labels().title);
    app.on_change(|change, state| {
        if change == StateChange::LanguageChanged {
            set_title(state.language.table().title);
        }
    });
    app.on_change(|change, state| {
        tracing::debug!("{:?}: {}-{:02} [{}]", change, state.year, state.month + 1, state.language);
    });

    let mut mouse = MouseAdapter::new(config.ui.swipe_threshold_px, config.ui.column_width_px);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &mut mouse);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Session ended with error: {}", err);
        println!("Error: {:?}", err);
    }

    tracing::info!("Session closed");
    Ok(())
}

fn set_title(title: &str) {
    if let Err(e) = execute!(io::stdout(), SetTitle(title)) {
        tracing::warn!("Failed to set terminal title: {}", e);
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    mouse: &mut MouseAdapter,
) -> io::Result<()> {
    loop {
        app.refresh_today(chrono::Local::now().date_naive());

        terminal.draw(|f| ui(f, app))?;

        if !event::poll(TODAY_REFRESH_INTERVAL)? {
            continue;
        }

        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => match app.mode {
                Mode::Normal => {
                    if app.show_help {
                        handle_help_keys(key.code, app);
                    } else {
                        match key.code {
                            KeyCode::Char('q') => return Ok(()),
                            _ => normal_mode::handle_key(key.code, app),
                        }
                    }
                }
                Mode::Command => {
                    if command_mode::handle_key(key.code, app) {
                        return Ok(());
                    }
                }
            },
            TermEvent::Mouse(event) if !app.show_help => {
                let geometry = GridGeometry::for_area(split(terminal.size()?).month);
                mouse.handle(event, app, |column, row| geometry.cell_at(column, row));
            }
            _ => {}
        }
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}
