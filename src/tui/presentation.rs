use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use monthcal::app::{AppState, Mode};
use crate::tui::{calendar_views, dialogs};

pub struct Areas {
    pub title: Rect,
    pub month: Rect,
    pub footer: Rect,
    pub status: Rect,
}

pub fn split(size: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(11),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(size);

    Areas {
        title: chunks[0],
        month: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

pub fn ui(f: &mut Frame, app: &AppState) {
    let areas = split(f.size());
    let labels = app.labels();

    let title = Paragraph::new(Line::from(vec![
        Span::styled(labels.title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(format!("[{}]", app.state().language), Style::default().fg(app.theme.footer)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, areas.title);

    calendar_views::month::render(f, app, areas.month);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(app.date_info(), Style::default().fg(app.theme.footer)),
        Span::raw("  |  "),
        Span::styled("Space", Style::default().fg(app.theme.today)),
        Span::raw(format!(" = {}", labels.today_label)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, areas.footer);

    let (status_text, status_color, alignment) = if matches!(app.mode, Mode::Command) {
        (app.command_buffer.clone(), app.theme.status_bar, Alignment::Left)
    } else if let Some(message) = &app.status_message {
        (message.clone(), app.theme.error, Alignment::Center)
    } else {
        (
            "←/→ = Month | Space = Today | hjkl = Select | L = Language | q = Quit | ? = Help".to_string(),
            app.theme.status_bar,
            Alignment::Center,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(alignment)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, areas.status);

    if app.show_help {
        dialogs::help::render(f, app);
    }
}
