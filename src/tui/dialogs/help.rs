use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use monthcal::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 56.min(area.width);
    let help_height = 20.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let section = Style::default().fg(app.theme.help_section);
    let help_text = vec![
        Line::from(vec![Span::styled(
            format!("{} Help", app.labels().title),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled("Navigation:", section)]),
        Line::from("  ←/→  { / }  - Previous/next month"),
        Line::from("  Space  t    - Jump to today"),
        Line::from("  Swipe       - Drag left/right to change month"),
        Line::from("  Scroll      - Previous/next month"),
        Line::from(""),
        Line::from(vec![Span::styled("Selection:", section)]),
        Line::from("  h/l         - Previous/next day"),
        Line::from("  j/k         - Next/previous week"),
        Line::from("  Click       - Select a day"),
        Line::from("  Esc         - Clear selection"),
        Line::from(""),
        Line::from(vec![Span::styled("Commands:", section)]),
        Line::from("  L           - Switch language"),
        Line::from("  :lang de    - Set language (en, de)"),
        Line::from("  :goto       - Jump to month (:goto 2025-12)"),
        Line::from("  :today      - Jump to today"),
        Line::from("  :theme      - Change theme (:theme nord)"),
        Line::from("  :help       - Show this help"),
        Line::from("  :q  q       - Quit"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(2) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
