use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use monthcal::{
    app::AppState,
    ui::month_view::{self, CellView},
};

/// Lines above the first week: header, spacer, weekday labels.
const GRID_TOP: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub x: u16,
    pub y: u16,
    pub cell_width: u16,
}

impl GridGeometry {
    pub fn for_area(area: Rect) -> Self {
        let inner_width = area.width.saturating_sub(2);
        let cell_width = (inner_width / 7).clamp(4, 12);
        let grid_width = cell_width * 7;
        // Same rounding as ratatui's centered lines: half the inner width minus half the line.
        Self {
            x: area.x + 1 + (inner_width / 2).saturating_sub(grid_width / 2),
            y: area.y + 1 + GRID_TOP,
            cell_width,
        }
    }

    pub fn cell_at(&self, column: u16, row: u16) -> Option<usize> {
        if column < self.x || row < self.y {
            return None;
        }
        let col = (column - self.x) / self.cell_width;
        let week = row - self.y;
        (col < 7 && week < 6).then(|| usize::from(week) * 7 + usize::from(col))
    }
}

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let layout = month_view::calculate_layout(app);
    let geometry = GridGeometry::for_area(area);
    let width = usize::from(geometry.cell_width);

    let mut lines = vec![
        Line::from(Span::styled(
            layout.header.clone(),
            Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(
            layout
                .weekday_labels
                .iter()
                .map(|label| {
                    Span::styled(
                        format!("{:^width$}", label, width = width),
                        Style::default().fg(app.theme.weekday_header),
                    )
                })
                .collect::<Vec<_>>(),
        ),
    ];

    for week in &layout.weeks {
        let spans: Vec<Span> = week
            .days
            .iter()
            .map(|cell| Span::styled(format!("{:^width$}", cell.day_number, width = width), cell_style(app, cell)))
            .collect();
        lines.push(Line::from(spans));
    }

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

fn cell_style(app: &AppState, cell: &CellView) -> Style {
    let theme = &app.theme;

    if !cell.is_current_month {
        Style::default().fg(theme.filler_day)
    } else if cell.is_selected {
        Style::default().bg(theme.selected_bg).fg(theme.selected_fg).add_modifier(Modifier::BOLD)
    } else if cell.is_today {
        Style::default().fg(theme.today).add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(theme.day)
    }
}
