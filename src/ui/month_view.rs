use serde::Serialize;

use crate::app::AppState;
use crate::calendar::grid::DAYS_PER_WEEK;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthLayout {
    pub title: &'static str,
    pub header: String,
    pub weekday_labels: [&'static str; 7],
    pub weeks: Vec<Week>,
    pub today_label: &'static str,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Week {
    pub days: Vec<CellView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
    /// Index into the 42-cell grid.
    pub position: usize,
    pub day_number: u32,
    pub is_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

impl MonthLayout {
    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.weeks.iter().flat_map(|w| &w.days)
    }
}

pub fn calculate_layout(state: &AppState) -> MonthLayout {
    let labels = state.labels();
    let selection = state.selection();

    let weeks = state
        .grid()
        .chunks(DAYS_PER_WEEK)
        .enumerate()
        .map(|(row, days)| Week {
            days: days
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let position = row * DAYS_PER_WEEK + col;
                    CellView {
                        position,
                        day_number: cell.day_number,
                        is_current_month: cell.belongs_to_current_month,
                        is_today: cell.is_today,
                        is_selected: selection == Some(position),
                    }
                })
                .collect(),
        })
        .collect();

    MonthLayout {
        title: labels.title,
        header: state.header(),
        weekday_labels: labels.day_abbrev,
        weeks,
        today_label: labels.today_label,
        footer: state.date_info(),
    }
}

/// Plain-text rendering of a layout, used outside the TUI.
pub fn render_text(layout: &MonthLayout) -> String {
    let width = DAYS_PER_WEEK * 4;
    let mut out = format!("{:^width$}\n", layout.header, width = width);

    for label in layout.weekday_labels {
        out.push_str(&format!("{:>4}", label));
    }
    out.push('\n');

    for week in &layout.weeks {
        for cell in &week.days {
            let text = match (cell.is_current_month, cell.is_today) {
                (false, _) => format!("({:>2})", cell.day_number),
                (true, true) => format!("[{:>2}]", cell.day_number),
                (true, false) => format!(" {:>2} ", cell.day_number),
            };
            out.push_str(&text);
        }
        out.push('\n');
    }

    out.push_str(&layout.footer);
    out.push('\n');
    out
}
