use chrono::{Local, NaiveDate};

use crate::calendar::{
    CalendarState, DayCell, Direction, LANGUAGE_KEY, LanguageCode, LanguageTable,
    generate_grid, language,
};
use crate::storage::PreferenceStore;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Navigated,
    LanguageChanged,
    SelectionChanged,
}

pub type Listener = Box<dyn FnMut(StateChange, &CalendarState)>;

/// Owns the calendar state for one session and rebuilds the grid on every move.
pub struct AppState {
    pub mode: Mode,
    pub command_buffer: String,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
    state: CalendarState,
    today: NaiveDate,
    grid: Vec<DayCell>,
    selection: Option<usize>,
    store: Box<dyn PreferenceStore>,
    listeners: Vec<Listener>,
}

impl AppState {
    pub fn new(store: Box<dyn PreferenceStore>, default_language: LanguageCode, today: NaiveDate) -> Self {
        let saved = store.get(LANGUAGE_KEY).unwrap_or_else(|e| {
            tracing::warn!("Failed to read language preference: {}", e);
            None
        });
        let language = LanguageCode::from_persisted(saved.as_deref(), default_language);

        let state = CalendarState::for_date(today, language);
        let grid = generate_grid(state.year, state.month, today);

        Self {
            mode: Mode::Normal,
            command_buffer: String::new(),
            status_message: None,
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
            state,
            today,
            grid,
            selection: None,
            store,
            listeners: Vec::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Registers a callback run after every state change, in registration order.
    pub fn on_change<F>(&mut self, listener: F)
    where
        F: FnMut(StateChange, &CalendarState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn grid(&self) -> &[DayCell] {
        &self.grid
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_cell(&self) -> Option<&DayCell> {
        self.selection.and_then(|pos| self.grid.get(pos))
    }

    pub fn labels(&self) -> &'static LanguageTable {
        self.state.language.table()
    }

    pub fn header(&self) -> String {
        language::month_header(self.state.language, self.state.year, self.state.month)
    }

    pub fn date_info(&self) -> String {
        language::date_info(self.state.language, self.today)
    }

    pub fn advance(&mut self, direction: Direction) {
        self.state.advance(direction);
        tracing::debug!("Advanced {:?} to {}-{:02}", direction, self.state.year, self.state.month + 1);
        self.regenerate();
    }

    pub fn go_to_today(&mut self) {
        self.go_to_date(Local::now().date_naive());
    }

    /// Shows the month containing `date` and treats `date` as today.
    pub fn go_to_date(&mut self, date: NaiveDate) {
        self.today = date;
        self.state.go_to_date(date);
        self.regenerate();
    }

    /// Jumps to a month given as a zero-based offset, normalized into range.
    pub fn go_to(&mut self, year: i32, month: i64) {
        let language = self.state.language;
        self.state = CalendarState::new(year, month, language);
        self.regenerate();
    }

    /// Picks up a new system date, e.g. after midnight.
    pub fn refresh_today(&mut self, date: NaiveDate) {
        if date == self.today {
            return;
        }
        let marker_visible = self.state.shows(self.today) || self.state.shows(date);
        self.today = date;
        if marker_visible {
            self.grid = generate_grid(self.state.year, self.state.month, self.today);
        }
    }

    /// Selects the cell at `position`; filler cells and out-of-range positions are ignored.
    pub fn select(&mut self, position: usize) -> bool {
        let selectable = self
            .grid
            .get(position)
            .is_some_and(|cell| cell.belongs_to_current_month);
        if !selectable {
            return false;
        }

        if self.selection != Some(position) {
            self.selection = Some(position);
            self.notify(StateChange::SelectionChanged);
        }
        true
    }

    pub fn clear_selection(&mut self) {
        if self.selection.take().is_some() {
            self.notify(StateChange::SelectionChanged);
        }
    }

    /// Moves the selection by `delta` cells, staying inside the shown month.
    ///
    /// With nothing selected the first move lands on today, or on day 1 when
    /// today is in another month.
    pub fn move_selection(&mut self, delta: i64) {
        let Some(first) = self.grid.iter().position(|c| c.belongs_to_current_month) else {
            return;
        };
        let Some(last) = self.grid.iter().rposition(|c| c.belongs_to_current_month) else {
            return;
        };

        let target = match self.selection {
            Some(pos) => (pos as i64 + delta).clamp(first as i64, last as i64) as usize,
            None => self.grid.iter().position(|c| c.is_today).unwrap_or(first),
        };

        self.select(target);
    }

    pub fn set_language(&mut self, language: LanguageCode) {
        self.state.language = language;

        if let Err(e) = self.store.set(LANGUAGE_KEY, language.code()) {
            tracing::warn!("Failed to persist language '{}': {}", language, e);
        }

        tracing::info!("Language set to {}", language);
        self.notify(StateChange::LanguageChanged);
    }

    pub fn cycle_language(&mut self) {
        self.set_language(self.state.language.next());
    }

    fn regenerate(&mut self) {
        self.grid = generate_grid(self.state.year, self.state.month, self.today);
        self.selection = None;
        self.notify(StateChange::Navigated);
    }

    fn notify(&mut self, change: StateChange) {
        for listener in &mut self.listeners {
            listener(change, &self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::preferences::{MockPreferenceStore, PreferenceError};
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn app_on(today: NaiveDate) -> AppState {
        AppState::new(Box::new(MemoryStore::new()), LanguageCode::En, today)
    }

    fn position_of_day(app: &AppState, day: u32) -> usize {
        app.grid()
            .iter()
            .position(|c| c.belongs_to_current_month && c.day_number == day)
            .unwrap()
    }

    #[test]
    fn new_app_starts_in_normal_mode() {
        let app = app_on(date(2024, 2, 15));
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn new_app_shows_month_of_today() {
        let app = app_on(date(2024, 2, 15));
        assert_eq!((app.state().year, app.state().month), (2024, 1));
        assert_eq!(app.grid().len(), 42);
    }

    #[test]
    fn new_app_has_no_selection() {
        let app = app_on(date(2024, 2, 15));
        assert_eq!(app.selection(), None);
    }

    #[test]
    fn restores_persisted_language() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "de").unwrap();

        let app = AppState::new(Box::new(store), LanguageCode::En, date(2024, 2, 15));

        assert_eq!(app.state().language, LanguageCode::De);
    }

    #[test]
    fn unknown_persisted_language_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "xx").unwrap();

        let app = AppState::new(Box::new(store), LanguageCode::En, date(2024, 2, 15));

        assert_eq!(app.state().language, LanguageCode::En);
    }

    #[test]
    fn unknown_persisted_language_uses_configured_default() {
        let mut store = MemoryStore::new();
        store.set(LANGUAGE_KEY, "xx").unwrap();

        let app = AppState::new(Box::new(store), LanguageCode::De, date(2024, 2, 15));

        assert_eq!(app.state().language, LanguageCode::De);
    }

    #[test]
    fn unreadable_store_falls_back_to_default() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .returning(|_| Err(PreferenceError::Io(std::io::Error::other("disk gone"))));

        let app = AppState::new(Box::new(store), LanguageCode::En, date(2024, 2, 15));

        assert_eq!(app.state().language, LanguageCode::En);
    }

    #[test]
    fn switching_to_german_translates_and_persists() {
        let mut store = MockPreferenceStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .withf(|key, value| key == "calendar-language" && value == "de")
            .times(1)
            .returning(|_, _| Ok(()));

        let mut app = AppState::new(Box::new(store), LanguageCode::En, date(2024, 2, 15));
        assert_eq!(app.labels().month_names[0], "January");

        app.set_language(LanguageCode::De);

        assert_eq!(app.labels().month_names[0], "Januar");
        assert_eq!(app.state().language, LanguageCode::De);
    }

    #[test]
    fn failed_persist_still_switches_language() {
        let mut store = MockPreferenceStore::new();
        store.expect_get().returning(|_| Ok(None));
        store
            .expect_set()
            .returning(|_, _| Err(PreferenceError::Io(std::io::Error::other("read-only"))));

        let mut app = AppState::new(Box::new(store), LanguageCode::En, date(2024, 2, 15));
        app.set_language(LanguageCode::De);

        assert_eq!(app.state().language, LanguageCode::De);
    }

    #[test]
    fn header_and_footer_follow_language() {
        let mut app = app_on(date(2024, 2, 15));
        assert_eq!(app.header(), "February 2024");
        assert_eq!(app.date_info(), "Thu, February 15, 2024");

        app.cycle_language();

        assert_eq!(app.header(), "Februar 2024");
        assert_eq!(app.date_info(), "Do, 15. Februar 2024");
    }

    #[test]
    fn selecting_current_month_cell_sets_selection() {
        let mut app = app_on(date(2024, 2, 15));
        let pos = position_of_day(&app, 10);

        assert!(app.select(pos));

        assert_eq!(app.selection(), Some(pos));
        assert_eq!(app.selected_cell().map(|c| c.day_number), Some(10));
    }

    #[test]
    fn selecting_filler_cell_is_ignored() {
        let mut app = app_on(date(2024, 2, 15));
        let pos = position_of_day(&app, 10);
        app.select(pos);

        // Cell 0 is January 28th.
        assert!(!app.select(0));

        assert_eq!(app.selection(), Some(pos));
    }

    #[test]
    fn selecting_filler_without_prior_selection_creates_none() {
        let mut app = app_on(date(2024, 2, 15));

        app.select(41);

        assert_eq!(app.selection(), None);
    }

    #[test]
    fn selecting_out_of_range_is_ignored() {
        let mut app = app_on(date(2024, 2, 15));
        assert!(!app.select(42));
        assert_eq!(app.selection(), None);
    }

    #[test]
    fn new_selection_replaces_previous() {
        let mut app = app_on(date(2024, 2, 15));
        app.select(position_of_day(&app, 3));
        app.select(position_of_day(&app, 20));

        assert_eq!(app.selected_cell().map(|c| c.day_number), Some(20));
    }

    #[test]
    fn navigation_clears_selection() {
        let mut app = app_on(date(2024, 2, 15));
        app.select(position_of_day(&app, 3));

        app.advance(Direction::Next);

        assert_eq!(app.selection(), None);
        assert_eq!((app.state().year, app.state().month), (2024, 2));
    }

    #[test]
    fn advance_does_not_change_today() {
        let mut app = app_on(date(2024, 2, 15));

        app.advance(Direction::Next);

        assert_eq!(app.today(), date(2024, 2, 15));
        assert!(app.grid().iter().all(|c| !c.is_today));
    }

    #[test]
    fn go_to_date_returns_to_month_and_clears_selection() {
        let mut app = app_on(date(2024, 2, 15));
        app.advance(Direction::Previous);
        app.advance(Direction::Previous);
        app.select(position_of_day(&app, 1));

        app.go_to_date(date(2024, 2, 15));

        assert_eq!((app.state().year, app.state().month), (2024, 1));
        assert_eq!(app.selection(), None);
        assert_eq!(app.grid().iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn go_to_today_uses_system_date() {
        let mut app = app_on(date(1990, 6, 1));

        app.go_to_today();

        assert!(app.state().shows(Local::now().date_naive()));
    }

    #[test]
    fn go_to_normalizes_month() {
        let mut app = app_on(date(2024, 2, 15));

        app.go_to(2024, 12);

        assert_eq!((app.state().year, app.state().month), (2025, 0));
    }

    #[test]
    fn refresh_today_moves_the_today_marker() {
        let mut app = app_on(date(2024, 2, 15));

        app.refresh_today(date(2024, 2, 16));

        let marked: Vec<_> = app.grid().iter().filter(|c| c.is_today).collect();
        assert_eq!(marked[0].day_number, 16);
    }

    #[test]
    fn refresh_today_into_the_shown_month_marks_the_new_day() {
        let mut app = app_on(date(2024, 1, 31));
        app.advance(Direction::Next);
        assert!(app.grid().iter().all(|c| !c.is_today));

        app.refresh_today(date(2024, 2, 1));

        assert_eq!(app.today(), date(2024, 2, 1));
        assert_eq!(app.grid().iter().filter(|c| c.is_today).count(), 1);
    }

    #[test]
    fn refresh_today_keeps_the_selection() {
        let mut app = app_on(date(2024, 2, 15));
        app.select(position_of_day(&app, 20));

        app.refresh_today(date(2024, 2, 16));

        assert_eq!(app.selected_cell().map(|c| c.day_number), Some(20));
    }

    #[test]
    fn first_selection_move_lands_on_today() {
        let mut app = app_on(date(2024, 2, 15));

        app.move_selection(1);

        assert_eq!(app.selected_cell().map(|c| c.day_number), Some(15));
    }

    #[test]
    fn first_selection_move_outside_today_month_lands_on_day_one() {
        let mut app = app_on(date(2024, 2, 15));
        app.advance(Direction::Next);

        app.move_selection(7);

        assert_eq!(app.selected_cell().map(|c| c.day_number), Some(1));
    }

    #[test]
    fn selection_moves_are_clamped_to_current_month() {
        let mut app = app_on(date(2024, 2, 15));
        app.select(position_of_day(&app, 2));

        app.move_selection(-7);
        assert_eq!(app.selected_cell().map(|c| c.day_number), Some(1));

        app.select(position_of_day(&app, 27));
        app.move_selection(7);
        assert_eq!(app.selected_cell().map(|c| c.day_number), Some(29));
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut app = app_on(date(2024, 2, 15));

        let first = Rc::clone(&calls);
        app.on_change(move |change, _| first.borrow_mut().push(("labels", change)));
        let second = Rc::clone(&calls);
        app.on_change(move |change, _| second.borrow_mut().push(("footer", change)));

        app.set_language(LanguageCode::De);

        assert_eq!(
            *calls.borrow(),
            vec![
                ("labels", StateChange::LanguageChanged),
                ("footer", StateChange::LanguageChanged),
            ]
        );
    }

    #[test]
    fn listeners_see_the_updated_state() {
        let seen = Rc::new(RefCell::new(None));
        let mut app = app_on(date(2024, 12, 1));

        let sink = Rc::clone(&seen);
        app.on_change(move |_, state| *sink.borrow_mut() = Some((state.year, state.month)));

        app.advance(Direction::Next);

        assert_eq!(*seen.borrow(), Some((2025, 0)));
    }

    #[test]
    fn clearing_empty_selection_does_not_notify() {
        let count = Rc::new(RefCell::new(0));
        let mut app = app_on(date(2024, 2, 15));
        let sink = Rc::clone(&count);
        app.on_change(move |_, _| *sink.borrow_mut() += 1);

        app.clear_selection();

        assert_eq!(*count.borrow(), 0);
    }
}
