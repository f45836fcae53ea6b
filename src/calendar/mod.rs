pub mod grid;
pub mod language;
pub mod state;

pub use grid::{DayCell, GRID_CELLS, generate_grid};
pub use language::{LANGUAGE_KEY, LanguageCode, LanguageTable};
pub use state::{CalendarState, Direction};
