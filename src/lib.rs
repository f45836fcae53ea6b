pub mod app;
pub mod calendar;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::{AppState, Mode, StateChange};
pub use calendar::{CalendarState, DayCell, Direction, LanguageCode};

pub use input::{command_mode, normal_mode};
