mod session;
mod presentation;
mod calendar_views;
mod dialogs;

pub use session::{SessionOptions, run_tui};
