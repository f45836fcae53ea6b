pub mod config;
pub mod preferences;

pub use config::{Config, ConfigError};
pub use preferences::{MemoryStore, PreferenceError, PreferenceStore, SqliteStore, open_store};
