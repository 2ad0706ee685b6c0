pub mod settings;

pub use settings::{AppConfig, HttpSettings, RatingTable, RatingTables, StatSettings};
