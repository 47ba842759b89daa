pub mod settings;

pub use settings::{AppConfig, DatabaseSettings, DrawSettings, RatingSettings};
