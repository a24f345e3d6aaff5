pub mod settings;

pub use settings::{AppSettings, DatabaseSettings, Settings};
