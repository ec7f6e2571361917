/// Gateway token and other values read from the process environment
pub mod environment;

/// Bot settings loaded from config.toml
pub mod settings;

pub use settings::AppConfig;
