//! Unified error types and result handling.

use thiserror::Error;

/// Every failure the bot can hit, from startup configuration to a rejected sheet write.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Required environment variable missing or unreadable
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// JSON encoding or decoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service-account credential or token exchange failure
    #[error("Authentication error: {message}")]
    Auth {
        /// Description of what went wrong
        message: String,
    },

    /// The spreadsheet API answered with a non-success status
    #[error("Sheets API returned {status}: {body}")]
    SheetsApi {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// No spreadsheet with the configured name is visible to the service account
    #[error("Spreadsheet '{name}' not found")]
    SpreadsheetNotFound {
        /// Name that was searched for
        name: String,
    },

    /// The spreadsheet exists but contains no worksheet to write to
    #[error("Spreadsheet {spreadsheet_id} has no worksheets")]
    NoWorksheets {
        /// Drive file id of the spreadsheet
        spreadsheet_id: String,
    },

    /// Serenity/Poise framework error
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
