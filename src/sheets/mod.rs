//! Spreadsheet backend - service-account auth, REST client and connection status
//!
//! The bot only ever needs one capability from the spreadsheet: append a row to the
//! first worksheet. That capability is modelled by [`RowAppender`], and whether it is
//! available at all is modelled by [`SheetConnection`].

/// Service-account credentials and access-token exchange
pub mod auth;
/// REST client for the Drive and Sheets APIs
pub mod client;

use crate::{config::AppConfig, errors::Result};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error, info};

pub use auth::{ServiceAccountAuth, TokenProvider};
pub use client::{SheetsClient, Worksheet};

/// OAuth scopes requested for the service account
pub const SCOPES: [&str; 2] = [
    "https://spreadsheets.google.com/feeds",
    "https://www.googleapis.com/auth/drive",
];

/// A single cell value, written as a JSON string or number
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Free text
    Text(String),
    /// Numeric value
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Anything that can append one row to a worksheet.
#[async_trait]
pub trait RowAppender: Send + Sync {
    /// Appends `row` after the last non-empty row of the target worksheet.
    async fn append_row(&self, row: &[Cell]) -> Result<()>;
}

/// Whether the spreadsheet can be written to.
///
/// Set once at startup and never changes for the life of the process.
#[derive(Clone)]
pub enum SheetConnection {
    /// Write target opened successfully
    Connected(Arc<dyn RowAppender>),
    /// Connection failed at startup
    Unavailable {
        /// Why the connection could not be opened
        reason: String,
    },
}

impl SheetConnection {
    /// Returns the appender when connected, `None` otherwise.
    #[must_use]
    pub fn appender(&self) -> Option<&dyn RowAppender> {
        match self {
            Self::Connected(appender) => Some(appender.as_ref()),
            Self::Unavailable { .. } => None,
        }
    }

    /// True when rows can be appended
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

impl std::fmt::Debug for SheetConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connected(_) => f.write_str("Connected"),
            Self::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

/// Opens the configured spreadsheet and returns its first worksheet as the write target.
///
/// Never fails: any error is logged and turned into [`SheetConnection::Unavailable`].
pub async fn connect(config: &AppConfig) -> SheetConnection {
    match open_worksheet(config).await {
        Ok(worksheet) => {
            info!(
                "✅ Connected to Google Sheet '{}' (worksheet '{}')",
                config.spreadsheet_name,
                worksheet.title()
            );
            SheetConnection::Connected(Arc::new(worksheet))
        }
        Err(e) => {
            error!("❌ Failed to connect to Google Sheet: {e}");
            SheetConnection::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

async fn open_worksheet(config: &AppConfig) -> Result<Worksheet> {
    let auth = ServiceAccountAuth::from_key_file(&config.credentials_path, &SCOPES)?;
    debug!("Authenticating as {}", auth.client_email());
    let client = SheetsClient::new(Arc::new(auth));
    client.open_first_worksheet(&config.spreadsheet_name).await
}
