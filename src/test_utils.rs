//! Shared test utilities.
//!
//! In-memory stand-ins for the spreadsheet backend so command logic can be
//! exercised without network access.

use crate::{
    errors::{Error, Result},
    sheets::{Cell, RowAppender, TokenProvider},
};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use std::sync::Mutex;

/// Records every appended row.
#[derive(Debug, Default)]
pub struct RecordingAppender {
    rows: Mutex<Vec<Vec<Cell>>>,
}

impl RecordingAppender {
    /// All rows appended so far, in call order
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.rows.lock().map(|rows| rows.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl RowAppender for RecordingAppender {
    async fn append_row(&self, row: &[Cell]) -> Result<()> {
        if let Ok(mut rows) = self.rows.lock() {
            rows.push(row.to_vec());
        }
        Ok(())
    }
}

/// Rejects every append with an API error and counts the attempts.
#[derive(Debug, Default)]
pub struct FailingAppender {
    attempts: Mutex<usize>,
}

impl FailingAppender {
    /// Number of append calls received
    pub fn attempts(&self) -> usize {
        self.attempts.lock().map(|n| *n).unwrap_or_default()
    }
}

#[async_trait]
impl RowAppender for FailingAppender {
    async fn append_row(&self, _row: &[Cell]) -> Result<()> {
        if let Ok(mut attempts) = self.attempts.lock() {
            *attempts += 1;
        }
        Err(Error::SheetsApi {
            status: 429,
            body: "Quota exceeded".to_string(),
        })
    }
}

/// Hands out the same bearer token forever.
pub struct StaticToken(String);

impl StaticToken {
    /// Provider for `token`
    pub fn new(token: &str) -> Self {
        Self(token.to_string())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// 2026-10-19 08:30:45 local time
pub fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2026, 10, 19, 8, 30, 45)
        .single()
        .unwrap_or_else(Local::now)
}
