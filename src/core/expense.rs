//! Expense entries and their spreadsheet row layout.

use crate::sheets::Cell;
use chrono::{DateTime, Local};

/// Timestamp layout written to the first column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Why an entry was refused before reaching the spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Item was empty or whitespace
    EmptyItem,
    /// Amount was NaN or infinite
    NonFiniteAmount,
}

impl Rejection {
    /// Reply text shown to the user
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EmptyItem => "❌ Item must not be empty.",
            Self::NonFiniteAmount => "❌ Amount must be a finite number.",
        }
    }
}

/// One logged expense. Built per command and discarded once written.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseEntry {
    /// Local time of handling, formatted with [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
    /// What the money was spent on
    pub item: String,
    /// How much was spent
    pub amount: f64,
    /// Free-form note, empty when not given
    pub note: String,
    /// Name of the user who issued the command
    pub user: String,
}

impl ExpenseEntry {
    /// Creates an entry stamped with `now`.
    #[must_use]
    pub fn new(
        item: String,
        amount: f64,
        note: Option<String>,
        user: String,
        now: DateTime<Local>,
    ) -> Self {
        Self {
            timestamp: format_timestamp(now),
            item,
            amount,
            note: note.unwrap_or_default(),
            user,
        }
    }

    /// Checks the entry can be written.
    ///
    /// # Errors
    /// Returns the [`Rejection`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), Rejection> {
        if self.item.trim().is_empty() {
            return Err(Rejection::EmptyItem);
        }
        if !self.amount.is_finite() {
            return Err(Rejection::NonFiniteAmount);
        }
        Ok(())
    }

    /// Row cells in sheet column order: timestamp, item, amount, note, user
    #[must_use]
    pub fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::from(self.timestamp.clone()),
            Cell::from(self.item.clone()),
            Cell::from(self.amount),
            Cell::from(self.note.clone()),
            Cell::from(self.user.clone()),
        ]
    }
}

/// Reads the note of the text form of `log` from everything after the amount.
///
/// Takes one word, or one `"quoted phrase"`; trailing words are ignored.
#[must_use]
pub fn text_note(rest: &str) -> Option<String> {
    let rest = rest.trim_start();
    if let Some(quoted) = rest.strip_prefix('"') {
        let phrase = quoted.split_once('"').map_or(quoted, |(phrase, _)| phrase);
        return Some(phrase.to_string());
    }
    rest.split_whitespace().next().map(str::to_string)
}

/// Formats `now` the way the timestamp column expects
#[must_use]
pub fn format_timestamp(now: DateTime<Local>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}
