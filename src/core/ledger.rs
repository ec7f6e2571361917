//! Append-and-reply flow shared by every writing command.
//!
//! Each function returns the exact reply text for the invoking chat context.
//! Write failures are turned into reply text here and never propagate further;
//! nothing is retried.

use super::expense::{ExpenseEntry, format_timestamp};
use crate::sheets::{Cell, SheetConnection};
use chrono::{DateTime, Local};
use tracing::{error, info, warn};

/// Reply to `ping`
pub const PONG: &str = "🏓 Pong!";

/// Reply when the spreadsheet could not be opened at startup
pub const NOT_CONNECTED: &str = "❌ Google Sheet is not connected.";

/// Reply after the connectivity test row was written
pub const TEST_ROW_WRITTEN: &str = "✅ Successfully wrote test row to Google Sheet";

/// Logs one expense and returns the reply.
///
/// Backs both the text and the slash form of `log`.
pub async fn log_expense(sheet: &SheetConnection, entry: ExpenseEntry, currency: &str) -> String {
    if !sheet.is_connected() {
        warn!("Rejected sheet write: spreadsheet is not connected");
        return NOT_CONNECTED.to_string();
    }
    if let Err(rejection) = entry.validate() {
        return rejection.message().to_string();
    }

    let confirmation = format!(
        "✅ Logged: `{}` - {currency}{:.2} by {}",
        entry.item, entry.amount, entry.user
    );
    append_with_reply(sheet, entry.to_row(), confirmation).await
}

/// Writes the placeholder row `Test / "0" / test` to check write access.
pub async fn write_test_row(sheet: &SheetConnection, user: &str, now: DateTime<Local>) -> String {
    let row = vec![
        Cell::from(format_timestamp(now)),
        Cell::from("Test"),
        Cell::from("0"),
        Cell::from("test"),
        Cell::from(user),
    ];
    append_with_reply(sheet, row, TEST_ROW_WRITTEN.to_string()).await
}

async fn append_with_reply(sheet: &SheetConnection, row: Vec<Cell>, confirmation: String) -> String {
    let Some(appender) = sheet.appender() else {
        warn!("Rejected sheet write: spreadsheet is not connected");
        return NOT_CONNECTED.to_string();
    };

    match appender.append_row(&row).await {
        Ok(()) => {
            info!("Appended {} cells to sheet", row.len());
            confirmation
        }
        Err(e) => {
            error!("Failed to write to sheet: {e}");
            format!("❌ Failed to write to sheet: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::sheets::RowAppender;
    use crate::test_utils::{FailingAppender, RecordingAppender, fixed_now};
    use std::sync::Arc;

    fn connected(appender: &Arc<RecordingAppender>) -> SheetConnection {
        SheetConnection::Connected(Arc::clone(appender) as Arc<dyn RowAppender>)
    }

    fn unavailable() -> SheetConnection {
        SheetConnection::Unavailable {
            reason: "credentials missing".to_string(),
        }
    }

    fn entry(item: &str, amount: f64, note: Option<&str>, user: &str) -> ExpenseEntry {
        ExpenseEntry::new(
            item.to_string(),
            amount,
            note.map(str::to_string),
            user.to_string(),
            fixed_now(),
        )
    }

    #[tokio::test]
    async fn test_log_appends_one_row_and_confirms() {
        let appender = Arc::new(RecordingAppender::default());
        let sheet = connected(&appender);

        let reply = log_expense(&sheet, entry("coffee", 4.5, Some("morning"), "alice"), "RM").await;

        assert_eq!(reply, "✅ Logged: `coffee` - RM4.50 by alice");
        assert_eq!(
            appender.rows(),
            vec![vec![
                Cell::from("2026-10-19 08:30"),
                Cell::from("coffee"),
                Cell::from(4.5),
                Cell::from("morning"),
                Cell::from("alice"),
            ]]
        );
    }

    #[tokio::test]
    async fn test_amount_is_rounded_to_two_decimals() {
        let appender = Arc::new(RecordingAppender::default());
        let sheet = connected(&appender);

        let reply = log_expense(&sheet, entry("rice", 12.0, None, "bob"), "$").await;
        assert_eq!(reply, "✅ Logged: `rice` - $12.00 by bob");

        let reply = log_expense(&sheet, entry("tea", 7.126, None, "bob"), "RM").await;
        assert_eq!(reply, "✅ Logged: `tea` - RM7.13 by bob");

        let reply = log_expense(&sheet, entry("refund", -7.5, None, "bob"), "RM").await;
        assert_eq!(reply, "✅ Logged: `refund` - RM-7.50 by bob");
    }

    #[tokio::test]
    async fn test_log_when_unavailable_does_not_write() {
        let reply = log_expense(&unavailable(), entry("coffee", 4.5, None, "alice"), "RM").await;
        assert_eq!(reply, NOT_CONNECTED);
    }

    #[tokio::test]
    async fn test_unavailable_sheet_takes_precedence_over_validation() {
        let sheet = unavailable();

        let reply = log_expense(&sheet, entry("  ", 1.0, None, "alice"), "RM").await;
        assert_eq!(reply, NOT_CONNECTED);

        let reply = log_expense(&sheet, entry("coffee", f64::NAN, None, "alice"), "RM").await;
        assert_eq!(reply, NOT_CONNECTED);
    }

    #[tokio::test]
    async fn test_append_failure_is_reported_once() {
        let appender = Arc::new(FailingAppender::default());
        let sheet = SheetConnection::Connected(Arc::clone(&appender) as Arc<dyn RowAppender>);

        let reply = log_expense(&sheet, entry("coffee", 4.5, None, "alice"), "RM").await;

        assert!(reply.starts_with("❌ Failed to write to sheet: "));
        assert!(reply.contains("Quota exceeded"));
        assert_eq!(appender.attempts(), 1);
    }

    #[tokio::test]
    async fn test_invalid_entries_are_not_written() {
        let appender = Arc::new(RecordingAppender::default());
        let sheet = connected(&appender);

        let reply = log_expense(&sheet, entry("", 1.0, None, "alice"), "RM").await;
        assert_eq!(reply, "❌ Item must not be empty.");

        let reply = log_expense(&sheet, entry("x", f64::NAN, None, "alice"), "RM").await;
        assert_eq!(reply, "❌ Amount must be a finite number.");

        assert!(appender.rows().is_empty());
    }

    #[tokio::test]
    async fn test_test_row_uses_placeholder_values() {
        let appender = Arc::new(RecordingAppender::default());
        let sheet = connected(&appender);

        let reply = write_test_row(&sheet, "alice", fixed_now()).await;

        assert_eq!(reply, TEST_ROW_WRITTEN);
        assert_eq!(
            appender.rows(),
            vec![vec![
                Cell::from("2026-10-19 08:30"),
                Cell::from("Test"),
                Cell::from("0"),
                Cell::from("test"),
                Cell::from("alice"),
            ]]
        );
    }

    #[tokio::test]
    async fn test_test_row_shares_failure_replies() {
        assert_eq!(write_test_row(&unavailable(), "alice", fixed_now()).await, NOT_CONNECTED);

        let sheet = SheetConnection::Connected(Arc::new(FailingAppender::default()));
        let reply = write_test_row(&sheet, "alice", fixed_now()).await;
        assert!(reply.starts_with("❌ Failed to write to sheet: "));
    }

    #[tokio::test]
    async fn test_interleaved_logs_each_append_once() {
        let appender = Arc::new(RecordingAppender::default());
        let sheet = connected(&appender);

        let (first, second) = tokio::join!(
            log_expense(&sheet, entry("lunch", 10.0, None, "alice"), "RM"),
            log_expense(&sheet, entry("lunch", 10.0, None, "alice"), "RM"),
        );

        assert_eq!(first, second);
        assert_eq!(appender.rows().len(), 2);
    }
}
