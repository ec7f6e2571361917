//! Core business logic - framework-agnostic expense logging.
//!
//! Nothing in here knows about Discord. Commands build an [`expense::ExpenseEntry`]
//! and hand it to [`ledger`], which writes it through the sheet connection and
//! returns the reply text.

/// Expense entries and their spreadsheet row layout
pub mod expense;

/// Append-and-reply flow shared by every writing command
pub mod ledger;
