//! Expense Sheet Bot - a Discord bot that logs expenses to a Google Sheet
//!
//! Users log spending with `!log` or `/log`; each entry becomes one appended row
//! (timestamp, item, amount, note, user) in a shared spreadsheet, and the bot
//! replies with a confirmation or the reason the write failed.

#![deny(
    unsafe_code,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unwrap_used,
    rust_2018_idioms,
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

// `poise::command` expansions carry no docs, so `missing_docs` stays a warning.

/// Discord bot interface - command table, commands and framework bootstrap
pub mod bot;
/// Settings file and environment configuration
pub mod config;
/// Core business logic - framework-agnostic expense entries and the append/reply flow
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Keep-alive HTTP endpoint
pub mod liveness;
/// Spreadsheet backend - service-account auth, REST client and connection status
pub mod sheets;

#[cfg(test)]
pub mod test_utils;
