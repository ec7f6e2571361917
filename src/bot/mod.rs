//! Bot layer - Discord-specific interface and command handlers
//!
//! This module provides the Discord surface of the expense bot: the command table,
//! the shared context handed to every command, and the framework bootstrap.

/// Discord command implementations (general, expense)
pub mod commands;
/// Framework setup, error handling and the gateway client
pub mod framework;

use crate::{config::AppConfig, errors::Error, sheets::SheetConnection};
use std::sync::Arc;

pub use framework::run_bot;

/// Poise context type used by every command
pub type Context<'a> = poise::Context<'a, BotData, Error>;

/// Shared data available to all bot commands.
///
/// Built once at startup and passed into [`run_bot`]; commands only read it.
#[derive(Debug, Clone)]
pub struct BotData {
    /// Spreadsheet write target, or the reason it is unavailable
    pub sheet: SheetConnection,
    /// Application settings
    pub config: Arc<AppConfig>,
}

impl BotData {
    /// Creates a new `BotData` from the startup connection and settings.
    #[must_use]
    pub const fn new(sheet: SheetConnection, config: Arc<AppConfig>) -> Self {
        Self { sheet, config }
    }
}

/// Every command the bot answers to, one handler per name.
#[must_use]
pub fn command_table() -> Vec<poise::Command<BotData, Error>> {
    vec![commands::ping(), commands::log(), commands::test_sheet()]
}
