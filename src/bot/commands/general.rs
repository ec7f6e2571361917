//! General Discord commands - `ping`.
//! These never touch the spreadsheet.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::ledger,
        errors::{Error, Result},
    };

    /// Responds with "Pong!" to test bot connectivity.
    #[poise::command(prefix_command)]
    pub async fn ping(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        ctx.say(ledger::PONG).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
