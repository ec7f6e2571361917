//! Expense Discord commands - `log` and `test_sheet`.
//!
//! Both hand off to [`crate::core::ledger`] and send back whatever reply it produces,
//! so the text and slash forms of `log` cannot drift apart.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::BotData,
        core::{
            expense::{ExpenseEntry, text_note},
            ledger,
        },
        errors::{Error, Result},
    };

    /// Log an expense (item, amount, optional note)
    ///
    /// Appends one row to the expense sheet.
    /// Text form: `!log <item> <amount> [note]`; quote multi-word values.
    /// Words after the note are ignored.
    #[poise::command(prefix_command, slash_command)]
    pub async fn log(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "What did you spend on?"] item: String,
        #[description = "How much (RM)?"] amount: f64,
        #[description = "Extra note (optional)"]
        #[rest]
        note: Option<String>,
    ) -> Result<()> {
        // `#[rest]` hands the text form everything after the amount
        let note = match ctx {
            poise::Context::Prefix(_) => note.as_deref().and_then(text_note),
            poise::Context::Application(_) => note,
        };
        let data = ctx.data();
        let user = ctx.author().name.clone();
        let entry = ExpenseEntry::new(item, amount, note, user, chrono::Local::now());

        let reply = ledger::log_expense(&data.sheet, entry, &data.config.currency_prefix).await;
        ctx.say(reply).await?;
        Ok(())
    }

    /// Test if the bot can write to Google Sheet
    #[poise::command(prefix_command)]
    pub async fn test_sheet(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let user = ctx.author().name.clone();
        let reply = ledger::write_test_row(&ctx.data().sheet, &user, chrono::Local::now()).await;
        ctx.say(reply).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
