//! Framework setup, error handling and the gateway client.

use super::{BotData, command_table};
use crate::errors::{Error, Result};
use poise::serenity_prelude as serenity;
use tracing::{error, info, instrument, warn};

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command `{}`: {:?}", ctx.command().name, error);
            if let Err(e) = ctx.say(format!("❌ {error}")).await {
                error!("Failed to send error message: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Registers slash commands with Discord. Failure only costs the slash form of `log`.
async fn sync_application_commands(
    ctx: &serenity::Context,
    commands: &[poise::Command<BotData, Error>],
) {
    let slash_count = commands.iter().filter(|c| c.slash_action.is_some()).count();
    match poise::builtins::register_globally(ctx, commands).await {
        Ok(()) => info!("🔧 Synced {} slash command(s)", slash_count),
        Err(e) => warn!("⚠️ Failed to sync commands: {}", e),
    }
}

/// Connects to the Discord gateway and dispatches commands until the client stops.
///
/// # Errors
/// Returns `Error::Framework` if the client cannot be created or the gateway connection fails.
#[instrument(skip(token, data))]
pub async fn run_bot(token: String, data: BotData) -> Result<()> {
    let prefix = data.config.command_prefix.clone();

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: command_table(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(prefix),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!("✅ Logged in as {}", ready.user.name);
                if !data.sheet.is_connected() {
                    warn!("Google Sheet is unavailable; sheet commands will report it");
                }
                sync_application_commands(ctx, &framework.options().commands).await;
                Ok(data)
            })
        })
        .build();

    // Prefix commands need message content
    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::DIRECT_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    info!("Setting up Serenity client for Poise framework...");
    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .inspect_err(|e| error!("Error creating client: {:?}", e))?;

    info!("Connecting to Discord gateway...");
    client
        .start()
        .await
        .inspect_err(|e| error!("Client error: {:?}", e))?;
    Ok(())
}
