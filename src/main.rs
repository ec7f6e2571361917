use expense_sheet_bot::{
    bot::{self, BotData},
    config::{self, environment},
    errors::Result,
    liveness, sheets,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenvy::dotenv().ok();

    // 3. Load settings
    let app_config = config::settings::load_default_config()
        .inspect_err(|e| error!("Critical error loading settings: {}", e))?;

    // 4. Keep-alive endpoint runs on its own for the life of the process
    let _liveness = liveness::spawn(app_config.liveness_addr.clone());

    // 5. The token is read directly before use, never stored in AppConfig
    let token = environment::discord_token()
        .inspect_err(|_| error!("❌ {} not set in environment!", environment::TOKEN_VAR))?;

    // 6. Open the spreadsheet; failure leaves the bot running without it
    let sheet = sheets::connect(&app_config).await;

    // 7. Run the bot
    let data = BotData::new(sheet, Arc::new(app_config));
    info!("Starting bot...");
    bot::run_bot(token, data).await
}
