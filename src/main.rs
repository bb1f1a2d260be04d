use ctftime_bot::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting CTFtime bot");

    // Load configuration
    let config = startup::load_config()?;

    // Start the bot
    startup::start_bot(config).await
}
