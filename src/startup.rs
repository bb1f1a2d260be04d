use crate::commands::{create_error_embed, get_all_application_commands, CommandContext};
use crate::components::CtftimeHandle;
use crate::config::Config;
use crate::error::Error;
use crate::shutdown;
use poise::serenity_prelude as serenity;
use rust_i18n::t;
use tokio::sync::oneshot;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,serenity=warn,poise=warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config once for the lifetime of the process
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Initialize and start the Discord bot
pub async fn start_bot(config: Config) -> miette::Result<()> {
    rust_i18n::set_locale(&config.bot_locale);
    info!("Setting locale to {}", config.bot_locale);

    // Set up framework options
    let options = poise::FrameworkOptions {
        commands: get_all_application_commands(),
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    };

    let intents = serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_SCHEDULED_EVENTS;

    // Spawn the CTFtime actor
    let ctftime = CtftimeHandle::new(config.sync.clone());

    // Create a shared data context for commands
    let command_data = CommandContext::new(&config, ctftime.clone());
    let guild_id = command_data.gate.allowed_guild();
    let activity = config.activity.clone();

    // Create shutdown channel
    let (shutdown_send, shutdown_recv) = oneshot::channel();

    // Spawn signal handler task
    tokio::spawn(async move {
        shutdown::handle_signals(shutdown_send, ctftime).await;
    });

    let client_result = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(poise::Framework::new(options, move |ctx, ready, framework| {
            Box::pin(async move {
                info!("{} is connected!", ready.user.name);

                ctx.set_presence(
                    Some(serenity::ActivityData::playing(&activity)),
                    serenity::OnlineStatus::Online,
                );
                info!("Setting activity to {}", activity);

                // Commands only exist in the allowed guild
                if let Err(e) =
                    poise::builtins::register_in_guild(ctx, &framework.options().commands, guild_id).await
                {
                    error!("Failed to register slash commands: {:?}", e);
                } else {
                    info!("Slash commands registered in guild {}", guild_id);
                }

                Ok(command_data)
            })
        }))
        .await;

    // Start the bot
    info!("Starting bot...");
    let mut client = client_result.map_err(Error::from)?;

    // Create a separate task to handle the client
    let client_handle = tokio::spawn(async move {
        if let Err(e) = client.start().await {
            Err(Error::from(e))
        } else {
            Ok(())
        }
    });

    // Wait for either the client to end or a shutdown signal
    tokio::select! {
        result = client_handle => {
            info!("Bot process ended");
            match result {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e.into()),
                Err(e) => {
                    error!("Client task error: {:?}", e);
                    Err(Error::Other(format!("Client task error: {}", e)).into())
                }
            }
        }
        Ok(()) = shutdown_recv => {
            info!("Received shutdown signal, shutting down bot...");
            Ok(())
        }
    }
}

/// Handle errors from commands
async fn on_error(error: poise::FrameworkError<'_, CommandContext, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Error during setup: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command '{}': {:?}", ctx.command().name, error);
            if let Err(e) = ctx
                .send(
                    poise::CreateReply::default()
                        .embed(create_error_embed(
                            &t!("error_title", context = ctx.command().name.as_str()),
                            &format!("{}", error),
                        ))
                        .ephemeral(true),
                )
                .await
            {
                error!("Error while sending error message: {:?}", e);
            }
        }
        poise::FrameworkError::CommandCheckFailed { error, .. } => {
            // Rejected callers were already answered by the check itself
            if let Some(error) = error {
                error!("Command check failed: {:?}", error);
            }
        }
        error => {
            error!("Other error: {:?}", error);

            // Errors raised before the command body still get an answer
            if let Some(ctx) = error.ctx() {
                let description = match &error {
                    poise::FrameworkError::GuildOnly { .. } => framework_error_text(true, None),
                    poise::FrameworkError::ArgumentParse { error, .. } => {
                        framework_error_text(false, Some(error.to_string()))
                    }
                    _ => framework_error_text(false, None),
                };

                if let Err(e) = ctx
                    .send(
                        poise::CreateReply::default()
                            .embed(create_error_embed(
                                &t!("error_title", context = ctx.command().name.as_str()),
                                &description,
                            ))
                            .ephemeral(true),
                    )
                    .await
                {
                    error!("Error while sending error message: {:?}", e);
                }
            }
        }
    }
}

/// Reply text for framework errors that stop a command before its body runs
fn framework_error_text(guild_only: bool, detail: Option<String>) -> String {
    if guild_only {
        return t!("guild_not_allowed").to_string();
    }
    detail.unwrap_or_else(|| t!("unexpected_error").to_string())
}
