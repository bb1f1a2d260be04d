use crate::access::GuildGate;
use crate::components::scheduled_events::description::clamp;
use crate::components::scheduled_events::OnsiteFilter;
use crate::components::CtftimeHandle;
use crate::config::Config;
use crate::error::{BotResult, Error};
use poise::serenity_prelude as serenity;
use rust_i18n::t;
use tokio::sync::Mutex;
use tracing::warn;

// Export submodules
pub mod events;
pub mod util;

/// Discord limit for message content
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Shared context for all commands
#[derive(Debug)]
pub struct CommandContext {
    pub ctftime: CtftimeHandle,
    pub gate: GuildGate,
    pub filter: OnsiteFilter,
    /// Held for the duration of a sync run; runs never overlap
    pub sync_lock: Mutex<()>,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: &Config, ctftime: CtftimeHandle) -> Self {
        let gate = GuildGate::new(config.allowed_guild_id);
        let filter = OnsiteFilter::new(config.sync.onsite_region.as_str());

        Self {
            ctftime,
            gate,
            filter,
            sync_lock: Mutex::new(()),
        }
    }
}

/// Type alias for command result
pub type CommandResult = BotResult<()>;

/// Type alias for poise context
pub type Context<'a> = poise::Context<'a, CommandContext, Error>;

/// All application commands
pub fn get_all_application_commands() -> Vec<poise::Command<CommandContext, Error>> {
    vec![util::ping(), events::create_event()]
}

/// Command check admitting only the configured guild.
///
/// Rejected callers get a fixed ephemeral reply and the command body never runs.
pub async fn allowed_guild_only(ctx: Context<'_>) -> Result<bool, Error> {
    match ctx.data().gate.authorize(ctx.guild_id()) {
        Ok(()) => Ok(true),
        Err(e) => {
            warn!("Rejected command '{}': {}", ctx.command().name, e);
            send_ephemeral(ctx, &t!("guild_not_allowed")).await?;
            Ok(false)
        }
    }
}

/// Send a reply only the invoking user can see
pub async fn send_ephemeral(ctx: Context<'_>, content: &str) -> CommandResult {
    let content = clamp(content, MAX_MESSAGE_LEN);
    ctx.send(poise::CreateReply::default().content(content).ephemeral(true))
        .await?;
    Ok(())
}

/// Build the embed used for command errors
pub fn create_error_embed(title: &str, description: &str) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .description(description)
        .color(serenity::Colour::RED)
}
