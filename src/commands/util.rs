use crate::commands::{allowed_guild_only, send_ephemeral, CommandResult, Context};
use rust_i18n::t;

/// Get the ping
#[poise::command(slash_command, check = "allowed_guild_only")]
pub async fn ping(ctx: Context<'_>) -> CommandResult {
    let latency = ctx.ping().await.as_millis();
    send_ephemeral(ctx, &t!("ping_response", latency = latency)).await
}
