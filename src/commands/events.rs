use crate::commands::{allowed_guild_only, send_ephemeral, CommandResult, Context};
use crate::components::ctftime::TimeWindow;
use crate::components::scheduled_events::{EventSynchronizer, GuildCalendar};
use crate::error::other_error;
use chrono::Utc;
use rust_i18n::t;
use std::sync::Arc;
use tracing::info;

/// Schedule a server event
#[poise::command(slash_command, guild_only, check = "allowed_guild_only")]
pub async fn create_event(
    ctx: Context<'_>,
    #[description = "How many weeks of CTFs do you want to add to the Events Tab?"]
    #[min = 1]
    weeks: u32,
) -> CommandResult {
    ctx.defer_ephemeral().await?;

    let data = ctx.data();
    let Ok(_guard) = data.sync_lock.try_lock() else {
        info!("Rejected create_event: a sync is already running");
        return send_ephemeral(ctx, &t!("sync_in_progress")).await;
    };

    let guild_id = ctx
        .guild_id()
        .ok_or_else(|| other_error("create_event used outside a guild"))?;
    let window = TimeWindow::weeks_ahead(Utc::now(), weeks)?;
    info!(
        "Syncing CTFtime events for the next {} week(s) into guild {}",
        weeks, guild_id
    );

    let calendar = GuildCalendar::new(Arc::clone(&ctx.serenity_context().http), guild_id);
    let synchronizer = EventSynchronizer::new(&data.ctftime, &calendar, &data.filter);
    let report = synchronizer.run(window).await?;

    send_ephemeral(ctx, &report.message()).await
}
