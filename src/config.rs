use crate::error::{config_error, env_error, BotResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Default activity text for the bot
pub const DEFAULT_ACTIVITY: &str = "Watching CTFtime";

/// Default locale for command replies
pub const DEFAULT_LOCALE: &str = "en";

/// Optional file holding [`SyncSettings`] overrides
pub const SYNC_SETTINGS_PATH: &str = "config/sync.toml";

/// CTFtime event listing endpoint
pub const DEFAULT_CTFTIME_ENDPOINT: &str = "https://ctftime.org/api/v1/events/";

/// Maximum number of events requested per fetch
pub const DEFAULT_EVENT_LIMIT: u32 = 20;

/// CTFtime rejects default client identifiers, so a browser string is sent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Onsite events are only mirrored when their location mentions this region
pub const DEFAULT_ONSITE_REGION: &str = "India";

/// Main configuration structure for the bot
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
    /// The only guild (server) allowed to use the bot
    pub allowed_guild_id: u64,
    /// Bot activity status text
    pub activity: String,
    /// Locale used for command replies
    pub bot_locale: String,
    /// CTFtime fetch and filter settings
    pub sync: SyncSettings,
}

/// Settings for fetching and filtering CTFtime events
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// CTFtime events endpoint
    pub endpoint: String,
    /// Result-count ceiling sent as the `limit` query parameter
    pub event_limit: u32,
    /// User-Agent header sent to CTFtime
    pub user_agent: String,
    /// Region an onsite event's location must mention to be mirrored
    pub onsite_region: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CTFTIME_ENDPOINT.to_string(),
            event_limit: DEFAULT_EVENT_LIMIT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            onsite_region: DEFAULT_ONSITE_REGION.to_string(),
        }
    }
}

impl SyncSettings {
    /// Parse settings from TOML, filling missing keys with defaults
    pub fn from_toml_str(content: &str) -> BotResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply overrides from a variable lookup
    fn apply_overrides<F>(&mut self, lookup: &F) -> BotResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("CTFTIME_API_URL") {
            self.endpoint = endpoint;
        }
        if let Some(limit) = lookup("CTFTIME_EVENT_LIMIT") {
            self.event_limit = limit
                .parse::<u32>()
                .map_err(|_| config_error("Invalid CTFTIME_EVENT_LIMIT format"))?;
        }
        if let Some(user_agent) = lookup("CTFTIME_USER_AGENT") {
            self.user_agent = user_agent;
        }
        if let Some(region) = lookup("ONSITE_REGION") {
            self.onsite_region = region;
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> BotResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let sync = if Path::new(SYNC_SETTINGS_PATH).exists() {
            SyncSettings::from_toml_str(&fs::read_to_string(SYNC_SETTINGS_PATH)?)?
        } else {
            SyncSettings::default()
        };

        Self::from_lookup(|key| env::var(key).ok(), sync)
    }

    /// Build the configuration from a variable lookup and base sync settings
    pub fn from_lookup<F>(lookup: F, mut sync: SyncSettings) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Required variables
        let discord_token = lookup("DISCORD_BOT_TOKEN").ok_or_else(|| env_error("DISCORD_BOT_TOKEN"))?;

        let allowed_guild_id = lookup("ALLOWED_GUILD_ID")
            .ok_or_else(|| env_error("ALLOWED_GUILD_ID"))?
            .parse::<u64>()
            .map_err(|_| config_error("Invalid ALLOWED_GUILD_ID format"))?;
        if allowed_guild_id == 0 {
            return Err(config_error("ALLOWED_GUILD_ID must not be zero"));
        }

        let activity = lookup("BOT_ACTIVITY").unwrap_or_else(|| String::from(DEFAULT_ACTIVITY));
        let bot_locale = lookup("BOT_LOCALE").unwrap_or_else(|| String::from(DEFAULT_LOCALE));

        sync.apply_overrides(&lookup)?;
        if sync.event_limit == 0 {
            return Err(config_error("CTFtime event limit must be positive"));
        }

        Ok(Config {
            discord_token,
            allowed_guild_id,
            activity,
            bot_locale,
            sync,
        })
    }
}
