use crate::error::{BotResult, Error};
use poise::serenity_prelude::GuildId;

/// Restricts command use to the single configured guild
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildGate {
    allowed: GuildId,
}

impl GuildGate {
    /// `allowed_guild_id` must be non-zero; [`crate::config::Config`] guarantees it
    pub fn new(allowed_guild_id: u64) -> Self {
        Self {
            allowed: GuildId::new(allowed_guild_id),
        }
    }

    pub fn allowed_guild(&self) -> GuildId {
        self.allowed
    }

    /// Check that a command was invoked from the allowed guild
    pub fn authorize(&self, caller: Option<GuildId>) -> BotResult<()> {
        match caller {
            Some(guild_id) if guild_id == self.allowed => Ok(()),
            Some(guild_id) => Err(Error::Unauthorized(format!("guild {} is not allowed", guild_id))),
            None => Err(Error::Unauthorized("command used outside a guild".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_guild_passes() {
        let gate = GuildGate::new(1234);
        assert!(gate.authorize(Some(GuildId::new(1234))).is_ok());
    }

    #[test]
    fn test_other_guild_is_rejected() {
        let gate = GuildGate::new(1234);
        assert!(matches!(
            gate.authorize(Some(GuildId::new(5678))),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn test_direct_messages_are_rejected() {
        let gate = GuildGate::new(1234);
        assert!(matches!(gate.authorize(None), Err(Error::Unauthorized(_))));
    }
}
