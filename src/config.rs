use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_TEMPLATE_PATH: &str = "template.json";

pub struct Config {
    pub discord_bot_token: String,
    pub guild_id: u64,
    pub template_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let guild_id = std::env::var("GUILD_ID")
            .map_err(|_| ConfigError::MissingEnvVar("GUILD_ID".to_string()))?;
        let guild_id = guild_id
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or(ConfigError::InvalidGuildId(guild_id))?;

        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            guild_id,
            template_path: std::env::var("TEMPLATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TEMPLATE_PATH)),
        })
    }
}
