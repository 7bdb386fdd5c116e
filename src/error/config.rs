use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// GUILD_ID is set but is not a valid, non-zero Discord snowflake.
    #[error("GUILD_ID is not a valid guild id: {0}")]
    InvalidGuildId(String),
}
