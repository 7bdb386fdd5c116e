//! Error types for the provisioning run.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! is the top-level error type that wraps domain-specific errors. Every error
//! is fatal to the run: the tool is crash-only and relies on idempotent
//! re-entry rather than retries or checkpointing, so errors propagate straight
//! up to `main` where they are logged and turned into a non-zero exit.

pub mod config;
pub mod template;

use thiserror::Error;

use crate::error::{config::ConfigError, template::TemplateError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur during a provisioning
/// run. The three classes map to distinct failure points: configuration and
/// template errors are reported before any remote interaction, an
/// authentication error means no entity was touched, and a Discord error
/// aborts the run mid-phase with everything already created left in place.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while reading environment variables.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Template file missing, unreadable, or malformed.
    #[error(transparent)]
    TemplateErr(#[from] TemplateError),

    /// The Discord session could not be established (bad token, bot not in
    /// the guild). Nothing has been created when this is raised.
    #[error("Failed to establish Discord session: {0}")]
    AuthErr(#[source] Box<serenity::Error>),

    /// Discord API error from Serenity on an individual list/create call.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
