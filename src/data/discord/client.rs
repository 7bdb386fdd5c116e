use serenity::all::{ChannelId, PermissionOverwrite, Permissions, RoleId};
use serenity::async_trait;

use crate::error::AppError;
use crate::model::snapshot::{CategoryInfo, ChannelInfo, ChannelListing, GuildRole};

/// Parameters for creating a guild role.
#[derive(Debug)]
pub struct CreateRoleParams {
    pub name: String,
    pub permissions: Permissions,
    /// Audit log reason attached to the creation.
    pub reason: &'static str,
}

/// Parameters for creating a category container.
#[derive(Debug)]
pub struct CreateCategoryParams {
    pub name: String,
    pub overwrites: Vec<PermissionOverwrite>,
    pub reason: &'static str,
}

/// Parameters for creating a text channel under an existing category.
#[derive(Debug)]
pub struct CreateTextChannelParams {
    pub name: String,
    pub parent_id: ChannelId,
    pub topic: Option<String>,
    pub overwrites: Vec<PermissionOverwrite>,
    pub reason: &'static str,
}

/// Parameters for creating a voice channel under an existing category.
#[derive(Debug)]
pub struct CreateVoiceChannelParams {
    pub name: String,
    pub parent_id: ChannelId,
    pub overwrites: Vec<PermissionOverwrite>,
    pub reason: &'static str,
}

/// Operations the reconciler needs from a guild.
///
/// One listing call per entity family, one creation call per entity. Every
/// creation accepts a human-readable audit reason. Calls are strictly
/// sequential; implementations do not need to be re-entrant.
#[async_trait]
pub trait GuildClient: Send + Sync {
    /// The `@everyone` role id of the guild (on Discord this equals the
    /// guild id).
    fn everyone_role_id(&self) -> RoleId;

    async fn list_roles(&self) -> Result<Vec<GuildRole>, AppError>;

    async fn create_role(&self, params: CreateRoleParams) -> Result<GuildRole, AppError>;

    async fn list_channels(&self) -> Result<ChannelListing, AppError>;

    async fn create_category(&self, params: CreateCategoryParams)
        -> Result<CategoryInfo, AppError>;

    async fn create_text_channel(
        &self,
        params: CreateTextChannelParams,
    ) -> Result<ChannelInfo, AppError>;

    async fn create_voice_channel(
        &self,
        params: CreateVoiceChannelParams,
    ) -> Result<ChannelInfo, AppError>;
}
