use serenity::all::{
    ChannelType, CreateChannel, EditRole, GuildChannel, GuildId, Role, RoleId,
};
use serenity::async_trait;
use serenity::http::Http;

use crate::config::Config;
use crate::data::discord::client::{
    CreateCategoryParams, CreateRoleParams, CreateTextChannelParams, CreateVoiceChannelParams,
    GuildClient,
};
use crate::error::AppError;
use crate::model::snapshot::{CategoryInfo, ChannelInfo, ChannelListing, GuildRole};
use crate::model::template::ChannelKind;

/// REST-only Discord client bound to a single guild.
///
/// Converts serenity models to domain models at the boundary so that the
/// service layer only ever sees `GuildRole`/`CategoryInfo`/`ChannelInfo`.
pub struct HttpGuildClient {
    http: Http,
    guild_id: GuildId,
}

impl HttpGuildClient {
    /// Builds the HTTP client and verifies the session by fetching the guild
    /// once. A failure here means no entity has been touched.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let http = Http::new(&config.discord_bot_token);
        let guild_id = GuildId::new(config.guild_id);

        let guild = http
            .get_guild(guild_id)
            .await
            .map_err(|err| AppError::AuthErr(Box::new(err)))?;

        tracing::info!("Connected to guild {} ({})", guild.name, guild_id);

        Ok(Self { http, guild_id })
    }
}

#[async_trait]
impl GuildClient for HttpGuildClient {
    fn everyone_role_id(&self) -> RoleId {
        RoleId::new(self.guild_id.get())
    }

    async fn list_roles(&self) -> Result<Vec<GuildRole>, AppError> {
        let roles = self.http.get_guild_roles(self.guild_id).await?;

        Ok(roles.iter().map(role_from).collect())
    }

    async fn create_role(&self, params: CreateRoleParams) -> Result<GuildRole, AppError> {
        let builder = EditRole::new()
            .name(params.name)
            .permissions(params.permissions)
            .audit_log_reason(params.reason);

        let role = self.guild_id.create_role(&self.http, builder).await?;

        Ok(role_from(&role))
    }

    async fn list_channels(&self) -> Result<ChannelListing, AppError> {
        let channels = self.http.get_channels(self.guild_id).await?;

        Ok(listing_from(&channels))
    }

    async fn create_category(
        &self,
        params: CreateCategoryParams,
    ) -> Result<CategoryInfo, AppError> {
        let builder = CreateChannel::new(params.name)
            .kind(ChannelType::Category)
            .permissions(params.overwrites)
            .audit_log_reason(params.reason);

        let channel = self.guild_id.create_channel(&self.http, builder).await?;

        Ok(CategoryInfo {
            id: channel.id,
            name: channel.name,
        })
    }

    async fn create_text_channel(
        &self,
        params: CreateTextChannelParams,
    ) -> Result<ChannelInfo, AppError> {
        let mut builder = CreateChannel::new(params.name)
            .kind(ChannelType::Text)
            .category(params.parent_id)
            .permissions(params.overwrites)
            .audit_log_reason(params.reason);

        if let Some(topic) = params.topic {
            builder = builder.topic(topic);
        }

        let channel = self.guild_id.create_channel(&self.http, builder).await?;

        Ok(ChannelInfo {
            id: channel.id,
            name: channel.name.clone(),
            kind: ChannelKind::Text,
            parent_id: channel.parent_id,
        })
    }

    async fn create_voice_channel(
        &self,
        params: CreateVoiceChannelParams,
    ) -> Result<ChannelInfo, AppError> {
        let builder = CreateChannel::new(params.name)
            .kind(ChannelType::Voice)
            .category(params.parent_id)
            .permissions(params.overwrites)
            .audit_log_reason(params.reason);

        let channel = self.guild_id.create_channel(&self.http, builder).await?;

        Ok(ChannelInfo {
            id: channel.id,
            name: channel.name.clone(),
            kind: ChannelKind::Voice,
            parent_id: channel.parent_id,
        })
    }
}

fn role_from(role: &Role) -> GuildRole {
    GuildRole {
        id: role.id,
        name: role.name.clone(),
    }
}

/// Partitions a raw channel listing into categories and managed channels.
///
/// Kinds this tool does not manage (threads, forums, stages, news) are
/// skipped rather than erroring.
fn listing_from(channels: &[GuildChannel]) -> ChannelListing {
    let mut listing = ChannelListing::default();

    for channel in channels {
        match channel.kind {
            ChannelType::Category => listing.categories.push(CategoryInfo {
                id: channel.id,
                name: channel.name.clone(),
            }),
            ChannelType::Text => listing.channels.push(ChannelInfo {
                id: channel.id,
                name: channel.name.clone(),
                kind: ChannelKind::Text,
                parent_id: channel.parent_id,
            }),
            ChannelType::Voice => listing.channels.push(ChannelInfo {
                id: channel.id,
                name: channel.name.clone(),
                kind: ChannelKind::Voice,
                parent_id: channel.parent_id,
            }),
            _ => {}
        }
    }

    listing
}
