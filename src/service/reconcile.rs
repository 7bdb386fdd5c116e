//! The reconciliation engine.
//!
//! One pass over the template in strictly ordered phases: roles first, then a
//! role snapshot refresh, then categories with their channels. Later phases
//! depend on entities the earlier phases create (overwrites reference role
//! ids, channels reference category ids), so nothing here runs concurrently.
//! Every step is resolve-or-create; the engine is crash-only and relies on
//! idempotent re-entry instead of checkpointing.

use std::future::Future;
use std::pin::Pin;

use serenity::all::{Permissions, RoleId};

use crate::data::discord::{
    CreateCategoryParams, CreateRoleParams, CreateTextChannelParams, CreateVoiceChannelParams,
    GuildClient,
};
use crate::error::AppError;
use crate::model::snapshot::{CategoryInfo, ChannelSnapshot, RoleSnapshot};
use crate::model::template::{CategoryTemplate, ChannelKind, ChannelTemplate, ServerTemplate};
use crate::service::overwrite::{overwrites_for, OverwriteScope, Visibility};

/// Audit log reason attributed to every creation.
pub const BOOTSTRAP_REASON: &str = "Bootstrap from template";

/// The two privileged roles granted elevated visibility on private
/// containers. They are ensured before any other role.
pub const ADMINISTRATOR_ROLE: &str = "👑 Administrator";
pub const MODERATOR_ROLE: &str = "🛠 Moderator";

/// Name sentinels marking a category as a restricted area.
const RESTRICTED_NAME_TOKENS: [&str; 3] = ["VIP", "DISCIPLINE", "ADMIN"];

/// Policy rule: a category is private iff its name contains one of the
/// restricted-area sentinels, case-insensitively. Template authors never
/// declare category privacy directly.
pub fn is_restricted_category_name(name: &str) -> bool {
    let upper = name.to_uppercase();

    RESTRICTED_NAME_TOKENS
        .iter()
        .any(|token| upper.contains(token))
}

fn moderator_permissions() -> Permissions {
    Permissions::MANAGE_MESSAGES
        | Permissions::MANAGE_CHANNELS
        | Permissions::MANAGE_ROLES
        | Permissions::MUTE_MEMBERS
        | Permissions::KICK_MEMBERS
        | Permissions::BAN_MEMBERS
}

/// Converges the remote guild toward a [`ServerTemplate`], creating only what
/// is missing. Existing entities are never modified.
pub struct Reconciler<'a, C: GuildClient> {
    client: &'a C,
}

impl<'a, C: GuildClient> Reconciler<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Runs one full reconciliation pass.
    ///
    /// Any failed remote call aborts the run at the current phase; entities
    /// already created are valid and will be recognized as existing on the
    /// next run.
    pub async fn run(&self, template: &ServerTemplate) -> Result<(), AppError> {
        let mut roles = RoleSnapshot::new(self.client.list_roles().await?);

        self.ensure_role(&mut roles, ADMINISTRATOR_ROLE, Permissions::ADMINISTRATOR)
            .await?;
        self.ensure_role(&mut roles, MODERATOR_ROLE, moderator_permissions())
            .await?;

        for name in template
            .language_roles
            .iter()
            .chain(&template.functional_roles)
        {
            if name == ADMINISTRATOR_ROLE || name == MODERATOR_ROLE {
                continue;
            }
            self.ensure_role(&mut roles, name, Permissions::empty())
                .await?;
        }

        // Refresh so the overwrites computed below resolve the privileged
        // role ids that were just created.
        let roles = RoleSnapshot::new(self.client.list_roles().await?);
        let privileged = privileged_role_ids(&roles);

        let mut channels = ChannelSnapshot::new(self.client.list_channels().await?);

        for category in &template.categories {
            self.ensure_category_tree(&mut channels, category, category.name.clone(), None, &privileged)
                .await?;
        }

        tracing::info!("Reconciliation complete, every template entity ensured");

        Ok(())
    }

    async fn ensure_role(
        &self,
        snapshot: &mut RoleSnapshot,
        name: &str,
        permissions: Permissions,
    ) -> Result<(), AppError> {
        if snapshot.find(name).is_some() {
            tracing::info!("Role exists: {}", name);
            return Ok(());
        }

        let role = self
            .client
            .create_role(CreateRoleParams {
                name: name.to_string(),
                permissions,
                reason: BOOTSTRAP_REASON,
            })
            .await?;
        tracing::info!("Role created: {}", name);

        snapshot.insert(role);

        Ok(())
    }

    /// Ensures one category and everything under it: its direct channels,
    /// then its nested sub-categories under composite `"parent — child"`
    /// display names. Sub-categories inherit the parent's privacy
    /// classification instead of re-deriving it from the composite name.
    fn ensure_category_tree<'s>(
        &'s self,
        snapshot: &'s mut ChannelSnapshot,
        category: &'s CategoryTemplate,
        display_name: String,
        inherited_private: Option<bool>,
        privileged: &'s [RoleId],
    ) -> Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 's>> {
        Box::pin(async move {
            let private =
                inherited_private.unwrap_or_else(|| is_restricted_category_name(&display_name));

            let parent = self
                .ensure_category(snapshot, &display_name, private, privileged)
                .await?;

            for spec in &category.channels {
                self.ensure_channel(snapshot, spec, &parent, privileged)
                    .await?;
            }

            for child in &category.children {
                let child_name = format!("{} — {}", display_name, child.name);
                self.ensure_category_tree(snapshot, child, child_name, Some(private), privileged)
                    .await?;
            }

            Ok(())
        })
    }

    async fn ensure_category(
        &self,
        snapshot: &mut ChannelSnapshot,
        name: &str,
        private: bool,
        privileged: &[RoleId],
    ) -> Result<CategoryInfo, AppError> {
        if let Some(existing) = snapshot.find_category(name) {
            tracing::info!("Category exists: {}", name);
            return Ok(existing.clone());
        }

        let overwrites = overwrites_for(
            OverwriteScope::Category,
            Visibility {
                private,
                read_only: false,
            },
            self.client.everyone_role_id(),
            privileged,
        );

        let category = self
            .client
            .create_category(CreateCategoryParams {
                name: name.to_string(),
                overwrites,
                reason: BOOTSTRAP_REASON,
            })
            .await?;
        tracing::info!("Category created: {}", name);

        snapshot.insert_category(category.clone());

        Ok(category)
    }

    async fn ensure_channel(
        &self,
        snapshot: &mut ChannelSnapshot,
        spec: &ChannelTemplate,
        parent: &CategoryInfo,
        privileged: &[RoleId],
    ) -> Result<(), AppError> {
        // Identity is (kind, name) guild-wide: a same-named channel under a
        // different category counts as this one and is skipped.
        if snapshot.find_channel(spec.kind, &spec.name).is_some() {
            tracing::info!("Channel exists: {}", spec.name);
            return Ok(());
        }

        // The channel's own flags only; the parent's privacy is not
        // inherited here.
        let visibility = Visibility {
            private: spec.private,
            read_only: spec.read_only,
        };
        let everyone = self.client.everyone_role_id();

        let channel = match spec.kind {
            ChannelKind::Text => {
                let overwrites =
                    overwrites_for(OverwriteScope::Text, visibility, everyone, privileged);

                self.client
                    .create_text_channel(CreateTextChannelParams {
                        name: spec.name.clone(),
                        parent_id: parent.id,
                        topic: spec.topic.clone(),
                        overwrites,
                        reason: BOOTSTRAP_REASON,
                    })
                    .await?
            }
            ChannelKind::Voice => {
                let overwrites =
                    overwrites_for(OverwriteScope::Voice, visibility, everyone, privileged);

                self.client
                    .create_voice_channel(CreateVoiceChannelParams {
                        name: spec.name.clone(),
                        parent_id: parent.id,
                        overwrites,
                        reason: BOOTSTRAP_REASON,
                    })
                    .await?
            }
        };
        tracing::info!("Channel created: {}", channel.name);

        snapshot.insert_channel(channel);

        Ok(())
    }
}

/// Resolves the privileged role ids in fixed {administrator, moderator}
/// order. A role that cannot be resolved is silently omitted; partial
/// permission application is preferred over blocking provisioning.
fn privileged_role_ids(roles: &RoleSnapshot) -> Vec<RoleId> {
    [ADMINISTRATOR_ROLE, MODERATOR_ROLE]
        .iter()
        .filter_map(|name| roles.find(name))
        .map(|role| role.id)
        .collect()
}
