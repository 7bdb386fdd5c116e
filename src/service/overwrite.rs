//! Permission overwrite calculation for categories and channels.
//!
//! Derives the access-control overwrite list from an entity's own declared
//! visibility. Each entity's policy is self-contained: a channel never
//! re-derives privacy from its parent category, so every overwrite list can
//! be audited without chasing parent chains.

use serenity::all::{PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId};

/// What the overwrites are being computed for. Voice scopes gate `CONNECT`
/// alongside `VIEW_CHANNEL`; only text scopes have a read-only concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteScope {
    Category,
    Text,
    Voice,
}

impl OverwriteScope {
    /// The permission set that makes the entity visible and joinable.
    fn view_permissions(self) -> Permissions {
        match self {
            OverwriteScope::Voice => Permissions::VIEW_CHANNEL | Permissions::CONNECT,
            OverwriteScope::Category | OverwriteScope::Text => Permissions::VIEW_CHANNEL,
        }
    }
}

/// Declared visibility flags of a single entity. The flags are independent
/// and compose additively.
#[derive(Debug, Clone, Copy, Default)]
pub struct Visibility {
    pub private: bool,
    pub read_only: bool,
}

/// Computes the overwrite list for one entity.
///
/// `private` denies the scope's view set to `@everyone` and allows it to each
/// privileged role id, in the order given. Callers pass the privileged ids
/// they could resolve, in the fixed {administrator, moderator} order; an
/// unresolved role is simply absent from the slice, so partial permission
/// application never blocks provisioning. `read_only` denies `SEND_MESSAGES`
/// to `@everyone` on text scopes and is ignored elsewhere. Both flags false
/// yields an empty list and the entity inherits the guild default.
pub fn overwrites_for(
    scope: OverwriteScope,
    visibility: Visibility,
    everyone: RoleId,
    privileged: &[RoleId],
) -> Vec<PermissionOverwrite> {
    let mut overwrites = Vec::new();

    if visibility.private {
        let view = scope.view_permissions();

        overwrites.push(PermissionOverwrite {
            allow: Permissions::empty(),
            deny: view,
            kind: PermissionOverwriteType::Role(everyone),
        });

        for role_id in privileged {
            overwrites.push(PermissionOverwrite {
                allow: view,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Role(*role_id),
            });
        }
    }

    if visibility.read_only && scope == OverwriteScope::Text {
        overwrites.push(PermissionOverwrite {
            allow: Permissions::empty(),
            deny: Permissions::SEND_MESSAGES,
            kind: PermissionOverwriteType::Role(everyone),
        });
    }

    overwrites
}
