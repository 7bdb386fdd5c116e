use serenity::all::{Permissions, RoleId};

use crate::model::template::{ChannelKind, ServerTemplate};
use crate::service::reconcile::{Reconciler, ADMINISTRATOR_ROLE, BOOTSTRAP_REASON, MODERATOR_ROLE};
use self::fake::{FakeGuildClient, RecordedCall, RecordedOverwrite, FAKE_GUILD_ID};


mod roles;

async fn reconcile(client: &FakeGuildClient, template: &ServerTemplate) {
    Reconciler::new(client)
        .run(template)
        .await
        .expect("reconciliation against the fake client should succeed");
}

fn everyone() -> RoleId {
    RoleId::new(FAKE_GUILD_ID)
}

/// The fixed permission set granted to the moderator role on creation.
fn moderator_permissions() -> Permissions {
    Permissions::MANAGE_MESSAGES
        | Permissions::MANAGE_CHANNELS
        | Permissions::MANAGE_ROLES
        | Permissions::MUTE_MEMBERS
        | Permissions::KICK_MEMBERS
        | Permissions::BAN_MEMBERS
}

fn role_creations(calls: &[RecordedCall]) -> Vec<String> {
    calls
        .iter()
        .filter_map(|call| match call {
            RecordedCall::CreateRole { name, .. } => Some(name.clone()),
            _ => None,
        })
        .collect()
}
