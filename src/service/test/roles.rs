use super::*;

/// The privileged roles are ensured first, with their fixed permission sets,
/// before any template role.
#[tokio::test]
async fn creates_privileged_roles_first_with_fixed_permissions() {
    let client = FakeGuildClient::new();
    let template = factory::server_template(&["🇬🇧 English"], &["🎮 Gamer"], vec![]);

    reconcile(&client, &template).await;

    assert_eq!(
        client.calls(),
        vec![
            RecordedCall::CreateRole {
                name: ADMINISTRATOR_ROLE.to_string(),
                permissions: Permissions::ADMINISTRATOR,
            },
            RecordedCall::CreateRole {
                name: MODERATOR_ROLE.to_string(),
                permissions: moderator_permissions(),
            },
            RecordedCall::CreateRole {
                name: "🇬🇧 English".to_string(),
                permissions: Permissions::empty(),
            },
            RecordedCall::CreateRole {
                name: "🎮 Gamer".to_string(),
                permissions: Permissions::empty(),
            },
        ]
    );
}

/// Re-running with roles already present is a no-op for those roles; their
/// permissions are never altered.
#[tokio::test]
async fn skips_roles_that_already_exist() {
    let client = FakeGuildClient::new()
        .with_role(ADMINISTRATOR_ROLE)
        .with_role("🇬🇧 English");
    let template = factory::server_template(&["🇬🇧 English"], &[], vec![]);

    reconcile(&client, &template).await;

    assert_eq!(role_creations(&client.calls()), vec![MODERATOR_ROLE]);
}

/// The combined language ∪ functional list is deduplicated by name.
#[tokio::test]
async fn deduplicates_the_combined_role_list() {
    let client = FakeGuildClient::new();
    let template = factory::server_template(&["🎨 Artist"], &["🎨 Artist"], vec![]);

    reconcile(&client, &template).await;

    let created = role_creations(&client.calls());
    assert_eq!(
        created
            .iter()
            .filter(|name| *name == "🎨 Artist")
            .count(),
        1
    );
}

/// Privileged names listed among the functional roles are not re-created
/// with empty permissions.
#[tokio::test]
async fn privileged_names_in_functional_roles_are_not_recreated() {
    let client = FakeGuildClient::new();
    let template =
        factory::server_template(&[], &[MODERATOR_ROLE, ADMINISTRATOR_ROLE, "🎮 Gamer"], vec![]);

    reconcile(&client, &template).await;

    assert_eq!(
        role_creations(&client.calls()),
        vec![ADMINISTRATOR_ROLE, MODERATOR_ROLE, "🎮 Gamer"]
    );
    assert!(client.calls().iter().all(|call| match call {
        RecordedCall::CreateRole { name, permissions } if name == MODERATOR_ROLE =>
            *permissions == moderator_permissions(),
        _ => true,
    }));
}
