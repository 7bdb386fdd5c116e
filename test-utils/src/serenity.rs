//! Test factories for creating Serenity API objects.
//!
//! Factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return. Used to test the domain conversion at the
//! data-layer boundary.

use serenity::all::{ChannelType, GuildChannel, Role};

/// Creates a test Serenity Role with the given id and name.
///
/// All other fields are set to reasonable defaults (not hoisted, not managed,
/// not mentionable, zero permissions).
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 0,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}

/// Creates a test Serenity GuildChannel with the given id, name, and kind.
///
/// The kind is any `ChannelType`, so tests can exercise kinds the tool does
/// not manage (forums, news, stages) as well as text, voice, and category.
/// All other fields are set to reasonable defaults.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
/// - `kind` - Channel type as Discord's API reports it
/// - `parent_id` - Optional parent category ID (snowflake)
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates
///   invalid test data)
pub fn create_test_guild_channel(
    channel_id: u64,
    name: &str,
    kind: ChannelType,
    parent_id: Option<u64>,
) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "type": kind,
        "guild_id": "200000000000000000",
        "name": name,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "flags": 0,
        "parent_id": parent_id.map(|id| id.to_string()),
    }))
    .expect("Failed to create test guild channel - invalid JSON structure")
}
