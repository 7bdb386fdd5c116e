//! Read-only view of the guild's current roles and channels.
//!
//! A snapshot is fetched once per reconciliation phase and indexed into
//! typed maps so that resolve-or-create lookups are O(1). Entities created
//! during the run are inserted back into the working snapshot, which makes
//! them visible to later lookups in the same run and is what deduplicates
//! repeated template entries.

use std::collections::HashMap;

use serenity::all::{ChannelId, RoleId};

use crate::model::template::ChannelKind;

/// A role as seen by the reconciler. Identity is the exact display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRole {
    pub id: RoleId,
    pub name: String,
}

/// A category container. Identity is the exact display name, guild-wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: ChannelId,
    pub name: String,
}

/// A text or voice channel. Identity is `(kind, name)`, guild-wide: two
/// same-named channels of the same kind under different categories are
/// treated as the same entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    pub id: ChannelId,
    pub name: String,
    pub kind: ChannelKind,
    pub parent_id: Option<ChannelId>,
}

/// Everything a single channel listing returns: categories and the channels
/// parented under them.
#[derive(Debug, Default, Clone)]
pub struct ChannelListing {
    pub categories: Vec<CategoryInfo>,
    pub channels: Vec<ChannelInfo>,
}

/// Name index over the guild's roles.
pub struct RoleSnapshot {
    by_name: HashMap<String, GuildRole>,
}

impl RoleSnapshot {
    /// Builds the index. Entries without a usable name are skipped rather
    /// than erroring, so a partially populated listing never aborts the run.
    pub fn new(roles: Vec<GuildRole>) -> Self {
        let by_name = roles
            .into_iter()
            .filter(|role| !role.name.is_empty())
            .map(|role| (role.name.clone(), role))
            .collect();

        Self { by_name }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn find(&self, name: &str) -> Option<&GuildRole> {
        self.by_name.get(name)
    }

    /// Makes a role created during this run visible to later lookups.
    pub fn insert(&mut self, role: GuildRole) {
        self.by_name.insert(role.name.clone(), role);
    }
}

/// Name indexes over the guild's categories and channels.
///
/// Channels are indexed per kind so a lookup is a plain `&str` map get.
pub struct ChannelSnapshot {
    categories: HashMap<String, CategoryInfo>,
    text: HashMap<String, ChannelInfo>,
    voice: HashMap<String, ChannelInfo>,
}

impl ChannelSnapshot {
    pub fn new(listing: ChannelListing) -> Self {
        let categories = listing
            .categories
            .into_iter()
            .filter(|category| !category.name.is_empty())
            .map(|category| (category.name.clone(), category))
            .collect();

        let mut snapshot = Self {
            categories,
            text: HashMap::new(),
            voice: HashMap::new(),
        };

        for channel in listing.channels {
            if channel.name.is_empty() {
                continue;
            }
            snapshot.insert_channel(channel);
        }

        snapshot
    }

    pub fn find_category(&self, name: &str) -> Option<&CategoryInfo> {
        self.categories.get(name)
    }

    /// Channels match on kind as well as name: a voice channel never
    /// satisfies a lookup for a text channel of the same name.
    pub fn find_channel(&self, kind: ChannelKind, name: &str) -> Option<&ChannelInfo> {
        self.channels_of(kind).get(name)
    }

    pub fn insert_category(&mut self, category: CategoryInfo) {
        self.categories.insert(category.name.clone(), category);
    }

    pub fn insert_channel(&mut self, channel: ChannelInfo) {
        let by_name = match channel.kind {
            ChannelKind::Text => &mut self.text,
            ChannelKind::Voice => &mut self.voice,
        };
        by_name.insert(channel.name.clone(), channel);
    }

    fn channels_of(&self, kind: ChannelKind) -> &HashMap<String, ChannelInfo> {
        match kind {
            ChannelKind::Text => &self.text,
            ChannelKind::Voice => &self.voice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(id: u64, name: &str) -> GuildRole {
        GuildRole {
            id: RoleId::new(id),
            name: name.to_string(),
        }
    }

    fn channel(id: u64, name: &str, kind: ChannelKind) -> ChannelInfo {
        ChannelInfo {
            id: ChannelId::new(id),
            name: name.to_string(),
            kind,
            parent_id: None,
        }
    }

    #[test]
    fn finds_roles_by_exact_name() {
        let snapshot = RoleSnapshot::new(vec![role(1, "Moderator"), role(2, "moderator")]);

        assert_eq!(snapshot.find("Moderator").unwrap().id, RoleId::new(1));
        assert_eq!(snapshot.find("moderator").unwrap().id, RoleId::new(2));
        assert!(snapshot.find("Modérator").is_none());
    }

    #[test]
    fn skips_entries_without_a_name() {
        let snapshot = RoleSnapshot::new(vec![role(1, ""), role(2, "Member")]);

        assert!(snapshot.find("").is_none());
        assert!(snapshot.find("Member").is_some());
    }

    #[test]
    fn channel_lookup_requires_matching_kind() {
        let snapshot = ChannelSnapshot::new(ChannelListing {
            categories: vec![],
            channels: vec![channel(5, "general", ChannelKind::Voice)],
        });

        assert!(snapshot.find_channel(ChannelKind::Text, "general").is_none());
        assert!(snapshot
            .find_channel(ChannelKind::Voice, "general")
            .is_some());
    }

    #[test]
    fn same_named_channels_of_different_kinds_coexist() {
        let snapshot = ChannelSnapshot::new(ChannelListing {
            categories: vec![],
            channels: vec![
                channel(5, "general", ChannelKind::Text),
                channel(6, "general", ChannelKind::Voice),
            ],
        });

        assert_eq!(
            snapshot.find_channel(ChannelKind::Text, "general").unwrap().id,
            ChannelId::new(5)
        );
        assert_eq!(
            snapshot.find_channel(ChannelKind::Voice, "general").unwrap().id,
            ChannelId::new(6)
        );
    }

    #[test]
    fn inserted_entities_are_visible_to_later_lookups() {
        let mut snapshot = ChannelSnapshot::new(ChannelListing::default());

        snapshot.insert_category(CategoryInfo {
            id: ChannelId::new(9),
            name: "VIP Lounge".to_string(),
        });
        snapshot.insert_channel(channel(10, "vip-chat", ChannelKind::Text));

        assert_eq!(
            snapshot.find_category("VIP Lounge").unwrap().id,
            ChannelId::new(9)
        );
        assert!(snapshot.find_channel(ChannelKind::Text, "vip-chat").is_some());
    }
}
