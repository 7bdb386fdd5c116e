//! Desired-state template parsed from the JSON template file.
//!
//! Pure data, no behavior; a missing or malformed field is a `TemplateError`
//! raised before any remote call. Nested `children` categories are a
//! deprecated-but-supported layout kept for older, non-flattened templates.

use std::path::Path;

use serde::Deserialize;

use crate::error::template::TemplateError;

#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub server: ServerTemplate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerTemplate {
    pub language_roles: Vec<String>,
    pub functional_roles: Vec<String>,
    pub categories: Vec<CategoryTemplate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryTemplate {
    pub name: String,
    #[serde(default)]
    pub channels: Vec<ChannelTemplate>,
    /// Nested sub-categories. Not expected in flattened templates; kept for
    /// compatibility.
    #[serde(default)]
    pub children: Vec<CategoryTemplate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelTemplate {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Kind of a channel, both in the template and in snapshot lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Text,
    Voice,
}

/// Reads and parses the template file at `path`.
pub fn load(path: &Path) -> Result<Template, TemplateError> {
    let raw = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_template() {
        let template: Template = serde_json::from_value(serde_json::json!({
            "server": {
                "language_roles": ["🇬🇧 English"],
                "functional_roles": ["🛠 Moderator"],
                "categories": [{
                    "name": "VIP Lounge",
                    "channels": [{
                        "name": "vip-chat",
                        "type": "text",
                        "private": true,
                        "topic": "Members only"
                    }],
                    "children": [{
                        "name": "Back Room",
                        "channels": [{ "name": "Back Voice", "type": "voice" }]
                    }]
                }]
            }
        }))
        .unwrap();

        let category = &template.server.categories[0];
        assert_eq!(category.name, "VIP Lounge");
        assert_eq!(category.channels[0].kind, ChannelKind::Text);
        assert!(category.channels[0].private);
        assert!(!category.channels[0].read_only);
        assert_eq!(category.channels[0].topic.as_deref(), Some("Members only"));
        assert_eq!(category.children[0].channels[0].kind, ChannelKind::Voice);
    }

    #[test]
    fn flags_and_nesting_default_to_empty() {
        let channel: ChannelTemplate =
            serde_json::from_value(serde_json::json!({ "name": "general", "type": "text" }))
                .unwrap();

        assert!(!channel.private);
        assert!(!channel.read_only);
        assert_eq!(channel.topic, None);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result: Result<Template, _> = serde_json::from_value(serde_json::json!({
            "server": {
                "language_roles": [],
                "categories": []
            }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn unknown_channel_type_is_an_error() {
        let result: Result<ChannelTemplate, _> =
            serde_json::from_value(serde_json::json!({ "name": "updates", "type": "forum" }));

        assert!(result.is_err());
    }
}
