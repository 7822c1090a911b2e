//! Entity records: identity, display attributes, and detail bundles.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for every entity in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Generate a new random entity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Operational status of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    /// Available for assignment.
    Active,
    /// Currently deployed on a task.
    OnTask,
    /// Under too much stress to deploy.
    Stressed,
    /// Captured by the opposition.
    Captured,
    /// In the reserve pool, not yet recruited.
    Reserve,
}

impl fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntityStatus::Active => "Active",
            EntityStatus::OnTask => "On Task",
            EntityStatus::Stressed => "Stressed",
            EntityStatus::Captured => "Captured",
            EntityStatus::Reserve => "Reserve",
        };
        f.write_str(s)
    }
}

/// A browsable roster record.
///
/// Entities are owned by the data source; the navigation layer holds cloned
/// handles and never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Index into the portrait atlas.
    pub portrait: u32,
    /// Operational status.
    pub status: EntityStatus,
    /// Active conditions ("wounded", "blackmailed", ...).
    pub conditions: Vec<String>,
}

impl Entity {
    /// Create a new entity with a random ID and no conditions.
    pub fn new(name: impl Into<String>, portrait: u32, status: EntityStatus) -> Self {
        Self {
            id: EntityId::new(),
            name: name.into(),
            portrait,
            status,
            conditions: Vec::new(),
        }
    }

    /// Add a condition, builder style.
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.conditions.push(condition.into());
        self
    }
}

/// Detail content for an entity, one field per content page.
///
/// Fetched by the presentation layer via
/// [`EntityDataSource::fetch_attributes`](crate::source::EntityDataSource::fetch_attributes);
/// the navigation controller passes entity handles through without ever
/// touching this bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityAttributes {
    /// Personality profile text.
    #[serde(default)]
    pub personality: String,
    /// Known contacts.
    #[serde(default)]
    pub contacts: Vec<String>,
    /// Secrets held on or by the entity.
    #[serde(default)]
    pub secrets: Vec<String>,
    /// Carried gear.
    #[serde(default)]
    pub gear: Vec<String>,
    /// Ongoing investigations.
    #[serde(default)]
    pub investigations: Vec<String>,
    /// Preferences and dislikes.
    #[serde(default)]
    pub likes: Vec<String>,
    /// Service history, newest first.
    #[serde(default)]
    pub history: Vec<String>,
    /// Named numeric stats.
    #[serde(default)]
    pub stats: Vec<(String, u32)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_display_shows_short_form() {
        let id = EntityId(Uuid::parse_str("a3f2b1c8-1234-5678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "a3f2b1c8");
    }

    #[test]
    fn new_entity_has_no_conditions() {
        let entity = Entity::new("Vexa Marsh", 3, EntityStatus::Active);
        assert_eq!(entity.name, "Vexa Marsh");
        assert!(entity.conditions.is_empty());
    }

    #[test]
    fn with_condition_appends() {
        let entity = Entity::new("Ilya Brandt", 7, EntityStatus::Stressed)
            .with_condition("wounded")
            .with_condition("blackmailed");
        assert_eq!(entity.conditions, vec!["wounded", "blackmailed"]);
    }

    #[test]
    fn attributes_deserialize_with_missing_fields() {
        let attrs: EntityAttributes = serde_json::from_str(r#"{"personality":"cold"}"#).unwrap();
        assert_eq!(attrs.personality, "cold");
        assert!(attrs.contacts.is_empty());
        assert!(attrs.stats.is_empty());
    }
}
