//! In-memory roster: the reference [`EntityDataSource`] implementation.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{Entity, EntityAttributes, EntityId, EntityStatus};
use crate::error::{CoreResult, SourceError};
use crate::set::EntitySet;
use crate::source::EntityDataSource;

/// An in-memory roster of entities, loadable from JSON.
///
/// Serves fetches synchronously and never fails for sets it holds; a set
/// with no members fetches as an empty collection.
#[derive(Debug, Default)]
pub struct Roster {
    sets: HashMap<EntitySet, Vec<Entity>>,
    attributes: HashMap<EntityId, EntityAttributes>,
}

/// One entity entry in a roster file. IDs are assigned on load.
#[derive(Debug, Serialize, Deserialize)]
struct RosterEntry {
    name: String,
    #[serde(default)]
    portrait: u32,
    status: EntityStatus,
    #[serde(default)]
    conditions: Vec<String>,
    #[serde(default)]
    attributes: EntityAttributes,
}

/// On-disk roster file: a map from set name to entries.
#[derive(Debug, Serialize, Deserialize)]
struct RosterFile {
    sets: HashMap<EntitySet, Vec<RosterEntry>>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity with its attribute bundle to a set.
    pub fn insert(&mut self, set: EntitySet, entity: Entity, attributes: EntityAttributes) {
        self.attributes.insert(entity.id, attributes);
        self.sets.entry(set).or_default().push(entity);
    }

    /// Number of entities in a set.
    pub fn len(&self, set: EntitySet) -> usize {
        self.sets.get(&set).map(Vec::len).unwrap_or(0)
    }

    /// Whether a set has no entities.
    pub fn is_empty(&self, set: EntitySet) -> bool {
        self.len(set) == 0
    }

    /// Parse a roster from a JSON string.
    pub fn from_json(data: &str) -> CoreResult<Self> {
        let file: RosterFile = serde_json::from_str(data)?;
        let mut roster = Roster::new();
        for (set, entries) in file.sets {
            for entry in entries {
                let mut entity = Entity::new(entry.name, entry.portrait, entry.status);
                entity.conditions = entry.conditions;
                roster.insert(set, entity, entry.attributes);
            }
        }
        Ok(roster)
    }

    /// Load a roster from a JSON file.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    /// Built-in demo roster so the panel runs with no roster file.
    pub fn demo() -> Self {
        let mut roster = Roster::new();

        let subordinates = [
            (
                Entity::new("Vexa Marsh", 3, EntityStatus::Active),
                EntityAttributes {
                    personality: "Methodical and cold under pressure.".into(),
                    contacts: vec!["Dock union steward".into(), "Pawnbroker on Krell St".into()],
                    secrets: vec!["Owes a gambling debt to the Syndicate".into()],
                    gear: vec!["Lockpicks".into(), "Burner phone".into()],
                    investigations: vec!["Warehouse 9 arson".into()],
                    likes: vec!["Rain".into(), "Strong coffee".into()],
                    history: vec!["Recruited after the customs purge".into()],
                    stats: vec![("Stealth".into(), 4), ("Influence".into(), 2)],
                },
            ),
            (
                Entity::new("Ilya Brandt", 7, EntityStatus::Stressed).with_condition("wounded"),
                EntityAttributes {
                    personality: "Loyal, but rattles easily.".into(),
                    contacts: vec!["Night-shift customs clerk".into()],
                    secrets: vec![],
                    gear: vec!["Forged permits".into()],
                    investigations: vec![],
                    likes: vec!["Card games".into()],
                    history: vec!["Wounded in the bridge ambush".into()],
                    stats: vec![("Stealth".into(), 2), ("Influence".into(), 3)],
                },
            ),
            (
                Entity::new("Tomas Reyes", 11, EntityStatus::OnTask),
                EntityAttributes {
                    personality: "Charming, spends too freely.".into(),
                    contacts: vec!["City archivist".into(), "Cab dispatcher".into()],
                    secrets: vec!["Reports to a second handler".into()],
                    gear: vec!["Camera".into()],
                    investigations: vec!["Councilman's finances".into()],
                    likes: vec!["Opera".into()],
                    history: vec!["Transferred from the eastern cell".into()],
                    stats: vec![("Stealth".into(), 3), ("Influence".into(), 4)],
                },
            ),
        ];
        for (entity, attrs) in subordinates {
            roster.insert(EntitySet::Subordinates, entity, attrs);
        }

        roster.insert(
            EntitySet::Player,
            Entity::new("The Handler", 0, EntityStatus::Active),
            EntityAttributes {
                personality: "You. Patient, careful, unforgiving.".into(),
                contacts: vec!["HQ liaison".into()],
                secrets: vec!["Knows where the old network's files are buried".into()],
                gear: vec!["Cipher book".into()],
                investigations: vec!["Mole hunt".into()],
                likes: vec!["Quiet evenings".into()],
                history: vec!["Survived the Prague dissolution".into()],
                stats: vec![("Stealth".into(), 3), ("Influence".into(), 5)],
            },
        );

        let hq = [
            ("Director Lange", 20, "Runs HQ by the book."),
            ("Quartermaster Osei", 21, "Can find anything, for a price."),
            ("Analyst Petrova", 22, "Sees patterns nobody else does."),
            ("Doctor Halvorsen", 23, "Patches bodies and reputations."),
        ];
        for (name, portrait, personality) in hq {
            roster.insert(
                EntitySet::Hq,
                Entity::new(name, portrait, EntityStatus::Active),
                EntityAttributes {
                    personality: personality.into(),
                    history: vec!["HQ staff since the reorganization".into()],
                    stats: vec![("Influence".into(), 4)],
                    ..EntityAttributes::default()
                },
            );
        }

        let reserves = ["Edda Voss", "Marcel Dubois", "Nadia Stern", "Olek Zima", "Rhea Callas"];
        for (i, name) in reserves.iter().enumerate() {
            roster.insert(
                EntitySet::Reserves,
                Entity::new(*name, 30 + i as u32, EntityStatus::Reserve),
                EntityAttributes {
                    personality: "Unproven. File is thin.".into(),
                    history: vec!["Awaiting first assignment".into()],
                    ..EntityAttributes::default()
                },
            );
        }

        roster
    }
}

impl EntityDataSource for Roster {
    fn fetch_entities(&self, set: EntitySet) -> CoreResult<Vec<Entity>> {
        Ok(self.sets.get(&set).cloned().unwrap_or_default())
    }

    fn fetch_attributes(&self, id: EntityId) -> CoreResult<EntityAttributes> {
        self.attributes
            .get(&id)
            .cloned()
            .ok_or(SourceError::EntityNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_roster_covers_every_set() {
        let roster = Roster::demo();
        for set in EntitySet::ALL {
            assert!(!roster.is_empty(set), "demo roster has no {set} entities");
        }
        assert_eq!(roster.len(EntitySet::Player), 1);
        assert_eq!(roster.len(EntitySet::Hq), 4);
    }

    #[test]
    fn fetch_unknown_set_is_empty_not_error() {
        let roster = Roster::new();
        let fetched = roster.fetch_entities(EntitySet::Reserves).unwrap();
        assert!(fetched.is_empty());
    }

    #[test]
    fn fetch_attributes_round_trips_through_insert() {
        let mut roster = Roster::new();
        let entity = Entity::new("Vexa Marsh", 3, EntityStatus::Active);
        let id = entity.id;
        let attrs = EntityAttributes {
            personality: "cold".into(),
            ..EntityAttributes::default()
        };
        roster.insert(EntitySet::Subordinates, entity, attrs.clone());
        assert_eq!(roster.fetch_attributes(id).unwrap(), attrs);
    }

    #[test]
    fn fetch_attributes_unknown_id_errors() {
        let roster = Roster::new();
        let err = roster.fetch_attributes(EntityId::new()).unwrap_err();
        assert!(matches!(err, SourceError::EntityNotFound(_)));
    }

    #[test]
    fn from_json_assigns_ids_and_defaults() {
        let json = r#"{
            "sets": {
                "subordinates": [
                    {"name": "Vexa Marsh", "status": "active"},
                    {"name": "Ilya Brandt", "status": "stressed",
                     "conditions": ["wounded"],
                     "attributes": {"personality": "rattled"}}
                ]
            }
        }"#;
        let roster = Roster::from_json(json).unwrap();
        let entities = roster.fetch_entities(EntitySet::Subordinates).unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].portrait, 0);
        assert_eq!(entities[1].conditions, vec!["wounded"]);
        let attrs = roster.fetch_attributes(entities[1].id).unwrap();
        assert_eq!(attrs.personality, "rattled");
    }

    #[test]
    fn from_json_rejects_garbage() {
        let err = Roster::from_json("not json").unwrap_err();
        assert!(matches!(err, SourceError::Malformed(_)));
    }
}
