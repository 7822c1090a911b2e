//! Entity-set categories: the top-level axis of the roster panel.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A category of entities grouped for browsing.
///
/// Exactly one set is current while the roster panel is open. The panel
/// cycles through sets in the order of [`EntitySet::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitySet {
    /// Subordinates currently under the player's command.
    Subordinates,
    /// The player's own character.
    Player,
    /// Headquarters staff.
    Hq,
    /// The reserve pool of recruitable entities.
    Reserves,
}

impl EntitySet {
    /// All sets in display order.
    pub const ALL: [EntitySet; 4] = [
        EntitySet::Subordinates,
        EntitySet::Player,
        EntitySet::Hq,
        EntitySet::Reserves,
    ];

    /// Number of sets.
    pub const COUNT: usize = EntitySet::ALL.len();

    /// Parse a set name from a string.
    pub fn from_name(name: &str) -> Option<EntitySet> {
        match name.to_lowercase().as_str() {
            "subordinates" => Some(EntitySet::Subordinates),
            "player" => Some(EntitySet::Player),
            "hq" => Some(EntitySet::Hq),
            "reserves" => Some(EntitySet::Reserves),
            _ => None,
        }
    }

    /// Index of this set in display order.
    pub fn index(self) -> usize {
        EntitySet::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Get the next set (wrapping).
    pub fn next(self) -> EntitySet {
        let idx = (self.index() + 1) % EntitySet::ALL.len();
        EntitySet::ALL[idx]
    }

    /// Get the previous set (wrapping).
    pub fn prev(self) -> EntitySet {
        let idx = if self.index() == 0 {
            EntitySet::ALL.len() - 1
        } else {
            self.index() - 1
        };
        EntitySet::ALL[idx]
    }

    /// Short label for tab bars.
    pub fn label(self) -> &'static str {
        match self {
            EntitySet::Subordinates => "Subordinates",
            EntitySet::Player => "Player",
            EntitySet::Hq => "HQ",
            EntitySet::Reserves => "Reserves",
        }
    }
}

impl fmt::Display for EntitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_past_last() {
        assert_eq!(EntitySet::Reserves.next(), EntitySet::Subordinates);
        assert_eq!(EntitySet::Subordinates.next(), EntitySet::Player);
    }

    #[test]
    fn prev_wraps_past_first() {
        assert_eq!(EntitySet::Subordinates.prev(), EntitySet::Reserves);
        assert_eq!(EntitySet::Hq.prev(), EntitySet::Player);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut set = EntitySet::Player;
        for _ in 0..EntitySet::COUNT {
            set = set.next();
        }
        assert_eq!(set, EntitySet::Player);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(EntitySet::from_name("HQ"), Some(EntitySet::Hq));
        assert_eq!(EntitySet::from_name("player"), Some(EntitySet::Player));
        assert_eq!(EntitySet::from_name("garrison"), None);
    }

    #[test]
    fn index_matches_display_order() {
        for (i, set) in EntitySet::ALL.iter().enumerate() {
            assert_eq!(set.index(), i);
        }
    }
}
