//! Content pages shown for an entity within the current set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A content page within the roster panel.
///
/// Which pages a set actually offers, and in what order, is decided by the
/// page catalog in `cadre-nav`; this enum only names the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Overview: name, rank, status, conditions.
    Main,
    /// Personality profile.
    Personality,
    /// Known contacts.
    Contacts,
    /// Secrets held on or by the entity.
    Secrets,
    /// Carried gear.
    Gear,
    /// Ongoing investigations involving the entity.
    Investigations,
    /// Preferences and dislikes.
    Likes,
    /// Service history.
    History,
    /// Numeric stat block.
    Stats,
}

impl Page {
    /// Short label for tab bars.
    pub fn label(self) -> &'static str {
        match self {
            Page::Main => "Main",
            Page::Personality => "Personality",
            Page::Contacts => "Contacts",
            Page::Secrets => "Secrets",
            Page::Gear => "Gear",
            Page::Investigations => "Investigations",
            Page::Likes => "Likes",
            Page::History => "History",
            Page::Stats => "Stats",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
