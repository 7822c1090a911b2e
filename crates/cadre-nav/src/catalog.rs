//! Page catalog: the fixed set → pages and set → slot-count tables.
//!
//! Pure functions of the set, cheap enough to query on every set change.
//! Keyed by the [`EntitySet`] enum, never by name strings.

use cadre_core::{EntitySet, Page};

const SUBORDINATE_PAGES: &[Page] = &[
    Page::Main,
    Page::Personality,
    Page::Contacts,
    Page::Secrets,
    Page::Gear,
    Page::Investigations,
    Page::History,
];

const PLAYER_PAGES: &[Page] = &[
    Page::Main,
    Page::Personality,
    Page::Contacts,
    Page::Secrets,
    Page::Gear,
    Page::Investigations,
    Page::Likes,
    Page::Stats,
];

const HQ_PAGES: &[Page] = &[Page::Main, Page::Personality, Page::History, Page::Stats];

const RESERVE_PAGES: &[Page] = &[Page::Main, Page::Personality, Page::History];

/// The ordered pages offered for a set.
pub fn pages_for(set: EntitySet) -> &'static [Page] {
    match set {
        EntitySet::Subordinates => SUBORDINATE_PAGES,
        EntitySet::Player => PLAYER_PAGES,
        EntitySet::Hq => HQ_PAGES,
        EntitySet::Reserves => RESERVE_PAGES,
    }
}

/// Number of pages offered for a set.
pub fn page_count(set: EntitySet) -> usize {
    pages_for(set).len()
}

/// Number of entity slots the panel shows at once for a set.
pub fn visible_slots(set: EntitySet) -> usize {
    match set {
        EntitySet::Subordinates => 4,
        EntitySet::Player => 1,
        EntitySet::Hq => 4,
        EntitySet::Reserves => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_counts_per_set() {
        assert_eq!(page_count(EntitySet::Subordinates), 7);
        assert_eq!(page_count(EntitySet::Player), 8);
        assert_eq!(page_count(EntitySet::Hq), 4);
        assert_eq!(page_count(EntitySet::Reserves), 3);
    }

    #[test]
    fn every_set_opens_on_main() {
        for set in EntitySet::ALL {
            assert_eq!(pages_for(set)[0], Page::Main);
        }
    }

    #[test]
    fn no_duplicate_pages_within_a_set() {
        for set in EntitySet::ALL {
            let pages = pages_for(set);
            for (i, page) in pages.iter().enumerate() {
                assert!(!pages[i + 1..].contains(page), "{set} repeats {page}");
            }
        }
    }

    #[test]
    fn every_set_shows_at_least_one_slot() {
        for set in EntitySet::ALL {
            assert!(visible_slots(set) >= 1);
        }
    }
}
