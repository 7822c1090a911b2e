//! Per-set lazy cache of fetched entity collections.
//!
//! A set fetched once stays fixed for the whole open session, even if the
//! underlying data changes, so the list never shuffles under the user.
//! "Fetched but empty" is a distinct state from "not yet fetched".
//!
//! Fetches go through tickets so that the fetch itself may run
//! asynchronously: [`SetCache::begin_fetch`] marks the set in flight and
//! captures the current session generation, and
//! [`SetCache::complete_fetch`] discards any result whose ticket is stale —
//! i.e. issued before the last [`SetCache::clear_all`].

use std::collections::{HashMap, HashSet};

use cadre_core::{Entity, EntitySet};

/// Handle for an outstanding fetch of one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    set: EntitySet,
    generation: u64,
}

impl FetchTicket {
    /// The set this ticket fetches.
    pub fn set(&self) -> EntitySet {
        self.set
    }
}

/// Session cache mapping each set to its fetched collection.
#[derive(Debug, Default)]
pub struct SetCache {
    entries: HashMap<EntitySet, Vec<Entity>>,
    in_flight: HashSet<EntitySet>,
    generation: u64,
}

impl SetCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached collection for a set, if it has been fetched this session.
    pub fn get(&self, set: EntitySet) -> Option<&[Entity]> {
        self.entries.get(&set).map(Vec::as_slice)
    }

    /// Whether a set has been fetched this session (possibly as empty).
    pub fn contains(&self, set: EntitySet) -> bool {
        self.entries.contains_key(&set)
    }

    /// Whether a fetch for this set is outstanding.
    pub fn in_flight(&self, set: EntitySet) -> bool {
        self.in_flight.contains(&set)
    }

    /// Mark a set as being fetched and return the ticket to complete it.
    ///
    /// Returns `None` if the set is already cached or already in flight; the
    /// caller must not start a second fetch in either case.
    pub fn begin_fetch(&mut self, set: EntitySet) -> Option<FetchTicket> {
        if self.entries.contains_key(&set) || !self.in_flight.insert(set) {
            return None;
        }
        Some(FetchTicket {
            set,
            generation: self.generation,
        })
    }

    /// Complete an outstanding fetch with its result.
    ///
    /// Returns whether the result was accepted. A ticket issued before the
    /// last [`clear_all`](Self::clear_all) is stale and its result is
    /// discarded; a set already populated keeps its first collection.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, entities: Vec<Entity>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.in_flight.remove(&ticket.set);
        self.populate(ticket.set, entities)
    }

    /// Store a fetched collection. First population wins for the session;
    /// returns whether this call stored anything.
    pub fn populate(&mut self, set: EntitySet, entities: Vec<Entity>) -> bool {
        if self.entries.contains_key(&set) {
            return false;
        }
        self.entries.insert(set, entities);
        true
    }

    /// Empty every entry and invalidate all outstanding tickets.
    ///
    /// Called on panel close; the next open session re-fetches everything.
    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.in_flight.clear();
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadre_core::EntityStatus;

    fn entities(names: &[&str]) -> Vec<Entity> {
        names
            .iter()
            .map(|n| Entity::new(*n, 0, EntityStatus::Active))
            .collect()
    }

    #[test]
    fn unfetched_is_distinct_from_fetched_empty() {
        let mut cache = SetCache::new();
        assert!(cache.get(EntitySet::Hq).is_none());
        cache.populate(EntitySet::Hq, Vec::new());
        assert_eq!(cache.get(EntitySet::Hq), Some(&[][..]));
        assert!(cache.contains(EntitySet::Hq));
    }

    #[test]
    fn first_population_wins() {
        let mut cache = SetCache::new();
        assert!(cache.populate(EntitySet::Hq, entities(&["Lange"])));
        assert!(!cache.populate(EntitySet::Hq, entities(&["Osei", "Petrova"])));
        assert_eq!(cache.get(EntitySet::Hq).unwrap().len(), 1);
    }

    #[test]
    fn clear_all_empties_every_set() {
        let mut cache = SetCache::new();
        cache.populate(EntitySet::Hq, entities(&["Lange"]));
        cache.populate(EntitySet::Player, entities(&["Handler"]));
        cache.clear_all();
        assert!(!cache.contains(EntitySet::Hq));
        assert!(!cache.contains(EntitySet::Player));
    }

    #[test]
    fn second_begin_fetch_is_refused_while_in_flight() {
        let mut cache = SetCache::new();
        let ticket = cache.begin_fetch(EntitySet::Reserves).unwrap();
        assert!(cache.in_flight(EntitySet::Reserves));
        assert!(cache.begin_fetch(EntitySet::Reserves).is_none());
        assert!(cache.complete_fetch(ticket, entities(&["Voss"])));
        assert!(!cache.in_flight(EntitySet::Reserves));
    }

    #[test]
    fn begin_fetch_refused_once_cached() {
        let mut cache = SetCache::new();
        cache.populate(EntitySet::Player, entities(&["Handler"]));
        assert!(cache.begin_fetch(EntitySet::Player).is_none());
    }

    #[test]
    fn stale_ticket_result_is_discarded() {
        let mut cache = SetCache::new();
        let ticket = cache.begin_fetch(EntitySet::Hq).unwrap();
        cache.clear_all();
        assert!(!cache.complete_fetch(ticket, entities(&["Lange"])));
        assert!(!cache.contains(EntitySet::Hq));
        // The set is fetchable again in the new session.
        let ticket = cache.begin_fetch(EntitySet::Hq).unwrap();
        assert!(cache.complete_fetch(ticket, entities(&["Lange"])));
    }
}
