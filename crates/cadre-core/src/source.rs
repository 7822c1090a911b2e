//! The data-source contract consumed by the navigation layer.

use crate::entity::{Entity, EntityAttributes, EntityId};
use crate::error::CoreResult;
use crate::set::EntitySet;

/// Supplies entity collections and attribute bundles on demand.
///
/// `fetch_entities` may be slow (a game back end, a save file, a network
/// hop). The navigation layer caches its result per open session and calls
/// it at most once per set per session, so implementations need not cache
/// themselves. `fetch_attributes` is called by the presentation layer for
/// whichever entity is on screen.
pub trait EntityDataSource {
    /// Fetch the ordered entity collection for one set.
    fn fetch_entities(&self, set: EntitySet) -> CoreResult<Vec<Entity>>;

    /// Fetch the detail attribute bundle for one entity.
    fn fetch_attributes(&self, id: EntityId) -> CoreResult<EntityAttributes>;
}
