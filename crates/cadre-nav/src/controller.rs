//! The navigation controller: three selection axes over a cached roster.
//!
//! Axis semantics differ on purpose:
//! - absolute selections (`select_page`, `select_entity`) reject
//!   out-of-range indices, because they are driven by explicit tab
//!   identity;
//! - relative movers (`move_*_next`/`move_*_previous`) wrap at both ends
//!   on all three axes, for continuous cyclic browsing.
//!
//! Collections are fetched lazily through the [`SetCache`] and kept for the
//! whole open session; closing the panel drops the cache so the next open
//! re-fetches everything.

use cadre_core::{Entity, EntityDataSource, EntitySet, Page};
use tracing::{debug, warn};

use crate::cache::SetCache;
use crate::catalog;
use crate::command::NavCommand;
use crate::error::{NavError, NavResult};
use crate::render::{NavWarning, RenderRequest};

/// Snapshot of the three axes and their derived maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Index of the current set in display order.
    pub set_index: usize,
    /// Index of the current page within the current set's page list.
    pub page_index: usize,
    /// Slot of the selected entity, `None` while the set is empty.
    pub entity_index: Option<usize>,
    /// Largest valid set index.
    pub max_set_index: usize,
    /// Largest valid page index for the current set.
    pub max_page_index: usize,
    /// Largest valid slot for the current set, `None` while empty.
    pub max_entity_index: Option<usize>,
}

/// Mutable axis state while the panel is open.
#[derive(Debug)]
struct Panel {
    set: EntitySet,
    page_index: usize,
    entity_index: Option<usize>,
    /// Last browsed slot per set, so returning to a set resumes where the
    /// user left it.
    resume: [Option<usize>; EntitySet::COUNT],
}

/// The roster navigation controller.
///
/// Owns the data source and the session cache; emits a [`RenderRequest`]
/// from every successful operation for the presentation layer to draw.
/// All operations are synchronous and none panics on bad input —
/// rejected commands come back as [`NavError`] with state untouched.
pub struct NavigationController<S> {
    source: S,
    cache: SetCache,
    panel: Option<Panel>,
}

impl<S: EntityDataSource> NavigationController<S> {
    /// Create a controller over a data source. The panel starts closed.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: SetCache::new(),
            panel: None,
        }
    }

    /// The data source, for attribute lookups by the presentation layer.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether the panel is open.
    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }

    /// The current set, while open.
    pub fn current_set(&self) -> Option<EntitySet> {
        self.panel.as_ref().map(|p| p.set)
    }

    /// The current page, while open.
    pub fn current_page(&self) -> Option<Page> {
        self.panel
            .as_ref()
            .map(|p| catalog::pages_for(p.set)[p.page_index])
    }

    /// The cached collection of the current set; empty while closed or
    /// while the set has no entities.
    pub fn entities(&self) -> &[Entity] {
        match &self.panel {
            Some(panel) => self.entities_for(panel.set),
            None => &[],
        }
    }

    /// Snapshot the axis state, while open.
    pub fn state(&self) -> Option<NavigationState> {
        let panel = self.panel.as_ref()?;
        let len = self.entities_for(panel.set).len();
        Some(NavigationState {
            set_index: panel.set.index(),
            page_index: panel.page_index,
            entity_index: panel.entity_index,
            max_set_index: EntitySet::COUNT - 1,
            max_page_index: catalog::page_count(panel.set) - 1,
            max_entity_index: len.checked_sub(1),
        })
    }

    /// Dispatch a command. `Ok(None)` is returned only for
    /// [`NavCommand::ClosePanel`], which has no frame to draw.
    pub fn apply(&mut self, cmd: NavCommand) -> NavResult<Option<RenderRequest>> {
        match cmd {
            NavCommand::OpenPanel { set, slot } => self.open_panel(set, slot).map(Some),
            NavCommand::ClosePanel => {
                self.close_panel();
                Ok(None)
            }
            NavCommand::SelectSet { set, reset_slot } => {
                self.select_entity_set(set, reset_slot).map(Some)
            }
            NavCommand::SelectPage { index } => self.select_page(index).map(Some),
            NavCommand::SelectEntity { slot } => self.select_entity(slot).map(Some),
            NavCommand::MoveEntityNext => self.move_entity_next().map(Some),
            NavCommand::MoveEntityPrevious => self.move_entity_previous().map(Some),
            NavCommand::MovePageNext => self.move_page_next().map(Some),
            NavCommand::MovePagePrevious => self.move_page_previous().map(Some),
            NavCommand::MoveSetNext => self.move_set_next().map(Some),
            NavCommand::MoveSetPrevious => self.move_set_previous().map(Some),
        }
    }

    /// Open the panel on a set, starting at the given slot.
    ///
    /// Drops any cache left over from a previous session, opens on the
    /// set's first page, and fetches the set's collection.
    pub fn open_panel(&mut self, set: EntitySet, slot: usize) -> NavResult<RenderRequest> {
        if self.panel.is_some() {
            warn!(%set, "open requested while panel is already open");
            return Err(NavError::PanelAlreadyOpen);
        }
        self.cache.clear_all();
        let mut panel = Panel {
            set,
            page_index: 0,
            entity_index: None,
            resume: [None; EntitySet::COUNT],
        };
        panel.resume[set.index()] = Some(slot);
        self.panel = Some(panel);
        self.activate_set(set, false)
    }

    /// Close the panel, dropping the session cache and invalidating any
    /// outstanding fetch. Always succeeds; closing a closed panel is a
    /// no-op.
    pub fn close_panel(&mut self) {
        self.cache.clear_all();
        self.panel = None;
    }

    /// Select a set absolutely.
    ///
    /// Re-selecting the current set changes nothing and re-emits the
    /// current frame, so a repeated click on the active category button is
    /// harmless. Otherwise the set's collection is fetched on first visit,
    /// the page resets to 0 if the new set has fewer pages than the old
    /// index, and the slot either resets or resumes per `reset_slot`.
    pub fn select_entity_set(
        &mut self,
        set: EntitySet,
        reset_slot: bool,
    ) -> NavResult<RenderRequest> {
        let panel = self.panel.as_ref().ok_or(NavError::PanelClosed)?;
        if panel.set == set {
            return self.render(None);
        }
        self.activate_set(set, reset_slot)
    }

    /// Select a page of the current set by index.
    ///
    /// Out-of-range indices are rejected, not clamped: page selection is
    /// driven by explicit tab identity. Never re-fetches.
    pub fn select_page(&mut self, index: usize) -> NavResult<RenderRequest> {
        let panel = self.panel.as_mut().ok_or(NavError::PanelClosed)?;
        let count = catalog::page_count(panel.set);
        if index >= count {
            warn!(set = %panel.set, index, count, "page selection out of range");
            return Err(NavError::PageOutOfRange {
                set: panel.set,
                index,
                count,
            });
        }
        panel.page_index = index;
        self.render(None)
    }

    /// Select an entity of the current set by slot. Out of range is
    /// rejected.
    pub fn select_entity(&mut self, slot: usize) -> NavResult<RenderRequest> {
        let set = self.panel.as_ref().ok_or(NavError::PanelClosed)?.set;
        let len = self.entities_for(set).len();
        if slot >= len {
            warn!(%set, slot, len, "entity selection out of range");
            return Err(NavError::SlotOutOfRange { set, slot, len });
        }
        if let Some(panel) = self.panel.as_mut() {
            panel.entity_index = Some(slot);
            panel.resume[set.index()] = Some(slot);
        }
        self.render(None)
    }

    /// Step to the next entity, wrapping from the last slot to 0.
    pub fn move_entity_next(&mut self) -> NavResult<RenderRequest> {
        self.move_entity(1)
    }

    /// Step to the previous entity, wrapping from slot 0 to the last.
    pub fn move_entity_previous(&mut self) -> NavResult<RenderRequest> {
        self.move_entity(-1)
    }

    /// Step to the next page of the current set, wrapping.
    pub fn move_page_next(&mut self) -> NavResult<RenderRequest> {
        self.move_page(1)
    }

    /// Step to the previous page of the current set, wrapping.
    pub fn move_page_previous(&mut self) -> NavResult<RenderRequest> {
        self.move_page(-1)
    }

    /// Step to the next set, wrapping, resuming its last browsed slot.
    pub fn move_set_next(&mut self) -> NavResult<RenderRequest> {
        let set = self.panel.as_ref().ok_or(NavError::PanelClosed)?.set;
        self.select_entity_set(set.next(), false)
    }

    /// Step to the previous set, wrapping, resuming its last browsed slot.
    pub fn move_set_previous(&mut self) -> NavResult<RenderRequest> {
        let set = self.panel.as_ref().ok_or(NavError::PanelClosed)?.set;
        self.select_entity_set(set.prev(), false)
    }

    /// Make `set` current: fetch on first visit, reset the page if the old
    /// index overflows the new set's page list, and clamp the slot to the
    /// fetched collection.
    fn activate_set(&mut self, set: EntitySet, reset_slot: bool) -> NavResult<RenderRequest> {
        let warning = self.ensure_cached(set)?;
        let len = self.entities_for(set).len();
        let panel = self.panel.as_mut().ok_or(NavError::PanelClosed)?;
        panel.set = set;
        if panel.page_index >= catalog::page_count(set) {
            panel.page_index = 0;
        }
        let desired = if reset_slot {
            0
        } else {
            panel.resume[set.index()].unwrap_or(0)
        };
        panel.entity_index = if len == 0 {
            None
        } else {
            Some(desired.min(len - 1))
        };
        panel.resume[set.index()] = panel.entity_index;
        self.render(warning)
    }

    /// Fetch a set's collection if this session has not seen it yet.
    ///
    /// A data-source failure degrades the set to a fetched-empty entry and
    /// comes back as a warning, never as an error: one bad fetch must not
    /// make the panel unusable.
    fn ensure_cached(&mut self, set: EntitySet) -> NavResult<Option<NavWarning>> {
        if self.cache.contains(set) {
            return Ok(None);
        }
        let Some(ticket) = self.cache.begin_fetch(set) else {
            warn!(%set, "fetch already in flight");
            return Err(NavError::FetchInFlight(set));
        };
        match self.source.fetch_entities(set) {
            Ok(entities) => {
                debug!(%set, count = entities.len(), "fetched entity collection");
                self.cache.complete_fetch(ticket, entities);
                Ok(None)
            }
            Err(err) => {
                warn!(%set, error = %err, "data source failed; treating set as empty");
                self.cache.complete_fetch(ticket, Vec::new());
                Ok(Some(NavWarning::FetchFailed {
                    set,
                    reason: err.to_string(),
                }))
            }
        }
    }

    fn entities_for(&self, set: EntitySet) -> &[Entity] {
        self.cache.get(set).unwrap_or(&[])
    }

    /// Step the entity axis by `offset`, wrapping. Sets with fewer than
    /// two entities re-emit the current frame unchanged.
    fn move_entity(&mut self, offset: isize) -> NavResult<RenderRequest> {
        let set = self.panel.as_ref().ok_or(NavError::PanelClosed)?.set;
        let len = self.entities_for(set).len();
        if len >= 2
            && let Some(panel) = self.panel.as_mut()
            && let Some(current) = panel.entity_index
        {
            let next = (current as isize + offset).rem_euclid(len as isize) as usize;
            panel.entity_index = Some(next);
            panel.resume[set.index()] = Some(next);
        }
        self.render(None)
    }

    /// Step the page axis by `offset`, wrapping.
    fn move_page(&mut self, offset: isize) -> NavResult<RenderRequest> {
        let panel = self.panel.as_mut().ok_or(NavError::PanelClosed)?;
        let count = catalog::page_count(panel.set) as isize;
        panel.page_index = (panel.page_index as isize + offset).rem_euclid(count) as usize;
        self.render(None)
    }

    /// Build the frame for the current state.
    fn render(&self, warning: Option<NavWarning>) -> NavResult<RenderRequest> {
        let panel = self.panel.as_ref().ok_or(NavError::PanelClosed)?;
        let entity = panel
            .entity_index
            .and_then(|i| self.entities_for(panel.set).get(i).cloned());
        let request = RenderRequest {
            set: panel.set,
            page: catalog::pages_for(panel.set)[panel.page_index],
            slot: panel.entity_index,
            entity,
            warning,
        };
        debug!(set = %request.set, page = %request.page, slot = ?request.slot, "render");
        Ok(request)
    }
}
