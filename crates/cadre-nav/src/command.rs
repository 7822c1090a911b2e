//! The command surface consumed from the presentation layer.
//!
//! Mirrors the [`NavigationController`](crate::NavigationController)
//! methods one-to-one so input handling can stay declarative: map a key or
//! click to a command, hand it to
//! [`apply`](crate::NavigationController::apply).

use cadre_core::EntitySet;
use serde::{Deserialize, Serialize};

/// A navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavCommand {
    /// Open the panel on a set, starting at the given slot.
    OpenPanel {
        /// Initial entity set.
        set: EntitySet,
        /// Initial entity slot (clamped to the fetched collection).
        slot: usize,
    },
    /// Close the panel and drop the session cache.
    ClosePanel,
    /// Select a set absolutely.
    SelectSet {
        /// The set to activate.
        set: EntitySet,
        /// `true` starts at slot 0; `false` resumes the set's last slot.
        reset_slot: bool,
    },
    /// Select a page of the current set by index. Out of range is rejected.
    SelectPage {
        /// Index into the current set's page list.
        index: usize,
    },
    /// Select an entity of the current set by slot. Out of range is rejected.
    SelectEntity {
        /// Slot into the cached collection.
        slot: usize,
    },
    /// Step to the next entity, wrapping past the end.
    MoveEntityNext,
    /// Step to the previous entity, wrapping past the start.
    MoveEntityPrevious,
    /// Step to the next page, wrapping past the end.
    MovePageNext,
    /// Step to the previous page, wrapping past the start.
    MovePagePrevious,
    /// Step to the next set, resuming its last browsed slot.
    MoveSetNext,
    /// Step to the previous set, resuming its last browsed slot.
    MoveSetPrevious,
}
