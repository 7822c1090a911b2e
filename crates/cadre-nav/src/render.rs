//! Render requests: what the presentation layer should draw next.

use std::fmt;

use cadre_core::{Entity, EntitySet, Page};
use serde::{Deserialize, Serialize};

/// A non-fatal problem carried on an otherwise successful navigation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavWarning {
    /// The data source failed to deliver a set; it is shown as empty for
    /// the rest of the session.
    FetchFailed {
        /// The set that failed to fetch.
        set: EntitySet,
        /// The data source's error message.
        reason: String,
    },
}

impl fmt::Display for NavWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavWarning::FetchFailed { set, reason } => {
                write!(f, "could not load {set}: {reason}")
            }
        }
    }
}

/// Emitted after every successful navigation step.
///
/// Carries identifiers and the selected entity handle only; resolving
/// portraits, labels, and attribute bundles is the presentation layer's
/// job. `slot`/`entity` are `None` when the current set is empty, in which
/// case the detail pane renders an empty state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// The current entity set.
    pub set: EntitySet,
    /// The current content page.
    pub page: Page,
    /// Slot of the selected entity within the cached collection.
    pub slot: Option<usize>,
    /// The selected entity handle.
    pub entity: Option<Entity>,
    /// Soft warning to surface alongside the frame, if any.
    pub warning: Option<NavWarning>,
}
