//! Error types for navigation operations.
//!
//! Data-source failures are deliberately absent here: a failed fetch
//! degrades the set to an empty collection and surfaces as a
//! [`NavWarning`](crate::render::NavWarning) on the render request, so that
//! navigation stays usable. `NavError` covers only rejected commands.

use cadre_core::EntitySet;

/// Alias for `Result<T, NavError>`.
pub type NavResult<T> = Result<T, NavError>;

/// A rejected navigation command. State is unchanged whenever one of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// An operation other than open was issued while the panel is closed.
    #[error("roster panel is not open")]
    PanelClosed,

    /// Open was issued while the panel is already open.
    #[error("roster panel is already open")]
    PanelAlreadyOpen,

    /// An absolute page selection outside the current set's page list.
    #[error("page index {index} out of range for {set} ({count} pages)")]
    PageOutOfRange {
        /// The set whose page list was consulted.
        set: EntitySet,
        /// The rejected index.
        index: usize,
        /// Number of pages the set offers.
        count: usize,
    },

    /// An absolute entity selection outside the cached collection.
    #[error("entity slot {slot} out of range for {set} ({len} entities)")]
    SlotOutOfRange {
        /// The set whose collection was consulted.
        set: EntitySet,
        /// The rejected slot.
        slot: usize,
        /// Length of the cached collection.
        len: usize,
    },

    /// A fetch for this set is still outstanding; retry once it lands.
    #[error("fetch already in flight for {0}")]
    FetchInFlight(EntitySet),
}

/// Coarse classification of a rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavErrorKind {
    /// A user-driven edge case: out-of-range page or slot.
    InvalidArgument,
    /// A caller/lifecycle bug or transient state: wrong panel state,
    /// outstanding fetch.
    Precondition,
}

impl NavError {
    /// Classify this error.
    pub fn kind(&self) -> NavErrorKind {
        match self {
            NavError::PageOutOfRange { .. } | NavError::SlotOutOfRange { .. } => {
                NavErrorKind::InvalidArgument
            }
            NavError::PanelClosed | NavError::PanelAlreadyOpen | NavError::FetchInFlight(_) => {
                NavErrorKind::Precondition
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_errors_are_invalid_argument() {
        let err = NavError::PageOutOfRange {
            set: EntitySet::Hq,
            index: 4,
            count: 4,
        };
        assert_eq!(err.kind(), NavErrorKind::InvalidArgument);
        let err = NavError::SlotOutOfRange {
            set: EntitySet::Hq,
            slot: 9,
            len: 4,
        };
        assert_eq!(err.kind(), NavErrorKind::InvalidArgument);
    }

    #[test]
    fn lifecycle_errors_are_preconditions() {
        assert_eq!(NavError::PanelClosed.kind(), NavErrorKind::Precondition);
        assert_eq!(NavError::PanelAlreadyOpen.kind(), NavErrorKind::Precondition);
        assert_eq!(
            NavError::FetchInFlight(EntitySet::Reserves).kind(),
            NavErrorKind::Precondition
        );
    }
}
