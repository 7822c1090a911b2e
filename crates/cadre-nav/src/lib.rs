//! Multi-axis roster navigation for Cadre.
//!
//! Coordinates three selection axes — entity set, content page, and entity
//! slot — over collections fetched lazily from an
//! [`EntityDataSource`](cadre_core::EntityDataSource). The controller owns
//! the indices and the per-session cache; rendering is delegated entirely to
//! whoever consumes the emitted [`RenderRequest`]s.

/// Per-set lazy cache with fetch tickets and session generations.
pub mod cache;
/// Page catalog: which pages each set offers.
pub mod catalog;
/// The command surface mirroring the controller methods.
pub mod command;
/// The navigation controller itself.
pub mod controller;
/// Error types and their taxonomy.
pub mod error;
/// Render requests and soft warnings.
pub mod render;

/// Re-export cache types.
pub use cache::{FetchTicket, SetCache};
/// Re-export the command enum.
pub use command::NavCommand;
/// Re-export controller types.
pub use controller::{NavigationController, NavigationState};
/// Re-export error types.
pub use error::{NavError, NavErrorKind, NavResult};
/// Re-export render types.
pub use render::{NavWarning, RenderRequest};
