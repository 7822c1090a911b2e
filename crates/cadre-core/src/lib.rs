//! Core types for Cadre: the roster data model and the data-source contract.
//!
//! This crate defines the entities being browsed and the [`EntityDataSource`]
//! trait through which collections and attributes are fetched. It knows
//! nothing about navigation state or rendering — those live in `cadre-nav`
//! and `cadre-tui`.

/// Entity records, identifiers, status, and attribute bundles.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Content pages shown within an entity set.
pub mod page;
/// In-memory roster implementing the data-source contract.
pub mod roster;
/// Entity-set categories: the top-level browsing axis.
pub mod set;
/// The data-source trait consumed by the navigation layer.
pub mod source;

/// Re-export entity types.
pub use entity::{Entity, EntityAttributes, EntityId, EntityStatus};
/// Re-export error types.
pub use error::{CoreResult, SourceError};
/// Re-export the page enum.
pub use page::Page;
/// Re-export the roster data source.
pub use roster::Roster;
/// Re-export the entity-set enum.
pub use set::EntitySet;
/// Re-export the data-source trait.
pub use source::EntityDataSource;
