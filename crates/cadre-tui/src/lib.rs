//! Terminal roster panel for Cadre.
//!
//! The presentation adapter over `cadre-nav`: maps keys to navigation
//! commands, consumes the render requests that come back, and draws set
//! tabs, page tabs, the entity slot list, and the per-page detail pane
//! with ratatui.

/// Application state and key handling.
pub mod app;
/// Terminal setup, teardown, and the event loop.
pub mod terminal;
/// Drawing: tab bars, slot list, detail pane, help popup.
pub mod view;
