//! HTTP server module.
//!
//! Exposes the dashboard engine as a small REST API for the browser map UI:
//! the assembled view model, the selection transitions, and the static map
//! configuration. Handlers delegate to the state store and service layer;
//! upstream fetches triggered by a transition are spawned fire-and-forget and
//! never surface as HTTP errors.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
