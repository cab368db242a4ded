//! Dashboard state store.
//!
//! Holds the current selection and fetched data behind a single lock and
//! exposes transition handlers as the only way to change it. Every transition
//! that needs fresh upstream data hands back a ticket carrying a generation
//! number; responses are applied through their ticket and anything older than
//! the latest issued generation is discarded, so a slow stale response can
//! never overwrite fresher state.

mod dashboard;

pub use dashboard::{
    DashboardStore, DashboardView, SunTicket, Transition, VisitsTicket,
};
