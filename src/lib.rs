//! # Visitmap Backend
//!
//! Dashboard engine for national-park visitor-counter data.
//!
//! This crate powers a browser map dashboard: it owns the selection state
//! (park, date, hour), fetches per-date hourly visit snapshots and
//! sunrise/sunset times from upstream HTTP APIs, computes the data-to-visual
//! mapping for the counter markers, and exposes the assembled view model over
//! a REST API consumed by a thin map frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: domain types — counters, parks and bounds, selections,
//!   visit snapshots, sun times
//! - [`services`]: pure visualization computation (intensity mapping, marker
//!   assembly) and fire-and-forget fetch orchestration
//! - [`state`]: the dashboard state store with transition handlers and
//!   generation-token staleness handling
//! - [`upstream`]: clients for the visits service and the sunrise-sunset
//!   service, behind trait seams with in-memory implementations
//! - [`io`]: counters dataset loading and fingerprinting
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! ## Data flow
//!
//! A selection transition returns fetch tickets tagged with monotonically
//! increasing generations. The refresh service performs the upstream calls
//! detached and applies outcomes back through the tickets; the store discards
//! anything older than the latest issued generation, so stale responses never
//! overwrite fresher state. Fetch failures are logged and leave prior data in
//! place — the worst case is an all-neutral map.

pub mod config;
pub mod io;
pub mod models;
pub mod services;
pub mod state;
pub mod upstream;

#[cfg(feature = "http-server")]
pub mod http;
