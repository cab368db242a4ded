//! Upstream data sources.
//!
//! The dashboard pulls from two external HTTP APIs: the visits service
//! (per-date hourly counts) and the public sunrise-sunset service. Both sit
//! behind trait seams so the HTTP layer and tests can swap in the in-memory
//! implementations.

pub mod error;
pub mod local;
pub mod sun;
pub mod visits;

pub use error::{UpstreamError, UpstreamResult};
pub use local::{LocalSunApi, LocalVisitsApi};
pub use sun::{HttpSunApi, SunApi, DEFAULT_SUN_API_BASE};
pub use visits::{HttpVisitsApi, VisitsApi};
