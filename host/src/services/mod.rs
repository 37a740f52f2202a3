//! HTTP surface of the host.
//!
//! - `client_config`: serves the runtime [`common::config::ClientConfig`] the
//!   browser client needs before it can reach the marketplace backend.
//! - `assets`: serves the compiled frontend bundle embedded at build time,
//!   falling back to `index.html` for any unknown path.

pub mod assets;
pub mod client_config;
