//! Shared types for the data-sharing web client.
//!
//! Everything in here is plain Rust with no browser or server dependencies, so
//! the frontend and the host agree on the wire format and the domain rules can
//! be exercised with ordinary unit tests.

pub mod config;
pub mod display;
pub mod lifecycle;
pub mod model;
pub mod requests;
pub mod responses;
pub mod table;
