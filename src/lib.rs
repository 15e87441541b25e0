//! bozza: a headless composer client for remote post collections.
//!
//! One draft, one locally cached list, an edit cursor, and injected
//! collaborators for the remote boundary.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
