//! ssmart - a minimal, self-hostable product catalog REST API
//!
//! The store module holds the authoritative in-memory catalog; everything
//! else is adapter plumbing around it.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
