//! Observability for the SS-Mart API
//!
//! Structured JSON logging: one line per event, synchronous writes,
//! deterministic field ordering so log output is diffable in tests and
//! greppable in production.

pub mod logger;

pub use logger::{Logger, Severity};
