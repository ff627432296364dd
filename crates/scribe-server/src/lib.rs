//! # Scribe Server Library
//!
//! Dependency wiring, metrics exporter setup and startup utilities for the
//! Scribe server binary.

pub mod di;
pub mod exporter;
pub mod startup;
