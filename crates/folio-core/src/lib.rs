//! Folio Core
//!
//! Shared utilities for the folio desktop crates: logging, profiling,
//! math, hashed collections and plain geometry types.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
