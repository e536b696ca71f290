//! Vector math re-exported from [`glam`].
//!
//! Pointer positions and pixel offsets are plain [`Vec2`] values.
//!
//! ```
//! use folio_core::math::Vec2;
//!
//! let pointer = Vec2::new(120.0, 48.0);
//! assert_eq!(pointer + Vec2::new(8.0, 0.0), Vec2::new(128.0, 48.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
