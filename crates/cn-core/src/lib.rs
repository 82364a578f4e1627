//! # cn-core
//!
//! Core types shared by every crate in the campus-navigator workspace.
//!
//! This crate provides the error hierarchy, the `ensure!` / `fail!` macros,
//! the translation seam used to render status labels and schedule notes,
//! and small text parsers for the ISO date and `HH:mm` formats used by the
//! schedule data.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Translation keys, languages, and the built-in message catalogue.
pub mod translate;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use translate::{is_translation_key, Catalog, Language, Translate, NOTE_KEY_PREFIX};
