//! lexclass: character classes for lexer generators
//!
//! A scanner generator reduces its input alphabet to a small number of
//! character classes before building automata. This crate provides the
//! pieces for that step:
//!
//! - [`IntervalSet`], canonical sets of code points with the set algebra
//!   the reduction needs;
//! - [`UnicodeDb`], Unicode property tables (general categories, scripts,
//!   a few binary properties) and caseless equivalence classes for Unicode
//!   1.1 through 6.0;
//! - [`Partitioner`], which refines the alphabet by every set used in a
//!   specification and maps code points to class codes.
//!
//! ```
//! use std::sync::Arc;
//! use lexclass::{CharWidth, Partitioner, UnicodeDb};
//!
//! let db = UnicodeDb::shared("6.0")?;
//! let mut classes = Partitioner::with_width(CharWidth::Unicode, Some(Arc::clone(&db)));
//!
//! let greek = db.get_interval_set("Greek").cloned().unwrap_or_default();
//! classes.make_class(greek.clone(), false)?;
//! classes.make_class_str("if", true)?;
//!
//! assert_eq!(classes.num_classes(), 4);
//! assert_eq!(classes.class_codes(&greek).len(), 1);
//! assert_eq!(classes.class_code('I' as u32)?, classes.class_code('i' as u32)?);
//! # Ok::<(), lexclass::LexClassError>(())
//! ```
//!
//! Code points are limited to the Basic Multilingual Plane.

mod interval;
mod interval_set;
mod partition;
mod unicode;

pub use interval::{code_point, Interval, MAX_CHAR};
pub use interval_set::{CaselessSource, IntervalCursor, IntervalSet};
pub use partition::{CharClassInterval, CharWidth, Partitioner};
pub use unicode::{normalize, supported_versions, UnicodeDb, DEFAULT_UNICODE_VERSION};

use thiserror::Error;

/// Errors reported by interval construction, table loading and
/// partitioning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexClassError {
    /// A code point lies outside the permitted range `[0, max]`.
    #[error("code point U+{value:04X} out of range (maximum U+{max:04X})")]
    InvalidRange { value: u32, max: u32 },

    /// An interval with `lo > hi` or an end beyond the BMP.
    #[error("invalid interval [U+{lo:04X}, U+{hi:04X}]")]
    InvalidInterval { lo: u32, hi: u32 },

    #[error("unsupported Unicode version {version:?}; supported versions: {supported}")]
    UnsupportedVersion { version: String, supported: String },

    /// Narrowing the alphabet would leave class `code` without members.
    #[error("narrowing the alphabet to U+{max:04X} would empty class {code}")]
    EmptiedClass { code: usize, max: u32 },

    /// A caseless refinement was requested on a partitioner without a
    /// caseless source.
    #[error("caseless character class requires a Unicode database")]
    NoCaselessSource,
}
