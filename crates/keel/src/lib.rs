//! Keel - cross-cutting support utilities
//!
//! This crate contains the small helpers shared by the rest of the system:
//! - [`InternalError`] for "this should never happen" failures
//! - [`constant`] for constant-returning unary functions
//! - [`keyword`](mod@crate::keyword) for canonical, case-folded symbolic identifiers
//! - [`readonly_record!`] for generating immutable record types
//!
//! # Design Philosophy
//!
//! - **Leaf crate**: nothing here calls out to the rest of the system; it
//!   exists purely to be depended upon. No entry point, no I/O, no config.
//! - **Identity over equality**: keywords are interned `u32` handles, so
//!   comparing them is an integer compare, not a string compare.
//! - **Immutability baked into the type**: records generated by
//!   [`readonly_record!`] have private fields and read-only accessors, so
//!   mutation is rejected at compile time rather than at runtime.

mod combinator;
mod error;
pub mod keyword;

pub use combinator::constant;
pub use error::InternalError;
pub use keyword::{keyword, Keyword, KeywordInterner, KeywordOverflow, SharedKeywords};

/// Generates an immutable record type with a builder-style constructor.
///
/// See [`keel_macros::readonly_record!`] for the accepted grammar.
pub use keel_macros::readonly_record;
