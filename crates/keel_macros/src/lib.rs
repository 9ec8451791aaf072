//! Procedural macros for keel.
//!
//! Currently a single macro, [`readonly_record!`], which generates immutable
//! record types: private fields, read-only accessors, and a builder-style
//! constructor with per-field defaults.

use proc_macro::TokenStream;

mod record;

/// Generates an immutable record type.
///
/// The body looks like a struct definition where each field may carry a
/// default value after `=`. Fields without a default fall back to
/// `Default::default()`. Outer attributes (including doc comments) and field
/// attributes are forwarded to the generated items unchanged.
///
/// Every generated field is private and exposed through a read-only accessor;
/// a `mut` modifier on a field is accepted and stripped, so callers cannot
/// opt back into mutability. Instances are built once through the generated
/// builder and never change afterwards; `Default` for the record yields the
/// all-defaults instance.
///
/// ```
/// keel_macros::readonly_record! {
///     /// A 2D point.
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct Point {
///         x: i32 = 0,
///         y: i32 = 0,
///     }
/// }
///
/// let p = Point::builder().x(3).y(4).build();
/// assert_eq!((*p.x(), *p.y()), (3, 4));
///
/// let origin = Point::default();
/// assert_eq!((*origin.x(), *origin.y()), (0, 0));
/// ```
///
/// Assigning to a field after construction does not compile; the fields are
/// private to the defining module:
///
/// ```compile_fail
/// mod geometry {
///     keel_macros::readonly_record! {
///         pub struct Point {
///             x: i32 = 0,
///         }
///     }
/// }
///
/// let mut p = geometry::Point::builder().x(3).build();
/// p.x = 5;
/// ```
#[proc_macro]
pub fn readonly_record(input: TokenStream) -> TokenStream {
    record::readonly_record(input)
}
