//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two value objects holding the same
//! attribute values are the same value.

/// Marker trait for value objects.
///
/// Implementors are compared by their attribute values (`PartialEq`), never by
/// where they live in memory. A bean bag's descriptive details are the typical
/// example: two descriptors built from separately allocated strings with the
/// same text are equal.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Descriptor {
///     manufacturer: String,
///     name: String,
/// }
///
/// impl ValueObject for Descriptor {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
