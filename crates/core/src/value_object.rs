//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable**, **self-validating** and **compared by
/// value**. Constructors reject invalid input, so an instance that exists is
/// always valid; to "modify" one, build a new instance (which validates again).
///
/// Value objects used as map keys additionally derive `Eq + Hash`.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
