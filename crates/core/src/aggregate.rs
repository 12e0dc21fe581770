//! Aggregate root trait for domain models.

/// Aggregate root marker + minimal interface.
///
/// An aggregate is a consistency boundary: every mutation of the objects it
/// owns goes through the root, which checks the aggregate's invariants before
/// anything changes. Nothing in here knows about storage.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Short, stable name of the aggregate kind (used in logs and errors).
    fn aggregate_type() -> &'static str
    where
        Self: Sized;
}
