//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two instances
/// with the same attribute values are interchangeable. A transaction of 100
/// into the same account on the same date is the same transaction wherever
/// it was built; an `Account`, by contrast, is an entity whose balance moves
/// while its identity stays put.
///
/// To "modify" a value object, build a new one. The trait only requires what
/// that usage pattern needs:
/// - **Clone**: values are copied, not referenced.
/// - **PartialEq**: comparison is structural.
/// - **Debug**: values show up in test failures and error messages.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
