//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own: two `Money` amounts of
/// 25.00 are the same thing, while two products named "Elote" are not.
///
/// ```ignore
/// let a = Money::from_pesos(25);
/// let b = Money::from_centavos(2_500);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
