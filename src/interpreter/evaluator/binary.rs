/// Arithmetic on values.
///
/// Implements `+` (numeric addition, string and list concatenation) and the
/// purely numeric `-`, `*` and `/`.
pub mod arithmetic;
/// Comparisons.
///
/// Implements structural equality for `be` and the ordering operators.
pub mod comparison;
/// Dispatch of binary operators to their implementations.
pub mod core;
