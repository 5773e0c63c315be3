/// Core runtime value type.
///
/// Defines the `Value` enum together with its conversions, truthiness and
/// textual rendering.
pub mod core;
