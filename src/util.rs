/// Numeric conversion helpers.
///
/// This module provides the integer to floating-point promotion used by mixed
/// arithmetic, checked length conversion, and the validation that turns user
/// supplied indices into positions.
///
/// All fallible functions return a `Result` or `Option` instead of panicking.
pub mod num;
