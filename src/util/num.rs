/// Converts an `i64` to the nearest `f64`.
///
/// Magnitudes above 2^53 lose their lowest bits, exactly as the host's own
/// integer-to-float conversion does.
///
/// ## Example
/// ```
/// use piratelang::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(9_007_199_254_740_993), 9_007_199_254_740_992.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a length or count to `i64`.
///
/// ## Errors
/// Returns `Err(error)` if the value does not fit, which only happens on
/// platforms with pointers wider than 64 bits.
pub fn usize_to_i64_checked<E>(value: usize, error: E) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| error)
}

/// Converts a user supplied index into a position inside a sequence of
/// `length` elements.
///
/// Returns `None` for negative indices and for indices at or beyond `length`.
///
/// ## Example
/// ```
/// use piratelang::util::num::checked_index;
///
/// assert_eq!(checked_index(1, 3), Some(1));
/// assert_eq!(checked_index(3, 3), None);
/// assert_eq!(checked_index(-1, 3), None);
/// ```
#[must_use]
pub fn checked_index(index: i64, length: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&position| position < length)
}
