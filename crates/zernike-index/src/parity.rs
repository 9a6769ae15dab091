//! Parity predicates shared by validation and ordering logic.

/// Returns `true` if `x` is even.
///
/// # Examples
///
/// ```
/// use zernike_index::parity::is_even;
///
/// assert!(is_even(0));
/// assert!(is_even(-4));
/// assert!(!is_even(7));
/// ```
#[must_use]
pub const fn is_even(x: i64) -> bool {
    x % 2 == 0
}

/// Returns `true` if `x` is odd.
///
/// Works for negative values: `-3` is odd.
#[must_use]
pub const fn is_odd(x: i64) -> bool {
    !is_even(x)
}

/// Returns `true` if `a` and `b` are both even or both odd.
#[must_use]
pub const fn same_parity(a: i64, b: i64) -> bool {
    is_even(a) == is_even(b)
}
