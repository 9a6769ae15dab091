//! Classical (n, m) degree pairs.

use std::fmt::{self, Display};

use crate::{IndexError, parity::same_parity};

/// Checks that `(n, m)` is a valid classical Zernike degree pair.
///
/// A pair is valid when `n >= 0`, `|m| <= n`, and `n` and `m` are both even
/// or both odd. The checks run in that order, so the first violated condition
/// is the one reported.
///
/// # Errors
///
/// - [`IndexError::NegativeRadialDegree`] if `n < 0`
/// - [`IndexError::AzimuthalExceedsRadial`] if `|m| > n`
/// - [`IndexError::ParityMismatch`] if `n` and `m` differ in parity
///
/// # Examples
///
/// ```
/// use zernike_index::{IndexError, validate_nm};
///
/// assert!(validate_nm(4, -2).is_ok());
/// assert_eq!(
///     validate_nm(2, 3),
///     Err(IndexError::AzimuthalExceedsRadial { n: 2, m: 3 })
/// );
/// ```
pub fn validate_nm(n: i64, m: i64) -> Result<(), IndexError> {
    if n < 0 {
        return Err(IndexError::NegativeRadialDegree { n });
    }
    // `unsigned_abs` keeps `i64::MIN` from overflowing.
    if m.unsigned_abs() > n.unsigned_abs() {
        return Err(IndexError::AzimuthalExceedsRadial { n, m });
    }
    if !same_parity(n, m) {
        return Err(IndexError::ParityMismatch { n, m });
    }
    Ok(())
}

/// A validated classical Zernike degree pair.
///
/// `n` is the radial degree and `m` the signed azimuthal degree. A value of
/// this type always satisfies the invariants checked by [`validate_nm`].
/// Positive `m` selects the cosine term, negative `m` the sine term.
///
/// # Examples
///
/// ```
/// use zernike_index::NmPair;
///
/// let coma = NmPair::new(3, -1).unwrap();
/// assert_eq!(coma.n(), 3);
/// assert_eq!(coma.m(), -1);
/// assert_eq!(coma.abs_m(), 1);
/// assert_eq!(coma.to_string(), "(3, -1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NmPair {
    n: i64,
    m: i64,
}

impl NmPair {
    /// Piston, `(0, 0)`.
    pub const PISTON: Self = Self { n: 0, m: 0 };

    /// Creates a pair after validating it.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violated, as described in [`validate_nm`].
    pub fn new(n: i64, m: i64) -> Result<Self, IndexError> {
        validate_nm(n, m)?;
        Ok(Self { n, m })
    }

    /// Creates a pair whose invariants the caller has already established.
    pub(crate) const fn new_unchecked(n: i64, m: i64) -> Self {
        debug_assert!(n >= 0);
        Self { n, m }
    }

    /// Returns the radial degree.
    #[must_use]
    pub const fn n(self) -> i64 {
        self.n
    }

    /// Returns the signed azimuthal degree.
    #[must_use]
    pub const fn m(self) -> i64 {
        self.m
    }

    /// Returns `|m|`.
    #[must_use]
    pub const fn abs_m(self) -> i64 {
        self.m.abs()
    }

    /// Returns every valid pair of radial degree `n`, with `m` ascending from
    /// `-n` to `n` in steps of two.
    ///
    /// Yields nothing when `n` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use zernike_index::NmPair;
    ///
    /// let ms: Vec<_> = NmPair::ring(2).map(NmPair::m).collect();
    /// assert_eq!(ms, [-2, 0, 2]);
    /// ```
    pub fn ring(n: i64) -> impl Iterator<Item = Self> {
        let ms = if n < 0 { 1..=0 } else { -n..=n };
        ms.step_by(2).map(move |m| Self::new_unchecked(n, m))
    }
}

impl Display for NmPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.n, self.m)
    }
}

impl TryFrom<(i64, i64)> for NmPair {
    type Error = IndexError;

    fn try_from((n, m): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(n, m)
    }
}

impl From<NmPair> for (i64, i64) {
    fn from(pair: NmPair) -> Self {
        (pair.n, pair.m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod validation {
        use super::*;

        #[test]
        fn test_accepts_valid_pairs() {
            for (n, m) in [(0, 0), (1, 1), (1, -1), (2, 0), (4, -4), (7, 3)] {
                assert!(validate_nm(n, m).is_ok(), "({n}, {m}) should be valid");
            }
        }

        #[test]
        fn test_rejects_parity_mismatch() {
            assert_eq!(
                validate_nm(1, 0),
                Err(IndexError::ParityMismatch { n: 1, m: 0 })
            );
            assert!(validate_nm(4, -1).unwrap_err().is_parity_mismatch());
        }

        #[test]
        fn test_rejects_azimuthal_beyond_radial() {
            assert_eq!(
                validate_nm(2, 3),
                Err(IndexError::AzimuthalExceedsRadial { n: 2, m: 3 })
            );
            assert!(validate_nm(2, -4).unwrap_err().is_azimuthal_exceeds_radial());
        }

        #[test]
        fn test_rejects_negative_radial_degree() {
            assert_eq!(
                validate_nm(-1, 0),
                Err(IndexError::NegativeRadialDegree { n: -1 })
            );
        }

        #[test]
        fn test_negative_radial_degree_reported_first() {
            // (-1, 5) also violates |m| <= n and parity is fine; n < 0 wins.
            assert!(validate_nm(-1, 5).unwrap_err().is_negative_radial_degree());
        }

        #[test]
        fn test_extreme_azimuthal_degree() {
            assert!(
                validate_nm(4, i64::MIN)
                    .unwrap_err()
                    .is_azimuthal_exceeds_radial()
            );
        }
    }

    mod pair {
        use super::*;

        #[test]
        fn test_ring_at_maximum_degree() {
            let mut ring = NmPair::ring(i64::MAX);
            let first = ring.next().unwrap();
            assert_eq!((first.n(), first.m()), (i64::MAX, -i64::MAX));
            let second = ring.next().unwrap();
            assert_eq!(second.m(), -i64::MAX + 2);
            assert!(NmPair::new(second.n(), second.m()).is_ok());
        }

        #[test]
        fn test_tuple_conversions() {
            let pair = NmPair::try_from((3, 1)).unwrap();
            assert_eq!(<(i64, i64)>::from(pair), (3, 1));
            assert!(NmPair::try_from((3, 2)).is_err());
        }

        #[test]
        fn test_ring_enumeration() {
            let ms: Vec<_> = NmPair::ring(3).map(NmPair::m).collect();
            assert_eq!(ms, [-3, -1, 1, 3]);
            assert_eq!(NmPair::ring(0).collect::<Vec<_>>(), [NmPair::PISTON]);
            assert_eq!(NmPair::ring(-2).count(), 0);
            assert_eq!(NmPair::ring(i64::MIN).count(), 0);
            for pair in NmPair::ring(6) {
                assert!(validate_nm(pair.n(), pair.m()).is_ok());
            }
        }
    }
}
