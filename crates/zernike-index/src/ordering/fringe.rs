//! The Fringe ordering.

use crate::{IndexError, NmPair, parity::is_even};

use super::IndexOrdering;

/// The Fringe ordering.
///
/// Terms are grouped into rings of constant `d = (n + |m|) / 2 + 1`; ring `d`
/// holds the indices `(d - 1)² + 1 ..= d²`. Within a ring, larger `|m|` comes
/// first and the cosine term (`m >= 0`) precedes the sine term of equal order.
///
/// | j | (n, m) | name |
/// |---|--------|------|
/// | 1 | (0, 0) | piston |
/// | 2 | (1, 1) | tilt x |
/// | 3 | (1, -1) | tilt y |
/// | 4 | (2, 0) | defocus |
/// | 9 | (4, 0) | primary spherical |
#[derive(Debug, Clone, Copy, Default)]
pub struct Fringe;

impl IndexOrdering for Fringe {
    const NAME: &'static str = "Fringe";

    fn to_nm(j: i64) -> Result<NmPair, IndexError> {
        if j <= 0 {
            return Err(IndexError::NonPositiveIndex { j });
        }
        let d = (j - 1).isqrt() + 1;
        // d² can exceed i64 for j near i64::MAX; the gap itself is at most 2(d - 1).
        #[expect(clippy::cast_possible_truncation)]
        let gap = (i128::from(d) * i128::from(d) - i128::from(j)) as i64;
        let m = if is_even(gap) { gap / 2 } else { -(gap + 1) / 2 };
        let n = 2 * (d - 1) - m.abs();
        Ok(NmPair::new_unchecked(n, m))
    }

    fn to_linear(pair: NmPair) -> Result<i64, IndexError> {
        let (n, m) = (pair.n(), pair.m());
        let abs_m = i128::from(pair.abs_m());
        // n + |m| is even for every valid pair, so the halving is exact.
        let d = (i128::from(n) + abs_m) / 2 + 1;
        // Zero counts as positive: the cosine term precedes the sine term.
        let sine_offset = i128::from(m < 0);
        i64::try_from(d * d - 2 * abs_m + sine_offset)
            .map_err(|_| IndexError::Overflow { n, m })
    }
}

/// Converts a Fringe index to its classical `(n, m)` pair.
///
/// # Errors
///
/// Returns [`IndexError::NonPositiveIndex`] if `j <= 0`.
///
/// # Examples
///
/// ```
/// use zernike_index::fringe_1d_to_2d;
///
/// assert_eq!(fringe_1d_to_2d(1)?, (0, 0));
/// assert_eq!(fringe_1d_to_2d(8)?, (3, -1));
/// assert!(fringe_1d_to_2d(0).is_err());
/// # Ok::<(), zernike_index::IndexError>(())
/// ```
pub fn fringe_1d_to_2d(j: i64) -> Result<(i64, i64), IndexError> {
    Fringe::to_nm(j).map(Into::into)
}

/// Converts a classical `(n, m)` pair to its Fringe index.
///
/// # Errors
///
/// Returns an error if `(n, m)` is not a valid pair (see
/// [`validate_nm`](crate::validate_nm)) or the index overflows.
///
/// # Examples
///
/// ```
/// use zernike_index::fringe_2d_to_1d;
///
/// assert_eq!(fringe_2d_to_1d(2, 0)?, 4);
/// assert_eq!(fringe_2d_to_1d(1, -1)?, 3);
/// # Ok::<(), zernike_index::IndexError>(())
/// ```
pub fn fringe_2d_to_1d(n: i64, m: i64) -> Result<i64, IndexError> {
    Fringe::to_linear(NmPair::new(n, m)?)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    // The first 36 terms of the Fringe set.
    const FRINGE_36: [(i64, i64); 36] = [
        (0, 0),
        (1, 1),
        (1, -1),
        (2, 0),
        (2, 2),
        (2, -2),
        (3, 1),
        (3, -1),
        (4, 0),
        (3, 3),
        (3, -3),
        (4, 2),
        (4, -2),
        (5, 1),
        (5, -1),
        (6, 0),
        (4, 4),
        (4, -4),
        (5, 3),
        (5, -3),
        (6, 2),
        (6, -2),
        (7, 1),
        (7, -1),
        (8, 0),
        (5, 5),
        (5, -5),
        (6, 4),
        (6, -4),
        (7, 3),
        (7, -3),
        (8, 2),
        (8, -2),
        (9, 1),
        (9, -1),
        (10, 0),
    ];

    #[test]
    fn test_piston() {
        assert_eq!(fringe_1d_to_2d(1), Ok((0, 0)));
        assert_eq!(fringe_2d_to_1d(0, 0), Ok(1));
    }

    #[test]
    fn test_known_table() {
        for (j, &(n, m)) in (1..).zip(&FRINGE_36) {
            assert_eq!(fringe_1d_to_2d(j), Ok((n, m)), "j = {j}");
            assert_eq!(fringe_2d_to_1d(n, m), Ok(j), "(n, m) = ({n}, {m})");
        }
        // The 37th term of the common 37-term set sits at the end of ring d = 7.
        assert_eq!(fringe_2d_to_1d(12, 0), Ok(49));
    }

    #[test]
    fn test_round_trip_first_36() {
        for j in 1..=36 {
            let (n, m) = fringe_1d_to_2d(j).unwrap();
            assert_eq!(fringe_2d_to_1d(n, m), Ok(j));
        }
    }

    #[test]
    fn test_ring_boundaries() {
        // Ring d spans (d - 1)² + 1 ..= d²: starts at (d - 1, d - 1), ends at (2(d - 1), 0).
        for d in 1..=200_i64 {
            let first = (d - 1) * (d - 1) + 1;
            let last = d * d;
            assert_eq!(fringe_1d_to_2d(first), Ok((d - 1, d - 1)), "d = {d}");
            assert_eq!(fringe_1d_to_2d(last), Ok((2 * (d - 1), 0)), "d = {d}");
            for j in [first, last] {
                let (n, m) = fringe_1d_to_2d(j).unwrap();
                assert_eq!(fringe_2d_to_1d(n, m), Ok(j));
            }
        }
    }

    #[test]
    fn test_rejects_non_positive_index() {
        assert_eq!(
            fringe_1d_to_2d(0),
            Err(IndexError::NonPositiveIndex { j: 0 })
        );
        assert!(fringe_1d_to_2d(-7).unwrap_err().is_non_positive_index());
    }

    #[test]
    fn test_rejects_invalid_pairs() {
        assert!(fringe_2d_to_1d(1, 0).unwrap_err().is_parity_mismatch());
        assert!(
            fringe_2d_to_1d(2, 3)
                .unwrap_err()
                .is_azimuthal_exceeds_radial()
        );
        assert!(
            fringe_2d_to_1d(-1, 0)
                .unwrap_err()
                .is_negative_radial_degree()
        );
    }

    #[test]
    fn test_extreme_indices() {
        let (n, m) = fringe_1d_to_2d(i64::MAX).unwrap();
        assert_eq!(fringe_2d_to_1d(n, m), Ok(i64::MAX));
        assert!(fringe_2d_to_1d(i64::MAX, 1).unwrap_err().is_overflow());
    }

    proptest! {
        #[test]
        fn prop_round_trip(j in 1_i64..=i64::MAX) {
            let (n, m) = fringe_1d_to_2d(j).unwrap();
            prop_assert_eq!(fringe_2d_to_1d(n, m), Ok(j));
        }

        #[test]
        fn prop_output_is_valid(j in 1_i64..1_000_000_000) {
            let pair = Fringe::to_nm(j).unwrap();
            prop_assert!(NmPair::new(pair.n(), pair.m()).is_ok());
        }
    }
}
