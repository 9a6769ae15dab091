//! The Noll ordering and its in-ring comparator.

use std::cmp::Ordering;

use crate::{IndexError, NmPair, parity::is_even};

use super::IndexOrdering;

/// The Noll ordering.
///
/// Terms are grouped into rings of constant radial degree `n`; ring `n` holds
/// the indices `n(n + 1)/2 + 1 ..= (n + 1)(n + 2)/2`. Even indices carry
/// positive `m` (cosine terms), odd indices negative `m` (sine terms). Within
/// a ring, terms are ordered by [`noll_ring_cmp`].
///
/// | j | (n, m) | name |
/// |---|--------|------|
/// | 1 | (0, 0) | piston |
/// | 2 | (1, 1) | tilt x |
/// | 3 | (1, -1) | tilt y |
/// | 4 | (2, 0) | defocus |
/// | 11 | (4, 0) | primary spherical |
#[derive(Debug, Clone, Copy, Default)]
pub struct Noll;

impl Noll {
    /// Returns the first linear index of ring `n`, `n(n + 1)/2 + 1`.
    fn ring_start(n: i64) -> i128 {
        let n = i128::from(n);
        n * (n + 1) / 2 + 1
    }

    /// Returns `true` if ring `n` places negative `m` before positive `m` of
    /// equal magnitude.
    ///
    /// This holds exactly when `ring_start(n) + n` is even, which keeps even
    /// indices on cosine terms.
    #[must_use]
    pub fn negative_first(n: i64) -> bool {
        let parity = (Self::ring_start(n) + i128::from(n)) % 2;
        parity == 0
    }
}

/// Orders two azimuthal degrees of ring `n` the way the Noll ordering does.
///
/// The comparator is the lexicographic order of the key
/// `(|m|, s · sgn(m))` where `s = +1` if [`Noll::negative_first(n)`] and
/// `s = -1` otherwise. Smaller `|m|` always comes first; of a pair `±|m|`,
/// the ring's leading sign comes first.
///
/// [`Noll::negative_first(n)`]: Noll::negative_first
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
///
/// use zernike_index::ordering::noll_ring_cmp;
///
/// // Ring 2 leads with negative m: (2, -2) is j = 5, (2, 2) is j = 6.
/// assert_eq!(noll_ring_cmp(2, -2, 2), Ordering::Less);
/// // Ring 1 leads with positive m: (1, 1) is j = 2, (1, -1) is j = 3.
/// assert_eq!(noll_ring_cmp(1, 1, -1), Ordering::Less);
/// ```
#[must_use]
pub fn noll_ring_cmp(n: i64, a: i64, b: i64) -> Ordering {
    let s = if Noll::negative_first(n) { 1 } else { -1 };
    let key = |m: i64| (m.unsigned_abs(), s * m.signum());
    key(a).cmp(&key(b))
}

impl IndexOrdering for Noll {
    const NAME: &'static str = "Noll";

    fn to_nm(j: i64) -> Result<NmPair, IndexError> {
        if j <= 0 {
            return Err(IndexError::NonPositiveIndex { j });
        }
        let sign = if is_even(j) { 1 } else { -1 };
        let j = i128::from(j);
        // n + 1 is the smallest k with k(k + 1)/2 >= j; it is either
        // floor(sqrt(2j)) or one more.
        let k0 = (2 * j).isqrt();
        let k = if k0 * k0 + k0 >= 2 * j { k0 } else { k0 + 1 };
        let n = k - 1;
        let ring_end = k * (k + 1) / 2;
        let m = sign * (n - 2 * ((ring_end - j) / 2));
        // n < sqrt(2j), so both fit back into i64.
        #[expect(clippy::cast_possible_truncation)]
        let (n, m) = (n as i64, m as i64);
        Ok(NmPair::new_unchecked(n, m))
    }

    fn to_linear(pair: NmPair) -> Result<i64, IndexError> {
        let (n, m) = (pair.n(), pair.m());
        // Number of ring members that sort before `m` under `noll_ring_cmp`:
        // every member of smaller magnitude (|m| - 1 of them when m != 0),
        // plus the opposite-signed partner if it leads.
        let position = if m == 0 {
            0
        } else {
            let partner_leads = (m > 0) == Noll::negative_first(n);
            i128::from(pair.abs_m()) - 1 + i128::from(partner_leads)
        };
        i64::try_from(Noll::ring_start(n) + position).map_err(|_| IndexError::Overflow { n, m })
    }
}

/// Converts a Noll index to its classical `(n, m)` pair.
///
/// # Errors
///
/// Returns [`IndexError::NonPositiveIndex`] if `j <= 0`.
///
/// # Examples
///
/// ```
/// use zernike_index::noll_1d_to_2d;
///
/// assert_eq!(noll_1d_to_2d(1)?, (0, 0));
/// assert_eq!(noll_1d_to_2d(7)?, (3, -1));
/// # Ok::<(), zernike_index::IndexError>(())
/// ```
pub fn noll_1d_to_2d(j: i64) -> Result<(i64, i64), IndexError> {
    Noll::to_nm(j).map(Into::into)
}

/// Converts a classical `(n, m)` pair to its Noll index.
///
/// # Errors
///
/// Returns an error if `(n, m)` is not a valid pair (see
/// [`validate_nm`](crate::validate_nm)) or the index overflows.
///
/// # Examples
///
/// ```
/// use zernike_index::noll_2d_to_1d;
///
/// assert_eq!(noll_2d_to_1d(4, 0)?, 11);
/// assert_eq!(noll_2d_to_1d(2, -2)?, 5);
/// # Ok::<(), zernike_index::IndexError>(())
/// ```
pub fn noll_2d_to_1d(n: i64, m: i64) -> Result<i64, IndexError> {
    Noll::to_linear(NmPair::new(n, m)?)
}
