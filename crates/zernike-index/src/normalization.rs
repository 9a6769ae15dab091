//! Noll normalization constants.

use crate::{IndexError, NmPair};

/// Returns the Noll normalization constant for `(n, m)`.
///
/// The constant is `sqrt(n + 1)` for rotationally symmetric terms (`m = 0`)
/// and `sqrt(2(n + 1))` otherwise. Only the radial degree is checked; `m`
/// matters solely through whether it is zero.
///
/// # Errors
///
/// Returns [`IndexError::NegativeRadialDegree`] if `n < 0`.
///
/// # Examples
///
/// ```
/// use zernike_index::noll_normalization;
///
/// assert_eq!(noll_normalization(0, 0)?, 1.0);
/// assert_eq!(noll_normalization(1, 1)?, 2.0);
/// assert!((noll_normalization(2, 2)? - 6.0_f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), zernike_index::IndexError>(())
/// ```
pub fn noll_normalization(n: i64, m: i64) -> Result<f64, IndexError> {
    if n < 0 {
        return Err(IndexError::NegativeRadialDegree { n });
    }
    Ok(normalization(n, m))
}

fn normalization(n: i64, m: i64) -> f64 {
    #[expect(clippy::cast_precision_loss)]
    let order = (n as f64) + 1.0;
    let factor = if m == 0 { 1.0 } else { 2.0 };
    (factor * order).sqrt()
}

impl NmPair {
    /// Returns the Noll normalization constant of this pair.
    ///
    /// See [`noll_normalization`].
    #[must_use]
    pub fn noll_normalization(self) -> f64 {
        normalization(self.n(), self.m())
    }
}
