//! The Wyant convention.
//!
//! Wyant indexes terms by an unsigned radial index `n' = (n + |m|) / 2`, the
//! unsigned azimuthal order `|m|`, and a separate tag that says whether the
//! term is the cosine or sine member of its pair.

use std::fmt::{self, Display};

use crate::{IndexError, NmPair};

/// Trigonometric parity of a Wyant term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum WyantParity {
    /// Cosine term, classical `m > 0`.
    Cosine,
    /// Sine term, classical `m < 0`.
    Sine,
    /// Rotationally symmetric term, classical `m = 0`.
    Symmetric,
}

impl WyantParity {
    /// Returns the tag for a classical azimuthal degree.
    #[must_use]
    pub const fn from_azimuthal(m: i64) -> Self {
        match m.signum() {
            1 => Self::Cosine,
            -1 => Self::Sine,
            _ => Self::Symmetric,
        }
    }
}

impl Display for WyantParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cosine => "cosine",
            Self::Sine => "sine",
            Self::Symmetric => "none",
        })
    }
}

/// A term in the Wyant convention.
///
/// # Examples
///
/// ```
/// use zernike_index::{NmPair, WyantIndex, WyantParity};
///
/// let astig = WyantIndex::from(NmPair::new(2, -2)?);
/// assert_eq!(astig.n_prime(), 2);
/// assert_eq!(astig.abs_m(), 2);
/// assert_eq!(astig.parity(), WyantParity::Sine);
/// assert_eq!(astig.to_string(), "(2, 2, sine)");
/// # Ok::<(), zernike_index::IndexError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WyantIndex {
    n_prime: i64,
    abs_m: i64,
    parity: WyantParity,
}

impl WyantIndex {
    /// Returns the Wyant radial index `n' = (n + |m|) / 2`.
    #[must_use]
    pub const fn n_prime(self) -> i64 {
        self.n_prime
    }

    /// Returns the unsigned azimuthal order `|m|`.
    #[must_use]
    pub const fn abs_m(self) -> i64 {
        self.abs_m
    }

    /// Returns the trigonometric parity tag.
    #[must_use]
    pub const fn parity(self) -> WyantParity {
        self.parity
    }
}

impl From<NmPair> for WyantIndex {
    fn from(pair: NmPair) -> Self {
        let abs_m = pair.abs_m();
        // n + |m| is even and both are non-negative, so halving first cannot
        // overflow and loses nothing.
        let n_prime = pair.n() / 2 + abs_m / 2 + (pair.n() % 2 + abs_m % 2) / 2;
        Self {
            n_prime,
            abs_m,
            parity: WyantParity::from_azimuthal(pair.m()),
        }
    }
}

impl From<WyantIndex> for (i64, i64, WyantParity) {
    fn from(index: WyantIndex) -> Self {
        (index.n_prime, index.abs_m, index.parity)
    }
}

impl Display for WyantIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.n_prime, self.abs_m, self.parity)
    }
}

/// Converts a classical `(n, m)` pair to the Wyant convention.
///
/// # Errors
///
/// Returns an error if `(n, m)` is not a valid pair (see
/// [`validate_nm`](crate::validate_nm)).
///
/// # Examples
///
/// ```
/// use zernike_index::{WyantParity, classical_nm_to_wyant};
///
/// let (n_prime, abs_m, parity) = classical_nm_to_wyant(2, 2)?.into();
/// assert_eq!((n_prime, abs_m, parity), (2, 2, WyantParity::Cosine));
/// # Ok::<(), zernike_index::IndexError>(())
/// ```
pub fn classical_nm_to_wyant(n: i64, m: i64) -> Result<WyantIndex, IndexError> {
    NmPair::new(n, m).map(WyantIndex::from)
}
