//! Error types for index conversions.

/// Errors produced when an index or an (n, m) pair violates the preconditions
/// of a conversion.
///
/// Every conversion either returns a complete result or one of these errors;
/// partial results are never produced.
///
/// # Examples
///
/// ```
/// use zernike_index::{IndexError, NmPair};
///
/// let err = NmPair::new(1, 0).unwrap_err();
/// assert!(err.is_parity_mismatch());
/// assert_eq!(err, IndexError::ParityMismatch { n: 1, m: 0 });
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum IndexError {
    /// A linear index was zero or negative. Piston is `j = 1`.
    #[display("linear index must be >= 1 (piston is j = 1), got {j}")]
    NonPositiveIndex {
        /// The rejected linear index.
        j: i64,
    },
    /// The radial degree was negative.
    #[display("radial degree must be non-negative, got n = {n}")]
    NegativeRadialDegree {
        /// The rejected radial degree.
        n: i64,
    },
    /// The absolute value of the azimuthal degree exceeded the radial degree.
    #[display("|m| cannot exceed n, got (n, m) = ({n}, {m})")]
    AzimuthalExceedsRadial {
        /// Radial degree.
        n: i64,
        /// Azimuthal degree.
        m: i64,
    },
    /// The radial and azimuthal degrees had different parity.
    #[display("n and m must be both even or both odd, got (n, m) = ({n}, {m})")]
    ParityMismatch {
        /// Radial degree.
        n: i64,
        /// Azimuthal degree.
        m: i64,
    },
    /// An intermediate value did not fit in 64 bits.
    #[display("index arithmetic overflowed for (n, m) = ({n}, {m})")]
    Overflow {
        /// Radial degree.
        n: i64,
        /// Azimuthal degree.
        m: i64,
    },
}
