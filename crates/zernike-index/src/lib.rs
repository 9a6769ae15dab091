//! Index conversions for Zernike polynomials.
//!
//! Zernike polynomials are an orthogonal basis on the unit disk, indexed
//! classically by a radial degree `n >= 0` and a signed azimuthal degree `m`
//! with `|m| <= n` and `n - m` even. This crate converts between that
//! classical pair and the conventions used in practice.
//!
//! # Overview
//!
//! 1. **Classical pairs** - [`NmPair`] and [`validate_nm`], the single
//!    precondition gate for every conversion that takes `(n, m)`.
//!
//! 2. **Linear orderings** - [`ordering`]: the [`Fringe`] and [`Noll`]
//!    orderings behind the [`IndexOrdering`] trait, plus the free functions
//!    [`fringe_1d_to_2d`], [`fringe_2d_to_1d`], [`noll_1d_to_2d`] and
//!    [`noll_2d_to_1d`].
//!
//! 3. **Wyant convention** - [`wyant`]: [`classical_nm_to_wyant`] and the
//!    [`WyantIndex`] / [`WyantParity`] types.
//!
//! 4. **Normalization** - [`noll_normalization`].
//!
//! 5. **Self-checks** - [`consistency`]: round-trip checks for an ordering.
//!
//! All failures are reported as [`IndexError`]; nothing panics on bad input.
//!
//! [`Fringe`]: ordering::Fringe
//! [`Noll`]: ordering::Noll
//! [`IndexOrdering`]: ordering::IndexOrdering
//!
//! # Examples
//!
//! ```
//! use zernike_index::{
//!     IndexError, WyantParity, classical_nm_to_wyant, fringe_1d_to_2d, noll_2d_to_1d,
//!     noll_normalization,
//! };
//!
//! // Fringe term 9 is primary spherical, which Noll numbers 11.
//! let (n, m) = fringe_1d_to_2d(9)?;
//! assert_eq!((n, m), (4, 0));
//! assert_eq!(noll_2d_to_1d(n, m)?, 11);
//!
//! let wyant = classical_nm_to_wyant(n, m)?;
//! assert_eq!(wyant.n_prime(), 2);
//! assert_eq!(wyant.parity(), WyantParity::Symmetric);
//!
//! assert!((noll_normalization(n, m)? - 5.0_f64.sqrt()).abs() < 1e-12);
//!
//! // Invalid pairs are rejected, not coerced.
//! assert_eq!(
//!     noll_2d_to_1d(1, 0),
//!     Err(IndexError::ParityMismatch { n: 1, m: 0 })
//! );
//! # Ok::<(), IndexError>(())
//! ```

pub mod consistency;
pub mod ordering;
pub mod parity;
pub mod wyant;

mod error;
mod nm;
mod normalization;

pub use self::{
    error::IndexError,
    nm::{NmPair, validate_nm},
    normalization::noll_normalization,
    ordering::{fringe_1d_to_2d, fringe_2d_to_1d, noll_1d_to_2d, noll_2d_to_1d},
    wyant::{WyantIndex, WyantParity, classical_nm_to_wyant},
};
