//! Self-checks for the round-trip law of an ordering.
//!
//! For every `j` in `1..=nterms`, converting to `(n, m)` and back must yield
//! `j` again.
//!
//! # Examples
//!
//! ```
//! use zernike_index::{
//!     consistency::{DEFAULT_CHECK_TERMS, check_round_trip},
//!     ordering::{Fringe, Noll},
//! };
//!
//! check_round_trip::<Fringe>(DEFAULT_CHECK_TERMS)?;
//! check_round_trip::<Noll>(1000)?;
//! # Ok::<(), zernike_index::consistency::ConsistencyError>(())
//! ```

use crate::{
    IndexError,
    ordering::{Fringe, IndexOrdering, Noll, OrderingKind},
};

/// Number of terms checked when no count is given.
pub const DEFAULT_CHECK_TERMS: i64 = 36;

/// A failed consistency check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ConsistencyError {
    /// Converting `j` to `(n, m)` and back produced a different index.
    #[display("{ordering} indices don't match at j = {j} (found j = {found})")]
    RoundTripMismatch {
        /// Name of the ordering that failed.
        ordering: &'static str,
        /// The index that was converted.
        j: i64,
        /// The index produced by the reverse conversion.
        found: i64,
    },
    /// One of the conversions failed outright.
    #[display("conversion failed: {_0}")]
    Conversion(#[from] IndexError),
}

/// Checks the round-trip law of `O` for `j` in `1..=nterms`.
///
/// # Errors
///
/// Returns the first mismatch found, or the first conversion error.
pub fn check_round_trip<O: IndexOrdering>(nterms: i64) -> Result<(), ConsistencyError> {
    log::debug!("checking {} round trip for {nterms} terms", O::NAME);
    for j in 1..=nterms {
        let pair = O::to_nm(j)?;
        let found = O::to_linear(pair)?;
        log::trace!("{}: j = {j} -> {pair} -> j = {found}", O::NAME);
        if found != j {
            return Err(ConsistencyError::RoundTripMismatch {
                ordering: O::NAME,
                j,
                found,
            });
        }
    }
    Ok(())
}

/// Runs [`check_round_trip`] for the ordering selected by `kind`.
///
/// # Errors
///
/// See [`check_round_trip`].
pub fn check_round_trip_for(kind: OrderingKind, nterms: i64) -> Result<(), ConsistencyError> {
    match kind {
        OrderingKind::Fringe => check_round_trip::<Fringe>(nterms),
        OrderingKind::Noll => check_round_trip::<Noll>(nterms),
    }
}
