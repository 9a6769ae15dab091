//! Linear orderings of Zernike terms.
//!
//! An ordering is a bijection between linear indices `j >= 1` and valid
//! classical [`NmPair`]s. Each ordering is a unit type implementing
//! [`IndexOrdering`], in the same way an index-semantics type defines how
//! user-facing values map to container indices.
//!
//! - [`Fringe`] - the Fringe (University of Arizona) ordering
//! - [`Noll`] - the Noll ordering used in adaptive optics
//!
//! [`OrderingKind`] selects one of them at runtime.
//!
//! # Examples
//!
//! ```
//! use zernike_index::{
//!     NmPair,
//!     ordering::{Fringe, IndexOrdering, Noll},
//! };
//!
//! // Defocus is j = 4 in both orderings.
//! let defocus = NmPair::new(2, 0)?;
//! assert_eq!(Fringe::to_linear(defocus)?, 4);
//! assert_eq!(Noll::to_linear(defocus)?, 4);
//!
//! // Primary spherical differs.
//! let spherical = NmPair::new(4, 0)?;
//! assert_eq!(Fringe::to_linear(spherical)?, 9);
//! assert_eq!(Noll::to_linear(spherical)?, 11);
//! # Ok::<(), zernike_index::IndexError>(())
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    marker::PhantomData,
};

use crate::{IndexError, NmPair};

pub use self::{fringe::*, noll::*};

mod fringe;
mod noll;

/// Defines the mapping between linear indices and (n, m) pairs.
///
/// Implementors must guarantee the round-trip law: for every `j >= 1` for
/// which [`to_nm`](Self::to_nm) succeeds, `to_linear(to_nm(j)?) == Ok(j)`.
pub trait IndexOrdering {
    /// Human-readable name of the ordering.
    const NAME: &'static str;

    /// Converts a linear index to its (n, m) pair.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NonPositiveIndex`] if `j <= 0`.
    fn to_nm(j: i64) -> Result<NmPair, IndexError>;

    /// Converts an (n, m) pair to its linear index.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::Overflow`] if the index does not fit in `i64`.
    fn to_linear(pair: NmPair) -> Result<i64, IndexError>;

    /// Returns an iterator over `(j, pair)` for `j = 1, 2, ...`.
    #[must_use]
    fn terms() -> Terms<Self>
    where
        Self: Sized,
    {
        Terms::new()
    }
}

/// Iterator over the terms of an ordering, created by
/// [`IndexOrdering::terms`].
#[derive(Debug)]
pub struct Terms<O> {
    next: Option<i64>,
    _ordering: PhantomData<fn() -> O>,
}

impl<O> Terms<O> {
    fn new() -> Self {
        Self {
            next: Some(1),
            _ordering: PhantomData,
        }
    }
}

impl<O> Clone for Terms<O> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            _ordering: PhantomData,
        }
    }
}

impl<O: IndexOrdering> Iterator for Terms<O> {
    type Item = (i64, NmPair);

    fn next(&mut self) -> Option<Self::Item> {
        let j = self.next?;
        let Ok(pair) = O::to_nm(j) else {
            self.next = None;
            return None;
        };
        self.next = j.checked_add(1);
        Some((j, pair))
    }
}

impl<O: IndexOrdering> FusedIterator for Terms<O> {}

/// Runtime selector for an [`IndexOrdering`].
///
/// # Examples
///
/// ```
/// use zernike_index::{NmPair, ordering::OrderingKind};
///
/// let kind = OrderingKind::Noll;
/// assert_eq!(kind.to_nm(5)?, NmPair::new(2, -2)?);
/// assert_eq!(kind.to_string(), "Noll");
/// # Ok::<(), zernike_index::IndexError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderingKind {
    /// The [`Fringe`] ordering.
    Fringe,
    /// The [`Noll`] ordering.
    Noll,
}

impl OrderingKind {
    /// Both orderings.
    pub const ALL: [Self; 2] = [Self::Fringe, Self::Noll];

    /// Returns the name of the selected ordering.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fringe => Fringe::NAME,
            Self::Noll => Noll::NAME,
        }
    }

    /// Converts a linear index with the selected ordering.
    ///
    /// # Errors
    ///
    /// See [`IndexOrdering::to_nm`].
    pub fn to_nm(self, j: i64) -> Result<NmPair, IndexError> {
        match self {
            Self::Fringe => Fringe::to_nm(j),
            Self::Noll => Noll::to_nm(j),
        }
    }

    /// Converts an (n, m) pair with the selected ordering.
    ///
    /// # Errors
    ///
    /// See [`IndexOrdering::to_linear`].
    pub fn to_linear(self, pair: NmPair) -> Result<i64, IndexError> {
        match self {
            Self::Fringe => Fringe::to_linear(pair),
            Self::Noll => Noll::to_linear(pair),
        }
    }

    /// Returns the first `count` terms of the selected ordering.
    pub fn terms(self, count: usize) -> Box<dyn Iterator<Item = (i64, NmPair)>> {
        match self {
            Self::Fringe => Box::new(Fringe::terms().take(count)),
            Self::Noll => Box::new(Noll::terms().take(count)),
        }
    }
}

impl Display for OrderingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
