//! [`Catalog`]-related implementations.

mod memory;
#[cfg(feature = "seed")]
mod seed;

use derive_more::{Display, Error as StdError};

use crate::domain::listing;
#[cfg(doc)]
use crate::domain::Listing;

pub use self::memory::Memory;

/// Read-only source of [`Listing`]s.
pub use common::Handler as Catalog;

/// Error of building a [`Catalog`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, StdError)]
pub enum Error {
    /// Several [`Listing`]s share the same [`listing::Id`].
    #[display("`Listing(id: {_0})` is declared more than once")]
    DuplicateId(#[error(not(source))] listing::Id),
}
