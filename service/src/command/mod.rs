//! [`Command`] definition.

pub mod register;
pub mod reserve;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{register::Register, reserve::Reserve};
