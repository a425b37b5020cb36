//! [`Handler`] abstractions.

/// Executable handler.
///
/// Every [`Handler`] runs to completion on the calling thread.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Handler::Err`] if the execution fails.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
