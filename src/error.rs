//! Errors returned by the rotator.

use thiserror::Error;

/// Failure of a rotator operation.
///
/// `E` is the error type of the [`Transport`](crate::transport::Transport) the
/// rotator writes to. Transport failures are handed back unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-0-3", derive(defmt::Format))]
pub enum RotatorError<E> {
    /// A move was requested with a direction code the controller does not know.
    /// Nothing was encoded or sent.
    #[error("invalid argument: unknown move direction {0}")]
    InvalidArgument(i32),
    /// Writing the frame to the transport failed.
    #[error("transport write failed: {0:?}")]
    Transport(E),
}

impl<E> RotatorError<E> {
    /// The transport error, if this is one.
    pub fn transport(&self) -> Option<&E> {
        match self {
            Self::Transport(e) => Some(e),
            Self::InvalidArgument(_) => None,
        }
    }
}
