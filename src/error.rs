use crate::Code;

/// The reasons an encoding or decoding call is aborted.
///
/// A failed call makes no promise about how much of the destination buffer holds valid data.
/// Running out of dictionary space is not an error, the dictionary freezes instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LzwError {
    /// The destination buffer can not hold the next unit of output.
    #[error("out of space in destination buffer: {required} bytes required, {remaining} remaining")]
    CapacityExceeded {
        /// Bytes the next write needed.
        required: usize,
        /// Bytes left in the destination.
        remaining: usize,
    },
    /// The packed stream refers to a code that has not been assigned.
    #[error("invalid code {code} in packed stream, next free code is {next}")]
    InvalidCode {
        /// The offending code.
        code: Code,
        /// The code the dictionary would assign next.
        next: Code,
    },
}

#[cfg(feature = "std")]
impl From<LzwError> for std::io::Error {
    fn from(err: LzwError) -> Self {
        let kind = match err {
            LzwError::CapacityExceeded { .. } => std::io::ErrorKind::WriteZero,
            LzwError::InvalidCode { .. } => std::io::ErrorKind::InvalidData,
        };
        std::io::Error::new(kind, err)
    }
}
