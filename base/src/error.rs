use core::fmt::{self, Display, Formatter};

/// Error that can occur while building or indexing an array from data of run-time length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    /// Position in the source where the error occurred.
    pub pos: usize,
}

/// Kind of [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source ended before all array items were provided.
    InsufficientLength,
    /// The source provides more items than the array can hold.
    ExcessLength,
    /// Index is not less than the array size.
    OutOfBounds,
}

impl Error {
    pub fn new(kind: ErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::InsufficientLength => "insufficient length",
            ErrorKind::ExcessLength => "excess length",
            ErrorKind::OutOfBounds => "index out of bounds",
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.pos)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
