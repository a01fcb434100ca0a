use std::fmt;

/// Errors that can occur when reading a `TriList` by position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriListError {
    /// The requested index is past the end of the list
    IndexOutOfBounds { index: usize, len: usize },
    /// The element at the index holds a different payload type than requested
    TypeMismatch {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for TriListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TriListError::IndexOutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for list of length {}", index, len)
            }
            TriListError::TypeMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "Type mismatch at index {}: expected {}, found {}",
                index, expected, found
            ),
        }
    }
}

impl std::error::Error for TriListError {}
