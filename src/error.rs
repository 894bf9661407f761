use thiserror::Error;

/// Errors raised by [`OrderedMap`](crate::ordered_map::OrderedMap) and
/// [`Slot`](crate::Slot) operations.
///
/// Every error is detected before the structure is touched, so an `Err`
/// never leaves a map half updated.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key (or the reference key of a relative operation) is not in the
    /// map.
    #[error("key not found")]
    KeyNotFound,

    /// Two key arguments that must be distinct were equal.
    #[error("key arguments must refer to different entries")]
    KeyCollision,

    /// The destination key of a rename or relative insert is already in the
    /// map.
    #[error("key already present in the map")]
    KeyExists,

    /// A boundary query was made on an empty map.
    #[error("{operation}(): ordered map is empty")]
    EmptyStructure {
        /// The operation that needed a non-empty map.
        operation: &'static str,
    },

    /// A slot was built from a positional sequence of the wrong length.
    #[error("slot takes exactly 3 positional fields, got {found}")]
    InvalidArity {
        /// The number of fields supplied.
        found: usize,
    },

    /// A positional slot index outside `-3..=2`.
    #[error("slot field index {index} out of range")]
    IndexOutOfRange {
        /// The rejected index.
        index: isize,
    },

    /// Initialization data whose order cannot be trusted.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Result type for fallible map operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
