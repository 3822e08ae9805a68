//! The error type shared by every collection in this crate.

use thiserror::Error;

/// Failures surfaced by list, queue and tree operations.
///
/// All of these are local and synchronous: nothing is retried and nothing
/// is swallowed, the caller sees the failure immediately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A removal or peek was attempted on a collection with no elements.
    #[error("collection is empty")]
    EmptyCollection,
    /// A list position fell outside the valid range for the operation.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the list at the time of the request.
        len: usize,
    },
    /// A tree address named a child that does not exist.
    #[error("address {address:?} out of range at depth {depth}")]
    AddressOutOfRange {
        /// The full address that failed to resolve.
        address: Vec<usize>,
        /// The position within `address` of the offending index.
        depth: usize,
    },
    /// The operation is not permitted on its target, e.g. deleting the root.
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

/// Result alias for collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

impl CollectionError {
    pub(crate) fn index(index: usize, len: usize) -> Self {
        CollectionError::IndexOutOfRange { index, len }
    }

    pub(crate) fn address(address: &[usize], depth: usize) -> Self {
        CollectionError::AddressOutOfRange {
            address: address.to_vec(),
            depth,
        }
    }
}
