//! Order book error types.

use thiserror::Error;

/// Errors returned synchronously from [`crate::Book`] construction and order
/// submission.
///
/// Matching itself cannot fail: every precondition it relies on is enforced
/// here, before an order ever reaches the matcher. `cancel` reports an
/// unknown id as `false`, not as a variant of this type — see
/// [`crate::Book::cancel`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderBookError {
    /// `Book::new` was given a tick size outside `[0, 8]`.
    #[error("Tick size too large. Must be [0, 8].")]
    InvalidTickSize,

    /// An order was submitted with `quantity == 0`.
    #[error("order quantity must be greater than zero")]
    ZeroQuantity,

    /// A limit order was submitted with `price == 0`.
    #[error("order price must be greater than zero")]
    ZeroPrice,
}
