//! Cart service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Failures talking to the cart service.
#[derive(Debug, Error)]
pub enum CartsServiceError {
    /// Quantities below 1 are rejected before any call is made.
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    /// The HTTP layer failed or the service rejected the call.
    #[error(transparent)]
    Api(#[from] ApiError),
}
