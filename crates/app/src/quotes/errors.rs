//! Quote service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Failures talking to the tariff service.
#[derive(Debug, Error)]
pub enum QuotesServiceError {
    /// The HTTP layer failed or the service rejected the call; the
    /// server's message is surfaced verbatim.
    #[error(transparent)]
    Api(#[from] ApiError),
}
