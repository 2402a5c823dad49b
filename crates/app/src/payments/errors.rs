//! Payment service errors.

use thiserror::Error;

use crate::api::ApiError;

/// Failures creating a payment session.
#[derive(Debug, Error)]
pub enum PaymentsServiceError {
    /// The HTTP layer failed or the service rejected the call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The service answered without a payment URL. There is nowhere to
    /// send the shopper, so the flow stops here.
    #[error("payment session response carried no URL")]
    MissingUrl,
}
