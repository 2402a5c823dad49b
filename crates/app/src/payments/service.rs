//! Payments service.

use async_trait::async_trait;
use mockall::automock;
use waybill::checkout::CheckoutPayload;

use crate::{
    api::ApiClient,
    payments::{errors::PaymentsServiceError, models::PaymentSession},
};

/// Payment-session creation against the payment gateway.
#[automock]
#[async_trait]
pub trait PaymentsService: Send + Sync {
    /// Create a payment session and return the URL to navigate to.
    async fn create_session(
        &self,
        payload: CheckoutPayload,
    ) -> Result<String, PaymentsServiceError>;
}

/// HTTP implementation over the payment endpoint.
#[derive(Debug, Clone)]
pub struct HttpPaymentsService {
    api: ApiClient,
}

impl HttpPaymentsService {
    /// Wrap the given API client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl PaymentsService for HttpPaymentsService {
    async fn create_session(
        &self,
        payload: CheckoutPayload,
    ) -> Result<String, PaymentsServiceError> {
        let session: PaymentSession = self.api.post("/stripe/checkout", &payload).await?;

        session.url.ok_or(PaymentsServiceError::MissingUrl)
    }
}
