//! Quotes service.

use async_trait::async_trait;
use mockall::automock;
use waybill::quote::Quote;

use crate::{
    api::ApiClient,
    quotes::{errors::QuotesServiceError, models::QuoteRequest},
};

/// Authoritative shipping-cost computation.
#[automock]
#[async_trait]
pub trait QuotesService: Send + Sync {
    /// Price the given items over the given leg.
    async fn request(&self, request: QuoteRequest) -> Result<Quote, QuotesServiceError>;
}

/// HTTP implementation over the tariff endpoint.
#[derive(Debug, Clone)]
pub struct HttpQuotesService {
    api: ApiClient,
}

impl HttpQuotesService {
    /// Wrap the given API client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl QuotesService for HttpQuotesService {
    async fn request(&self, request: QuoteRequest) -> Result<Quote, QuotesServiceError> {
        Ok(self.api.post("/tarifa_envio/calcular", &request).await?)
    }
}
