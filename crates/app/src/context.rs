//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    api::{ApiClient, ApiConfig, ApiError},
    carts::{CartsService, HttpCartsService},
    payments::{HttpPaymentsService, PaymentsService},
    quotes::{HttpQuotesService, QuotesService},
};

/// Failure building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The HTTP client could not be constructed.
    #[error("failed to build the API client")]
    Api(#[source] ApiError),
}

/// Shared service handles for the client.
#[derive(Clone)]
pub struct AppContext {
    /// Cart read/write wrappers.
    pub carts: Arc<dyn CartsService>,

    /// Tariff quote requester.
    pub quotes: Arc<dyn QuotesService>,

    /// Payment session creation.
    pub payments: Arc<dyn PaymentsService>,
}

impl AppContext {
    /// Build the context over one shared API client.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_api_config(config: &ApiConfig) -> Result<Self, AppInitError> {
        let api = ApiClient::new(config).map_err(AppInitError::Api)?;

        Ok(Self {
            carts: Arc::new(HttpCartsService::new(api.clone())),
            quotes: Arc::new(HttpQuotesService::new(api.clone())),
            payments: Arc::new(HttpPaymentsService::new(api)),
        })
    }
}
