//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use serde::Serialize;
use waybill::cart::{Cart, CartLine};

use crate::{
    api::ApiClient,
    carts::{errors::CartsServiceError, models::NewCartLine},
};

/// Read/write access to the remote cart.
///
/// Mutations change the server cart only; callers own dropping any
/// quote that was computed against the previous contents.
#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Load the user's cart, in server order.
    async fn get_cart(&self, user_id: u64) -> Result<Cart, CartsServiceError>;

    /// Add a line to the cart; returns the created record.
    async fn add_line(&self, line: NewCartLine) -> Result<CartLine, CartsServiceError>;

    /// Change the quantity of an existing line.
    async fn update_quantity(
        &self,
        user_id: u64,
        variant_id: u64,
        quantity: u32,
    ) -> Result<(), CartsServiceError>;

    /// Remove a line.
    async fn remove_line(&self, user_id: u64, variant_id: u64) -> Result<(), CartsServiceError>;

    /// Empty the cart.
    async fn clear(&self, user_id: u64) -> Result<(), CartsServiceError>;
}

#[derive(Debug, Serialize)]
struct QuantityUpdate {
    cantidad: u32,
}

/// HTTP implementation over the cart endpoints.
#[derive(Debug, Clone)]
pub struct HttpCartsService {
    api: ApiClient,
}

impl HttpCartsService {
    /// Wrap the given API client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CartsService for HttpCartsService {
    async fn get_cart(&self, user_id: u64) -> Result<Cart, CartsServiceError> {
        let lines: Vec<CartLine> = self.api.get(&format!("/cart/{user_id}")).await?;

        Ok(Cart::new(lines))
    }

    async fn add_line(&self, line: NewCartLine) -> Result<CartLine, CartsServiceError> {
        Ok(self.api.post("/cart/", &line).await?)
    }

    async fn update_quantity(
        &self,
        user_id: u64,
        variant_id: u64,
        quantity: u32,
    ) -> Result<(), CartsServiceError> {
        if quantity == 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        self.api
            .put(
                &format!("/cart/{user_id}/{variant_id}"),
                &QuantityUpdate { cantidad: quantity },
            )
            .await?;

        Ok(())
    }

    async fn remove_line(&self, user_id: u64, variant_id: u64) -> Result<(), CartsServiceError> {
        self.api.delete(&format!("/cart/{user_id}/{variant_id}")).await?;

        Ok(())
    }

    async fn clear(&self, user_id: u64) -> Result<(), CartsServiceError> {
        self.api.delete(&format!("/cart/clear/{user_id}")).await?;

        Ok(())
    }
}
