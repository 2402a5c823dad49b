//! Checkout flow orchestration.
//!
//! Drives one shopper's quote & checkout flow against the remote
//! services. State is page-local: each flow owns its own
//! [`CheckoutSession`] and nothing is shared between flows. Network
//! calls are awaited one at a time; racing requests are not coordinated
//! and the last response wins.

use jiff::Zoned;
use thiserror::Error;
use tracing::{info, warn};
use waybill::{
    access::Session,
    checkout::{CheckoutError, CheckoutSession},
    geo::{Coordinate, haversine_km},
    quote::Quote,
    shipping,
};

use crate::{
    carts::{errors::CartsServiceError, models::NewCartLine},
    context::AppContext,
    payments::errors::PaymentsServiceError,
    quotes::{
        errors::QuotesServiceError,
        models::{QuoteRequest, ShipmentLeg},
    },
};

/// Failures surfaced by the flow, each rendered inline by the caller.
///
/// Precondition failures are caught before any network call; transport
/// and server failures carry the remote message. None of them end the
/// flow: the session stays interactive.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A quote or payment was requested without a signed-in session.
    #[error("you must be logged in first")]
    NotLoggedIn,

    /// A quote was requested over an empty cart.
    #[error("the cart is empty")]
    EmptyCart,

    /// A quote was requested before picking a destination.
    #[error("select a destination on the map first")]
    DestinationMissing,

    /// The cart service failed.
    #[error(transparent)]
    Carts(#[from] CartsServiceError),

    /// The tariff service failed.
    #[error(transparent)]
    Quotes(#[from] QuotesServiceError),

    /// The payment service failed.
    #[error(transparent)]
    Payments(#[from] PaymentsServiceError),

    /// A payment precondition failed.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

/// One shopper's quote & checkout flow.
pub struct CheckoutFlow {
    context: AppContext,
    session: Option<Session>,
    origin: Coordinate,
    checkout: CheckoutSession,
}

impl CheckoutFlow {
    /// Create a flow for the given (possibly anonymous) session.
    ///
    /// `origin` is the warehouse coordinate every shipment departs
    /// from.
    #[must_use]
    pub fn new(context: AppContext, session: Option<Session>, origin: Coordinate) -> Self {
        Self {
            context,
            session,
            origin,
            checkout: CheckoutSession::default(),
        }
    }

    /// The checkout state, for rendering.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutSession {
        &self.checkout
    }

    /// Reload the cart from the cart service into the session.
    ///
    /// Replacing the lines drops any held quote.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the cart service
    /// fails.
    pub async fn reload_cart(&mut self) -> Result<(), FlowError> {
        let user = self.signed_in()?;
        let cart = self.context.carts.get_cart(user.user_id).await?;

        self.checkout.set_lines(cart.into_lines());

        Ok(())
    }

    /// Add a line to the cart, then reload it.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the cart service
    /// fails.
    pub async fn add_line(&mut self, variant_id: u64, quantity: u32) -> Result<(), FlowError> {
        let user = self.signed_in()?;

        self.context
            .carts
            .add_line(NewCartLine {
                user_id: user.user_id,
                variant_id,
                quantity,
            })
            .await?;

        self.checkout.invalidate_quote();
        self.reload_cart().await
    }

    /// Change a line's quantity, then reload the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in, the quantity is
    /// below 1, or the cart service fails.
    pub async fn update_quantity(
        &mut self,
        variant_id: u64,
        quantity: u32,
    ) -> Result<(), FlowError> {
        let user = self.signed_in()?;

        self.context
            .carts
            .update_quantity(user.user_id, variant_id, quantity)
            .await?;

        self.checkout.invalidate_quote();
        self.reload_cart().await
    }

    /// Remove a line, then reload the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the cart service
    /// fails.
    pub async fn remove_line(&mut self, variant_id: u64) -> Result<(), FlowError> {
        let user = self.signed_in()?;

        self.context
            .carts
            .remove_line(user.user_id, variant_id)
            .await?;

        self.checkout.invalidate_quote();
        self.reload_cart().await
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when no user is signed in or the cart service
    /// fails.
    pub async fn clear_cart(&mut self) -> Result<(), FlowError> {
        let user = self.signed_in()?;

        self.context.carts.clear(user.user_id).await?;

        self.checkout.set_lines(Vec::new());

        Ok(())
    }

    /// Pick a destination, dropping any held quote.
    ///
    /// Returns the straight-line preview distance for display; the
    /// authoritative distance comes back with the quote.
    pub fn set_destination(&mut self, destination: Coordinate) -> f64 {
        self.checkout.set_destination(destination);

        haversine_km(self.origin, destination)
    }

    /// Straight-line preview distance for the current destination.
    #[must_use]
    pub fn preview_distance(&self) -> Option<f64> {
        self.checkout
            .destination()
            .map(|destination| haversine_km(self.origin, destination))
    }

    /// Update the tax-id text.
    pub fn set_tax_id(&mut self, tax_id: impl Into<String>) {
        self.checkout.set_tax_id(tax_id);
    }

    /// Request an authoritative quote from the tariff service.
    ///
    /// Preconditions are checked in order before any network call: a
    /// signed-in session, a non-empty cart, a chosen destination. On
    /// success the quote is stored and the tax-id step restarts at
    /// `CF`; on failure the held quote stays `None` and the server's
    /// message is surfaced verbatim.
    ///
    /// # Errors
    ///
    /// Returns the first failing precondition, or the tariff service's
    /// error.
    pub async fn request_quote(&mut self) -> Result<Quote, FlowError> {
        let user = self.signed_in()?;

        if self.checkout.lines().is_empty() {
            return Err(FlowError::EmptyCart);
        }

        let destination = self
            .checkout
            .destination()
            .ok_or(FlowError::DestinationMissing)?;

        let defaulted: usize = self
            .checkout
            .lines()
            .iter()
            .map(shipping::defaulted_fields)
            .sum();

        if defaulted > 0 {
            warn!(defaulted, "quoting with defaulted fields on degraded cart lines");
        }

        let request = QuoteRequest {
            items: shipping::normalize(self.checkout.lines()),
            leg: ShipmentLeg::new(self.origin, destination),
        };

        let quote = self.context.quotes.request(request).await?;

        info!(
            user_id = user.user_id,
            distance_km = quote.distance_km,
            total = %quote.total,
            "accepted shipping quote"
        );

        self.checkout.accept_quote(quote.clone());

        Ok(quote)
    }

    /// Assemble the payload and create the payment session.
    ///
    /// Returns the URL to navigate to. This is terminal: once the
    /// caller navigates, the provider owns the rest of the interaction
    /// and later redirects back to a static outcome page.
    ///
    /// # Errors
    ///
    /// Returns a [`FlowError::Checkout`] when a payment precondition
    /// fails and a [`FlowError::Payments`] when the session cannot be
    /// created.
    pub async fn confirm_payment(&mut self) -> Result<String, FlowError> {
        let user = self.signed_in()?;

        let today = Zoned::now().date();
        let payload = self.checkout.assemble(user.user_id, today)?;

        info!(
            user_id = user.user_id,
            total = %payload.grand_total(),
            "redirecting to payment"
        );

        Ok(self.context.payments.create_session(payload).await?)
    }

    fn signed_in(&self) -> Result<Session, FlowError> {
        self.session.ok_or(FlowError::NotLoggedIn)
    }
}
