//! Checkout session state and payment payload assembly.

use jiff::{ToSpan, civil::Date};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::{
    cart::{CartLine, resolve_product_id},
    geo::Coordinate,
    nit::{self, Nit, NitError},
    quote::Quote,
};

/// Days quoted to the shopper as the delivery estimate.
///
/// A placeholder estimate, not derived from the quote.
const DELIVERY_ESTIMATE_DAYS: i64 = 3;

/// Name of the synthetic payment line carrying the shipping cost.
const SHIPPING_LINE_NAME: &str = "Envío";

/// Reasons the payment action is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("the cart is empty")]
    EmptyCart,

    /// No destination has been picked.
    #[error("select a destination before paying")]
    DestinationMissing,

    /// No accepted quote is held.
    #[error("request a shipping quote before paying")]
    QuoteMissing,

    /// The tax id does not validate.
    #[error(transparent)]
    InvalidNit(#[from] NitError),
}

/// One line of the payment payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentLine {
    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Decimal,

    /// Quantity.
    pub quantity: u32,

    /// Product variant id; `0` for synthetic lines.
    #[serde(rename = "productVariantId")]
    pub variant_id: u64,

    /// Product id resolved through the fallback chain; `0` when absent.
    #[serde(rename = "productId")]
    pub product_id: u64,
}

/// The exact body of the payment-session request.
///
/// Constructed once, at the moment the shopper confirms payment, and
/// never reused.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutPayload {
    /// Paying user.
    #[serde(rename = "userId")]
    pub user_id: u64,

    /// Validated tax id, `"CF"` when no invoice was requested.
    pub nit: String,

    /// Product lines plus the trailing shipping line.
    pub items: Vec<PaymentLine>,

    /// Destination as a 5-decimal `"lat, lng"` string.
    #[serde(rename = "direccion_destino")]
    pub destination: String,

    /// Shipping cost from the accepted quote.
    #[serde(rename = "costo_envio")]
    pub shipping_cost: Decimal,

    /// Estimated delivery date, date-only ISO form.
    #[serde(rename = "fecha_estimada")]
    pub estimated_delivery: Date,
}

impl CheckoutPayload {
    /// Grand total across all payment lines, shipping included.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.items
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum()
    }
}

/// Client-side state for one checkout attempt.
///
/// Owns the cart lines, destination, quote and tax-id text, and
/// enforces the rules between them: any cart or destination change
/// drops the held quote, and accepting a new quote restarts the tax-id
/// step at `CF`.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    lines: Vec<CartLine>,
    destination: Option<Coordinate>,
    quote: Option<Quote>,
    tax_id: String,
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CheckoutSession {
    /// Start a session over the given cart lines.
    #[must_use]
    pub fn new(lines: Vec<CartLine>) -> Self {
        Self {
            lines,
            destination: None,
            quote: None,
            tax_id: Nit::ConsumidorFinal.as_str().to_owned(),
        }
    }

    /// The cart lines, in server order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The chosen destination, if any.
    #[must_use]
    pub fn destination(&self) -> Option<Coordinate> {
        self.destination
    }

    /// The held quote, if any.
    #[must_use]
    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    /// The tax-id text as currently entered.
    #[must_use]
    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    /// Replace the cart contents, dropping any held quote.
    pub fn set_lines(&mut self, lines: Vec<CartLine>) {
        self.lines = lines;
        self.quote = None;
    }

    /// Change the destination, dropping any held quote.
    pub fn set_destination(&mut self, destination: Coordinate) {
        self.destination = Some(destination);
        self.quote = None;
    }

    /// Accept a fresh quote and restart the tax-id step.
    pub fn accept_quote(&mut self, quote: Quote) {
        self.quote = Some(quote);
        self.tax_id = Nit::ConsumidorFinal.as_str().to_owned();
    }

    /// Drop the held quote without touching anything else.
    pub fn invalidate_quote(&mut self) {
        self.quote = None;
    }

    /// Update the tax-id text as entered by the shopper.
    pub fn set_tax_id(&mut self, tax_id: impl Into<String>) {
        self.tax_id = tax_id.into();
    }

    /// Whether the pay action is currently available.
    ///
    /// True iff a quote is held, the tax id validates, a destination is
    /// set and the cart is non-empty.
    #[must_use]
    pub fn can_pay(&self) -> bool {
        self.quote.is_some()
            && nit::is_valid(&self.tax_id)
            && self.destination.is_some()
            && !self.lines.is_empty()
    }

    /// Assemble the payment payload.
    ///
    /// `today` is the assembly date; the delivery estimate is a fixed
    /// three days later. One payment line is produced per cart line,
    /// followed by a synthetic line for the shipping cost so the
    /// payment total covers products and shipping together.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] naming the first payment
    /// precondition that fails: empty cart, missing destination,
    /// missing quote, or an invalid tax id.
    pub fn assemble(&self, user_id: u64, today: Date) -> Result<CheckoutPayload, CheckoutError> {
        if self.lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let destination = self
            .destination
            .ok_or(CheckoutError::DestinationMissing)?;
        let quote = self.quote.as_ref().ok_or(CheckoutError::QuoteMissing)?;
        let nit = nit::validate(&self.tax_id)?;

        let mut items: Vec<PaymentLine> = self
            .lines
            .iter()
            .map(|line| PaymentLine {
                name: line.display_name(),
                price: line.unit_price.unwrap_or_default(),
                quantity: line.quantity,
                variant_id: line.variant_id,
                product_id: resolve_product_id(line),
            })
            .collect();

        items.push(PaymentLine {
            name: SHIPPING_LINE_NAME.to_owned(),
            price: quote.total,
            quantity: 1,
            variant_id: 0,
            product_id: 0,
        });

        Ok(CheckoutPayload {
            user_id,
            nit: nit.as_str().to_owned(),
            items,
            destination: destination.wire_format(),
            shipping_cost: quote.total,
            estimated_delivery: today.saturating_add(DELIVERY_ESTIMATE_DAYS.days()),
        })
    }
}
