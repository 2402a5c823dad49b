//! Waybill
//!
//! Client-side shipping quote and checkout flow for the storefront: cart
//! records as the services return them, tariff quote models, tax-id
//! validation and the checkout session state machine that ties them
//! together. Everything here is pure and synchronous; the HTTP wrappers
//! live in the `waybill-app` crate.

pub mod access;
pub mod cart;
pub mod checkout;
pub mod fixtures;
pub mod geo;
pub mod nit;
pub mod quote;
pub mod shipping;
