//! Tariff wire models.

use serde::Serialize;
use waybill::{geo::Coordinate, shipping::ShippingItem};

/// Origin/destination pair of a quote request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShipmentLeg {
    /// Warehouse latitude.
    #[serde(rename = "origen_lat")]
    pub origin_lat: f64,

    /// Warehouse longitude.
    #[serde(rename = "origen_lng")]
    pub origin_lng: f64,

    /// Destination latitude.
    #[serde(rename = "destino_lat")]
    pub destination_lat: f64,

    /// Destination longitude.
    #[serde(rename = "destino_lng")]
    pub destination_lng: f64,
}

impl ShipmentLeg {
    /// Build a leg from origin and destination coordinates.
    #[must_use]
    pub fn new(origin: Coordinate, destination: Coordinate) -> Self {
        Self {
            origin_lat: origin.lat,
            origin_lng: origin.lng,
            destination_lat: destination.lat,
            destination_lng: destination.lng,
        }
    }
}

/// Body of `POST /tarifa_envio/calcular`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteRequest {
    /// Normalized items to price, in cart order.
    pub items: Vec<ShippingItem>,

    /// Shipment origin and destination.
    #[serde(rename = "envio")]
    pub leg: ShipmentLeg,
}
