//! Shipping quotes returned by the tariff service.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Authoritative cost breakdown for one cart + destination.
///
/// Created only from a successful tariff response. Holders must drop it
/// whenever the cart or the destination changes; the totals are no
/// longer valid against the changed contents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    /// Distance computed server-side, in kilometres.
    #[serde(rename = "distancia_km")]
    pub distance_km: f64,

    /// Total shipping cost.
    #[serde(rename = "total_envio")]
    pub total: Decimal,

    /// Accumulated long-distance surcharge.
    #[serde(rename = "recargo_distancia_total")]
    pub distance_surcharge: Decimal,

    /// Flat base cost charged once per shipment.
    #[serde(rename = "costo_base_envio_unico")]
    pub base_cost: Decimal,

    /// Percentage discount applied to the shipment.
    #[serde(rename = "descuento_por_envio_pct")]
    pub discount_pct: Decimal,

    /// Absolute discount total.
    #[serde(rename = "descuento_por_envio_total")]
    pub discount_total: Decimal,

    /// Per-item breakdown, index-aligned with the submitted items.
    #[serde(rename = "detalle", default)]
    pub lines: Vec<QuoteLine>,
}

/// Per-item slice of the quote.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuoteLine {
    /// Billed weight for the item, after the server's tier rounding.
    #[serde(rename = "peso_cobrado_kg", default)]
    pub billed_weight_kg: f64,

    /// Shipping cost attributed to the item.
    #[serde(rename = "costo_envio", default)]
    pub cost: Decimal,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_from_tariff_response() -> TestResult {
        let raw = r#"{
            "distancia_km": 12.5,
            "total_envio": 15.0,
            "recargo_distancia_total": 2.5,
            "costo_base_envio_unico": 10.0,
            "descuento_por_envio_pct": 5.0,
            "descuento_por_envio_total": 0.75,
            "detalle": [
                { "peso_cobrado_kg": 1.2, "costo_envio": 5.0 },
                { "peso_cobrado_kg": 0.5, "costo_envio": 2.5 }
            ]
        }"#;

        let quote: Quote = serde_json::from_str(raw)?;

        assert_eq!(quote.distance_km, 12.5);
        assert_eq!(quote.total, Decimal::new(15, 0));
        assert_eq!(quote.lines.len(), 2);

        Ok(())
    }

    #[test]
    fn missing_breakdown_defaults_to_empty() -> TestResult {
        let raw = r#"{
            "distancia_km": 1.0,
            "total_envio": 10.0,
            "recargo_distancia_total": 0.0,
            "costo_base_envio_unico": 10.0,
            "descuento_por_envio_pct": 0.0,
            "descuento_por_envio_total": 0.0
        }"#;

        let quote: Quote = serde_json::from_str(raw)?;

        assert!(quote.lines.is_empty());

        Ok(())
    }
}
