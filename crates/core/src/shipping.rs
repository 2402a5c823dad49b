//! Cart line normalization for the tariff service.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::CartLine;

/// Flat per-line shape the tariff service prices.
///
/// Field names follow the tariff wire contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingItem {
    /// Height in centimetres.
    pub alto: f64,

    /// Width in centimetres.
    pub ancho: f64,

    /// Length in centimetres.
    pub largo: f64,

    /// Weight in kilograms.
    pub peso_kg: f64,

    /// Unit price.
    pub precio: Decimal,

    /// Quantity.
    pub cantidad: u32,

    /// Fragility flag.
    pub fragil: bool,
}

impl ShippingItem {
    fn from_line(line: &CartLine) -> Self {
        let dimensions = line.dimensions.unwrap_or_default();

        Self {
            alto: dimensions.alto.unwrap_or_default(),
            ancho: dimensions.ancho.unwrap_or_default(),
            largo: dimensions.largo.unwrap_or_default(),
            peso_kg: line.weight_kg.unwrap_or_default(),
            precio: line.unit_price.unwrap_or_default(),
            cantidad: line.quantity,
            fragil: line.fragile.unwrap_or_default(),
        }
    }
}

/// Flatten raw cart lines into tariff items.
///
/// Missing dimensions, weight and price default to zero and missing
/// fragility to `false`: a degraded quote is preferred over refusing to
/// quote at all. Ordering is preserved so the server's per-item
/// breakdown correlates back to cart lines by index.
#[must_use]
pub fn normalize(lines: &[CartLine]) -> Vec<ShippingItem> {
    lines.iter().map(ShippingItem::from_line).collect()
}

/// Count of fields on a line that would fall back to a default.
///
/// Callers use this to report degraded records without interrupting the
/// quote.
#[must_use]
pub fn defaulted_fields(line: &CartLine) -> usize {
    let dimensions = line.dimensions.unwrap_or_default();

    [
        dimensions.alto.is_none(),
        dimensions.ancho.is_none(),
        dimensions.largo.is_none(),
        line.weight_kg.is_none(),
        line.unit_price.is_none(),
        line.fragile.is_none(),
    ]
    .into_iter()
    .filter(|missing| *missing)
    .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Dimensions;

    #[test]
    fn normalize_preserves_order_and_counts() {
        let lines = vec![
            CartLine {
                variant_id: 1,
                quantity: 2,
                unit_price: Some(Decimal::new(100, 0)),
                ..CartLine::default()
            },
            CartLine {
                variant_id: 2,
                quantity: 1,
                unit_price: Some(Decimal::new(50, 0)),
                ..CartLine::default()
            },
        ];

        let items = normalize(&lines);

        assert_eq!(items.len(), 2);
        assert_eq!(
            items.iter().map(|item| item.cantidad).collect::<Vec<_>>(),
            vec![2, 1]
        );
        assert_eq!(
            items.iter().map(|item| item.precio).collect::<Vec<_>>(),
            vec![Decimal::new(100, 0), Decimal::new(50, 0)]
        );
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let items = normalize(&[CartLine {
            variant_id: 1,
            quantity: 3,
            ..CartLine::default()
        }]);

        assert_eq!(
            items,
            vec![ShippingItem {
                alto: 0.0,
                ancho: 0.0,
                largo: 0.0,
                peso_kg: 0.0,
                precio: Decimal::ZERO,
                cantidad: 3,
                fragil: false,
            }]
        );
    }

    #[test]
    fn partial_dimensions_keep_known_values() {
        let items = normalize(&[CartLine {
            quantity: 1,
            dimensions: Some(Dimensions {
                alto: Some(4.0),
                ancho: None,
                largo: Some(40.0),
            }),
            weight_kg: Some(0.3),
            fragile: Some(true),
            ..CartLine::default()
        }]);

        match items.as_slice() {
            [item] => {
                assert_eq!(item.alto, 4.0);
                assert_eq!(item.ancho, 0.0);
                assert_eq!(item.largo, 40.0);
                assert!(item.fragil);
            }
            other => panic!("expected a single item, got {other:?}"),
        }
    }

    #[test]
    fn defaulted_fields_counts_gaps() {
        assert_eq!(defaulted_fields(&CartLine::default()), 6);

        let complete = CartLine {
            dimensions: Some(Dimensions {
                alto: Some(1.0),
                ancho: Some(1.0),
                largo: Some(1.0),
            }),
            weight_kg: Some(1.0),
            unit_price: Some(Decimal::ONE),
            fragile: Some(false),
            ..CartLine::default()
        };

        assert_eq!(defaulted_fields(&complete), 0);
    }
}
