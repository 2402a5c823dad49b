//! Shared test fixtures.
//!
//! Sample cart lines in the shapes the cart service actually produces,
//! used by unit and integration tests across the workspace.

use rust_decimal::Decimal;

use crate::cart::{CartLine, ColorRef, Dimensions, ProductParent, ProductRef, VariantRef};

/// A well-formed line: price, dimensions, weight and a variant-parent
/// product id are all present.
#[must_use]
pub fn jersey(quantity: u32) -> CartLine {
    CartLine {
        variant_id: 501,
        quantity,
        unit_price: Some(Decimal::new(100, 0)),
        variant: Some(VariantRef {
            product: Some(ProductParent { id: Some(1) }),
        }),
        product: Some(ProductRef {
            id: Some(1),
            name: Some("Camisola local".to_owned()),
            color: None,
        }),
        dimensions: Some(Dimensions {
            alto: Some(4.0),
            ancho: Some(30.0),
            largo: Some(40.0),
        }),
        weight_kg: Some(0.3),
        fragile: Some(false),
        size_label: Some("M".to_owned()),
        ..CartLine::default()
    }
}

/// A degraded line: only the variant id and quantity survived upstream.
#[must_use]
pub fn bare_line(variant_id: u64, quantity: u32) -> CartLine {
    CartLine {
        variant_id,
        quantity,
        ..CartLine::default()
    }
}

/// A line whose only product reference hides behind the colour variant.
#[must_use]
pub fn colour_nested(product_id: u64) -> CartLine {
    CartLine {
        variant_id: 502,
        quantity: 1,
        unit_price: Some(Decimal::new(75, 0)),
        product: Some(ProductRef {
            id: None,
            name: Some("Botella térmica".to_owned()),
            color: Some(ColorRef {
                product: Some(ProductParent {
                    id: Some(product_id),
                }),
            }),
        }),
        ..CartLine::default()
    }
}
