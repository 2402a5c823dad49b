//! Cart records as returned by the cart service.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One raw cart line.
///
/// Upstream records are inconsistent: depending on which service wrote
/// the line, the product reference may live on the variant, directly on
/// the line (under two different field names), or behind the colour
/// variant. Every nested field is optional and absence is tolerated; the
/// normalizer and the payload assembler apply defaults instead of
/// failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartLine {
    /// Product variant the line was added for.
    #[serde(rename = "producto_variante_id")]
    pub variant_id: u64,

    /// Quantity, at least 1.
    #[serde(rename = "cantidad")]
    pub quantity: u32,

    /// Unit price. Missing on malformed records.
    #[serde(rename = "precio_unitario")]
    pub unit_price: Option<Decimal>,

    /// Direct product id, as written by the camel-cased services.
    #[serde(rename = "productoId")]
    pub product_id: Option<u64>,

    /// Direct product id, as written by the snake-cased services.
    #[serde(rename = "producto_id")]
    pub legacy_product_id: Option<u64>,

    /// Variant association, carrying the parent product when present.
    #[serde(rename = "variante")]
    pub variant: Option<VariantRef>,

    /// Product association, sometimes only reachable through the colour
    /// variant.
    #[serde(rename = "producto")]
    pub product: Option<ProductRef>,

    /// Physical dimensions of the packed item.
    #[serde(rename = "dimensiones")]
    pub dimensions: Option<Dimensions>,

    /// Weight in kilograms.
    #[serde(rename = "peso_kg")]
    pub weight_kg: Option<f64>,

    /// Fragile items attract special handling in the tariff.
    #[serde(rename = "fragil")]
    pub fragile: Option<bool>,

    /// Size label for display.
    #[serde(rename = "talla")]
    pub size_label: Option<String>,

    /// Image URL for display.
    #[serde(rename = "imagen_url")]
    pub image_url: Option<String>,
}

/// Physical dimensions in centimetres.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Dimensions {
    /// Height.
    pub alto: Option<f64>,

    /// Width.
    pub ancho: Option<f64>,

    /// Length.
    pub largo: Option<f64>,
}

/// Product reference nested in a cart line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRef {
    /// Product id, when the writer included it.
    pub id: Option<u64>,

    /// Display name.
    #[serde(rename = "nombre")]
    pub name: Option<String>,

    /// Colour variant, carrying its own product reference.
    #[serde(rename = "productoColor")]
    pub color: Option<ColorRef>,
}

/// Colour-variant reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorRef {
    /// Parent product of the colour variant.
    #[serde(rename = "producto")]
    pub product: Option<ProductParent>,
}

/// Bare parent-product reference.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProductParent {
    /// Product id.
    pub id: Option<u64>,
}

/// Variant association on a cart line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantRef {
    /// Parent product of the variant.
    #[serde(rename = "producto")]
    pub product: Option<ProductParent>,
}

/// Ordered sources for a line's product id.
///
/// Upstream writers disagree on where the product id lives; the sources
/// are tried in order and the first hit wins.
const PRODUCT_ID_SOURCES: &[fn(&CartLine) -> Option<u64>] = &[
    |line| line.variant.as_ref()?.product.as_ref()?.id,
    |line| line.product_id,
    |line| line.legacy_product_id,
    |line| line.product.as_ref()?.color.as_ref()?.product.as_ref()?.id,
];

/// Resolve the product id for a cart line through the fallback chain.
///
/// Lines where every source is absent resolve to `0`, which the payment
/// endpoint accepts as "unknown product".
#[must_use]
pub fn resolve_product_id(line: &CartLine) -> u64 {
    PRODUCT_ID_SOURCES
        .iter()
        .find_map(|source| source(line))
        .unwrap_or(0)
}

impl CartLine {
    /// Display name for receipts and payment lines.
    ///
    /// Falls back to a generic label when the product association is
    /// missing, matching how degraded records are tolerated elsewhere.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.product
            .as_ref()
            .and_then(|product| product.name.clone())
            .unwrap_or_else(|| format!("Artículo {}", self.variant_id))
    }

    /// Line total (unit price × quantity); missing prices count as zero.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.unwrap_or_default() * Decimal::from(self.quantity)
    }
}

/// An ordered cart as loaded from the cart service.
///
/// Recreated from the server on every reload; line order is meaningful
/// and preserved through the whole flow.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Wrap the lines returned by the cart service.
    #[must_use]
    pub fn new(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// The cart lines, in server order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Consume the cart, keeping the lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals, before shipping.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}
