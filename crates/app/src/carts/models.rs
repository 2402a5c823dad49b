//! Cart wire models.

use serde::Serialize;

/// Body of `POST /cart/`: a new line for a user's cart.
///
/// The cart service resolves price and product associations itself;
/// the client only names the variant and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NewCartLine {
    /// Owning user.
    #[serde(rename = "usuario_id")]
    pub user_id: u64,

    /// Product variant to add.
    #[serde(rename = "producto_variante_id")]
    pub variant_id: u64,

    /// Quantity, at least 1.
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}
