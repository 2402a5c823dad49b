//! Payment wire models.

use serde::Deserialize;

/// Response of `POST /stripe/checkout`.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentSession {
    /// Hosted payment page to navigate to.
    pub url: Option<String>,
}

/// Result read back from the provider's outcome redirect.
///
/// The provider redirects to one of two static pages that only read
/// query parameters for display; nothing is verified client-side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The provider reported a completed payment.
    Success {
        /// Order reference echoed back, when present.
        order: Option<String>,
    },

    /// The shopper cancelled on the provider's page.
    Cancelled,
}

impl PaymentOutcome {
    /// Read the outcome from the redirect-back query string.
    #[must_use]
    pub fn from_query(query: &str) -> Option<Self> {
        let mut status = None;
        let mut order = None;

        for pair in query.split('&') {
            match pair.split_once('=') {
                Some(("status", value)) => status = Some(value),
                Some(("order", value)) if !value.is_empty() => order = Some(value.to_owned()),
                _ => {}
            }
        }

        match status? {
            "success" => Some(Self::Success { order }),
            "cancel" | "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}
