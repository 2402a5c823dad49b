//! Session context and screen access policies.
//!
//! The storefront gates screens by the role carried in the signed-in
//! session. Policies live in one declarative table consulted by a
//! single guard instead of ad hoc checks at each route.

use serde::{Deserialize, Serialize};

/// Role carried by a signed-in session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular shopper.
    Customer,

    /// Back-office administrator.
    Admin,
}

/// Screens subject to access control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Public catalog.
    Catalog,

    /// The shopper's cart.
    Cart,

    /// The quote & payment flow.
    Checkout,

    /// The shopper's wishlist.
    Wishlist,

    /// Back-office product administration.
    Admin,
}

/// A signed-in user.
///
/// The explicit session context passed into the flow; reads go through
/// this value rather than any ambient global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User id as known to the backend services.
    pub user_id: u64,

    /// Granted role.
    pub role: Role,
}

/// Access policy table: the role a screen requires, if any.
///
/// `None` means the screen is public.
const POLICIES: &[(Screen, Option<Role>)] = &[
    (Screen::Catalog, None),
    (Screen::Cart, Some(Role::Customer)),
    (Screen::Checkout, Some(Role::Customer)),
    (Screen::Wishlist, Some(Role::Customer)),
    (Screen::Admin, Some(Role::Admin)),
];

/// Role required to open a screen, if any.
#[must_use]
pub fn required_role(screen: Screen) -> Option<Role> {
    POLICIES
        .iter()
        .find(|(candidate, _)| *candidate == screen)
        .and_then(|(_, role)| *role)
}

/// Single routing guard: whether the session may open the screen.
///
/// Administrators may open shopper screens; the reverse is not true.
#[must_use]
pub fn can_access(session: Option<&Session>, screen: Screen) -> bool {
    match required_role(screen) {
        None => true,
        Some(required) => session
            .is_some_and(|session| session.role == required || session.role == Role::Admin),
    }
}
