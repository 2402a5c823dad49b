//! Tax-id (NIT) validation.
//!
//! Pure and synchronous so it can be exercised without any transport or
//! rendering in place.

use std::fmt;

use thiserror::Error;

/// Validation failures for a tax id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NitError {
    /// Nothing was entered.
    #[error("a tax id is required (enter CF for no invoice)")]
    Missing,

    /// The input matches neither `CF` nor the numeric format.
    #[error(
        "invalid tax id: expected digits with an optional check digit \
         (e.g. 1234567, 1234567-8, 1234567-K) or CF"
    )]
    Malformed,
}

/// A validated tax id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nit {
    /// The `CF` "no invoice requested" marker.
    ConsumidorFinal,

    /// A registered tax id, kept as entered (trimmed).
    Registered(String),
}

impl Nit {
    /// Wire rendering for the payment payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ConsumidorFinal => "CF",
            Self::Registered(value) => value,
        }
    }
}

impl fmt::Display for Nit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a free-text tax id.
///
/// Whitespace is trimmed. Accepted forms are the case-insensitive `CF`
/// marker, or one or more digits optionally followed by `-` and a single
/// check character (a digit or `K` in either case).
///
/// # Errors
///
/// Returns [`NitError::Missing`] for empty input and
/// [`NitError::Malformed`] for anything else that does not match.
pub fn validate(input: &str) -> Result<Nit, NitError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(NitError::Missing);
    }

    if trimmed.eq_ignore_ascii_case("CF") {
        return Ok(Nit::ConsumidorFinal);
    }

    let (digits, check) = match trimmed.split_once('-') {
        Some((digits, check)) => (digits, Some(check)),
        None => (trimmed, None),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(NitError::Malformed);
    }

    if let Some(check) = check {
        let mut chars = check.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() || c.eq_ignore_ascii_case(&'k') => {}
            _ => return Err(NitError::Malformed),
        }
    }

    Ok(Nit::Registered(trimmed.to_owned()))
}

/// Whether the input would validate.
#[must_use]
pub fn is_valid(input: &str) -> bool {
    validate(input).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_cf_in_either_case() {
        assert_eq!(validate("CF"), Ok(Nit::ConsumidorFinal));
        assert_eq!(validate("cf"), Ok(Nit::ConsumidorFinal));
    }

    #[test]
    fn empty_input_is_missing() {
        assert_eq!(validate(""), Err(NitError::Missing));
        assert_eq!(validate("   "), Err(NitError::Missing));
    }

    #[test]
    fn plain_digits_are_valid() {
        assert!(is_valid("1234567"));
        assert!(is_valid("1"));
    }

    #[test]
    fn check_digit_forms_are_valid() {
        assert!(is_valid("1234567-8"));
        assert!(is_valid("1234567-K"));
        assert!(is_valid("1234567-k"));
    }

    #[test]
    fn letters_are_malformed() {
        assert_eq!(validate("abc"), Err(NitError::Malformed));
    }

    #[test]
    fn dangling_or_repeated_dashes_are_malformed() {
        assert_eq!(validate("1234567-"), Err(NitError::Malformed));
        assert_eq!(validate("1-2-3"), Err(NitError::Malformed));
        assert_eq!(validate("-8"), Err(NitError::Malformed));
    }

    #[test]
    fn check_character_must_be_single() {
        assert_eq!(validate("1234567-88"), Err(NitError::Malformed));
        assert_eq!(validate("1234567-KK"), Err(NitError::Malformed));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            validate("  1234567-K "),
            Ok(Nit::Registered("1234567-K".to_owned()))
        );
    }

    #[test]
    fn registered_value_round_trips_to_wire() {
        let nit = Nit::Registered("1234567-8".to_owned());

        assert_eq!(nit.as_str(), "1234567-8");
        assert_eq!(Nit::ConsumidorFinal.to_string(), "CF");
    }
}
