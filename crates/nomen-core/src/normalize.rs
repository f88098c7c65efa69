//! # Name Normalization — UTS-46 Canonical Form
//!
//! Canonicalizes human-input names and labels into their comparison form:
//! UTS-46 non-transitional processing with STD3 ASCII rules. This is the
//! profile the on-chain registry hashes against, so every name must pass
//! through here exactly once before it reaches a hash function.
//!
//! ## Security Invariant
//!
//! Normalization is locale-independent and byte-stable: equal inputs
//! produce equal canonical forms on every platform. Visually-confusable
//! or mixed-case spellings (`Öbb.eth`, `öbb.eth`) collapse to one
//! canonical name, which is what makes node hashes collision-meaningful.
//!
//! ## Empty Input
//!
//! The empty string passes through unchanged. It is the sentinel for the
//! registry root and hashes to the all-zero node.

use crate::error::NameError;

/// Normalize a name or a single label into UTS-46 canonical form.
///
/// Applies non-transitional UTS-46 mapping with STD3 ASCII rules:
/// uppercase folds to lowercase, compatibility characters map to their
/// canonical equivalents, and code points disallowed by the profile are
/// rejected outright.
///
/// # Errors
///
/// Returns [`NameError::InvalidName`] when the input contains characters
/// forbidden by the profile or is otherwise malformed.
pub fn normalize(raw: &str) -> Result<String, NameError> {
    if raw.is_empty() {
        return Ok(String::new());
    }
    let (normalized, outcome) = idna::Config::default()
        .use_std3_ascii_rules(true)
        .transitional_processing(false)
        .to_unicode(raw);
    match outcome {
        Ok(()) => Ok(normalized),
        Err(errors) => Err(NameError::InvalidName {
            name: raw.to_string(),
            reason: format!("{errors:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_passes_through() {
        assert_eq!(normalize("").unwrap(), "");
    }

    #[test]
    fn test_ascii_lowercase_unchanged() {
        assert_eq!(normalize("tickets").unwrap(), "tickets");
        assert_eq!(normalize("tickets.eth").unwrap(), "tickets.eth");
    }

    #[test]
    fn test_uppercase_folds() {
        assert_eq!(normalize("Tickets.ETH").unwrap(), "tickets.eth");
    }

    #[test]
    fn test_unicode_case_folds() {
        // Matches the original registry client: Öbb normalizes to öbb.
        assert_eq!(normalize("Öbb.eth").unwrap(), "öbb.eth");
        assert_eq!(normalize("ÖÖÖÖÖÖÖ.eth").unwrap(), "ööööööö.eth");
    }

    #[test]
    fn test_std3_rejects_underscore() {
        assert!(matches!(
            normalize("under_score"),
            Err(NameError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_std3_rejects_space() {
        assert!(matches!(
            normalize("has space.eth"),
            Err(NameError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_idempotent_on_fixture() {
        let once = normalize("Öbb.ETH").unwrap();
        let twice = normalize(&once).unwrap();
        assert_eq!(once, twice);
    }
}
