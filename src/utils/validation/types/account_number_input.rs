//! Represents a validated account number.
//!
//! Account numbers reach the backend as a raw path segment typed by a user.
//! This module makes sure the value is safe to look up by:
//! - Trimming surrounding whitespace
//! - Validating length constraints
//! - Rejecting control characters
//! - Normalizing Unicode so that full-width digits compare equal to ASCII ones
//! - Restricting the alphabet to letters, digits and dashes

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use unicode_normalization::UnicodeNormalization;
use validator::ValidateNonControlCharacter;

use crate::utils::validation::MAX_ACCOUNT_NUMBER_LENGTH;

// Letters, digits and single dashes between groups
static ACCOUNT_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]+(-[A-Za-z0-9]+)*$").expect("Failed to compile account number regex")
});

/// An account number that passed validation.
/// This type can only be constructed through validation, ensuring that any
/// instance can be used as a lookup key as-is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountNumberInput {
    // The validated and normalized account number
    account_number: String,
}

impl AccountNumberInput {
    /// Creates a new `AccountNumberInput` after validating the provided string.
    ///
    /// # Arguments
    /// * `account_number` - The raw account number to validate
    ///
    /// # Returns
    /// * `Ok(AccountNumberInput)` if the account number is valid
    /// * `Err` with a descriptive message if validation fails
    pub fn new(account_number: &str) -> Result<Self> {
        let trimmed = account_number.trim();

        if trimmed.is_empty() {
            bail!("Account number cannot be empty");
        }

        if !trimmed.validate_non_control_character() {
            bail!("Account number contains invalid control characters");
        }

        // Normalize before checking the alphabet, "１２３" becomes "123"
        let normalized = trimmed.nfkc().collect::<String>();

        if normalized.len() > MAX_ACCOUNT_NUMBER_LENGTH {
            bail!(
                "Account number exceeds maximum length of {} characters",
                MAX_ACCOUNT_NUMBER_LENGTH
            );
        }

        if !ACCOUNT_NUMBER_REGEX.is_match(&normalized) {
            bail!("Account number may only contain letters, digits and dashes");
        }

        Ok(Self {
            account_number: normalized,
        })
    }

    /// Returns the validated account number as a string slice
    pub fn as_str(&self) -> &str {
        &self.account_number
    }
}

/// Implements Display to allow printing the account number
impl fmt::Display for AccountNumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.account_number)
    }
}

/// Allows using AccountNumberInput wherever a string reference is needed
impl AsRef<str> for AccountNumberInput {
    fn as_ref(&self) -> &str {
        &self.account_number
    }
}
