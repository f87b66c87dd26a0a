//! Constants used throughout the validation system


/// Maximum length for an account number
pub const MAX_ACCOUNT_NUMBER_LENGTH: usize = 32;
