//! Type definitions for the validation system

mod account_number_input;

// Re-export commonly used types and functions
pub use account_number_input::AccountNumberInput;
