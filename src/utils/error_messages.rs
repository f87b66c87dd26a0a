//! Represents all possible errors in the application

pub const VALIDATION_ERROR: &str = "Validation failed";

pub const LOOKUP_ERROR: &str = "Account lookup failed";

pub const TIMEOUT_ERROR: &str = "Request timed out";
