use serde::Serialize;
use std::collections::BTreeMap;

/// Reason code reported when the account number is already taken.
pub const ACCOUNT_NUMBER_EXISTS: &str = "accountNumberExists";

/// Validation state of the account-number control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(&'static str),
    /// A value was accepted and its check has not resolved yet
    Pending,
    /// The existence check could not be performed
    CheckFailed(String),
}

impl ValidationOutcome {
    /// A taken number fails the "must be a new number" rule.
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            ValidationOutcome::Invalid(ACCOUNT_NUMBER_EXISTS)
        } else {
            ValidationOutcome::Valid
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ValidationOutcome::Pending)
    }

    /// Errors in the shape the form framework expects, `None` when nothing failed.
    pub fn errors(&self) -> Option<ValidationErrors> {
        match self {
            ValidationOutcome::Invalid(reason) => Some(ValidationErrors::single(*reason)),
            _ => None,
        }
    }
}

/// Failed rules keyed by reason code, e.g. `{"accountNumberExists": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, bool>);

impl ValidationErrors {
    pub fn single(reason: &'static str) -> Self {
        Self(BTreeMap::from([(reason, true)]))
    }

    pub fn contains(&self, reason: &str) -> bool {
        self.0.get(reason).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_exists() {
        assert_eq!(
            ValidationOutcome::from_exists(true),
            ValidationOutcome::Invalid(ACCOUNT_NUMBER_EXISTS)
        );
        assert_eq!(ValidationOutcome::from_exists(false), ValidationOutcome::Valid);
    }

    #[test]
    fn test_errors_shape() {
        let errors = ValidationOutcome::from_exists(true).errors().unwrap();
        assert!(errors.contains(ACCOUNT_NUMBER_EXISTS));
        assert_eq!(
            serde_json::to_string(&errors).unwrap(),
            r#"{"accountNumberExists":true}"#
        );

        assert!(ValidationOutcome::Valid.errors().is_none());
        assert!(ValidationOutcome::CheckFailed("down".into()).errors().is_none());
    }

    #[test]
    fn test_pending_is_not_terminal() {
        assert!(!ValidationOutcome::Pending.is_terminal());
        assert!(ValidationOutcome::Valid.is_terminal());
        assert!(ValidationOutcome::CheckFailed("down".into()).is_terminal());
    }
}
