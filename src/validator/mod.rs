//! Asynchronous account-number validation for the account form.
//!
//! The form field pushes every value change into a [`DebouncedValidator`]
//! control. Values are held back until typing settles, then checked against an
//! [`ExistenceCheck`] collaborator; a newer value always supersedes the check
//! of an older one.

mod async_fn;
mod config;
mod debounced;
mod outcome;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::client::ClientError;

pub use async_fn::{check_account_number, existing_account_number_validator, AsyncValidatorFn};
pub use config::{CancellationMode, EmptyInputPolicy, ValidatorConfig};
pub use debounced::{ControlHandle, DebouncedValidator, Outcomes, ValidationRequest};
pub use outcome::{ValidationErrors, ValidationOutcome, ACCOUNT_NUMBER_EXISTS};

/// Failure of the existence check itself, as opposed to a negative answer.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("{0}")]
    Other(String),
}

/// The remote "does this account number exist" capability.
#[async_trait]
pub trait ExistenceCheck: Send + Sync {
    async fn account_number_exists(&self, account_number: &str) -> Result<bool, CheckError>;
}

#[async_trait]
impl<T: ExistenceCheck + ?Sized> ExistenceCheck for Arc<T> {
    async fn account_number_exists(&self, account_number: &str) -> Result<bool, CheckError> {
        (**self).account_number_exists(account_number).await
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory bank answering existence checks, recording every call.
    #[derive(Default)]
    pub struct FakeBank {
        existing: HashSet<String>,
        delays: HashMap<String, Duration>,
        failing: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FakeBank {
        pub fn with_accounts(accounts: &[&str]) -> Self {
            Self {
                existing: accounts.iter().map(|a| a.to_string()).collect(),
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                failing: true,
                ..Default::default()
            }
        }

        /// Answers for this value only after `delay`
        pub fn delay(mut self, account_number: &str, delay: Duration) -> Self {
            self.delays.insert(account_number.to_string(), delay);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExistenceCheck for FakeBank {
        async fn account_number_exists(&self, account_number: &str) -> Result<bool, CheckError> {
            self.calls.lock().unwrap().push(account_number.to_string());

            if let Some(delay) = self.delays.get(account_number) {
                tokio::time::sleep(*delay).await;
            }

            if self.failing {
                return Err(CheckError::Other("connection refused".to_string()));
            }

            Ok(self.existing.contains(account_number))
        }
    }
}
