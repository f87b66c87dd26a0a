use std::time::Duration;

use crate::consts::DEBOUNCE_MS;

/// What to do with a value that is empty once trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInputPolicy {
    /// Nothing to validate: no remote call, resolve to valid immediately
    #[default]
    SkipAsValid,
    Check,
}

/// How a superseded request is cancelled once its check was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancellationMode {
    /// Abort the task, dropping the in-flight call
    #[default]
    Abort,
    /// Let the call finish and drop its result on arrival
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub debounce: Duration,
    pub empty_input: EmptyInputPolicy,
    pub cancellation: CancellationMode,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEBOUNCE_MS),
            empty_input: EmptyInputPolicy::default(),
            cancellation: CancellationMode::default(),
        }
    }
}

impl ValidatorConfig {
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_empty_input(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_input = policy;
        self
    }

    pub fn with_cancellation(mut self, mode: CancellationMode) -> Self {
        self.cancellation = mode;
        self
    }

    /// Whether `value` resolves as valid without asking the collaborator.
    pub(crate) fn skips(&self, value: &str) -> bool {
        self.empty_input == EmptyInputPolicy::SkipAsValid && value.trim().is_empty()
    }
}
