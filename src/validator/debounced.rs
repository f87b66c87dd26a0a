use futures::{Stream, StreamExt};
use log::{debug, warn};
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::{
    check_account_number, CancellationMode, ExistenceCheck, ValidationOutcome, ValidatorConfig,
};

/// A settled value waiting for its existence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub sequence: u64,
    pub value: String,
}

/// Validator factory for the account-number field.
///
/// Every control created from it keeps at most one request alive: a newer
/// value cancels the pending timer of the previous one and, once dispatched,
/// its check. Results are applied only while their request is still the
/// current one, so a late answer can never overwrite a newer outcome.
#[derive(Clone)]
pub struct DebouncedValidator {
    checker: Arc<dyn ExistenceCheck>,
    config: ValidatorConfig,
}

impl DebouncedValidator {
    pub fn new<C>(checker: C, config: ValidatorConfig) -> Self
    where
        C: ExistenceCheck + 'static,
    {
        Self {
            checker: Arc::new(checker),
            config,
        }
    }

    /// Creates a control fed value by value, and the stream of its outcomes.
    ///
    /// The stream ends once the control is dropped and its last check resolved.
    pub fn control(&self) -> (ControlHandle, Outcomes) {
        let (tx, rx) = mpsc::unbounded_channel();
        let inner = Arc::new(Inner {
            checker: self.checker.clone(),
            config: self.config.clone(),
            state: Mutex::new(State::default()),
            outcomes: tx,
        });

        (ControlHandle { inner }, Outcomes { rx })
    }

    /// Validates a stream of value changes. Must be called within a tokio runtime.
    pub fn validate<S>(&self, inputs: S) -> Outcomes
    where
        S: Stream<Item = String> + Send + 'static,
    {
        let (control, outcomes) = self.control();
        tokio::spawn(async move {
            let mut inputs = Box::pin(inputs);
            while let Some(value) = inputs.next().await {
                control.input(value);
            }
        });
        outcomes
    }
}

/// Input side of a validated control.
pub struct ControlHandle {
    inner: Arc<Inner>,
}

impl ControlHandle {
    /// Feeds a new value of the field, superseding the previous one.
    pub fn input(&self, value: impl Into<String>) {
        let value = value.into();
        let inner = &self.inner;
        let mut state = inner.lock();

        state.sequence += 1;
        let sequence = state.sequence;

        if let Some(task) = state.task.take() {
            debug!("Request #{} superseded", sequence - 1);
            if inner.config.cancellation == CancellationMode::Abort {
                task.abort();
            }
        }

        if inner.config.skips(&value) {
            inner.emit(&mut state, ValidationOutcome::Valid);
            return;
        }

        inner.emit(&mut state, ValidationOutcome::Pending);

        let request = ValidationRequest { sequence, value };
        let task_inner = inner.clone();
        state.task = Some(tokio::spawn(async move { task_inner.run(request).await }));
    }

    /// Last outcome emitted by this control.
    pub fn status(&self) -> Option<ValidationOutcome> {
        self.inner.lock().last.clone()
    }
}

/// Outcomes emitted by a control, in emission order.
pub struct Outcomes {
    rx: mpsc::UnboundedReceiver<ValidationOutcome>,
}

impl Outcomes {
    /// Waits for the next outcome that is not `Pending`.
    pub async fn next_terminal(&mut self) -> Option<ValidationOutcome> {
        while let Some(outcome) = self.rx.recv().await {
            if outcome.is_terminal() {
                return Some(outcome);
            }
        }
        None
    }
}

impl Stream for Outcomes {
    type Item = ValidationOutcome;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

#[derive(Default)]
struct State {
    sequence: u64,
    task: Option<JoinHandle<()>>,
    last: Option<ValidationOutcome>,
}

struct Inner {
    checker: Arc<dyn ExistenceCheck>,
    config: ValidatorConfig,
    state: Mutex<State>,
    outcomes: mpsc::UnboundedSender<ValidationOutcome>,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, State> {
        // State stays consistent across a panic, every update is a single assignment
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_current(&self, sequence: u64) -> bool {
        self.lock().sequence == sequence
    }

    async fn run(self: Arc<Self>, request: ValidationRequest) {
        tokio::time::sleep(self.config.debounce).await;

        // With CancellationMode::Ignore the timer is only cancelled here
        if !self.is_current(request.sequence) {
            return;
        }

        debug!("Checking account number {:?} (#{})", request.value, request.sequence);
        let outcome = match check_account_number(self.checker.as_ref(), &request.value).await {
            Ok(errors) => ValidationOutcome::from_exists(errors.is_some()),
            Err(e) => {
                warn!("Account number check #{} failed: {}", request.sequence, e);
                ValidationOutcome::CheckFailed(e.to_string())
            }
        };

        self.apply(request.sequence, outcome);
    }

    fn apply(&self, sequence: u64, outcome: ValidationOutcome) -> bool {
        let mut state = self.lock();
        if state.sequence != sequence {
            debug!("Dropping stale result of request #{}", sequence);
            return false;
        }

        debug!("Request #{} resolved: {:?}", sequence, outcome);
        state.task = None;
        self.emit(&mut state, outcome);
        true
    }

    fn emit(&self, state: &mut State, outcome: ValidationOutcome) {
        if outcome == ValidationOutcome::Pending && state.last == Some(ValidationOutcome::Pending) {
            return;
        }

        // Nobody listening any more is not an error for the control
        let _ = self.outcomes.send(outcome.clone());
        state.last = Some(outcome);
    }
}
