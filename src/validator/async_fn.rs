//! Async-validator contract of the form framework: the current control value
//! goes in, `None` (valid) or the failed rules come out.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;

use super::{CheckError, ExistenceCheck, ValidationErrors, ValidatorConfig, ACCOUNT_NUMBER_EXISTS};

pub type AsyncValidatorFn = Arc<
    dyn Fn(String) -> BoxFuture<'static, Result<Option<ValidationErrors>, CheckError>>
        + Send
        + Sync,
>;

/// Asks the collaborator once, without any debounce. The value is sent as typed.
pub async fn check_account_number<C>(
    checker: &C,
    account_number: &str,
) -> Result<Option<ValidationErrors>, CheckError>
where
    C: ExistenceCheck + ?Sized,
{
    let exists = checker.account_number_exists(account_number).await?;
    Ok(exists.then(|| ValidationErrors::single(ACCOUNT_NUMBER_EXISTS)))
}

/// Builds the validator attached to the account-number field.
///
/// Each returned future waits for the debounce window before asking the
/// collaborator. The form drops the future of a value as soon as a newer one
/// arrives, which cancels both the timer and the in-flight call. Empty input
/// resolves immediately when the configuration skips it.
pub fn existing_account_number_validator<C>(checker: Arc<C>, config: &ValidatorConfig) -> AsyncValidatorFn
where
    C: ExistenceCheck + ?Sized + 'static,
{
    let config = config.clone();
    Arc::new(move |value: String| {
        let checker = checker.clone();
        let config = config.clone();
        async move {
            if config.skips(&value) {
                return Ok(None);
            }

            tokio::time::sleep(config.debounce).await;
            check_account_number(checker.as_ref(), &value).await
        }
        .boxed()
    })
}
