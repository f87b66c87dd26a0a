use std::net::SocketAddr;
use std::time::Duration;

use bbbank::backend::router::get_router;
use bbbank::client::{AccountClient, ClientError};
use bbbank::database::{self, Account};
use bbbank::validator::{
    DebouncedValidator, ExistenceCheck, ValidationOutcome, ValidatorConfig, ACCOUNT_NUMBER_EXISTS,
};
use futures::StreamExt;
use url::Url;

async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, get_router()).await.expect("serve");
    });
    addr
}

fn client(addr: SocketAddr) -> AccountClient {
    let base = Url::parse(&format!("http://{}/api/", addr)).expect("url");
    AccountClient::new(base).expect("client")
}

#[tokio::test]
async fn client_reports_existence() {
    database::account::create(Account::new("E2E-999", "Taken")).expect("create");
    let client = client(spawn_server().await);

    assert!(client.account_number_exists("E2E-999").await.expect("exists"));
    assert!(!client.account_number_exists("E2E-555").await.expect("exists"));
}

#[tokio::test]
async fn client_answers_false_for_malformed_number() {
    let client = client(spawn_server().await);

    assert!(!client.account_number_exists("not valid").await.expect("exists"));
}

#[tokio::test]
async fn client_surfaces_error_status() {
    // Wrong API root, every check hits an unknown route
    let addr = spawn_server().await;
    let base = Url::parse(&format!("http://{}/nope/", addr)).expect("url");
    let client = AccountClient::new(base).expect("client");

    let result = client.account_number_exists("E2E-999").await;
    assert!(matches!(result, Err(ClientError::Status(status)) if status.as_u16() == 404));
}

#[tokio::test]
async fn validator_treats_partial_input_as_valid() {
    let config = ValidatorConfig::default().with_debounce(Duration::from_millis(10));
    let validator = DebouncedValidator::new(client(spawn_server().await), config);

    for value in ["0001-", "12 34", "12.5"] {
        let (control, mut outcomes) = validator.control();
        control.input(value);
        assert_eq!(
            outcomes.next_terminal().await,
            Some(ValidationOutcome::Valid),
            "{}",
            value
        );
    }
}

#[tokio::test]
async fn client_fails_when_server_is_down() {
    // Bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let result = ExistenceCheck::account_number_exists(&client(addr), "E2E-999").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn validator_against_live_backend() {
    database::account::create(Account::new("E2E-123", "Taken")).expect("create");
    let client = client(spawn_server().await);
    let config = ValidatorConfig::default().with_debounce(Duration::from_millis(50));
    let validator = DebouncedValidator::new(client, config);

    let inputs = futures::stream::iter(["E", "E2E", "E2E-1", "E2E-123"].map(String::from));
    let outcomes: Vec<_> = validator.validate(inputs).collect().await;
    assert_eq!(
        outcomes,
        vec![
            ValidationOutcome::Pending,
            ValidationOutcome::Invalid(ACCOUNT_NUMBER_EXISTS)
        ]
    );

    let (control, mut outcomes) = validator.control();
    control.input("E2E-456");
    assert_eq!(outcomes.next_terminal().await, Some(ValidationOutcome::Valid));
}

#[tokio::test]
async fn validator_reports_unreachable_backend() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let config = ValidatorConfig::default().with_debounce(Duration::from_millis(10));
    let validator = DebouncedValidator::new(client(addr), config);

    let (control, mut outcomes) = validator.control();
    control.input("E2E-999");
    assert!(matches!(
        outcomes.next_terminal().await,
        Some(ValidationOutcome::CheckFailed(_))
    ));
}
