//! Formulaire en ligne de commande : chaque ligne lue sur l'entrée standard
//! est une nouvelle valeur du champ « numéro de compte ». Les résultats de
//! validation sont affichés au fur et à mesure.

use anyhow::Result;
use bbbank::client::AccountClient;
use bbbank::config::ClientConfig;
use bbbank::validator::{DebouncedValidator, ValidationOutcome};
use dotenv::dotenv;
use futures::StreamExt;
use log::info;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let config = ClientConfig::from_env()?;
    info!(
        "Vérification via {} (délai {} ms)",
        config.api_url_base,
        config.validator.debounce.as_millis()
    );

    let client = AccountClient::new(config.api_url_base)?;
    let validator = DebouncedValidator::new(client, config.validator);

    // Une ligne lue = un changement de valeur du champ
    let lines = BufReader::new(tokio::io::stdin()).lines();
    let inputs = futures::stream::unfold(lines, |mut lines| async move {
        match lines.next_line().await {
            Ok(Some(line)) => Some((line, lines)),
            _ => None,
        }
    });

    let mut outcomes = validator.validate(inputs);
    while let Some(outcome) = outcomes.next().await {
        match outcome {
            ValidationOutcome::Pending => println!("… vérification en attente"),
            ValidationOutcome::Valid => println!("✔ numéro disponible"),
            ValidationOutcome::Invalid(reason) => println!("✘ numéro refusé ({})", reason),
            ValidationOutcome::CheckFailed(e) => println!("! vérification impossible: {}", e),
        }
    }

    Ok(())
}
