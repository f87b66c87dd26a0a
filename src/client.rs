//! Client HTTP de l'API des comptes, utilisé par le formulaire pour vérifier
//! si un numéro de compte est déjà attribué.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::consts::REQUEST_TIMEOUT;
use crate::validator::{CheckError, ExistenceCheck};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Requête impossible: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Le serveur a répondu {0}")]
    Status(StatusCode),

    #[error("URL de base invalide: {0}")]
    BaseUrl(Url),
}

pub struct AccountClient {
    base: Url,
    client: Client,
}

impl AccountClient {
    /// `base` est la racine de l'API, par exemple `http://localhost:8080/api/`
    pub fn new(base: Url) -> Result<Self, ClientError> {
        if base.cannot_be_a_base() {
            return Err(ClientError::BaseUrl(base));
        }

        let client = reqwest::ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { base, client })
    }

    /// Construit l'URL de vérification, le numéro est encodé comme segment de chemin
    fn exists_url(&self, account_number: &str) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::BaseUrl(self.base.clone()))?
            .pop_if_empty()
            .extend(&["account", "AccountNumberExists", account_number]);
        Ok(url)
    }

    pub async fn account_number_exists(&self, account_number: &str) -> Result<bool, ClientError> {
        let response = self
            .client
            .get(self.exists_url(account_number)?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        Ok(response.json::<bool>().await?)
    }
}

#[async_trait]
impl ExistenceCheck for AccountClient {
    async fn account_number_exists(&self, account_number: &str) -> Result<bool, CheckError> {
        Ok(AccountClient::account_number_exists(self, account_number).await?)
    }
}
