//! Service d'accès aux comptes, point d'entrée unique du backend vers la base.

use crate::database;
use crate::utils::validation::AccountNumberInput;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Erreur de la base de données: {0}")]
    Database(anyhow::Error),
}

pub struct AccountService;

impl AccountService {
    /// Indique si un compte existe déjà pour ce numéro.
    /// Un numéro mal formé ne peut désigner aucun compte : la réponse est false.
    pub fn account_number_exists(raw: &str) -> Result<bool, ServiceError> {
        let account_number = match AccountNumberInput::new(raw) {
            Ok(account_number) => account_number,
            Err(e) => {
                debug!("Numéro de compte mal formé {:?}: {}", raw, e);
                return Ok(false);
            }
        };

        let exists =
            database::account::exists(account_number.as_ref()).map_err(ServiceError::Database)?;

        debug!("Compte {} existe: {}", account_number, exists);
        Ok(exists)
    }
}
