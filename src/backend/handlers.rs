//! Gestion des routes de l'API des comptes.

use axum::{extract::Path, http::StatusCode, Json};
use log::warn;

use crate::services::AccountService;
use crate::utils::error_messages::LOOKUP_ERROR;

/// Indique si le numéro de compte est déjà attribué
pub async fn account_number_exists(
    Path(account_number): Path<String>,
) -> axum::response::Result<Json<bool>> {
    match AccountService::account_number_exists(&account_number) {
        Ok(exists) => Ok(Json(exists)),
        Err(e) => {
            warn!("Échec de la vérification du compte: {}", e);
            Err((StatusCode::BAD_REQUEST, LOOKUP_ERROR).into())
        }
    }
}
