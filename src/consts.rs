//! Définition des constantes globales pour l'application.

use std::time::Duration;

pub const HTTP_PORT: u16 = 8080; // Port par défaut pour le serveur HTTP.
pub const ACCOUNTS_DB_PATH: &str = "./data/accounts.yaml"; // Chemin de la base de données des comptes.
pub const API_URL_BASE: &str = "http://localhost:8080/api/"; // Racine de l'API utilisée par le client.
pub const DEBOUNCE_MS: u64 = 1_000; // Délai d'attente avant de vérifier un numéro de compte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10); // Durée maximale d'une requête HTTP.
