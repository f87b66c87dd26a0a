//! Module principal pour le backend de l'application.
//! Contient le gestionnaire de la route de vérification et le routeur.
pub mod handlers;
pub mod router;
