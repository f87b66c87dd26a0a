//! Utilitaires partagés : messages d'erreur et validation des entrées.

pub mod error_messages;
pub mod validation;
