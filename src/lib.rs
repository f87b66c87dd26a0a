//! BBBank : vérification asynchrone de l'existence d'un numéro de compte.
//! Le backend expose la route de vérification, le module `validator`
//! implémente la validation différée côté formulaire.

pub mod backend;
pub mod client;
pub mod config;
pub mod consts;
pub mod database;
pub mod services;
pub mod utils;
pub mod validator;
