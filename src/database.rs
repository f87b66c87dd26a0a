//! Stockage des comptes en mémoire, avec sauvegarde en YAML.

use anyhow::{anyhow, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs::{create_dir_all, File},
    io::ErrorKind::NotFound,
    path::{Path, PathBuf},
};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Account {
    pub account_number: String,
    pub title: String,
    #[serde(default)]
    pub current_balance: i64, // En centimes
    #[serde(default)]
    pub status: AccountStatus,
}

impl Account {
    pub fn new(account_number: &str, title: &str) -> Self {
        Self {
            account_number: account_number.to_string(),
            title: title.to_string(),
            current_balance: 0,
            status: AccountStatus::Active,
        }
    }
}

/// Base de données des comptes, indexée par numéro de compte
#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Database {
    #[serde(skip)]
    path: Option<PathBuf>,
    accounts: HashMap<String, Account>,
}

impl Database {
    /// Base sans fichier associé, jamais sauvegardée
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match File::open(&path) {
            Ok(f) => {
                let mut db: Self = serde_yaml::from_reader(f)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
                db.path = Some(path);
                Ok(db)
            }

            // Fichier non existant, on le crée
            Err(not_found) if not_found.kind() == NotFound => {
                info!("Accounts file {} not found, creating new empty DB", path.display());
                let db = Self {
                    path: Some(path),
                    ..Default::default()
                };
                db.save()?;
                Ok(db)
            }

            Err(other) => Err(other.into()),
        }
    }

    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        // Crée le dossier parent s'il n'existe pas
        if let Some(parent_dir) = Path::new(path).parent() {
            if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
                create_dir_all(parent_dir).or(Err(anyhow!("Failed to create directory")))?;
            }
        }

        let file = File::create(path)?;
        serde_yaml::to_writer(file, self).or(Err(anyhow!("Failed to serialize DB")))?;
        Ok(())
    }

    pub fn exists(&self, account_number: &str) -> bool {
        self.accounts.contains_key(account_number)
    }

    pub fn get(&self, account_number: &str) -> Option<&Account> {
        self.accounts.get(account_number)
    }

    /// Ajoute un compte. Retourne false si le numéro est déjà pris.
    pub fn store(&mut self, account: Account) -> Result<bool> {
        if self.exists(&account.account_number) {
            return Ok(false);
        }

        self.accounts.insert(account.account_number.clone(), account);
        self.save()?;
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

// Base de données globale utilisée par le backend
pub mod account {
    use super::*;
    use once_cell::sync::Lazy;
    use std::sync::RwLock;

    static DB: Lazy<RwLock<Database>> = Lazy::new(Default::default);

    pub fn exists(account_number: &str) -> Result<bool> {
        Ok(DB.read().or(Err(anyhow!("DB poisoned")))?.exists(account_number))
    }

    pub fn create(account: Account) -> Result<bool> {
        DB.write().or(Err(anyhow!("DB poisoned")))?.store(account)
    }

    /// Remplace le contenu de la base par celui du fichier, retourne le nombre de comptes
    pub fn load(path: impl Into<PathBuf>) -> Result<usize> {
        let loaded = Database::open(path)?;
        let count = loaded.len();
        *DB.write().or(Err(anyhow!("DB poisoned")))? = loaded;
        Ok(count)
    }
}
