use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use super::weapon_service;
use crate::structs::weapon_struct::{NewWeapon, WeaponRequest};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("seed file {path} is not valid JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to store seed weapon: {0}")]
    Database(#[from] DbErr),
}

pub async fn fetch_json<T>(path: &str) -> Result<T, SeedError>
where
    T: DeserializeOwned,
{
    let path = format!("{}.json", path);
    let mut file = File::open(&path).await.map_err(|source| SeedError::Read {
        path: path.clone(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .await
        .map_err(|source| SeedError::Read {
            path: path.clone(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| SeedError::Parse { path, source })
}

async fn store_all(txn: &DatabaseTransaction, weapons: Vec<NewWeapon>) -> Result<(), DbErr> {
    for weapon in weapons {
        weapon_service::create(txn, weapon).await?;
    }
    Ok(())
}

/// Loads the seed catalog into an empty table. Returns how many weapons were
/// inserted; invalid entries are logged and skipped.
///
/// Inserts share one transaction: a failed insert leaves the table empty so
/// the next start seeds again.
pub async fn seed_weapons(db: &DatabaseConnection, path: &str) -> Result<usize, SeedError> {
    let existing = weapon_service::count(db).await?;
    if existing > 0 {
        tracing::info!(existing, "weapons table already populated, skipping seed");
        return Ok(0);
    }

    let requests = fetch_json::<Vec<WeaponRequest>>(path).await?;
    let mut weapons = Vec::with_capacity(requests.len());
    for (index, request) in requests.iter().enumerate() {
        match weapon_service::validate_request(request) {
            Ok(weapon) => weapons.push(weapon),
            Err(errors) => {
                tracing::warn!(
                    index,
                    name = ?request.name,
                    ?errors,
                    "skipping invalid seed weapon"
                );
            }
        }
    }
    let inserted = weapons.len();

    let txn = db.begin().await?;
    if let Err(err) = store_all(&txn, weapons).await {
        if let Err(rollback) = txn.rollback().await {
            tracing::error!(error = %rollback, "failed to roll back seed");
        }
        return Err(err.into());
    }
    txn.commit().await?;

    tracing::info!(inserted, path, "seed catalog loaded");
    Ok(inserted)
}
