//! Session state persisted across runs

use std::path::PathBuf;

use panel::{PanelUser, Session};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot access the state file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed state file: {0}")]
    Json(#[from] serde_json::Error),
}

/// The only state surviving a restart: the session and its user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persisted {
    pub session: Session,
    pub user: PanelUser,
}

/// JSON file holding the persisted state between runs
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the persisted state; a missing file is simply no state
    pub async fn load(&self) -> Result<Option<Persisted>, Error> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn store(&self, state: &Persisted) -> Result<(), Error> {
        let bytes = serde_json::to_vec_pretty(state)?;
        fs::write(&self.path, bytes).await?;
        Ok(())
    }

    /// Removes the state file; a missing file is already cleared
    pub async fn clear(&self) -> Result<(), Error> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
