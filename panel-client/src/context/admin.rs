//! Admin reference data store
//!
//! Memoized, authorization-gated fetches of the reference lists backing the
//! management views, plus the account operations behind them. The caches
//! are valid for the whole process lifetime; nothing invalidates them on
//! mutation, only a forced refresh replaces them.

use std::sync::Arc;

use panel::{AccountSimple, Domain, FullUser, Group, NewAccount, UpdateAccount};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::context::session::SessionStore;
use crate::http::{self, ApiClient};

/// Errors of the account command operations
#[derive(Debug, Error)]
pub enum Error {
    /// The current user lacks the user-manager permission
    #[error("Requires the user manager permission")]
    Forbidden,
    #[error(transparent)]
    Http(#[from] http::Error),
}

pub struct AdminData {
    api: ApiClient,
    session: Arc<SessionStore>,
    groups: RwLock<Vec<Group>>,
    domains: RwLock<Vec<Domain>>,
    accounts: RwLock<Vec<AccountSimple>>,
}

impl AdminData {
    pub fn new(api: ApiClient, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            groups: RwLock::new(Vec::new()),
            domains: RwLock::new(Vec::new()),
            accounts: RwLock::new(Vec::new()),
        }
    }

    /// Cached group list
    ///
    /// Without the user-manager permission this is a no-op returning the
    /// cache as-is. A fetch failure keeps the previous cache.
    pub async fn groups(&self, force_refresh: bool) -> Vec<Group> {
        if !self.session.is_user_manager().await {
            return self.groups.read().await.clone();
        }
        if !force_refresh {
            let cached = self.groups.read().await;
            if !cached.is_empty() {
                return cached.clone();
            }
        }

        match self.api.get_json::<Vec<Group>>("/api/groups/list").await {
            Ok(groups) => {
                debug!("Loaded {} groups", groups.len());
                *self.groups.write().await = groups.clone();
                groups
            }
            Err(err) => {
                error!("Error while loading groups: {err}");
                self.groups.read().await.clone()
            }
        }
    }

    /// Cached domain list; open to any session
    pub async fn domains(&self, force_refresh: bool) -> Vec<Domain> {
        if !force_refresh {
            let cached = self.domains.read().await;
            if !cached.is_empty() {
                return cached.clone();
            }
        }

        match self
            .api
            .get_json::<Vec<Domain>>("/api/system/domains/list")
            .await
        {
            Ok(domains) => {
                debug!("Loaded {} domains", domains.len());
                *self.domains.write().await = domains.clone();
                domains
            }
            Err(err) => {
                error!("Error while loading domains: {err}");
                self.domains.read().await.clone()
            }
        }
    }

    /// Cached account list, inactive accounts included
    ///
    /// Gated and memoized exactly like [`Self::groups`].
    pub async fn accounts(&self, force_refresh: bool) -> Vec<AccountSimple> {
        if !self.session.is_user_manager().await {
            return self.accounts.read().await.clone();
        }
        if !force_refresh {
            let cached = self.accounts.read().await;
            if !cached.is_empty() {
                return cached.clone();
            }
        }

        match self
            .api
            .get_json::<Vec<AccountSimple>>("/api/accounts/list?active=false")
            .await
        {
            Ok(accounts) => {
                debug!("Loaded {} accounts", accounts.len());
                *self.accounts.write().await = accounts.clone();
                accounts
            }
            Err(err) => {
                error!("Error while loading accounts: {err}");
                self.accounts.read().await.clone()
            }
        }
    }

    async fn require_user_manager(&self) -> Result<(), Error> {
        if self.session.is_user_manager().await {
            Ok(())
        } else {
            Err(Error::Forbidden)
        }
    }

    /// Full account record for the account view; never cached
    pub async fn account(&self, id: i64, include_emails: bool) -> Result<FullUser, Error> {
        self.require_user_manager().await?;
        let path = format!("/api/accounts/get/{id}?include_emails={include_emails}");
        Ok(self.api.get_json(&path).await?)
    }

    pub async fn create_account(&self, account: &NewAccount) -> Result<(), Error> {
        self.require_user_manager().await?;
        Ok(self.api.put_json("/api/accounts/new", account).await?)
    }

    /// Applies a partial update to the core account fields
    pub async fn update_account(&self, id: i64, update: &UpdateAccount) -> Result<(), Error> {
        self.require_user_manager().await?;
        let path = format!("/api/accounts/update/{id}/core");
        Ok(self.api.put_json(&path, update).await?)
    }

    pub async fn set_account_active(&self, id: i64, active: bool) -> Result<(), Error> {
        self.require_user_manager().await?;
        let path = format!("/api/accounts/update/{id}/active/{active}");
        Ok(self.api.put_unit(&path).await?)
    }
}
