//! Client global context
//!
//! One explicit object owning every piece of client state: the API client,
//! the session store and the admin data caches. Handlers receive it instead
//! of reaching for globals.

pub mod admin;
pub mod session;


use std::sync::Arc;

use color_eyre::Result;
use panel::PanelUser;

use crate::config::Config;
use crate::http::ApiClient;
use crate::nav::Navigator;
use crate::persist::StateFile;
use admin::AdminData;
use session::SessionStore;

struct ContextInner {
    /// Session manager
    session: Arc<SessionStore>,
    /// Admin reference data
    admin: AdminData,
    /// Navigation guard
    nav: Navigator,
}

#[derive(Clone)]
pub struct Context(Arc<ContextInner>);

impl Context {
    /// Context from configuration
    pub fn with_config(config: &Config) -> Result<Self> {
        Self::build(
            &config.server,
            Some(StateFile::new(&config.state)),
            config.guard.enforce_capabilities,
        )
    }

    /// Context for testing purposes - in-memory only, nothing persisted
    #[cfg(test)]
    pub(crate) fn test(server: &str) -> Self {
        Self::build(server, None, false).unwrap()
    }

    pub(crate) fn build(
        server: &str,
        state: Option<StateFile>,
        enforce_capabilities: bool,
    ) -> Result<Self> {
        let api = ApiClient::new(server)?;
        let session = Arc::new(SessionStore::new(api.clone(), state));
        let admin = AdminData::new(api, session.clone());
        let nav = Navigator::new(session.clone(), enforce_capabilities);

        Ok(Self(Arc::new(ContextInner {
            session,
            admin,
            nav,
        })))
    }

    /// Loads the persisted session and revalidates it against the backend
    ///
    /// Startup step; run it before any authorization-dependent operation.
    pub async fn restore(&self) -> Option<PanelUser> {
        self.0.session.restore().await
    }

    /// Access to the session store
    pub fn session(&self) -> &SessionStore {
        &self.0.session
    }

    /// Access to the admin reference data
    pub fn admin(&self) -> &AdminData {
        &self.0.admin
    }

    /// Access to the navigation guard
    pub fn nav(&self) -> &Navigator {
        &self.0.nav
    }
}
