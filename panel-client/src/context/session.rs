//! Session store
//!
//! Single source of truth for who is logged in and whether they are still
//! valid. All state transitions of the session/user pair happen here;
//! everything else only reads snapshots.

use chrono::Utc;
use panel::{Capabilities, PanelUser, Session};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::http::{self, ApiClient};
use crate::persist::{Persisted, StateFile};

/// Response of `POST /frontend-api/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub panel_user: PanelUser,
    pub session: Session,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct ChangePassword<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[derive(Default)]
struct State {
    session: Option<Session>,
    user: Option<PanelUser>,
}

pub struct SessionStore {
    api: ApiClient,
    state: RwLock<State>,
    /// Persistence target; `None` keeps the session in memory only
    file: Option<StateFile>,
}

impl SessionStore {
    pub fn new(api: ApiClient, file: Option<StateFile>) -> Self {
        Self {
            api,
            state: RwLock::new(State::default()),
            file,
        }
    }

    /// Unconditionally replaces the current session and user
    pub async fn login(&self, session: Session, user: PanelUser) {
        self.api
            .set_session(Some(session.session_id.clone()))
            .await;
        {
            let mut state = self.state.write().await;
            state.session = Some(session);
            state.user = Some(user);
        }
        self.persist().await;
    }

    /// Authenticates against the backend and installs the returned session
    ///
    /// The store state is untouched when the call fails.
    pub async fn login_with_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<PanelUser, http::Error> {
        let response: LoginResponse = self
            .api
            .post_form("/frontend-api/login", &LoginRequest { username, password })
            .await?;

        let user = response.panel_user.clone();
        self.login(response.session, response.panel_user).await;
        Ok(user)
    }

    /// Notifies the backend best-effort, then clears the session locally
    ///
    /// The session is gone afterwards whether or not the backend call
    /// succeeded.
    pub async fn logout(&self) {
        if let Err(err) = self.api.get_unit("/frontend-api/logout").await {
            debug!("Backend logout failed: {err}");
        }
        self.clear().await;
    }

    /// Revalidates the session and returns the fresh user profile
    ///
    /// Returns `None` without any network traffic when there is no session
    /// or it already expired locally. A failing profile fetch counts as an
    /// invalid session and clears the state, which also means a transient
    /// network failure logs the user out.
    pub async fn update_user(&self) -> Option<PanelUser> {
        let session = self.state.read().await.session.clone()?;

        if !session.is_valid_at(Utc::now()) {
            debug!("Session expired locally");
            self.clear().await;
            return None;
        }

        match self.api.get_json::<PanelUser>("/api/me").await {
            Ok(user) => {
                debug!(user = %user.username, "The user is still logged in");
                self.state.write().await.user = Some(user.clone());
                self.persist().await;
                Some(user)
            }
            Err(err) => {
                warn!("Profile refresh failed, dropping the session: {err}");
                self.clear().await;
                None
            }
        }
    }

    /// Changes the password of the logged-in user
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), http::Error> {
        self.api
            .put_form(
                "/api/user/change-password",
                &ChangePassword {
                    old_password,
                    new_password,
                },
            )
            .await
    }

    /// Capability snapshot for authorization checks
    ///
    /// An expired session yields no capabilities; clearing it is left to
    /// [`Self::update_user`]. Never fetches.
    pub async fn capabilities(&self) -> Capabilities {
        let state = self.state.read().await;
        match (&state.session, &state.user) {
            (Some(session), Some(user)) if session.is_valid_at(Utc::now()) => {
                Capabilities::for_user(&user.group_permissions)
            }
            _ => Capabilities::default(),
        }
    }

    /// The user-manager predicate over the current state
    pub async fn is_user_manager(&self) -> bool {
        self.capabilities().await.manage_users
    }

    /// Current session, if any
    pub async fn session(&self) -> Option<Session> {
        self.state.read().await.session.clone()
    }

    /// Cached user profile, if any
    pub async fn user(&self) -> Option<PanelUser> {
        self.state.read().await.user.clone()
    }

    /// Loads the persisted state and revalidates it against the backend
    pub async fn restore(&self) -> Option<PanelUser> {
        let file = self.file.as_ref()?;
        let persisted = match file.load().await {
            Ok(Some(persisted)) => persisted,
            Ok(None) => return None,
            Err(err) => {
                warn!("Ignoring unreadable state file: {err}");
                return None;
            }
        };

        self.api
            .set_session(Some(persisted.session.session_id.clone()))
            .await;
        {
            let mut state = self.state.write().await;
            state.session = Some(persisted.session);
            state.user = Some(persisted.user);
        }

        self.update_user().await
    }

    async fn clear(&self) {
        self.api.set_session(None).await;
        {
            let mut state = self.state.write().await;
            state.session = None;
            state.user = None;
        }
        if let Some(file) = &self.file {
            if let Err(err) = file.clear().await {
                warn!("Cannot remove the persisted session: {err}");
            }
        }
    }

    async fn persist(&self) {
        let Some(file) = &self.file else {
            return;
        };
        let persisted = {
            let state = self.state.read().await;
            let (Some(session), Some(user)) = (&state.session, &state.user) else {
                return;
            };
            Persisted {
                session: session.clone(),
                user: user.clone(),
            }
        };
        if let Err(err) = file.store(&persisted).await {
            warn!("Cannot persist the session: {err}");
        }
    }
}
