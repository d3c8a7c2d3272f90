//! Navigation guard
//!
//! Resolves navigation attempts against the route table before any view
//! logic runs. Only the authentication requirement is always enforced here;
//! the fine-grained capabilities are checked in the guard solely when the
//! configuration asks for it and are otherwise left to the views.

use std::sync::Arc;

use panel::routes::{self, Route};
use panel::can_access;
use tracing::debug;

use crate::context::session::SessionStore;

/// Outcome of a navigation attempt
///
/// Everything except `Commit` carries the route that was requested, not the
/// one being landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The requested route may be entered
    Commit(&'static Route),
    /// Authentication required; land on [`routes::LOGIN`] instead
    RedirectToLogin(&'static Route),
    /// A capability is missing and the guard is enforcing capabilities
    Denied(&'static Route),
    /// No route matches the path
    NotFound,
}

pub struct Navigator {
    session: Arc<SessionStore>,
    enforce_capabilities: bool,
}

impl Navigator {
    pub fn new(session: Arc<SessionStore>, enforce_capabilities: bool) -> Self {
        Self {
            session,
            enforce_capabilities,
        }
    }

    /// Resolves a navigation attempt to its outcome
    pub async fn resolve(&self, path: &str) -> Navigation {
        let Some(route) = routes::find(path) else {
            return Navigation::NotFound;
        };

        let caps = self.session.capabilities().await;

        if route.requires_auth && !caps.authenticated {
            debug!(route = route.name, "Unauthenticated, redirecting to login");
            return Navigation::RedirectToLogin(route);
        }
        if self.enforce_capabilities && !can_access(caps, route) {
            debug!(route = route.name, "Missing capability, navigation denied");
            return Navigation::Denied(route);
        }

        Navigation::Commit(route)
    }
}
