//! Declarative route table and access checks
//!
//! Each route carries its authorization requirements as data; whether a
//! capability snapshot may enter a route is decided by [`can_access`], a
//! pure function with no notion of sessions or HTTP.

use crate::groups::GroupPermissions;

/// A navigable location and what it demands from the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub name: &'static str,
    /// Path pattern; `:` segments match any single non-empty segment
    pub pattern: &'static str,
    pub requires_auth: bool,
    pub requires_access_to_users: bool,
    pub requires_access_to_system: bool,
}

pub const HOME: Route = Route {
    name: "home",
    pattern: "/",
    requires_auth: true,
    requires_access_to_users: false,
    requires_access_to_system: false,
};

/// Target of every guard redirect, the only route open to everyone
pub const LOGIN: Route = Route {
    name: "login",
    pattern: "/login",
    requires_auth: false,
    requires_access_to_users: false,
    requires_access_to_system: false,
};

pub const ACCOUNTS: Route = Route {
    name: "accounts",
    pattern: "/accounts",
    requires_auth: true,
    requires_access_to_users: true,
    requires_access_to_system: false,
};

pub const ACCOUNT_VIEW: Route = Route {
    name: "account-view",
    pattern: "/account/view/:id",
    requires_auth: true,
    requires_access_to_users: true,
    requires_access_to_system: false,
};

pub const ACCOUNT_CREATE: Route = Route {
    name: "account-create",
    pattern: "/account/create",
    requires_auth: true,
    requires_access_to_users: true,
    requires_access_to_system: false,
};

/// The full route surface, fixed at startup
pub const ROUTES: &[Route] = &[HOME, LOGIN, ACCOUNTS, ACCOUNT_VIEW, ACCOUNT_CREATE];

/// Finds the route whose pattern matches the given path
///
/// Any query string is ignored. Returns `None` for paths outside the table.
pub fn find(path: &str) -> Option<&'static Route> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    ROUTES.iter().find(|route| matches(route.pattern, path))
}

fn matches(pattern: &str, path: &str) -> bool {
    let mut pattern = pattern.trim_start_matches('/').split('/');
    let mut path = path.trim_start_matches('/').split('/');

    loop {
        match (pattern.next(), path.next()) {
            (Some(expected), Some(segment)) => {
                let wildcard = expected.starts_with(':') && !segment.is_empty();
                if !wildcard && expected != segment {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// What the current visitor is allowed to do
///
/// A snapshot derived from the session state at check time; holding one does
/// not keep it valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub authenticated: bool,
    pub manage_users: bool,
    pub manage_system: bool,
}

impl Capabilities {
    /// Capabilities of an authenticated user with the given permissions
    pub fn for_user(permissions: &GroupPermissions) -> Self {
        Self {
            authenticated: true,
            manage_users: permissions.modify_accounts,
            manage_system: permissions.manage_system,
        }
    }
}

/// Whether the capability snapshot satisfies every requirement of the route
pub fn can_access(caps: Capabilities, route: &Route) -> bool {
    if route.requires_auth && !caps.authenticated {
        return false;
    }
    if route.requires_access_to_users && !caps.manage_users {
        return false;
    }
    if route.requires_access_to_system && !caps.manage_system {
        return false;
    }
    true
}
