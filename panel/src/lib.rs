//! Domain model for the admin panel client
//!
//! Pure data types and checks shared by anything talking to the panel
//! backend: the session and account model, group permissions, and the
//! declarative route table with its access predicate. No I/O lives here.

pub mod domains;
pub mod emails;
pub mod groups;
pub mod routes;
pub mod session;
pub mod user;

pub use domains::Domain;
pub use emails::{Email, EmailType, Emails};
pub use groups::{Group, GroupPermissions, Permissions};
pub use routes::{Capabilities, Route, can_access};
pub use session::Session;
pub use user::{AccountSimple, AccountType, FullUser, NewAccount, PanelUser, UpdateAccount};
