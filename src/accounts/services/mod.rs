//! Application services for Fedora Accounts lookups.

mod groups;
mod guard;
mod resolver;

pub use groups::GroupQuery;
pub use resolver::{DEFAULT_HOME_SERVER, IdentityResolver};
