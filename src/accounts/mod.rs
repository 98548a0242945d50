//! Fedora Accounts lookups: identity resolution and group rosters.
//!
//! Raw chat input (a username, a `@localpart:domain` identity, or a rich-text
//! mention) is resolved to exactly one directory user or a single
//! [`LookupError`](crate::lookup::LookupError). The module follows the same
//! hexagonal split as the rest of the crate:
//!
//! - Domain types in [`domain`]
//! - The directory port in [`ports`]
//! - FASJSON and in-memory adapters in [`adapters`]
//! - Resolver and group services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
