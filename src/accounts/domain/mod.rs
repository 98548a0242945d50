//! Domain model for Fedora Accounts lookups.
//!
//! Holds directory records, chat identity parsing and the shape of an
//! identity lookup request. Nothing here performs I/O.

mod chat_identity;
mod request;
mod user;

pub use chat_identity::{CHAT_IDENTITY_SHAPE, ChatIdentity, extract_mentions};
pub use request::LookupRequest;
pub use user::{DirectoryUser, GroupRole};
