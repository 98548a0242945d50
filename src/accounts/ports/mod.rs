//! Port contracts for Fedora Accounts lookups.

pub mod directory;

pub use directory::{DirectoryError, DirectoryResult, DirectoryService, SearchFilter};
