//! Issue-tracker adapters.

pub mod pagure;

pub use pagure::PagureClient;
