//! Issue-tracker lookups.
//!
//! - Domain types in [`domain`]
//! - The tracker port in [`ports`]
//! - The Pagure HTTP adapter in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
