//! Chat command handling.
//!
//! A [`router::CommandRouter`] parses `!command` messages against a static
//! [`registry::CommandRegistry`], runs the matching lookup and renders the
//! result with [`reply`].

pub mod domain;
pub mod registry;
pub mod reply;
pub mod router;

pub use registry::CommandRegistry;
pub use router::{CommandRouter, RouterParts};

#[cfg(test)]
mod tests;
