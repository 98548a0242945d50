//! Fedora chat-bot command handling.
//!
//! Answers `!command` chat messages with information gathered from Fedora
//! Accounts (FASJSON), the Pagure issue tracker and the package source
//! registry.
//!
//! # Architecture
//!
//! Each bounded context follows the hexagonal layout:
//!
//! - **Domain**: plain data types and parsing rules
//! - **Ports**: async traits for the external services
//! - **Adapters**: reqwest clients and in-memory test doubles
//! - **Services**: lookups that turn port results into [`lookup::LookupError`]
//!
//! # Modules
//!
//! - [`accounts`]: identity resolution and group rosters
//! - [`tracker`]: issue lookups
//! - [`packages`]: package ownership lookups
//! - [`command`]: parsing, dispatch and reply rendering
//! - [`bootstrap`], [`config`], [`telemetry`]: process wiring

pub mod accounts;
pub mod bootstrap;
pub mod command;
pub mod config;
mod http;
pub mod lookup;
pub mod packages;
pub mod telemetry;
pub mod tracker;

pub use http::HttpSetupError;
