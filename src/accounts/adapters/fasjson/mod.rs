//! FASJSON outbound adapter.
//!
//! A thin HTTP implementation of the `DirectoryService` port.

mod client;
mod dto;

pub use client::FasjsonClient;
