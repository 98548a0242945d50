//! Directory adapters: FASJSON over HTTP and an in-memory double.

pub mod fasjson;
pub mod memory;

pub use fasjson::FasjsonClient;
pub use memory::InMemoryDirectory;
