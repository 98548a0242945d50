//! Package registry adapters.

pub mod dist_git;

pub use dist_git::DistGitClient;
