//! Package ownership lookups against the distribution's source registry.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
