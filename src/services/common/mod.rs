//! Common utilities and abstractions for services

/// Reactive property system for fine-grained state updates
pub mod property;

#[cfg(test)]
mod tests;

pub use property::{ComputedProperty, Property};
