//! A small dependency injection container.
//!
//! [`Container`] maps names to factories. Every resolution calls the factory again, so each
//! caller receives its own fresh instance.

mod container;
mod error;

pub use container::*;
pub use error::*;
