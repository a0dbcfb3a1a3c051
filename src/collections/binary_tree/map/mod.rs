//! A module containing [`OrderedMap`] and associated types.
//!
//! The other included types are for iteration, providing owned and borrowed iteration over
//! entries, keys or values in ascending key order.
//!
//! [`OrderedMap`] is also re-exported under the parent module.

mod iter;
mod node;
mod ordered_map;
mod tests;

pub use iter::*;
pub(crate) use node::*;
pub use ordered_map::*;
