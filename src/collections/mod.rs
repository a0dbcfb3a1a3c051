//! General-purpose collection types.
//!
//! # Purpose
//! I wrote these types to learn about the data structures themselves, along with ownership of
//! recursive structures, iterators and fixed-size storage.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "circ")]
pub mod circ;
