//! Collections built on binary search trees.

pub mod map;

#[doc(inline)]
pub use map::OrderedMap;
