//! Serialization of plain records into `key=value` property lines, driven by per-field tags.
//!
//! A type opts in by implementing [`Properties`], usually via [`impl_properties!`](crate::impl_properties),
//! which pairs each serialized field with a tag. A tag is a comma separated string: the first part is
//! the property key and the remaining parts are options. The only recognised option is
//! `omitempty`, which skips the field when it holds an empty value (`""`, `0` or `false`).
//!
//! ```
//! use exercise_lib::impl_properties;
//! use exercise_lib::properties::Properties;
//!
//! #[derive(Default)]
//! struct Person {
//!     name: String,
//!     address: String,
//!     age: u32,
//! }
//!
//! impl_properties! {
//!     Person {
//!         name: "name",
//!         address: "address,omitempty",
//!         age: "age",
//!     }
//! }
//!
//! let person = Person { name: String::from("Jane"), ..Default::default() };
//! assert_eq!(person.to_properties(), "name=Jane\nage=0");
//! ```

mod serialize;
mod tag;
mod value;

pub use serialize::*;
pub use tag::*;
pub use value::*;
