//! A collection of small, self-contained exercises in data structures and language features.
//!
//! # Purpose
//! Each module here is an independent exercise, written to practice one idea properly rather than
//! to be used in production. None of the modules depend on each other.
//!
//! - [`collections::binary_tree`]: [`OrderedMap`](collections::binary_tree::OrderedMap), an
//!   ordered map backed by an unbalanced binary search tree.
//! - [`collections::circ`]: [`CircularQueue`](collections::circ::CircularQueue), a fixed-capacity
//!   FIFO ring buffer.
//! - [`errors`]: [`MultiError`](errors::MultiError), combining many errors into one.
//! - [`properties`]: serializing records into `key=value` lines based on per-field tags.
//! - [`container`]: a toy dependency injection container of named factories.
//! - [`packed`]: [`GamePerson`](packed::GamePerson), a record with bit-packed fields and a fluent
//!   builder.
//!
//! Every module sits behind a cargo feature of the same name (`binary-tree` and `circ` for the
//! collections), all of which are enabled by default.
//!
//! # Error Handling
//! Most operations here can't fail: a missing key is a [`None`], not an error. Where a [`Result`]
//! is needed, errors are strongly typed, using enums for static dispatch rather than dynamic, with
//! structs that implement [`Error`](std::error::Error). [`MultiError`](errors::MultiError) is the
//! exception, as its whole point is to hold errors of any type.
//!
//! # Dependencies
//! This crate depends on `derive_more` for error boilerplate and `tracing` for the few runtime
//! events worth reporting, in the container and the serializer. No subscriber is installed, that
//! is left to the application.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
#[cfg(feature = "container")]
pub mod container;
#[cfg(feature = "errors")]
pub mod errors;
#[cfg(feature = "packed")]
pub mod packed;
#[cfg(feature = "properties")]
pub mod properties;

pub(crate) mod util;
