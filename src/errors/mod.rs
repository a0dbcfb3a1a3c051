//! Error aggregation.
//!
//! [`MultiError`] collects any number of errors so that an operation can report everything that
//! went wrong instead of stopping at the first failure.

mod multi_error;

pub use multi_error::*;
