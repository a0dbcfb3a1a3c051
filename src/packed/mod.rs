//! Bit-packed records.
//!
//! [`GamePerson`] squeezes a game character into 64 bytes by storing small numeric attributes and
//! flags as sub-fields of two integers, using the [`PackedBits`] helpers.

mod bits;
mod game_person;

pub use bits::*;
pub use game_person::*;
