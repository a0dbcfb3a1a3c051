//! A module containing [`CircularQueue`], a fixed-capacity FIFO queue, and associated types.

mod circular_queue;
mod error;
mod iter;

pub use circular_queue::*;
pub use error::*;
pub use iter::*;
