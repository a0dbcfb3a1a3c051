use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// Returned when pushing into a [`CircularQueue`](super::CircularQueue) that is already full. The
/// rejected value is handed back to the caller.
pub struct QueueFull<T>(pub T);

impl<T> QueueFull<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Debug for QueueFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueFull").finish_non_exhaustive()
    }
}

impl<T> Display for QueueFull<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to push into a full CircularQueue!")
    }
}

impl<T> Error for QueueFull<T> {}
