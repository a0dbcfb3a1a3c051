use std::cell::Cell;
use std::rc::Rc;

/// A value that counts how many of its clones have been dropped.
#[derive(Debug, Clone, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
