use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

/// Unbounded multi-producer/multi-consumer blocking queue.
///
/// `pop` blocks while the queue is empty and not yet closed, so consumers
/// yield their thread instead of busy-polling. After `close`, consumers
/// drain whatever remains and then receive `None`.
pub struct SharedQueue<T> {
    inner: Mutex<Inner<T>>,
    ready: Condvar,
}

struct Inner<T> {
    items: VecDeque<T>,
    closed: bool,
}

impl<T> SharedQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: VecDeque::new(),
                closed: false,
            }),
            ready: Condvar::new(),
        }
    }

    /// Enqueue an item and wake one waiting consumer. Never blocks.
    pub fn push(&self, item: T) {
        let mut inner = self.inner.lock().expect("queue mutex poisoned");
        inner.items.push_back(item);
        self.ready.notify_one();
    }

    /// Mark the stream as finished and wake every blocked consumer.
    pub fn close(&self) {
        let mut inner = self.inner.lock().expect("queue mutex poisoned");
        inner.closed = true;
        self.ready.notify_all();
    }

    /// Dequeue the next item, blocking while the queue is empty and open.
    /// Returns `None` once the queue is both closed and drained.
    pub fn pop(&self) -> Option<T> {
        let mut inner = self.inner.lock().expect("queue mutex poisoned");
        while inner.items.is_empty() && !inner.closed {
            inner = self.ready.wait(inner).expect("queue mutex poisoned");
        }
        inner.items.pop_front()
    }
}

impl<T> Default for SharedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
