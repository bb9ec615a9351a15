use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Single-slot buffer where a newer item replaces an unconsumed older one.
///
/// The producer never waits on the consumer: `put` only holds the lock long
/// enough to swap the slot. Replaced items are dropped and counted.
pub struct LatestSlot<T> {
    slot: Mutex<Option<T>>,
    overwritten: AtomicU64,
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
            overwritten: AtomicU64::new(0),
        }
    }

    /// Stores `item`, discarding whatever was still pending.
    pub fn put(&self, item: T) {
        let previous = match self.slot.lock() {
            Ok(mut slot) => slot.replace(item),
            Err(poisoned) => poisoned.into_inner().replace(item),
        };

        if previous.is_some() {
            self.overwritten.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Takes the pending item, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        match self.slot.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }

    /// Number of items replaced before anyone took them.
    pub fn overwritten(&self) -> u64 {
        self.overwritten.load(Ordering::Relaxed)
    }
}
