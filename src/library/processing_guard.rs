use std::sync::atomic::{AtomicBool, Ordering};

/// Non-blocking, non-reentrant "processing in progress" flag.
///
/// `try_acquire` either hands out the only permit or returns `None` right away.
/// Contention means the caller drops its work; nobody waits.
#[derive(Debug, Default)]
pub struct ProcessingGuard {
    busy: AtomicBool,
}

#[must_use]
#[derive(Debug)]
pub struct ProcessingPermit<'a> {
    guard: &'a ProcessingGuard,
}

impl ProcessingGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<ProcessingPermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| ProcessingPermit { guard: self })
    }

    #[allow(dead_code)]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for ProcessingPermit<'_> {
    fn drop(&mut self) {
        self.guard.busy.store(false, Ordering::Release);
    }
}
