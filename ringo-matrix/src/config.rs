//! Runtime switches for matrix arithmetic.
//!
//! Parallel multiplication needs the `multithread` feature. Without it
//! these settings are stored but have no effect.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

static MULTITHREAD: AtomicBool = AtomicBool::new(true);
static PAR_THRESHOLD: AtomicUsize = AtomicUsize::new(1 << 12);

pub fn is_multithread_enabled() -> bool {
    MULTITHREAD.load(Ordering::Relaxed)
}

pub fn set_multithread_enabled(val: bool) {
    MULTITHREAD.store(val, Ordering::Relaxed)
}

/// Products of an `l × m` and an `m × n` matrix run in parallel
/// when `l * m * n` exceeds this value.
pub fn multithread_threshold() -> usize {
    PAR_THRESHOLD.load(Ordering::Relaxed)
}

pub fn set_multithread_threshold(size: usize) {
    PAR_THRESHOLD.store(size, Ordering::Relaxed)
}

#[cfg_attr(not(feature = "multithread"), allow(dead_code))]
pub(crate) fn use_multithread(size: usize) -> bool {
    is_multithread_enabled() && size > multithread_threshold()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold() {
        let t = multithread_threshold();
        assert!(!use_multithread(0));
        assert_eq!(use_multithread(t + 1), is_multithread_enabled());
    }
}
