use std::cell::Cell;

use parking_lot::RwLock;

thread_local! {
    /// Whether this thread's most recent memo lookup was answered from cache.
    static LAST_LOOKUP_HIT: Cell<bool> = const { Cell::new(false) };
}

/// The inputs the slow computation actually ran for, in order.
///
/// Process-global so that integration tests can observe executions from
/// anywhere in the crate; tests that read or reset the log run serially.
static EXECUTIONS: RwLock<Vec<i64>> = RwLock::new(Vec::new());

/// Whether this thread's most recent memo lookup was a hit.
pub fn last_was_hit() -> bool {
    LAST_LOOKUP_HIT.with(|cell| cell.get())
}

/// The inputs the slow computation has executed for since the last reset.
pub fn executions() -> Vec<i64> {
    EXECUTIONS.read().clone()
}

/// How many times the slow computation has executed since the last reset.
pub fn execution_count() -> usize {
    EXECUTIONS.read().len()
}

/// Clear the execution log.
pub fn reset() {
    EXECUTIONS.write().clear();
}

/// Records a memo lookup answered from cache.
pub(crate) fn register_hit() {
    LAST_LOOKUP_HIT.with(|cell| cell.set(true));
}

/// Records a memo lookup that had to compute.
pub(crate) fn register_miss() {
    LAST_LOOKUP_HIT.with(|cell| cell.set(false));
}

/// Records an actual execution of the slow computation.
pub(crate) fn register_execution(n: i64) {
    EXECUTIONS.write().push(n);
}
