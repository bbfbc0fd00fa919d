use std::hint;

/// The busy-loop length that makes the stall plainly visible in the demo.
pub const DEFAULT_SPIN: u64 = 1_000_000_000;

/// Double a number, slowly.
///
/// Pure with respect to its return value: the same `n` always yields `n * 2`.
/// Before returning, the function spins through `spin` no-op iterations; the
/// delay is constant and independent of `n`. Pass a small `spin` (or zero) in
/// tests where the stall itself is irrelevant.
///
/// Each actual execution emits a debug-level tracing event. That event is the
/// observable signal that memoization is (or is not) working: it must appear
/// once per distinct input, never once per render.
pub fn slow_double(n: i64, spin: u64) -> i64 {
    tracing::debug!(n, "running slow computation");

    #[cfg(feature = "testing")]
    crate::testing::register_execution(n);

    for i in 0..spin {
        hint::black_box(i);
    }

    n * 2
}
