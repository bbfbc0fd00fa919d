//! Run with `cargo test --all-features`.

use std::cell::Cell;

use memocell::Memo;

macro_rules! test {
    (miss: $call:expr, $result:expr) => {{
        assert_eq!($call, $result);
        assert!(!memocell::testing::last_was_hit());
    }};
    (hit: $call:expr, $result:expr) => {{
        assert_eq!($call, $result);
        assert!(memocell::testing::last_was_hit());
    }};
}

fn double(n: &i64) -> i64 {
    n * 2
}

/// Test the hit/miss pattern of the single slot.
#[test]
fn test_hit_and_miss() {
    let mut memo = Memo::new();

    test!(miss: *memo.get_or_compute(2, double), 4);
    test!(hit: *memo.get_or_compute(2, double), 4);
    test!(hit: *memo.get_or_compute(2, double), 4);
    test!(miss: *memo.get_or_compute(4, double), 8);

    // Going back to 2 is a miss again: 4 evicted the only slot.
    test!(miss: *memo.get_or_compute(2, double), 4);
}

/// Test that the function runs once per run of consecutive identical keys.
#[test]
fn test_runs_once_per_key_change() {
    let runs = Cell::new(0);
    let mut memo = Memo::new();

    for key in [1, 1, 2, 2, 2, 1] {
        memo.get_or_compute(key, |&k| {
            runs.set(runs.get() + 1);
            k * 2
        });
    }

    assert_eq!(runs.get(), 3);
}

/// Test that the returned borrow is usable on both the miss and hit paths.
#[test]
fn test_borrowed_return_value() {
    let mut memo = Memo::new();

    let missed = memo.get_or_compute(6, double);
    assert_eq!(missed, &12);

    let hit = memo.get_or_compute(6, double);
    assert_eq!(hit, &12);

    let replaced = memo.get_or_compute(8, double);
    assert_eq!(replaced, &16);
}

/// Test the slot accessors before and after first use.
#[test]
fn test_slot_accessors() {
    let mut memo = Memo::new();
    assert_eq!(memo.get(), None);
    assert_eq!(memo.key(), None);

    memo.get_or_compute(7, double);
    assert_eq!(memo.get(), Some(&14));
    assert_eq!(memo.key(), Some(&7));

    memo.get_or_compute(3, double);
    assert_eq!(memo.get(), Some(&6));
    assert_eq!(memo.key(), Some(&3));
}

/// Test that keys are compared by value, not identity.
#[test]
fn test_value_equality_keys() {
    let mut memo = Memo::new();

    test!(miss: memo.get_or_compute("five".to_string(), |k| k.len()), &4);
    test!(hit: memo.get_or_compute("five".to_string(), |k| k.len()), &4);
    test!(miss: memo.get_or_compute("seven".to_string(), |k| k.len()), &5);
}
