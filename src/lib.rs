//! Single-slot memoization of derived values.
//!
//! A view often derives a value from one piece of state through an expensive
//! computation while re-rendering for entirely unrelated reasons. [`Memo`] is
//! the smallest cache that fixes this: it remembers the last dependency value
//! and the result computed from it, and only recomputes when the dependency
//! actually changes.
//!
//! ```
//! use memocell::Memo;
//!
//! let mut memo = Memo::new();
//! let first = *memo.get_or_compute(5, |&n| n * 2); // computes
//! let again = *memo.get_or_compute(5, |&n| n * 2); // cached
//! assert_eq!((first, again), (10, 10));
//! ```
//!
//! The crate also ships the demonstration this cache exists for: [`View`]
//! owns an input number and a re-render counter, derives its displayed result
//! from the number via [`slow_double`], and keeps the derivation memoized so
//! that pressing the re-render button never re-runs the slow computation.
//! Enable the `demo` feature for an interactive terminal version.
//!
//! With the `testing` feature enabled, the [`testing`] module exposes whether
//! the last memo access was a hit and which inputs the slow computation
//! actually ran for.

mod compute;
mod memo;
mod state;
mod view;

pub use crate::compute::{DEFAULT_SPIN, slow_double};
pub use crate::memo::Memo;
pub use crate::state::State;
pub use crate::view::{Frame, View};

#[cfg(feature = "testing")]
pub mod testing;
