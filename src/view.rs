use std::fmt::{self, Display, Formatter};

use crate::compute::{DEFAULT_SPIN, slow_double};
use crate::memo::Memo;
use crate::state::State;

/// The demonstration view.
///
/// Owns two pieces of state: the input number the displayed result is derived
/// from, and a counter whose only purpose is to force re-renders. The
/// derivation runs through a [`Memo`] keyed by the input number, so pressing
/// the re-render button any number of times never re-runs [`slow_double`];
/// only an actual change of the input number does.
pub struct View {
    number: State<i64>,
    count: State<u64>,
    result: Memo<i64, i64>,
    spin: u64,
    mounted: bool,
}

/// One render pass's output: a title, the derived result line, and the
/// re-render button's label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub title: String,
    pub result: String,
    pub button: String,
}

impl View {
    /// Create the view with its initial state: input number 5, counter 0.
    ///
    /// Uses [`DEFAULT_SPIN`] for the derivation's busy loop, which stalls the
    /// first render for a noticeable moment.
    pub fn new() -> Self {
        Self::with_spin(DEFAULT_SPIN)
    }

    /// Like [`new`](Self::new), but with a custom busy-loop length.
    pub fn with_spin(spin: u64) -> Self {
        Self {
            number: State::new(5),
            count: State::new(0),
            result: Memo::new(),
            spin,
            mounted: false,
        }
    }

    /// Press the re-render button.
    ///
    /// Queues a counter increment, which schedules a render pass. The counter
    /// is not a dependency of the derived result, so the render this triggers
    /// must not re-run the slow computation.
    pub fn press_button(&mut self) {
        self.count.set(self.count.get() + 1);
    }

    /// Queue a new input number.
    ///
    /// The next render re-derives the result, recomputing only if the number
    /// actually changed. No control in the demo is wired to this; the input
    /// number stays constant there.
    pub fn set_number(&mut self, n: i64) {
        self.number.set(n);
    }

    /// The committed re-render counter.
    pub fn count(&self) -> u64 {
        *self.count.get()
    }

    /// Whether a render pass is due: before the view has first rendered and
    /// whenever a state mutation is queued.
    pub fn needs_render(&self) -> bool {
        !self.mounted || self.number.has_pending() || self.count.has_pending()
    }

    /// Run one render pass.
    ///
    /// Commits queued state mutations, derives the result through the memo
    /// slot, and produces the frame. After this returns, the displayed result
    /// always equals twice the committed input number.
    pub fn render(&mut self) -> Frame {
        self.number.commit();
        self.count.commit();
        self.mounted = true;

        let spin = self.spin;
        let result = *self.result.get_or_compute(*self.number.get(), |&n| {
            slow_double(n, spin)
        });

        Frame {
            title: "memocell demo".into(),
            result: format!("Result: {result}"),
            button: "[ Re-render ]".into(),
        }
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.result)?;
        write!(f, "{}", self.button)
    }
}
