/// A state cell owned by a view.
///
/// Mutations are queued rather than applied in place: [`set`](Self::set)
/// stores a pending value and [`commit`](Self::commit) applies it at the
/// start of the next render pass. [`get`](Self::get) always reads the
/// committed value, so a handler that sets state still observes the old value
/// until the view renders again.
pub struct State<T> {
    current: T,
    pending: Option<T>,
}

impl<T> State<T> {
    /// Create a cell holding `initial` with nothing queued.
    pub const fn new(initial: T) -> Self {
        Self { current: initial, pending: None }
    }

    /// The committed value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.current
    }

    /// Queue a new value, replacing any previously queued one.
    pub fn set(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Whether a mutation is queued, i.e. a render pass is due.
    #[inline]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the queued value, if any.
    pub(crate) fn commit(&mut self) {
        if let Some(value) = self.pending.take() {
            self.current = value;
        }
    }
}
