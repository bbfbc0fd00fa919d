/// A single-slot cache keyed by the last-seen dependency value.
///
/// Holds at most one `(key, value)` pair. [`get_or_compute`](Self::get_or_compute)
/// compares the incoming key against the stored one by value equality and only
/// invokes the compute closure when they differ or the slot is still empty.
///
/// This is deliberately not a multi-key cache: feeding it the key sequence
/// A, B, A computes three times, because B evicts the entry for A.
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
}

impl<K, V> Memo<K, V> {
    /// Create an empty memo slot.
    #[inline]
    pub const fn new() -> Self {
        Self { slot: None }
    }

    /// The value in the slot, if the slot is filled.
    #[inline]
    pub fn get(&self) -> Option<&V> {
        self.slot.as_ref().map(|(_, v)| v)
    }

    /// The key the slot's value was computed from, if the slot is filled.
    #[inline]
    pub fn key(&self) -> Option<&K> {
        self.slot.as_ref().map(|(k, _)| k)
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Return the cached value or execute the function to fill the slot.
    ///
    /// The function runs exactly when the slot is empty or its stored key
    /// differs from `key`; in that case the whole slot is replaced.
    pub fn get_or_compute<F>(&mut self, key: K, func: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        if matches!(&self.slot, Some((cached, _)) if *cached == key) {
            #[cfg(feature = "testing")]
            crate::testing::register_hit();
        } else {
            let value = func(&key);
            self.slot = Some((key, value));

            #[cfg(feature = "testing")]
            crate::testing::register_miss();
        }

        match &self.slot {
            Some((_, value)) => value,
            // The branch above filled the slot if it was empty.
            None => unreachable!(),
        }
    }
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
