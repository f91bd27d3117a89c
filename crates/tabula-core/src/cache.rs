//! Single-flight cache keyed by entity path.
//!
//! Each key owns a slot mutex; computing a value holds only that slot, so
//! callers for the same key wait for one computation while other keys are
//! unaffected. The map lock is held just long enough to find or insert a
//! slot. Failed computations leave their slot empty and are retried by the
//! next caller.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

type Slot<V> = Arc<Mutex<Option<Arc<V>>>>;

///
/// Outcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Hit,
    Computed,
}

///
/// SingleFlightCache
///

pub struct SingleFlightCache<V> {
    slots: RwLock<HashMap<&'static str, Slot<V>>>,
}

impl<V> SingleFlightCache<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Populated value for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let slot = self.find_slot(key)?;
        let guard = slot.lock().unwrap_or_else(PoisonError::into_inner);

        guard.as_ref().map(Arc::clone)
    }

    /// Return the cached value for `key`, computing it with `init` if absent.
    ///
    /// `init` runs at most once at a time per key; concurrent callers block
    /// on the slot and then observe the stored value.
    pub fn get_or_try_init<E>(
        &self,
        key: &'static str,
        init: impl FnOnce() -> Result<V, E>,
    ) -> Result<(Arc<V>, Outcome), E> {
        let slot = self.slot(key);
        // Values are only stored whole, so a poisoned slot is still consistent.
        let mut guard = slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(value) = guard.as_ref() {
            return Ok((Arc::clone(value), Outcome::Hit));
        }

        let value = Arc::new(init()?);
        *guard = Some(Arc::clone(&value));

        Ok((value, Outcome::Computed))
    }

    /// Number of populated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let slots: Vec<Slot<V>> = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        slots
            .iter()
            .filter(|slot| {
                slot.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .is_some()
            })
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find_slot(&self, key: &str) -> Option<Slot<V>> {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn slot(&self, key: &'static str) -> Slot<V> {
        if let Some(slot) = self.find_slot(key) {
            return slot;
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);

        Arc::clone(slots.entry(key).or_default())
    }
}

impl<V> Default for SingleFlightCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
