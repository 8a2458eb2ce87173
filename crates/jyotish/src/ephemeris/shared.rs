use crate::ephemeris::Ephemeris;
use crate::error::EphemerisError;
use std::sync::Mutex;

/// An adapter guarded for exclusive access.
///
/// Every closure passed to [`SharedEphemeris::with`] runs with the lock
/// held, so a mode change and the query that depends on it cannot be
/// interleaved with another computation's calls.
pub struct SharedEphemeris<E> {
    inner: Mutex<E>,
}

impl<E: Ephemeris> SharedEphemeris<E> {
    pub fn new(adapter: E) -> Self {
        Self {
            inner: Mutex::new(adapter),
        }
    }

    pub fn with<R>(
        &self,
        f: impl FnOnce(&mut E) -> Result<R, EphemerisError>,
    ) -> Result<R, EphemerisError> {
        let mut guard = self.inner.lock().map_err(|_| EphemerisError::Poisoned)?;
        f(&mut guard)
    }
}
