//! Locking for players shared across threads.

use crate::player::Player;

#[cfg(feature = "std")]
pub(crate) struct Mutex<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Mutex<T> {
    pub(crate) const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub(crate) fn lock(&self) -> std::sync::MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub(crate) fn into_inner(self) -> T {
        self.0
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub(crate) use spin::Mutex;

/// A [`Player`] guarded by a mutex.
///
/// [`Player`] itself does no locking. Wrap it in this type (for example
/// inside an `Arc`) when several threads mutate the same hand.
pub struct SharedPlayer {
    inner: Mutex<Player>,
}

impl SharedPlayer {
    /// Wraps a player.
    #[must_use]
    pub const fn new(player: Player) -> Self {
        Self {
            inner: Mutex::new(player),
        }
    }

    /// Runs `f` with exclusive access to the player.
    pub fn with<R>(&self, f: impl FnOnce(&mut Player) -> R) -> R {
        let mut player = self.inner.lock();
        f(&mut player)
    }

    /// Returns a copy of the player as it is now.
    #[must_use]
    pub fn snapshot(&self) -> Player {
        self.with(|player| player.clone())
    }

    /// Unwraps the player.
    #[must_use]
    pub fn into_inner(self) -> Player {
        self.inner.into_inner()
    }
}

impl From<Player> for SharedPlayer {
    fn from(player: Player) -> Self {
        Self::new(player)
    }
}

impl core::fmt::Debug for SharedPlayer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedPlayer").finish_non_exhaustive()
    }
}
