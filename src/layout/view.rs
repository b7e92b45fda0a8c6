//! Active-formation state and the full-store arrangement pass.

use super::{compute, LayoutKind};
use crate::error::GalleryError;
use crate::store::ItemStore;

/// Holds the active [`LayoutKind`] and installs targets for it.
///
/// Switching kind rewrites every item's target in one pass and never
/// touches current transforms; the visible transition is left entirely to
/// the animation driver's damping. There is no "transitioning" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewController {
    active: LayoutKind,
}

impl ViewController {
    /// Controller starting on `initial`. No targets are written until the
    /// first [`set_layout`](Self::set_layout) or
    /// [`rearrange`](Self::rearrange).
    #[must_use]
    pub fn new(initial: LayoutKind) -> Self {
        Self { active: initial }
    }

    /// The formation currently in effect.
    #[must_use]
    pub fn active(&self) -> LayoutKind {
        self.active
    }

    /// Make `kind` active and retarget every item. Any kind may follow any
    /// other, including itself. Returns the number of targets written.
    pub fn set_layout(
        &mut self,
        kind: LayoutKind,
        store: &mut ItemStore,
    ) -> usize {
        if kind != self.active {
            log::info!("layout {} -> {}", self.active, kind);
        }
        self.active = kind;
        self.rearrange(store)
    }

    /// Parse `name` and switch to it.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::UnknownLayout`] for a name outside the four
    /// formations. The active layout and every target are left as they
    /// were.
    pub fn set_layout_by_name(
        &mut self,
        name: &str,
        store: &mut ItemStore,
    ) -> Result<usize, GalleryError> {
        let kind = name.parse::<LayoutKind>().inspect_err(|_| {
            log::warn!(
                "rejected layout {name:?}; keeping {}",
                self.active
            );
        })?;
        Ok(self.set_layout(kind, store))
    }

    /// Recompute every target for the active formation against the current
    /// item count. An empty store is skipped.
    pub fn rearrange(&self, store: &mut ItemStore) -> usize {
        let total = store.len();
        if total == 0 {
            log::debug!("arrange {}: no items", self.active);
            return 0;
        }

        let mut written = 0;
        for item in store.iter_mut() {
            if let Some(target) = compute(self.active, item.index(), total) {
                item.set_target(target);
                written += 1;
            }
        }
        log::debug!("arrange {}: {written}/{total} targets", self.active);
        written
    }
}
