//! Notifications posted between ticks and consumed at the start of the
//! next one.

use std::collections::VecDeque;

use crate::render::RenderableHandle;
use crate::store::ItemStore;

/// Something that happened outside the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryEvent {
    /// The asset for item `index` finished decoding and the renderer
    /// created `handle` for it.
    RenderableReady {
        /// Item the renderable belongs to.
        index: usize,
        /// The renderer's id for it.
        handle: RenderableHandle,
    },
}

/// FIFO of events waiting for the next tick.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventQueue {
    pending: VecDeque<GalleryEvent>,
}

impl EventQueue {
    pub(crate) fn post(&mut self, event: GalleryEvent) {
        self.pending.push_back(event);
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    /// Apply every queued event to `store`, oldest first. Returns how many
    /// renderables were attached.
    ///
    /// Events for items that do not exist, and second events for an item
    /// that already has a renderable, are dropped with a warning.
    pub(crate) fn drain_into(&mut self, store: &mut ItemStore) -> usize {
        let mut attached = 0;
        for event in self.pending.drain(..) {
            match event {
                GalleryEvent::RenderableReady { index, handle } => {
                    let Some(item) = store.get_mut(index) else {
                        log::warn!(
                            "renderable {handle:?} for unknown item {index}"
                        );
                        continue;
                    };
                    if item.attach_renderable(handle) {
                        log::debug!("item {index} ready as {handle:?}");
                        attached += 1;
                    } else {
                        log::warn!(
                            "item {index} already has a renderable; \
                             ignoring {handle:?}"
                        );
                    }
                }
            }
        }
        attached
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::seeded_store;

    fn ready(index: usize, handle: u64) -> GalleryEvent {
        GalleryEvent::RenderableReady {
            index,
            handle: RenderableHandle(handle),
        }
    }

    #[test]
    fn drain_attaches_in_order_and_empties() {
        let mut store = seeded_store(3);
        let mut queue = EventQueue::default();
        queue.post(ready(2, 20));
        queue.post(ready(0, 10));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.drain_into(&mut store), 2);
        assert_eq!(queue.len(), 0);
        let handle = |i| store.get(i).unwrap().renderable();
        assert_eq!(handle(0), Some(RenderableHandle(10)));
        assert!(handle(1).is_none());
        assert_eq!(handle(2), Some(RenderableHandle(20)));
    }

    #[test]
    fn orphans_and_duplicates_are_dropped() {
        let mut store = seeded_store(1);
        let mut queue = EventQueue::default();
        queue.post(ready(0, 1));
        queue.post(ready(0, 2));
        queue.post(ready(5, 3));
        assert_eq!(queue.drain_into(&mut store), 1);
        let item = store.get(0).unwrap();
        assert_eq!(item.renderable(), Some(RenderableHandle(1)));
    }
}
