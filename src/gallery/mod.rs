//! The gallery context: every component of one session in one owned value.
//!
//! A host builds a [`Gallery`] once, feeds it [`GalleryCommand`]s and
//! [`GalleryEvent`]s between frames, and calls
//! [`tick`](Gallery::tick) once per frame.

mod command;
mod events;
mod frame;

pub use command::GalleryCommand;
pub use events::GalleryEvent;
pub use frame::{FrameInput, FrameReport};

use self::events::EventQueue;
use crate::animation::AnimationDriver;
use crate::camera::CameraRig;
use crate::error::GalleryError;
use crate::layout::{LayoutKind, ViewController};
use crate::options::Options;
use crate::render::RenderableHandle;
use crate::store::metadata::sample_memories;
use crate::store::{ItemStore, MediaItem, MemoryMetadata};

/// Aspect ratio assumed until the host reports a viewport size.
const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// One gallery session.
#[derive(Debug, Clone)]
pub struct Gallery {
    options: Options,
    store: ItemStore,
    view: ViewController,
    driver: AnimationDriver,
    rig: CameraRig,
    events: EventQueue,
}

impl Gallery {
    /// Empty gallery configured from `options`.
    ///
    /// Per-item random constants derive from `options.animation.seed`, or
    /// from a freshly drawn seed when none is set.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let seed = options.animation.seed.unwrap_or_else(rand::random);
        log::info!(
            "gallery: layout {}, seed {seed:#x}",
            options.layout.initial
        );
        Self {
            store: ItemStore::new(seed),
            view: ViewController::new(options.layout.initial),
            driver: AnimationDriver::new(&options.animation),
            rig: CameraRig::new(&options.camera, DEFAULT_ASPECT),
            events: EventQueue::default(),
            options,
        }
    }

    /// Gallery holding the six built-in memories, already arranged in the
    /// initial layout.
    #[must_use]
    pub fn with_samples(options: Options) -> Self {
        let mut gallery = Self::new(options);
        for memory in sample_memories() {
            let _ = gallery.add_item(memory);
        }
        let _ = gallery.rearrange();
        gallery
    }

    // -- Items ------------------------------------------------------------

    /// Append an item and return its index, which is the item count before
    /// the call.
    ///
    /// The new item sits at the origin until the next arrangement pass;
    /// other items keep converging undisturbed. Call
    /// [`rearrange`](Self::rearrange) to place it.
    pub fn add_item(&mut self, metadata: MemoryMetadata) -> usize {
        self.store
            .push(metadata, &self.options.animation, &self.options.particles)
    }

    /// Metadata of item `index`, for display after a pick.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&MemoryMetadata> {
        self.store.get(index).map(MediaItem::metadata)
    }

    /// Item `index` with its animation state.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&MediaItem> {
        self.store.get(index)
    }

    /// All items.
    #[must_use]
    pub fn items(&self) -> &ItemStore {
        &self.store
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the gallery has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Fraction of items whose renderable has arrived; `1.0` when there is
    /// nothing to load.
    #[must_use]
    pub fn loading_progress(&self) -> f32 {
        let total = self.store.len();
        if total == 0 {
            return 1.0;
        }
        self.store.ready_count() as f32 / total as f32
    }

    // -- Layout -----------------------------------------------------------

    /// Switch every item to `kind`. Returns the number of targets written.
    pub fn set_layout(&mut self, kind: LayoutKind) -> usize {
        self.view.set_layout(kind, &mut self.store)
    }

    /// Switch to the layout called `name` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::UnknownLayout`] and changes nothing when the
    /// name is not one of the four formations.
    pub fn set_layout_by_name(
        &mut self,
        name: &str,
    ) -> Result<usize, GalleryError> {
        self.view.set_layout_by_name(name, &mut self.store)
    }

    /// Recompute every target for the active layout and current count.
    pub fn rearrange(&mut self) -> usize {
        self.view.rearrange(&mut self.store)
    }

    /// The active layout.
    #[must_use]
    pub fn layout(&self) -> LayoutKind {
        self.view.active()
    }

    // -- Events and commands ----------------------------------------------

    /// Queue an event for the start of the next tick.
    pub fn post_event(&mut self, event: GalleryEvent) {
        self.events.post(event);
    }

    /// Shorthand for posting [`GalleryEvent::RenderableReady`].
    pub fn renderable_ready(&mut self, index: usize, handle: RenderableHandle) {
        self.post_event(GalleryEvent::RenderableReady { index, handle });
    }

    /// Number of events waiting for the next tick.
    #[must_use]
    pub fn queued_events(&self) -> usize {
        self.events.len()
    }

    /// Carry out a command immediately.
    pub fn execute(&mut self, command: GalleryCommand) {
        match command {
            GalleryCommand::SetLayout { kind } => {
                let _ = self.set_layout(kind);
            }
            GalleryCommand::Rearrange => {
                let _ = self.rearrange();
            }
            GalleryCommand::NudgeCamera { direction } => {
                self.rig.nudge(direction);
            }
            GalleryCommand::ResetCamera => self.rig.reset(),
            GalleryCommand::Resize { width, height } => {
                self.resize(width, height);
            }
        }
    }

    // -- Accessors --------------------------------------------------------

    /// The camera rig.
    #[must_use]
    pub fn camera(&self) -> &CameraRig {
        &self.rig
    }

    /// Update the camera aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.rig.resize(width, height);
    }

    /// The options this gallery was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The animation driver (tick count, backdrop rotation).
    #[must_use]
    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }
}
