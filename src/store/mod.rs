//! Ordered collection of gallery items.
//!
//! Items are only ever appended. An item's index is its position in the
//! append order; it is assigned once and never reused.

pub mod metadata;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub use self::metadata::{Clarity, MediaKind, MemoryMetadata, SourceHandle};
use crate::animation::{ItemMotion, ParticleField, Transform};
use crate::options::{AnimationOptions, ParticleOptions};
use crate::render::RenderableHandle;

// ---------------------------------------------------------------------------
// MediaItem
// ---------------------------------------------------------------------------

/// One memory placed in the gallery.
#[derive(Debug, Clone)]
pub struct MediaItem {
    index: usize,
    metadata: MemoryMetadata,
    current: Transform,
    target: Option<Transform>,
    float_offset: f32,
    spin: f32,
    motion: ItemMotion,
    particles: ParticleField,
    renderable: Option<RenderableHandle>,
}

impl MediaItem {
    /// Build an item whose random constants and particle cloud all come
    /// from one generator seeded with `seed`.
    #[must_use]
    pub fn new(
        index: usize,
        metadata: MemoryMetadata,
        seed: u64,
        animation: &AnimationOptions,
        particles: &ParticleOptions,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let motion = ItemMotion::generate(&mut rng, animation.spin_range);
        let particles = ParticleField::generate(&mut rng, particles);
        Self {
            index,
            metadata,
            current: Transform::IDENTITY,
            target: None,
            float_offset: 0.0,
            spin: 0.0,
            motion,
            particles,
            renderable: None,
        }
    }

    /// Append-order index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Descriptive record. Never modified after ingestion.
    #[must_use]
    pub fn metadata(&self) -> &MemoryMetadata {
        &self.metadata
    }

    /// Damped transform, without the float bob or the spin.
    #[must_use]
    pub fn current(&self) -> Transform {
        self.current
    }

    /// Transform handed to the renderer: [`current`](Self::current) lifted
    /// by the float bob and rolled by the accumulated spin.
    #[must_use]
    pub fn presented(&self) -> Transform {
        let mut presented = self.current.lifted(self.float_offset);
        presented.orientation.z += self.spin;
        presented
    }

    /// Layout target, `None` until the first arrangement pass that
    /// includes this item.
    #[must_use]
    pub fn target(&self) -> Option<Transform> {
        self.target
    }

    /// Float bob computed on the last tick.
    #[must_use]
    pub fn float_offset(&self) -> f32 {
        self.float_offset
    }

    /// Roll accumulated from the spin rate. Grows every tick and is never
    /// damped.
    #[must_use]
    pub fn spin_angle(&self) -> f32 {
        self.spin
    }

    /// Float phase and spin rate.
    #[must_use]
    pub fn motion(&self) -> ItemMotion {
        self.motion
    }

    /// The item's particle cloud.
    #[must_use]
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Renderer handle, once the asset has been decoded.
    #[must_use]
    pub fn renderable(&self) -> Option<RenderableHandle> {
        self.renderable
    }

    /// Whether the renderer can draw this item yet.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.renderable.is_some()
    }

    pub(crate) fn set_target(&mut self, target: Transform) {
        self.target = Some(target);
    }

    pub(crate) fn current_mut(&mut self) -> &mut Transform {
        &mut self.current
    }

    pub(crate) fn set_float_offset(&mut self, offset: f32) {
        self.float_offset = offset;
    }

    pub(crate) fn advance_spin(&mut self, rate: f32) {
        self.spin += rate;
    }

    pub(crate) fn particles_mut(&mut self) -> &mut ParticleField {
        &mut self.particles
    }

    /// Attach the renderer handle. Returns `false` (and keeps the first
    /// handle) if one was already attached.
    pub(crate) fn attach_renderable(
        &mut self,
        handle: RenderableHandle,
    ) -> bool {
        if self.renderable.is_some() {
            return false;
        }
        self.renderable = Some(handle);
        true
    }
}

// ---------------------------------------------------------------------------
// ItemStore
// ---------------------------------------------------------------------------

/// Append-only list of [`MediaItem`]s plus the generator that seeds each
/// new item.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<MediaItem>,
    seeds: StdRng,
}

impl ItemStore {
    /// Empty store whose per-item seeds derive from `master_seed`.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            items: Vec::new(),
            seeds: StdRng::seed_from_u64(master_seed),
        }
    }

    /// Append an item and return its index (the previous item count).
    ///
    /// The new item starts at the origin with no target; existing items
    /// are not touched.
    pub fn push(
        &mut self,
        metadata: MemoryMetadata,
        animation: &AnimationOptions,
        particles: &ParticleOptions,
    ) -> usize {
        let index = self.items.len();
        let seed = self.seeds.random::<u64>();
        log::debug!("item {index}: {:?} ({})", metadata.title, metadata.kind);
        self.items
            .push(MediaItem::new(index, metadata, seed, animation, particles));
        index
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    /// Mutable item at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut MediaItem> {
        self.items.get_mut(index)
    }

    /// Items in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, MediaItem> {
        self.items.iter()
    }

    /// Mutable items in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MediaItem> {
        self.items.iter_mut()
    }

    /// Number of items whose renderable has arrived.
    #[must_use]
    pub fn ready_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_ready()).count()
    }
}
