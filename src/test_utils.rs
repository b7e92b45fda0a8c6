use glam::Vec3;

use crate::animation::{ParticleField, Transform};
use crate::camera::Camera;
use crate::render::{RenderSink, RenderableHandle};
use crate::store::metadata::sample_memories;
use crate::store::ItemStore;

/// Store holding `n` items (the sample memories, repeated as needed) with
/// default options and a fixed master seed.
pub(crate) fn seeded_store(n: usize) -> ItemStore {
    let mut store = ItemStore::new(0x5eed);
    for memory in sample_memories().into_iter().cycle().take(n) {
        let _ = store.push(memory, &Default::default(), &Default::default());
    }
    store
}

/// Sink that records everything it is handed.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub(crate) items: Vec<(RenderableHandle, Transform)>,
    pub(crate) particle_handles: Vec<RenderableHandle>,
    pub(crate) cameras: Vec<Vec3>,
    pub(crate) backdrops: Vec<Vec3>,
}

impl RecordingSink {
    pub(crate) fn applied_handles(&self) -> Vec<RenderableHandle> {
        self.items.iter().map(|(handle, _)| *handle).collect()
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

impl RenderSink for RecordingSink {
    fn apply_item(&mut self, handle: RenderableHandle, transform: &Transform) {
        self.items.push((handle, *transform));
    }

    fn apply_particles(
        &mut self,
        handle: RenderableHandle,
        _particles: &ParticleField,
    ) {
        self.particle_handles.push(handle);
    }

    fn apply_camera(&mut self, camera: &Camera) {
        self.cameras.push(camera.eye);
    }

    fn apply_backdrop(&mut self, rotation: Vec3) {
        self.backdrops.push(rotation);
    }
}
