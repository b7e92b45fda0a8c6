use super::Gallery;
use crate::input::PointerSample;
use crate::render::RenderSink;

/// What the host hands the gallery each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Seconds since the session started. Drives the float bob and the
    /// particle jitter.
    pub elapsed: f64,
    /// Seconds since the previous frame. No step scales by it.
    pub dt: f64,
    /// Pointer state for this frame.
    pub pointer: PointerSample,
}

/// Summary of the apply phase of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Items whose transforms reached the sink.
    pub applied: usize,
    /// Items still waiting for their renderable.
    pub pending: usize,
}

impl Gallery {
    /// Run one frame.
    ///
    /// Drains queued events, advances every item and particle cloud, lets
    /// the camera follow the pointer (unless a drag is active), drifts the
    /// backdrop, then pushes the results into `sink`. Items without a
    /// renderable are still animated; only their apply is skipped, and
    /// they are picked up automatically on the first frame after their
    /// renderable arrives.
    pub fn tick(
        &mut self,
        frame: FrameInput,
        sink: &mut dyn RenderSink,
    ) -> FrameReport {
        log::trace!("tick t={:.3}s dt={:.4}s", frame.elapsed, frame.dt);
        let _ = self.events.drain_into(&mut self.store);

        self.driver.advance(&mut self.store, frame.elapsed);
        let _ = self.rig.follow(frame.pointer);

        let mut report = FrameReport::default();
        for item in self.store.iter() {
            if let Some(handle) = item.renderable() {
                sink.apply_item(handle, &item.presented());
                sink.apply_particles(handle, item.particles());
                report.applied += 1;
            } else {
                report.pending += 1;
            }
        }
        sink.apply_camera(self.rig.camera());
        sink.apply_backdrop(self.driver.backdrop_rotation());

        if report.pending > 0 {
            log::trace!("{} item(s) still loading", report.pending);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::gallery::GalleryEvent;
    use crate::options::Options;
    use crate::render::RenderableHandle;
    use crate::test_utils::RecordingSink;

    fn frame(n: u32, pointer: PointerSample) -> FrameInput {
        FrameInput {
            elapsed: f64::from(n) / 60.0,
            dt: 1.0 / 60.0,
            pointer,
        }
    }

    fn idle(n: u32) -> FrameInput {
        frame(n, PointerSample::default())
    }

    fn ready(index: usize) -> GalleryEvent {
        GalleryEvent::RenderableReady {
            index,
            handle: RenderableHandle(100 + index as u64),
        }
    }

    #[test]
    fn empty_gallery_ticks_cleanly() {
        let mut gallery = Gallery::new(Options::default());
        let mut sink = RecordingSink::default();
        let report = gallery.tick(idle(0), &mut sink);
        assert_eq!(report, FrameReport::default());
        assert!(sink.items.is_empty());
        assert_eq!(sink.cameras.len(), 1);
        assert_eq!(sink.backdrops.len(), 1);
    }

    #[test]
    fn pending_items_are_animated_but_not_applied() {
        let mut gallery = Gallery::with_samples(Options::default());
        gallery.post_event(ready(1));
        gallery.post_event(ready(4));

        let mut sink = RecordingSink::default();
        let report = gallery.tick(idle(1), &mut sink);
        assert_eq!(report, FrameReport { applied: 2, pending: 4 });
        let expected = vec![RenderableHandle(101), RenderableHandle(104)];
        assert_eq!(sink.applied_handles(), expected);
        assert_eq!(sink.particle_handles, expected);

        // Item 0 has no renderable yet but still moved toward its target.
        let item = gallery.item(0).unwrap();
        assert_ne!(item.current().position, Vec3::ZERO);
    }

    #[test]
    fn late_renderable_is_picked_up_next_frame() {
        let mut gallery = Gallery::with_samples(Options::default());
        let mut sink = RecordingSink::default();
        for n in 0..5 {
            let report = gallery.tick(idle(n), &mut sink);
            assert_eq!(report.applied, 0);
        }
        gallery.post_event(ready(3));
        sink.clear();
        let report = gallery.tick(idle(5), &mut sink);
        assert_eq!(report.applied, 1);
        // Handed over where the item actually is, bob included.
        let item = gallery.item(3).unwrap();
        assert_eq!(sink.items, vec![(RenderableHandle(103), item.presented())]);
    }

    #[test]
    fn camera_freezes_while_dragging() {
        let mut gallery = Gallery::new(Options::default());
        let mut sink = RecordingSink::default();
        let pointer = PointerSample {
            x: 1.0,
            y: 0.5,
            drag_active: false,
        };
        for n in 0..20 {
            let _ = gallery.tick(frame(n, pointer), &mut sink);
        }
        let before = gallery.camera().eye();
        assert!(before.x > 0.0);

        let dragging = PointerSample {
            drag_active: true,
            ..pointer
        };
        for n in 20..40 {
            let _ = gallery.tick(frame(n, dragging), &mut sink);
        }
        assert_eq!(gallery.camera().eye(), before);
        assert_eq!(sink.cameras.last().copied(), Some(before));

        let _ = gallery.tick(frame(40, pointer), &mut sink);
        assert!(gallery.camera().eye().x > before.x);
    }

    #[test]
    fn backdrop_drifts_every_tick() {
        let mut gallery = Gallery::new(Options::default());
        let mut sink = RecordingSink::default();
        for n in 0..100 {
            let _ = gallery.tick(idle(n), &mut sink);
        }
        let last = sink.backdrops.last().copied().unwrap();
        assert!((last - Vec3::new(0.01, 0.02, 0.0)).length() < 1e-5);
    }

    #[test]
    fn dt_does_not_change_the_step() {
        let mut a = Gallery::with_samples(Options {
            animation: crate::options::AnimationOptions {
                seed: Some(3),
                ..Default::default()
            },
            ..Default::default()
        });
        let mut b = a.clone();
        let mut sink = RecordingSink::default();
        let _ = a.tick(
            FrameInput {
                elapsed: 1.0,
                dt: 1.0 / 30.0,
                pointer: PointerSample::default(),
            },
            &mut sink,
        );
        let _ = b.tick(
            FrameInput {
                elapsed: 1.0,
                dt: 1.0 / 240.0,
                pointer: PointerSample::default(),
            },
            &mut sink,
        );
        for (x, y) in a.items().iter().zip(b.items().iter()) {
            assert_eq!(x.current(), y.current());
        }
    }
}
