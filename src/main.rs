//! Headless gallery host.
//!
//! Runs the frame loop without a window: renderables "finish decoding" one
//! per frame, the pointer circles the viewport, and the layout cycles
//! through every formation. Progress is logged; set `RUST_LOG=info` (or
//! `debug`/`trace`) to see it.

use std::f32::consts::TAU;
use std::path::PathBuf;

use glam::Vec3;
use memora::gallery::{FrameInput, Gallery};
use memora::input::{InputEvent, InputProcessor, MouseButton};
use memora::options::Options;
use memora::render::{InstanceCollector, RenderableHandle};
use memora::store::metadata::load_manifest;
use memora::util::frame_timing::FrameTiming;
use memora::GalleryError;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const TARGET_FPS: u32 = 60;
const LAYOUT_KEYS: [&str; 4] = ["Digit1", "Digit2", "Digit3", "Digit4"];

struct Args {
    manifest: Option<PathBuf>,
    options: Option<PathBuf>,
    frames: u32,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        manifest: None,
        options: None,
        frames: 10 * TARGET_FPS,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--options" => {
                args.options =
                    Some(it.next().ok_or("--options needs a path")?.into());
            }
            "--frames" => {
                let n = it.next().ok_or("--frames needs a count")?;
                args.frames =
                    n.parse().map_err(|_| format!("bad frame count {n:?}"))?;
            }
            _ if args.manifest.is_none() => args.manifest = Some(arg.into()),
            _ => return Err(format!("unexpected argument {arg:?}")),
        }
    }
    Ok(args)
}

fn build_gallery(args: &Args) -> Result<Gallery, GalleryError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let Some(path) = &args.manifest else {
        return Ok(Gallery::with_samples(options));
    };
    let memories = load_manifest(path)?;
    log::info!("{} memories from {}", memories.len(), path.display());
    let mut gallery = Gallery::new(options);
    for memory in memories {
        let _ = gallery.add_item(memory);
    }
    let _ = gallery.rearrange();
    Ok(gallery)
}

/// Cursor position on a circle around the viewport center.
fn circling_cursor(frame: u32) -> InputEvent {
    let angle = frame as f32 / 240.0 * TAU;
    InputEvent::CursorMoved {
        x: (WIDTH as f32 / 2.0) * (1.0 + 0.8 * angle.cos()),
        y: (HEIGHT as f32 / 2.0) * (1.0 + 0.8 * angle.sin()),
    }
}

fn run(mut gallery: Gallery, frames: u32) {
    let mut input = InputProcessor::with_key_bindings(
        WIDTH,
        HEIGHT,
        gallery.options().keybindings.clone(),
    );
    if let Some(cmd) = input.handle_event(InputEvent::Resized {
        width: WIDTH,
        height: HEIGHT,
    }) {
        gallery.execute(cmd);
    }

    let mut timing = FrameTiming::new(TARGET_FPS);
    let mut sink = InstanceCollector::new();
    let mut next_ready = 0;

    for frame in 0..frames {
        std::thread::sleep(timing.time_until_next_frame());

        // Asset decode finishes for one item per frame.
        if next_ready < gallery.len() {
            let handle = RenderableHandle(next_ready as u64);
            gallery.renderable_ready(next_ready, handle);
            next_ready += 1;
        }

        let _ = input.handle_event(circling_cursor(frame));
        if frame % 150 == 75 {
            let pressed = !input.drag_active();
            let _ = input.handle_event(InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            });
        }
        if frame > 0 && frame % 120 == 0 {
            let key = LAYOUT_KEYS[(frame / 120) as usize % LAYOUT_KEYS.len()];
            if let Some(cmd) = input.handle_key_press(key) {
                gallery.execute(cmd);
            }
        }

        sink.clear();
        let pointer = input.sample();
        let report = gallery.tick(
            FrameInput {
                elapsed: timing.elapsed_secs(),
                dt: timing.last_dt_secs(),
                pointer,
            },
            &mut sink,
        );
        timing.end_frame();

        if frame % TARGET_FPS == 0 {
            let eye = gallery.camera().eye();
            let gaze = gallery.camera().camera().orientation() * Vec3::NEG_Z;
            let (cx, cy) = input.cursor();
            log::info!(
                "frame {frame}: {} applied, {} pending, {:.0}% loaded, \
                 layout {}, {:.1} fps",
                report.applied,
                report.pending,
                gallery.loading_progress() * 100.0,
                gallery.layout(),
                timing.fps(),
            );
            log::info!(
                "  eye ({:.0}, {:.0}, {:.0}) gaze ({:.2}, {:.2}, {:.2}), \
                 cursor ({cx:.0}, {cy:.0}) heading {:.0}°",
                eye.x,
                eye.y,
                eye.z,
                gaze.x,
                gaze.y,
                gaze.z,
                pointer.heading_degrees(),
            );
        }
    }
    log::info!(
        "done: {} ticks, {} instances ({} bytes) in the last frame, \
         {} particle points",
        gallery.driver().ticks(),
        sink.instances().len(),
        sink.instance_bytes().len(),
        sink.particle_points(),
    );
}

fn main() {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!(
                "Usage: memora [manifest.json] [--options preset.toml] \
                 [--frames N]"
            );
            std::process::exit(2);
        }
    };

    let gallery = match build_gallery(&args) {
        Ok(gallery) => gallery,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    run(gallery, args.frames);
}
