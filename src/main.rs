//! Blobfall headless driver
//!
//! Builds a demo level and runs a scripted input sequence at 60 Hz. Rendering and
//! gamepad sampling belong to the host; this only exercises the simulation.

use blobfall::consts::FRAME_MS;
use blobfall::renderer::{frame_output, wireframe};
use blobfall::sim::{Button, ButtonSet, FrameInput, GameEvent, Level, World, tick};
use blobfall::{Result, Settings};
use glam::Vec2;
use std::f32::consts::PI;

fn demo_level() -> Level {
    let mut level = Level::new(Vec2::new(0.0, 40.0), 8.0);
    level
        .push_segment(Vec2::new(-300.0, 0.0), Vec2::new(300.0, 0.0))
        .push_segment(Vec2::new(-300.0, 300.0), Vec2::new(-300.0, 0.0))
        .push_segment(Vec2::new(300.0, 0.0), Vec2::new(300.0, 300.0))
        .push_rect(Vec2::new(80.0, 0.0), Vec2::new(140.0, 40.0))
        .push_arc(Vec2::new(-150.0, 60.0), 50.0, PI, 2.0 * PI);
    level
}

/// Raw button state and sticks for a frame of the script
fn scripted(frame: u32) -> (ButtonSet, Vec2, Vec2) {
    match frame {
        // Roll right
        0..=59 => (ButtonSet::EMPTY, Vec2::new(0.8, 0.0), Vec2::ZERO),
        // Settle, then charge a split aimed up-left
        60..=89 => (ButtonSet::EMPTY, Vec2::ZERO, Vec2::ZERO),
        90..=119 => (ButtonSet::EMPTY.with(Button::R1), Vec2::ZERO, Vec2::new(-0.6, 0.8)),
        // Release, then let everything fall back together
        120..=299 => (ButtonSet::EMPTY, Vec2::ZERO, Vec2::ZERO),
        // Jump, then reset
        300 => (ButtonSet::EMPTY.with(Button::L1), Vec2::ZERO, Vec2::ZERO),
        301..=359 => (ButtonSet::EMPTY, Vec2::new(-0.5, 0.0), Vec2::ZERO),
        360 => (ButtonSet::EMPTY.with(Button::L2), Vec2::ZERO, Vec2::ZERO),
        _ => (ButtonSet::EMPTY, Vec2::ZERO, Vec2::ZERO),
    }
}

fn run() -> Result<()> {
    let level = demo_level();
    log::info!("Wireframe: {} vertices", wireframe(&level.primitives).len());

    let mut world = World::new(level, Settings::default())?;
    world.camera.set_viewport(1280.0, 720.0);

    let mut held = ButtonSet::EMPTY;
    for frame in 0..400 {
        let (down, left, right) = scripted(frame);
        let input = FrameInput::advance(held, down, left, right);
        held = down;

        tick(&mut world, &input, FRAME_MS)?;

        for event in world.drain_events() {
            match event {
                GameEvent::Launch { position, particles, .. } => {
                    log::info!("frame {frame}: launch burst of {particles} at {position:?}")
                }
                other => log::info!("frame {frame}: {other:?}"),
            }
        }
    }

    let out = frame_output(&world);
    let player = world.player();
    log::info!(
        "Done after {:.0} ms: {} balls, player at {:?} r={:.2}, camera {:?}",
        world.time_ms,
        out.balls.len(),
        player.pos,
        player.radius(),
        out.camera
    );
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Blobfall (headless) starting...");

    if let Err(e) = run() {
        log::error!("Simulation failed: {e}");
        std::process::exit(1);
    }
}
