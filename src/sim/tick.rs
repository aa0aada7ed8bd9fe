//! Per-frame simulation step
//!
//! Order within a frame:
//! reset -> aim -> jump -> split/launch -> input acceleration -> integrate -> merge -> camera

use std::collections::HashSet;

use glam::Vec2;

use super::ball::{Ball, merged_radius, split_radius};
use super::input::FrameInput;
use super::state::{BallId, BallSet, Charge, GameEvent, World};
use crate::error::Result;

/// Advance the world by one frame of `delta_ms` milliseconds
pub fn tick(world: &mut World, input: &FrameInput, delta_ms: f32) -> Result<()> {
    let bindings = world.settings.bindings.clone();
    world.time_ms += f64::from(delta_ms);

    if input.pressed(bindings.reset) {
        world.reset()?;
    }

    update_aim(world, input.right_stick);

    if input.pressed(bindings.jump) {
        jump(world);
    }

    let charge = world.charge;
    match charge {
        Charge::Idle if input.pressed(bindings.split) => begin_split(world)?,
        // A lost release edge still ends the charge once the button is up
        Charge::Charging { ball }
            if input.released(bindings.split) || !input.held(bindings.split) =>
        {
            launch(world, ball)
        }
        _ => {}
    }

    let steer = input.left_stick * world.settings.physics.move_acceleration;
    world.balls.player_mut().acc += steer;

    integrate(world, delta_ms);
    hold_charging_ball(world);

    let cooldown_ms = world.settings.fission.cooldown_ms;
    for event in merge_overlapping(&mut world.balls, cooldown_ms) {
        world.emit(event);
    }

    update_camera(world, input.pressed(bindings.recenter), delta_ms)
}

/// Keep the last aim direction whose magnitude clears the deadzone
fn update_aim(world: &mut World, stick: Vec2) {
    if stick.length() > world.settings.fission.aim_deadzone {
        world.aim = stick.normalize_or_zero();
    }
}

fn jump(world: &mut World) {
    if !world.grounded {
        return;
    }
    let up = -world.settings.physics.gravity.normalize_or_zero();
    let speed = world.settings.physics.jump_speed;
    let player = world.balls.player_mut();
    let kick = up * speed * player.radius();
    player.vel += kick;
    world.grounded = false;
}

/// Split the player into two equal-area halves and hold the new half
fn begin_split(world: &mut World) -> Result<()> {
    let player = world.balls.player();
    if !world.grounded || player.is_cooling_down() {
        return Ok(());
    }

    let cooldown_ms = world.settings.fission.cooldown_ms;
    let radius = split_radius(player.radius());
    let mut child = Ball::new(player.pos, radius)?;
    child.vel = player.vel;
    child.cooldown_ms = cooldown_ms;

    let player = world.balls.player_mut();
    player.set_radius(radius)?;
    player.cooldown_ms = cooldown_ms;

    let child = world.balls.insert(child);
    world.charge = Charge::Charging { ball: child };
    log::info!("Split: child {:?} radius {}", child, radius);
    world.emit(GameEvent::Split { child, radius });
    Ok(())
}

/// Release the held ball along the aim; it becomes the player
fn launch(world: &mut World, ball: BallId) {
    world.charge = Charge::Idle;

    let cooldown_ms = world.settings.fission.cooldown_ms;
    let boost = world.settings.fission.boost_scale;
    let aim = world.aim;

    let player = world.balls.player_mut();
    player.cooldown_ms = cooldown_ms;
    let launch_vel = player.vel + aim * boost * player.radius();

    let Some(child) = world.balls.get_mut(ball) else {
        log::warn!("Charging ball {:?} vanished before launch", ball);
        return;
    };
    child.vel = launch_vel;
    child.cooldown_ms = cooldown_ms;
    let position = child.pos;

    world.balls.set_player(ball);
    world.grounded = false;
    log::info!("Launch: {:?} is now the player", ball);
    let particles = world.settings.fission.burst_particles;
    world.emit(GameEvent::Launch {
        ball,
        position,
        direction: aim,
        particles,
    });
}

/// Step every free ball against the level. The held ball is placed, not integrated.
fn integrate(world: &mut World, delta_ms: f32) {
    let held = world.charging_ball();
    let player_id = world.balls.player_id();
    let primitives = &world.level.primitives;
    let physics = &world.settings.physics;

    let mut grounded = world.grounded;
    for (id, ball) in world.balls.iter_mut() {
        if Some(id) == held {
            continue;
        }
        let touching = ball.update(delta_ms, primitives, physics);
        if id == player_id {
            grounded = touching;
        }
    }
    world.grounded = grounded;
}

/// Pin the held ball to the player's center so it never sits across a surface
fn hold_charging_ball(world: &mut World) {
    let Some(held) = world.charging_ball() else {
        return;
    };
    let cooldown_ms = world.settings.fission.cooldown_ms;

    let player = world.balls.player_mut();
    player.cooldown_ms = player.cooldown_ms.max(cooldown_ms);
    let (anchor, vel) = (player.pos, player.vel);

    match world.balls.get_mut(held) {
        Some(child) => {
            child.pos = anchor;
            child.vel = vel;
            child.acc = Vec2::ZERO;
            child.cooldown_ms = child.cooldown_ms.max(cooldown_ms);
        }
        None => world.charge = Charge::Idle,
    }
}

/// Coalesce overlapping, cooled-down balls.
///
/// Pairs are visited over a snapshot of the ids; absorbed balls are only marked and
/// removed in one filtering pass at the end. The survivor is the earlier ball unless the
/// later one is the player, which is never absorbed.
pub fn merge_overlapping(balls: &mut BallSet, cooldown_ms: f32) -> Vec<GameEvent> {
    let ids: Vec<BallId> = balls.ids().collect();
    let player = balls.player_id();
    let mut absorbed: HashSet<BallId> = HashSet::new();
    let mut events = Vec::new();

    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            if absorbed.contains(&a) {
                break;
            }
            if absorbed.contains(&b) {
                continue;
            }
            let (Some(ball_a), Some(ball_b)) = (balls.get(a), balls.get(b)) else {
                continue;
            };
            if ball_a.is_cooling_down() || ball_b.is_cooling_down() || !ball_a.overlaps(ball_b) {
                continue;
            }

            let radius = merged_radius(ball_a.radius(), ball_b.radius());
            let (survivor, victim) = if b == player { (b, a) } else { (a, b) };

            let Some(keep) = balls.get_mut(survivor) else {
                continue;
            };
            // Both radii are positive, so the merged radius is too
            if keep.set_radius(radius).is_err() {
                continue;
            }
            keep.cooldown_ms = cooldown_ms;
            absorbed.insert(victim);
            log::debug!("Merge: {:?} absorbed {:?} -> radius {}", survivor, victim, radius);
            events.push(GameEvent::Merge {
                survivor,
                absorbed: victim,
                radius,
            });
        }
    }

    balls.remove_marked(&absorbed);
    events
}

fn update_camera(world: &mut World, recenter: bool, delta_ms: f32) -> Result<()> {
    let player = world.balls.player();
    if let Some(factor) = world.settings.camera.frame_size_per_radius {
        world.camera.set_frame_size(player.radius() * factor);
    }
    world.camera.target = player.pos;
    if recenter {
        world.camera.center();
    }
    world
        .camera
        .update(delta_ms / 1000.0)
        .inspect_err(|e| log::warn!("Camera update failed: {}", e))
}
