//! Simulation state
//!
//! `World` is the explicitly constructed context a frame driver owns: level, balls,
//! camera, tuning and the split/launch state machine. Nothing here is global, so
//! several worlds can run side by side.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::camera::Camera;
use super::level::Level;
use crate::error::Result;
use crate::settings::Settings;

/// Stable handle to a ball. Never reused within a `BallSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BallId(pub u32);

/// Ordered ball registry with one designated player
#[derive(Debug, Clone)]
pub struct BallSet {
    /// Insertion order is merge priority
    entries: Vec<(BallId, Ball)>,
    player: BallId,
    next_id: u32,
}

impl BallSet {
    pub fn new(player: Ball) -> Self {
        Self {
            entries: vec![(BallId(0), player)],
            player: BallId(0),
            next_id: 1,
        }
    }

    pub fn insert(&mut self, ball: Ball) -> BallId {
        let id = BallId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, ball));
        id
    }

    fn index_of(&self, id: BallId) -> Option<usize> {
        self.entries.iter().position(|(e, _)| *e == id)
    }

    pub fn contains(&self, id: BallId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: BallId) -> Option<&Ball> {
        self.entries.iter().find(|(e, _)| *e == id).map(|(_, b)| b)
    }

    pub fn get_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.entries.iter_mut().find(|(e, _)| *e == id).map(|(_, b)| b)
    }

    #[inline]
    pub fn player_id(&self) -> BallId {
        self.player
    }

    fn player_index(&self) -> usize {
        self.index_of(self.player)
            .expect("player ball is never removed from its set")
    }

    pub fn player(&self) -> &Ball {
        &self.entries[self.player_index()].1
    }

    pub fn player_mut(&mut self) -> &mut Ball {
        let i = self.player_index();
        &mut self.entries[i].1
    }

    /// Hand the player role to another member. Returns false if `id` is not a member.
    pub fn set_player(&mut self, id: BallId) -> bool {
        if self.contains(id) {
            self.player = id;
            true
        } else {
            false
        }
    }

    /// Drop every marked ball in one filtering pass. The player is never dropped.
    pub fn remove_marked(&mut self, marked: &HashSet<BallId>) {
        let player = self.player;
        self.entries
            .retain(|(id, _)| *id == player || !marked.contains(id));
    }

    /// Drop every ball except the player
    pub fn clear_non_player(&mut self) {
        let player = self.player;
        self.entries.retain(|(id, _)| *id == player);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = BallId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BallId, &Ball)> {
        self.entries.iter().map(|(id, b)| (*id, b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BallId, &mut Ball)> {
        self.entries.iter_mut().map(|(id, b)| (*id, b))
    }
}

/// Split/launch state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    /// Player moves normally
    Idle,
    /// A split-off ball is pinned to the player, waiting for release
    Charging { ball: BallId },
}

/// Notable things that happened during a tick, for effects and audio collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Player split; `child` is the held ball
    Split { child: BallId, radius: f32 },
    /// Held ball launched and became the player. Emit a cosmetic burst here.
    Launch {
        ball: BallId,
        position: Vec2,
        direction: Vec2,
        particles: u32,
    },
    /// `survivor` absorbed `absorbed`
    Merge {
        survivor: BallId,
        absorbed: BallId,
        radius: f32,
    },
    Reset,
}

/// One running simulation
#[derive(Debug, Clone)]
pub struct World {
    pub level: Level,
    pub settings: Settings,
    pub balls: BallSet,
    pub camera: Camera,
    pub charge: Charge,
    /// Last aim direction outside the deadzone (unit length)
    pub aim: Vec2,
    /// Whether the player touched a surface on the last step
    pub grounded: bool,
    /// Simulated time (ms)
    pub time_ms: f64,
    events: Vec<GameEvent>,
}

impl World {
    pub fn new(level: Level, settings: Settings) -> Result<Self> {
        let player = Ball::new(level.spawn, level.player_radius)?;
        let mut camera = Camera::new(&settings.camera)?;
        camera.target = level.spawn;
        camera.center();

        log::info!(
            "World created: {} primitives, spawn {:?}, player radius {}",
            level.primitives.len(),
            level.spawn,
            level.player_radius
        );

        Ok(Self {
            level,
            settings,
            balls: BallSet::new(player),
            camera,
            charge: Charge::Idle,
            aim: Vec2::Y,
            grounded: false,
            time_ms: 0.0,
            events: Vec::new(),
        })
    }

    #[inline]
    pub fn player(&self) -> &Ball {
        self.balls.player()
    }

    /// The ball currently held by a charge, if any
    pub fn charging_ball(&self) -> Option<BallId> {
        match self.charge {
            Charge::Charging { ball } => Some(ball),
            Charge::Idle => None,
        }
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        log::debug!("{:?}", event);
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Back to spawn with a single full-size player and no charge
    pub fn reset(&mut self) -> Result<()> {
        self.balls.clear_non_player();
        let spawn = self.level.spawn;
        let radius = self.level.player_radius;
        let player = self.balls.player_mut();
        player.set_radius(radius)?;
        player.pos = spawn;
        player.vel = Vec2::ZERO;
        player.acc = Vec2::ZERO;
        player.cooldown_ms = 0.0;

        self.charge = Charge::Idle;
        self.grounded = false;
        if let Some(f) = self.settings.camera.frame_size_per_radius {
            self.camera.set_frame_size(radius * f);
        }
        self.camera.target = spawn;
        self.camera.center();

        log::info!("World reset to spawn {:?}", spawn);
        self.emit(GameEvent::Reset);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(x: f32, r: f32) -> Ball {
        Ball::new(Vec2::new(x, 0.0), r).unwrap()
    }

    #[test]
    fn test_ids_are_stable_and_unique() {
        let mut set = BallSet::new(ball(0.0, 1.0));
        let a = set.insert(ball(1.0, 1.0));
        let b = set.insert(ball(2.0, 1.0));
        assert_ne!(a, b);

        set.remove_marked(&HashSet::from([a]));
        let c = set.insert(ball(3.0, 1.0));
        assert_ne!(c, a);
        assert_eq!(set.get(b).unwrap().pos.x, 2.0);
        assert!(set.get(a).is_none());
    }

    #[test]
    fn test_remove_marked_keeps_order_and_player() {
        let mut set = BallSet::new(ball(0.0, 1.0));
        let player = set.player_id();
        let ids: Vec<_> = (1..6).map(|i| set.insert(ball(i as f32, 1.0))).collect();

        let marked = HashSet::from([player, ids[0], ids[2], ids[3]]);
        set.remove_marked(&marked);
        assert_eq!(set.ids().collect::<Vec<_>>(), vec![player, ids[1], ids[4]]);
    }

    #[test]
    fn test_set_player_requires_membership() {
        let mut set = BallSet::new(ball(0.0, 1.0));
        let a = set.insert(ball(5.0, 0.5));
        assert!(set.set_player(a));
        assert_eq!(set.player().pos.x, 5.0);
        assert!(!set.set_player(BallId(99)));
        assert_eq!(set.player_id(), a);
    }

    #[test]
    fn test_clear_non_player() {
        let mut set = BallSet::new(ball(0.0, 1.0));
        let a = set.insert(ball(1.0, 1.0));
        set.insert(ball(2.0, 1.0));
        set.set_player(a);
        set.clear_non_player();
        assert_eq!(set.len(), 1);
        assert_eq!(set.player_id(), a);
    }

    #[test]
    fn test_world_reset_restores_spawn() {
        let level = Level::new(Vec2::new(3.0, 4.0), 2.0);
        let mut world = World::new(level, Settings::default()).unwrap();
        world.balls.insert(ball(10.0, 1.0));
        {
            let p = world.balls.player_mut();
            p.pos = Vec2::new(-50.0, 8.0);
            p.vel = Vec2::new(3.0, 3.0);
            p.set_radius(0.5).unwrap();
        }
        world.charge = Charge::Charging { ball: BallId(1) };

        world.reset().unwrap();
        assert_eq!(world.balls.len(), 1);
        assert_eq!(world.player().pos, Vec2::new(3.0, 4.0));
        assert_eq!(world.player().vel, Vec2::ZERO);
        assert_eq!(world.player().radius(), 2.0);
        assert_eq!(world.charge, Charge::Idle);
        assert_eq!(world.camera.position, Vec2::new(3.0, 4.0));
        assert_eq!(world.drain_events(), vec![GameEvent::Reset]);
        assert!(world.drain_events().is_empty());
    }
}
