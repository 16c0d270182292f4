//=========================================================================
// Play State
//=========================================================================
//
// Data owned by the play scene for one session.
//
// Architecture:
//   PlayState
//     ├─ pointer          (render space, last move wins)
//     ├─ messages         (MessageQueue)
//     ├─ projectiles ─┐
//     ├─ enemies      ├─ Roster<T>: ordered, monotonic ids
//     ├─ rays         │
//     ├─ balls       ─┘
//     ├─ inventory        (Inventory)
//     ├─ assets           (SceneAssets)
//     ├─ sound cues       (drained by the host each frame)
//     ├─ paused           (setter, no-op if unchanged)
//     └─ last_shot_at     (written by the scene only)
//
// Collaborators receive `&mut PlayState` during update and shooting; the
// pause flag and shot timestamp stay under the scene's control.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::info;

//=== Internal Dependencies ===============================================

use super::inventory::Inventory;
use crate::core::assets::{SceneAssets, SoundHandle};
use crate::core::input::Pointer;
use crate::core::messages::MessageQueue;

//=== EntityId ============================================================

/// Id handed out by a [`Roster`]. Never reused within that roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

//=== Roster ==============================================================

/// Ordered entity collection with its own monotonic id counter.
#[derive(Debug, Clone)]
pub struct Roster<T> {
    entries: Vec<(EntityId, T)>,
    next_id: u64,
}

impl<T> Roster<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends an entity and returns its id.
    pub fn spawn(&mut self, entity: T) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, entity));
        id
    }

    /// Removes the entity with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: EntityId) -> Option<T> {
        let index = self.entries.iter().position(|(entry, _)| *entry == id)?;
        Some(self.entries.remove(index).1)
    }

    /// Keeps only the entities for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(EntityId, &mut T) -> bool) {
        self.entries.retain_mut(|(id, entity)| keep(*id, entity));
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, entity)| entity)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(entry, _)| *entry == id)
            .map(|(_, entity)| entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.entries.iter().map(|(id, entity)| (*id, entity))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.entries.iter_mut().map(|(id, entity)| (*id, entity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id the next spawned entity will receive.
    pub fn next_id(&self) -> EntityId {
        EntityId(self.next_id)
    }
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Entities ============================================================
//
// Plain data. Movement, collision and damage belong to the collaborators
// that own each kind.
//

/// A fired bullet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    /// Heading in radians.
    pub angle: f32,
    pub speed: f32,
    pub damage: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub health: f32,
}

/// Beam cast by a ranged enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub length: f32,
}

/// Area attack launched by a ball enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

//=== PlayState ===========================================================

#[derive(Debug)]
pub struct PlayState {
    pub pointer: Pointer,
    pub messages: MessageQueue,
    pub projectiles: Roster<Projectile>,
    pub enemies: Roster<Enemy>,
    pub rays: Roster<Ray>,
    pub balls: Roster<Ball>,
    pub inventory: Inventory,
    pub assets: SceneAssets,

    sound_cues: Vec<SoundHandle>,
    paused: bool,
    last_shot_at: Option<Duration>,
}

impl PlayState {
    /// Fresh session state: empty collections, not paused, no shot fired.
    pub fn new(inventory: Inventory, assets: SceneAssets) -> Self {
        Self {
            pointer: Pointer::default(),
            messages: MessageQueue::new(),
            projectiles: Roster::new(),
            enemies: Roster::new(),
            rays: Roster::new(),
            balls: Roster::new(),
            inventory,
            assets,
            sound_cues: Vec::new(),
            paused: false,
            last_shot_at: None,
        }
    }

    //--- Pause ------------------------------------------------------------

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Sets the pause flag. Returns `false` if it already had that value.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        if self.paused == paused {
            return false;
        }
        self.paused = paused;
        info!("Scene {}", if paused { "paused" } else { "resumed" });
        true
    }

    //--- Shots ------------------------------------------------------------

    /// Time of the last accepted shot, `None` before the first one.
    pub fn last_shot_at(&self) -> Option<Duration> {
        self.last_shot_at
    }

    pub(crate) fn record_shot(&mut self, now: Duration) {
        self.last_shot_at = Some(now);
    }

    //--- Sound Cues -------------------------------------------------------

    /// Requests playback of `sound` after this frame.
    pub fn queue_sound(&mut self, sound: SoundHandle) {
        self.sound_cues.push(sound);
    }

    /// Takes every queued cue, oldest first.
    pub fn drain_sound_cues(&mut self) -> Vec<SoundHandle> {
        std::mem::take(&mut self.sound_cues)
    }

    pub fn pending_sound_cues(&self) -> &[SoundHandle] {
        &self.sound_cues
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
