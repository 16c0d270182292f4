//=========================================================================
// Scene Collaborators
//=========================================================================
//
// Contracts for the sub-systems the play scene drives but does not own
// the logic of: player, dungeon manager, map, HUD and shooting.
//
// Each contract is the narrow surface the frame cycle needs. Movement,
// AI, room generation, projectile physics and HUD layout all live behind
// these traits.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::state::PlayState;
use crate::core::input::{HeldInputs, InputEvent};
use crate::core::render::Canvas;

//=== Gun =================================================================

/// Weapon facts the fire decision depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gun {
    /// Keeps firing while the fire button is held.
    pub holdable: bool,

    /// Minimum time between two accepted shots.
    pub cooldown: Duration,
}

//=== Player ==============================================================

/// The single player entity.
pub trait Player {
    /// Movement and aim input for this frame.
    fn process_input(&mut self, events: &[InputEvent], held: &HeldInputs, dt: Duration);

    fn update(&mut self, dt: Duration, state: &mut PlayState);

    fn draw(&self, canvas: &mut dyn Canvas);

    /// Currently equipped gun.
    fn gun(&self) -> Gun;
}

//=== Rooms ===============================================================

/// Room categories the dungeon manager reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomKind {
    Dungeon,
    Shop,
    Spawn,
}

/// Combat round bound to a dungeon room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundState {
    pub cleared: bool,
}

/// The room the player currently stands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomInfo {
    pub kind: RoomKind,
    pub round: Option<RoundState>,
}

/// What the dungeon manager reports as the current room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomSlot {
    /// Nothing reported yet.
    Absent,

    /// The player is between rooms.
    NoRoom,

    Room(RoomInfo),
}

impl RoomSlot {
    /// `true` inside a dungeon room whose round is missing or not cleared.
    pub fn in_active_combat(&self) -> bool {
        match self {
            Self::Room(RoomInfo {
                kind: RoomKind::Dungeon,
                round,
            }) => !round.map_or(false, |r| r.cleared),
            _ => false,
        }
    }
}

//=== DungeonManager ======================================================

/// Owner of dungeon progression: rooms, rounds and enemy spawning.
pub trait DungeonManager {
    fn update(&mut self, dt: Duration, state: &mut PlayState);

    /// Draws room contents, including enemies held in `state`.
    fn draw(&self, canvas: &mut dyn Canvas, state: &PlayState);

    fn current_room(&self) -> RoomSlot;
}

//=== NavigationMap =======================================================

/// Minimap and full-screen navigator overlay.
pub trait NavigationMap {
    fn process_input(&mut self, events: &[InputEvent]);

    fn draw(&self, canvas: &mut dyn Canvas);

    fn navigator_visible(&self) -> bool;

    fn set_navigator_visible(&mut self, visible: bool);
}

//=== Hud =================================================================

/// Read-only view handed to the HUD each frame.
pub struct HudView<'a> {
    pub state: &'a PlayState,
    pub player: &'a dyn Player,
    pub now: Duration,

    /// Messages older than this are no longer shown.
    pub message_lifetime: Duration,
    pub margin: f32,
}

/// Heads-up display renderer.
pub trait Hud {
    fn draw(&self, canvas: &mut dyn Canvas, view: &HudView<'_>);
}

//=== ShootingHandler =====================================================

/// Spawns a projectile (and plays any sound) when a shot is accepted.
///
/// Cooldown bookkeeping is done by the scene; the handler only acts.
pub trait ShootingHandler {
    fn shoot(&mut self, player: &mut dyn Player, state: &mut PlayState, now: Duration);
}

impl<F> ShootingHandler for F
where
    F: FnMut(&mut dyn Player, &mut PlayState, Duration),
{
    fn shoot(&mut self, player: &mut dyn Player, state: &mut PlayState, now: Duration) {
        self(player, state, now)
    }
}

//=== Collaborators =======================================================

/// The collaborator set a scene is built from.
pub struct Collaborators {
    pub player: Box<dyn Player>,
    pub dungeon: Box<dyn DungeonManager>,
    pub map: Box<dyn NavigationMap>,
    pub hud: Box<dyn Hud>,
    pub shooting: Box<dyn ShootingHandler>,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dungeon(round: Option<bool>) -> RoomSlot {
        RoomSlot::Room(RoomInfo {
            kind: RoomKind::Dungeon,
            round: round.map(|cleared| RoundState { cleared }),
        })
    }

    #[test]
    fn uncleared_dungeon_is_combat() {
        assert!(dungeon(Some(false)).in_active_combat());
    }

    #[test]
    fn dungeon_without_round_is_combat() {
        assert!(dungeon(None).in_active_combat());
    }

    #[test]
    fn cleared_dungeon_is_not_combat() {
        assert!(!dungeon(Some(true)).in_active_combat());
    }

    #[test]
    fn other_slots_are_not_combat() {
        assert!(!RoomSlot::Absent.in_active_combat());
        assert!(!RoomSlot::NoRoom.in_active_combat());
        assert!(!RoomSlot::Room(RoomInfo {
            kind: RoomKind::Shop,
            round: Some(RoundState { cleared: false }),
        })
        .in_active_combat());
    }
}
