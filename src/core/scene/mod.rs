//=========================================================================
// Scene System
//=========================================================================
//
// The play scene and the frame cycle the host drives it through.
//
// Architecture:
//   GameScene
//     ├─ PlayState (pointer, messages, rosters, inventory, pause, shots)
//     ├─ InputTranslator
//     ├─ Clock
//     └─ Collaborators (player, dungeon, map, hud, shooting)
//
// Flow (once per frame, in this order):
//   process_input() → update() → draw()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::assets::SoundHandle;
use crate::core::input::{FrameIntent, HeldInputs, InputEvent};
use crate::core::render::{Canvas, Surface};

//=== Module Declarations =================================================

mod collaborators;
mod config;
mod game_scene;
mod inventory;
mod state;

//=== Public API ==========================================================

pub use collaborators::{
    Collaborators, DungeonManager, Gun, Hud, HudView, NavigationMap, Player, RoomInfo, RoomKind,
    RoomSlot, RoundState, ShootingHandler,
};
pub use config::SceneConfig;
pub use game_scene::GameScene;
pub use inventory::{Inventory, InventoryToggle};
pub use state::{Ball, Enemy, EntityId, PlayState, Projectile, Ray, Roster};

//=== Scene Trait =========================================================

/// Frame-cycle entry points the host calls once per frame, in order.
///
/// # Minimal Implementation
///
/// ```rust
/// # use dungeon_scene::prelude::*;
/// # use std::time::Duration;
/// struct Blank;
///
/// impl Scene for Blank {
///     fn render_size(&self) -> (f32, f32) {
///         (960.0, 540.0)
///     }
///
///     fn process_input(
///         &mut self,
///         _events: &[InputEvent],
///         _held: &HeldInputs,
///         _dt: Duration,
///         _surface: &mut dyn Surface,
///     ) -> FrameIntent {
///         FrameIntent::default()
///     }
///
///     fn update(&mut self, _dt: Duration) {}
///
///     fn draw(&self, _canvas: &mut dyn Canvas) {}
/// }
/// ```
pub trait Scene {
    /// Logical size of the render surface, in pixels.
    fn render_size(&self) -> (f32, f32);

    /// Consumes this frame's input batch. `held` already reflects it.
    fn process_input(
        &mut self,
        events: &[InputEvent],
        held: &HeldInputs,
        dt: Duration,
        surface: &mut dyn Surface,
    ) -> FrameIntent;

    /// Advances simulation by `dt`.
    fn update(&mut self, dt: Duration);

    /// Renders the frame back to front.
    fn draw(&self, canvas: &mut dyn Canvas);

    /// Sound cues requested during the frame.
    ///
    /// Default implementation has none.
    fn drain_sound_cues(&mut self) -> Vec<SoundHandle> {
        Vec::new()
    }
}
