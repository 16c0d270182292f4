//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use dungeon_scene::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::core::Frame;
pub use crate::engine::{Engine, EngineBuilder};

// Scene
pub use crate::core::scene::{
    Collaborators, DungeonManager, GameScene, Gun, Hud, HudView, NavigationMap, PlayState, Player,
    RoomInfo, RoomKind, RoomSlot, RoundState, Scene, SceneConfig, ShootingHandler,
};

// Input
pub use crate::core::input::{
    FrameIntent, HeldInputs, InputEvent, KeyBindings, KeyCode, MouseButton, Pointer, SceneCommand,
};

// Rendering, time and assets
pub use crate::core::assets::{ImageHandle, SceneAssets, SoundHandle};
pub use crate::core::render::{Canvas, Color, DrawCommand, DrawList, Rect, Surface};
pub use crate::core::time::{Clock, ManualClock, SystemClock};

// Building blocks
pub use crate::core::messages::{MessageQueue, SystemMessage};
pub use crate::core::tween::{Slide, Tween, TweenHooks};
