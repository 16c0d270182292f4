//=========================================================================
// Dungeon Scene — Library Root
//
// Per-frame orchestration for a 2D top-down dungeon shooter, plus the
// runtime that hosts it.
//
// Responsibilities:
// - Expose the play scene and its building blocks (`core`)
// - Expose the runtime facade (`Engine`, `EngineBuilder`)
// - Keep the winit integration (`platform`) private
//
// Typical usage:
// ```ignore
// use dungeon_scene::prelude::*;
//
// EngineBuilder::new().build().run(
//     || GameScene::new(SceneConfig::default(), my_collaborators(), Box::new(SystemClock::new())),
//     |frame| renderer.present(frame),
// )?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything the logic thread runs: scene, input, tweens,
// messages, rendering contracts.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and event loop and is not part of the public
// API. `engine` wires it to the logic thread.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use crate::core::platform_bridge::PlatformError;
pub use crate::core::Frame;
pub use engine::{Engine, EngineBuilder};
