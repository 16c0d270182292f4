//=========================================================================
// Input
//
// Everything between raw platform input and scene intent.
//
// Responsibilities:
// - Represent keyboard and pointer input in a portable form (`event`)
// - Track which keys and buttons are held (`held`)
// - Map key presses to scene commands (`bindings`)
// - Translate a frame's batch into pointer, fire and command intent
//   (`translator`)
//
//=========================================================================

//=== Submodules ==========================================================

pub mod bindings;
pub mod event;
pub mod held;
pub mod translator;

//=== Public API ==========================================================

pub use bindings::{KeyBindings, SceneCommand};
pub use event::{InputEvent, KeyCode, MouseButton};
pub use held::HeldInputs;
pub use translator::{remap_pointer, CommandTarget, FireGate, FrameIntent, InputTranslator, Pointer};
