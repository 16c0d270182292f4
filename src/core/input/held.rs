//=========================================================================
// Held Inputs
//=========================================================================
//
// Snapshot of keys and pointer buttons currently held down.
//
// Architecture:
//   InputEvent batch → apply_events() → HashSet (held) → query
//
// The host applies each frame's batch before handing the snapshot to the
// scene, so a press and its matching release in the same batch leave the
// input released.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== HeldInputs ==========================================================

/// Keys and buttons held at the end of the last applied batch.
#[derive(Debug, Default, Clone)]
pub struct HeldInputs {
    keys: HashSet<KeyCode>,
    buttons: HashSet<MouseButton>,
}

impl HeldInputs {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Applies a batch of events in order.
    pub fn apply_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.apply(event);
        }
    }

    /// Applies one event.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown { key } => {
                self.keys.insert(key);
            }
            InputEvent::KeyUp { key } => {
                self.keys.remove(&key);
            }
            InputEvent::PointerDown { button } => {
                self.buttons.insert(button);
            }
            InputEvent::PointerUp { button } => {
                self.buttons.remove(&button);
            }
            InputEvent::PointerMoved { .. } | InputEvent::Unidentified => {}
        }
    }

    /// Releases everything (e.g. on focus loss).
    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }

    //--- Builders ---------------------------------------------------------

    /// Marks a key held. Convenience for hosts replaying recorded input.
    pub fn with_key(mut self, key: KeyCode) -> Self {
        self.keys.insert(key);
        self
    }

    /// Marks a pointer button held.
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.buttons.insert(button);
        self
    }

    //=====================================================================
    // Query API
    //=====================================================================

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    pub fn keys_down(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys.iter()
    }

    pub fn buttons_down(&self) -> impl Iterator<Item = &MouseButton> {
        self.buttons.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.buttons.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
