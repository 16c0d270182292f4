//=========================================================================
// Key Bindings
//=========================================================================
//
// Maps key presses to scene commands and names the fire button.
//
// Architecture:
//   KeyDown { key } → HashMap<KeyCode, SceneCommand> → SceneCommand
//
// Default layout: F fullscreen, I inventory, M map navigator, P pause,
// left pointer button fires.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== SceneCommand ========================================================

/// Mode commands the scene reacts to on key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneCommand {
    ToggleFullscreen,
    ToggleInventory,
    ToggleNavigator,
    TogglePause,
}

//=== KeyBindings =========================================================

/// Key → command table plus the fire button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    commands: HashMap<KeyCode, SceneCommand>,
    fire_button: MouseButton,
}

impl KeyBindings {
    /// Creates an empty table firing with the primary button.
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
            fire_button: MouseButton::Left,
        }
    }

    //--- Binding API ------------------------------------------------------

    /// Binds `key` to `command`, replacing any previous binding of `key`.
    pub fn bind(&mut self, key: KeyCode, command: SceneCommand) {
        self.commands.insert(key, command);
    }

    /// Removes the binding of `key`, if any.
    pub fn unbind(&mut self, key: KeyCode) {
        self.commands.remove(&key);
    }

    /// Removes every key bound to `command`.
    pub fn unbind_command(&mut self, command: SceneCommand) {
        self.commands.retain(|_, c| *c != command);
    }

    pub fn set_fire_button(&mut self, button: MouseButton) {
        self.fire_button = button;
    }

    //--- Mapping ----------------------------------------------------------

    /// Maps a key press to its command. Other events map to nothing.
    pub fn map_event(&self, event: &InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::KeyDown { key } => self.map_key(*key),
            _ => None,
        }
    }

    pub fn map_key(&self, key: KeyCode) -> Option<SceneCommand> {
        self.commands.get(&key).copied()
    }

    pub fn fire_button(&self) -> MouseButton {
        self.fire_button
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings.bind(KeyCode::KeyF, SceneCommand::ToggleFullscreen);
        bindings.bind(KeyCode::KeyI, SceneCommand::ToggleInventory);
        bindings.bind(KeyCode::KeyM, SceneCommand::ToggleNavigator);
        bindings.bind(KeyCode::KeyP, SceneCommand::TogglePause);
        bindings
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
