//=========================================================================
// Input Event Types
//
// Platform-independent representation of the input the scene consumes.
//
// The set of event kinds is closed: pointer movement, pointer buttons and
// keys. Release events are carried so held-state can be tracked, but the
// scene's command translation only reacts to presses and movement.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    HeldInputs (held keys / buttons)
//         ↓
//    InputTranslator (pointer remap, fire decision, mode commands)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical pointer button identifier.
///
/// `Left` is the primary button; it is the default fire button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Side buttons, thumb buttons, macro keys.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced, so
/// bindings survive keyboard layout changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    ShiftLeft,
    ShiftRight,

    /// Key reported by the platform that has no mapping here.
    Unidentified,
}

//=== InputEvent ==========================================================

/// One input event from a frame's batch.
///
/// # Equality & Hashing Semantics
///
/// Events compare by kind and key/button. `PointerMoved` events are equal
/// regardless of coordinates, so a set of events keeps only the latest
/// pointer position (last position wins).
///
/// ```text
/// KeyDown{F}        == KeyDown{F}          ✓
/// KeyDown{F}        == KeyUp{F}            ✗
/// PointerMoved{..}  == PointerMoved{..}    ✓ (always equal)
/// ```
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Pointer moved; coordinates are in displayed (device) pixels.
    PointerMoved { x: f32, y: f32 },

    /// Pointer button pressed.
    PointerDown { button: MouseButton },

    /// Pointer button released.
    PointerUp { button: MouseButton },

    /// Key pressed.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },

    /// Unsupported platform event. Ignored everywhere.
    Unidentified,
}

impl InputEvent {
    /// Returns `true` for events that end a hold (key or button release).
    pub fn is_release(&self) -> bool {
        matches!(self, Self::KeyUp { .. } | Self::PointerUp { .. })
    }
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        use InputEvent::*;
        match (self, other) {
            (KeyDown { key: a }, KeyDown { key: b }) => a == b,
            (KeyUp { key: a }, KeyUp { key: b }) => a == b,
            (PointerDown { button: a }, PointerDown { button: b }) => a == b,
            (PointerUp { button: a }, PointerUp { button: b }) => a == b,
            // PointerMoved: coordinates ignored, always equal
            (PointerMoved { .. }, PointerMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for InputEvent {}

/// Hashes kind + key/button. Coordinates are not hashed, consistent with
/// equality.
impl Hash for InputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Self::KeyDown { key } | Self::KeyUp { key } => key.hash(state),
            Self::PointerDown { button } | Self::PointerUp { button } => button.hash(state),
            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    //--- Test Helpers -----------------------------------------------------

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    //=====================================================================
    // Equality Tests
    //=====================================================================

    #[test]
    fn equality_same_kind_same_key() {
        assert_eq!(
            InputEvent::KeyDown { key: KeyCode::KeyF },
            InputEvent::KeyDown { key: KeyCode::KeyF }
        );
    }

    #[test]
    fn equality_press_and_release_differ() {
        assert_ne!(
            InputEvent::KeyDown { key: KeyCode::KeyF },
            InputEvent::KeyUp { key: KeyCode::KeyF }
        );
        assert_ne!(
            InputEvent::PointerDown { button: MouseButton::Left },
            InputEvent::PointerUp { button: MouseButton::Left }
        );
    }

    #[test]
    fn equality_pointer_moved_ignores_coordinates() {
        let a = InputEvent::PointerMoved { x: 1.0, y: 2.0 };
        let b = InputEvent::PointerMoved { x: 300.0, y: 400.0 };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn different_buttons_differ() {
        let a = InputEvent::PointerDown { button: MouseButton::Left };
        let b = InputEvent::PointerDown { button: MouseButton::Right };
        assert_ne!(a, b);
        assert_ne!(hash_of(&a), hash_of(&b));
    }

    //=====================================================================
    // Set Behaviour
    //=====================================================================

    #[test]
    fn set_replace_keeps_latest_pointer_position() {
        let mut set = HashSet::new();
        set.insert(InputEvent::PointerMoved { x: 10.0, y: 10.0 });
        set.replace(InputEvent::PointerMoved { x: 20.0, y: 30.0 });

        assert_eq!(set.len(), 1);
        match set.iter().next() {
            Some(InputEvent::PointerMoved { x, y }) => assert_eq!((*x, *y), (20.0, 30.0)),
            other => panic!("Expected PointerMoved, got {:?}", other),
        }
    }

    #[test]
    fn release_detection() {
        assert!(InputEvent::KeyUp { key: KeyCode::KeyA }.is_release());
        assert!(InputEvent::PointerUp { button: MouseButton::Left }.is_release());
        assert!(!InputEvent::KeyDown { key: KeyCode::KeyA }.is_release());
        assert!(!InputEvent::Unidentified.is_release());
    }
}
