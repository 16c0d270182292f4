//=========================================================================
// Input Buffer
//
// Collects converted input between two platform frames, split into
// discrete and continuous events.
//
// Responsibilities:
// - Keep presses and releases in arrival order
// - Drop immediate duplicates of a discrete event
// - Coalesce pointer movement to the latest position
// - Hand the whole frame over via `drain()`
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer =========================================================
//
// `continuous` relies on `InputEvent`'s equality ignoring pointer
// coordinates, so a newer move replaces the older one.
//
pub(crate) struct InputBuffer {
    discrete: Vec<InputEvent>,
    continuous: HashSet<InputEvent>,
}

impl InputBuffer {
    pub(crate) fn new() -> Self {
        const DISCRETE_BASE: usize = 64;
        const CONTINUOUS_BASE: usize = 4;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    pub(crate) fn push_continuous(&mut self, event: InputEvent) {
        self.continuous.replace(event);
    }

    //--- Discrete Event Handling -----------------------------------------
    pub(crate) fn push_discrete(&mut self, event: InputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns `(discrete, continuous)`, or `None` when nothing arrived.
    //
    pub(crate) fn drain(&mut self) -> Option<(Vec<InputEvent>, Vec<InputEvent>)> {
        if self.is_empty() {
            return None;
        }
        let discrete = std::mem::take(&mut self.discrete);
        let continuous = self.continuous.drain().collect();
        Some((discrete, continuous))
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn clear(&mut self) {
        self.discrete.clear();
        self.continuous.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, MouseButton};

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn pointer(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved { x, y }
    }

    #[test]
    fn immediate_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_discrete(key_down(KeyCode::KeyB));
        buffer.push_discrete(key_down(KeyCode::KeyA));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn press_release_press_is_kept() {
        let mut buffer = InputBuffer::new();
        let down = InputEvent::PointerDown { button: MouseButton::Left };
        buffer.push_discrete(down);
        buffer.push_discrete(InputEvent::PointerUp { button: MouseButton::Left });
        buffer.push_discrete(down);

        let (discrete, _) = buffer.drain().unwrap();
        assert_eq!(discrete.len(), 3);
    }

    #[test]
    fn pointer_moves_coalesce_to_latest() {
        let mut buffer = InputBuffer::new();
        buffer.push_continuous(pointer(10.0, 10.0));
        buffer.push_continuous(pointer(20.0, 30.0));

        let (_, continuous) = buffer.drain().unwrap();
        assert_eq!(continuous.len(), 1);
        match continuous[0] {
            InputEvent::PointerMoved { x, y } => assert_eq!((x, y), (20.0, 30.0)),
            other => panic!("Expected PointerMoved, found {:?}", other),
        }
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.push_discrete(key_down(KeyCode::KeyA));
        buffer.push_continuous(pointer(5.0, 5.0));

        assert!(buffer.drain().is_some());
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = InputBuffer::new();
        for i in 0..128 {
            buffer.push_discrete(if i % 2 == 0 {
                key_down(KeyCode::KeyA)
            } else {
                key_down(KeyCode::KeyB)
            });
        }
        let capacity = buffer.discrete.capacity();

        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.discrete.capacity(), capacity);
    }
}
