//=========================================================================
// Input Translator
//=========================================================================
//
// Turns one frame's event batch into scene intent.
//
// Architecture:
//   events ─┬─ PointerMoved → remap to render space → last pointer
//           ├─ PointerDown  → discrete fire request (cooldown gated)
//           └─ KeyDown      → KeyBindings → CommandTarget::apply()
//   held   ─── fire button held + holdable gun → auto-fire
//
// At most one shot per frame: the auto-fire decision is taken first and a
// pointer press in the same frame cannot add a second shot. Commands are
// applied in batch order, so a pause earlier in the batch gates a later
// press.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::bindings::{KeyBindings, SceneCommand};
use super::event::InputEvent;
use super::held::HeldInputs;
use crate::core::render::Surface;

//=== Pointer =============================================================

/// Pointer position in render-space pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

/// Remaps device-space pointer coordinates into render space.
///
/// Scale factors are read from the surface on every call so resizes are
/// picked up immediately. Returns `None` when there is no backing surface
/// or the data is unusable.
pub fn remap_pointer(x: f32, y: f32, surface: &dyn Surface) -> Option<Pointer> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let rect = surface.display_rect()?;
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }

    let (render_width, render_height) = surface.render_size();
    let scale_x = render_width / rect.width;
    let scale_y = render_height / rect.height;

    Some(Pointer {
        x: (x - rect.left) * scale_x,
        y: (y - rect.top) * scale_y,
    })
}

//=== FireGate ============================================================

/// Weapon and timing facts needed for the fire decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireGate {
    /// Gun keeps firing while the fire button is held.
    pub holdable: bool,
    pub cooldown: Duration,
    /// `None` until the first shot of the session.
    pub last_shot_at: Option<Duration>,
    pub now: Duration,
}

impl FireGate {
    /// `now >= last_shot_at + cooldown`; always true before the first shot.
    pub fn cooldown_elapsed(&self) -> bool {
        match self.last_shot_at {
            // An unrepresentable ready time never arrives.
            Some(last) => last
                .checked_add(self.cooldown)
                .is_some_and(|ready| self.now >= ready),
            None => true,
        }
    }
}

//=== CommandTarget =======================================================

/// State the translator consults and mutates while walking a batch.
pub trait CommandTarget {
    fn is_paused(&self) -> bool;

    /// Applies a command, enforcing its own legality rules.
    fn apply(&mut self, command: SceneCommand, surface: &mut dyn Surface);
}

//=== FrameIntent =========================================================

/// Outcome of translating one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameIntent {
    /// Latest remapped pointer position, if the pointer moved.
    pub pointer: Option<Pointer>,

    /// A shot fires this frame.
    pub fire: bool,

    /// Key commands handed to the target.
    pub commands: usize,

    /// Events dropped because their data could not be used.
    pub skipped: usize,
}

//=== InputTranslator =====================================================

/// Per-frame input translation with configurable bindings.
#[derive(Debug, Clone, Default)]
pub struct InputTranslator {
    bindings: KeyBindings,
}

impl InputTranslator {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    //--- translate() ------------------------------------------------------
    //
    // Walks the batch once. Malformed events are skipped individually;
    // the rest of the batch is still processed.
    //
    pub fn translate(
        &self,
        events: &[InputEvent],
        held: &HeldInputs,
        gate: FireGate,
        surface: &mut dyn Surface,
        target: &mut dyn CommandTarget,
    ) -> FrameIntent {
        let fire_button = self.bindings.fire_button();
        let cooldown_elapsed = gate.cooldown_elapsed();

        let mut intent = FrameIntent {
            fire: !target.is_paused()
                && gate.holdable
                && held.is_button_down(fire_button)
                && cooldown_elapsed,
            ..FrameIntent::default()
        };

        if intent.fire {
            trace!("Auto-fire shot this frame");
        }

        for event in events {
            match *event {
                InputEvent::PointerMoved { x, y } => match remap_pointer(x, y, surface) {
                    Some(pointer) => intent.pointer = Some(pointer),
                    None => {
                        warn!("Skipping pointer move ({}, {}): no usable surface", x, y);
                        intent.skipped += 1;
                    }
                },

                InputEvent::PointerDown { button } => {
                    if target.is_paused() || intent.fire || button != fire_button {
                        continue;
                    }
                    if cooldown_elapsed {
                        intent.fire = true;
                    } else {
                        debug!("Shot rejected: weapon cooling down");
                    }
                }

                InputEvent::KeyDown { key } => {
                    if let Some(command) = self.bindings.map_key(key) {
                        target.apply(command, surface);
                        intent.commands += 1;
                    }
                }

                InputEvent::KeyUp { .. }
                | InputEvent::PointerUp { .. }
                | InputEvent::Unidentified => {}
            }
        }

        // A pause later in the batch still suppresses the shot.
        if intent.fire && target.is_paused() {
            debug!("Shot suppressed: scene paused");
            intent.fire = false;
        }

        intent
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::{KeyCode, MouseButton};
    use crate::core::render::{DisplayRect, Viewport};

    //--- Test Helpers -----------------------------------------------------

    #[derive(Default)]
    struct Target {
        paused: bool,
        applied: Vec<SceneCommand>,
    }

    impl CommandTarget for Target {
        fn is_paused(&self) -> bool {
            self.paused
        }

        fn apply(&mut self, command: SceneCommand, _surface: &mut dyn Surface) {
            if command == SceneCommand::TogglePause {
                self.paused = !self.paused;
            }
            self.applied.push(command);
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn gate(holdable: bool, last: Option<u64>, now: u64) -> FireGate {
        FireGate {
            holdable,
            cooldown: ms(200),
            last_shot_at: last.map(ms),
            now: ms(now),
        }
    }

    fn click() -> InputEvent {
        InputEvent::PointerDown { button: MouseButton::Left }
    }

    fn fire_held() -> HeldInputs {
        HeldInputs::new().with_button(MouseButton::Left)
    }

    fn run(
        events: &[InputEvent],
        held: &HeldInputs,
        gate: FireGate,
        target: &mut Target,
    ) -> FrameIntent {
        let mut viewport = Viewport::new(960.0, 540.0);
        InputTranslator::default().translate(events, held, gate, &mut viewport, target)
    }

    //=====================================================================
    // Pointer Remapping
    //=====================================================================

    #[test]
    fn remap_scales_into_render_space() {
        let mut viewport = Viewport::new(960.0, 540.0);
        viewport.resize(1920, 1080);

        let p = remap_pointer(960.0, 540.0, &viewport).unwrap();
        assert_eq!(p, Pointer { x: 480.0, y: 270.0 });
    }

    #[test]
    fn remap_accounts_for_offset() {
        let mut viewport = Viewport::new(100.0, 100.0);
        viewport.set_display_rect(Some(DisplayRect {
            left: 50.0,
            top: 10.0,
            width: 200.0,
            height: 50.0,
        }));

        let p = remap_pointer(150.0, 35.0, &viewport).unwrap();
        assert_eq!(p, Pointer { x: 50.0, y: 50.0 });
    }

    #[test]
    fn remap_without_surface_is_none() {
        let mut viewport = Viewport::new(100.0, 100.0);
        viewport.set_display_rect(None);
        assert!(remap_pointer(1.0, 1.0, &viewport).is_none());

        viewport.set_display_rect(Some(DisplayRect {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 10.0,
        }));
        assert!(remap_pointer(1.0, 1.0, &viewport).is_none());
    }

    #[test]
    fn remap_rejects_non_finite_coordinates() {
        let viewport = Viewport::new(100.0, 100.0);
        assert!(remap_pointer(f32::NAN, 1.0, &viewport).is_none());
        assert!(remap_pointer(1.0, f32::INFINITY, &viewport).is_none());
    }

    #[test]
    fn malformed_move_is_skipped_and_batch_continues() {
        let mut target = Target::default();
        let events = [
            InputEvent::PointerMoved { x: 10.0, y: 20.0 },
            InputEvent::PointerMoved { x: f32::NAN, y: 0.0 },
            InputEvent::KeyDown { key: KeyCode::KeyI },
        ];

        let intent = run(&events, &HeldInputs::new(), gate(false, None, 0), &mut target);

        assert_eq!(intent.skipped, 1);
        assert_eq!(intent.pointer, Some(Pointer { x: 10.0, y: 20.0 }));
        assert_eq!(target.applied, [SceneCommand::ToggleInventory]);
    }

    //=====================================================================
    // Fire Decision
    //=====================================================================

    #[test]
    fn first_shot_is_always_allowed() {
        let mut target = Target::default();
        let intent = run(&[click()], &HeldInputs::new(), gate(false, None, 0), &mut target);
        assert!(intent.fire);
    }

    #[test]
    fn click_respects_cooldown() {
        let mut target = Target::default();
        let held = HeldInputs::new();

        assert!(!run(&[click()], &held, gate(false, Some(0), 150), &mut target).fire);
        assert!(run(&[click()], &held, gate(false, Some(0), 200), &mut target).fire);
    }

    #[test]
    fn unbounded_cooldown_never_elapses() {
        let mut target = Target::default();
        let mut locked = gate(false, Some(1), 500);
        locked.cooldown = Duration::MAX;

        assert!(!locked.cooldown_elapsed());
        assert!(!run(&[click()], &HeldInputs::new(), locked, &mut target).fire);

        locked.last_shot_at = None;
        assert!(locked.cooldown_elapsed());
    }

    #[test]
    fn holdable_gun_fires_while_held() {
        let mut target = Target::default();
        let intent = run(&[], &fire_held(), gate(true, Some(0), 500), &mut target);
        assert!(intent.fire);
    }

    #[test]
    fn non_holdable_gun_ignores_hold() {
        let mut target = Target::default();
        let intent = run(&[], &fire_held(), gate(false, Some(0), 500), &mut target);
        assert!(!intent.fire);
    }

    #[test]
    fn hold_and_click_same_frame_fire_once() {
        let mut target = Target::default();
        let intent = run(
            &[click(), click()],
            &fire_held(),
            gate(true, Some(0), 500),
            &mut target,
        );
        assert!(intent.fire);
    }

    #[test]
    fn other_buttons_do_not_fire() {
        let mut target = Target::default();
        let events = [InputEvent::PointerDown { button: MouseButton::Right }];
        let intent = run(&events, &HeldInputs::new(), gate(false, None, 0), &mut target);
        assert!(!intent.fire);
    }

    #[test]
    fn paused_suppresses_fire() {
        let mut target = Target { paused: true, ..Target::default() };
        let intent = run(&[click()], &fire_held(), gate(true, None, 0), &mut target);
        assert!(!intent.fire);
    }

    #[test]
    fn pause_later_in_batch_suppresses_fire() {
        let mut target = Target::default();
        let events = [click(), InputEvent::KeyDown { key: KeyCode::KeyP }];
        let intent = run(&events, &HeldInputs::new(), gate(false, None, 0), &mut target);

        assert!(target.paused);
        assert!(!intent.fire);
    }

    #[test]
    fn unpause_earlier_in_batch_allows_click() {
        let mut target = Target { paused: true, ..Target::default() };
        let events = [InputEvent::KeyDown { key: KeyCode::KeyP }, click()];
        let intent = run(&events, &HeldInputs::new(), gate(false, None, 0), &mut target);

        assert!(!target.paused);
        assert!(intent.fire);
    }

    //=====================================================================
    // Commands
    //=====================================================================

    #[test]
    fn commands_are_applied_in_batch_order() {
        let mut target = Target::default();
        let events = [
            InputEvent::KeyDown { key: KeyCode::KeyM },
            InputEvent::KeyUp { key: KeyCode::KeyM },
            InputEvent::KeyDown { key: KeyCode::KeyF },
            InputEvent::KeyDown { key: KeyCode::KeyQ },
            InputEvent::KeyDown { key: KeyCode::KeyP },
        ];

        let intent = run(&events, &HeldInputs::new(), gate(false, None, 0), &mut target);

        assert_eq!(intent.commands, 3);
        assert_eq!(
            target.applied,
            [
                SceneCommand::ToggleNavigator,
                SceneCommand::ToggleFullscreen,
                SceneCommand::TogglePause
            ]
        );
    }
}
