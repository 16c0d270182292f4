//=========================================================================
// Game Scene
//=========================================================================
//
// Per-frame orchestrator of the dungeon play session.
//
// Architecture:
//   process_input(events, held, dt, surface)
//     ├─ Player::process_input
//     ├─ NavigationMap::process_input
//     ├─ InputTranslator::translate ── ModeSwitch (pause, inventory,
//     │                                 navigator, fullscreen)
//     └─ ShootingHandler::shoot  (only if the frame fires)
//
//   update(dt)      paused? → return
//                   dungeon → player → inventory slides
//
//   draw(canvas)    background → dungeon → player → HUD → map
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::collaborators::{
    Collaborators, DungeonManager, Hud, HudView, NavigationMap, Player, RoomSlot, ShootingHandler,
};
use super::config::SceneConfig;
use super::inventory::Inventory;
use super::state::PlayState;
use super::Scene;
use crate::core::assets::{SceneAssets, SoundHandle};
use crate::core::input::{
    CommandTarget, FireGate, FrameIntent, HeldInputs, InputEvent, InputTranslator, SceneCommand,
};
use crate::core::render::{Canvas, Surface};
use crate::core::time::Clock;

//=== GameScene ===========================================================

pub struct GameScene {
    config: SceneConfig,
    state: PlayState,
    translator: InputTranslator,
    clock: Box<dyn Clock>,

    //--- Collaborators ----------------------------------------------------
    player: Box<dyn Player>,
    dungeon: Box<dyn DungeonManager>,
    map: Box<dyn NavigationMap>,
    hud: Box<dyn Hud>,
    shooting: Box<dyn ShootingHandler>,
}

impl GameScene {
    /// Builds a fresh session: empty rosters, hidden inventory, unpaused.
    pub fn new(config: SceneConfig, parts: Collaborators, clock: Box<dyn Clock>) -> Self {
        let (shown_x, hidden_x) = config.inventory_positions();
        let inventory = Inventory::new(
            shown_x,
            hidden_x,
            config.inventory_slide,
            config.inventory_slide_steps,
        );

        info!(
            "Game scene created ({}x{})",
            config.render_width, config.render_height
        );

        Self {
            translator: InputTranslator::new(config.bindings.clone()),
            state: PlayState::new(inventory, SceneAssets::default()),
            config,
            clock,
            player: parts.player,
            dungeon: parts.dungeon,
            map: parts.map,
            hud: parts.hud,
            shooting: parts.shooting,
        }
    }

    //=====================================================================
    // Query API
    //=====================================================================

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    /// Direct access for collaborators wired outside the frame cycle.
    pub fn state_mut(&mut self) -> &mut PlayState {
        &mut self.state
    }

    pub fn player(&self) -> &dyn Player {
        self.player.as_ref()
    }

    pub fn map(&self) -> &dyn NavigationMap {
        self.map.as_ref()
    }

    pub fn current_room(&self) -> RoomSlot {
        self.dungeon.current_room()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    /// Session time according to the scene clock.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    //=====================================================================
    // Commands
    //=====================================================================

    /// Sets the pause flag. No-op if unchanged.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        self.state.set_paused(paused)
    }

    /// Posts a message stamped with the current session time.
    pub fn push_message(&mut self, text: impl Into<String>) -> u64 {
        let now = self.clock.now();
        self.state.messages.push(text, now)
    }
}

//=== Frame Cycle =========================================================

impl Scene for GameScene {
    fn render_size(&self) -> (f32, f32) {
        (self.config.render_width, self.config.render_height)
    }

    //--- process_input() --------------------------------------------------
    //
    // Collaborator input first, then translation. The shot timestamp is
    // recorded here, never by the handler.
    //
    fn process_input(
        &mut self,
        events: &[InputEvent],
        held: &HeldInputs,
        dt: Duration,
        surface: &mut dyn Surface,
    ) -> FrameIntent {
        self.player.process_input(events, held, dt);
        self.map.process_input(events);

        let now = self.clock.now();
        let gun = self.player.gun();
        let gate = FireGate {
            holdable: gun.holdable,
            cooldown: gun.cooldown,
            last_shot_at: self.state.last_shot_at(),
            now,
        };

        let mut modes = ModeSwitch {
            state: &mut self.state,
            map: self.map.as_mut(),
            room: self.dungeon.current_room(),
            now,
            blocked_message: &self.config.navigator_blocked_message,
        };
        let intent = self
            .translator
            .translate(events, held, gate, surface, &mut modes);

        if let Some(pointer) = intent.pointer {
            self.state.pointer = pointer;
        }

        if intent.fire {
            trace!("Shot fired at {:?}", now);
            self.shooting
                .shoot(self.player.as_mut(), &mut self.state, now);
            self.state.record_shot(now);
        }

        intent
    }

    //--- update() ---------------------------------------------------------

    fn update(&mut self, dt: Duration) {
        if self.state.is_paused() {
            return;
        }

        self.dungeon.update(dt, &mut self.state);
        self.player.update(dt, &mut self.state);
        self.state.inventory.update(dt);
    }

    //--- draw() -----------------------------------------------------------

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.config.render_rect(), self.config.background);

        self.dungeon.draw(canvas, &self.state);
        self.player.draw(canvas);

        let view = HudView {
            state: &self.state,
            player: self.player.as_ref(),
            now: self.clock.now(),
            message_lifetime: self.config.message_lifetime,
            margin: self.config.hud_margin,
        };
        self.hud.draw(canvas, &view);

        self.map.draw(canvas);
    }

    fn drain_sound_cues(&mut self) -> Vec<SoundHandle> {
        self.state.drain_sound_cues()
    }
}

//=== ModeSwitch ==========================================================
//
// Borrowed view of the state key commands may change, valid for one
// translate() call.
//

struct ModeSwitch<'a> {
    state: &'a mut PlayState,
    map: &'a mut dyn NavigationMap,
    room: RoomSlot,
    now: Duration,
    blocked_message: &'a str,
}

impl CommandTarget for ModeSwitch<'_> {
    fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    fn apply(&mut self, command: SceneCommand, surface: &mut dyn Surface) {
        match command {
            SceneCommand::ToggleFullscreen => {
                info!("Fullscreen toggle requested");
                surface.request_fullscreen();
            }

            SceneCommand::ToggleInventory => {
                if self.state.is_paused() {
                    debug!("Inventory toggle ignored: scene paused");
                    return;
                }
                self.state.inventory.toggle();
            }

            SceneCommand::ToggleNavigator => {
                if self.room.in_active_combat() {
                    info!("Navigator blocked during combat");
                    self.state.messages.push(self.blocked_message, self.now);
                    return;
                }
                let visible = !self.map.navigator_visible();
                self.map.set_navigator_visible(visible);
                info!("Navigator {}", if visible { "shown" } else { "hidden" });
            }

            SceneCommand::TogglePause => {
                let paused = !self.state.is_paused();
                self.state.set_paused(paused);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, MouseButton};
    use crate::core::render::{Color, DisplayRect, DrawCommand, DrawList, Viewport};
    use crate::core::scene::{Gun, Projectile, RoomInfo, RoomKind, RoundState};
    use crate::core::time::ManualClock;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    //--- Test Helpers -----------------------------------------------------

    type Log = Rc<RefCell<Vec<&'static str>>>;

    struct FakePlayer {
        log: Log,
        gun: Gun,
    }

    impl Player for FakePlayer {
        fn process_input(&mut self, _events: &[InputEvent], _held: &HeldInputs, _dt: Duration) {
            self.log.borrow_mut().push("player.input");
        }

        fn update(&mut self, _dt: Duration, _state: &mut PlayState) {
            self.log.borrow_mut().push("player.update");
        }

        fn draw(&self, canvas: &mut dyn Canvas) {
            canvas.draw_text("player", 0.0, 0.0, Color::WHITE);
        }

        fn gun(&self) -> Gun {
            self.gun
        }
    }

    struct FakeDungeon {
        log: Log,
        room: Rc<Cell<RoomSlot>>,
    }

    impl DungeonManager for FakeDungeon {
        fn update(&mut self, _dt: Duration, _state: &mut PlayState) {
            self.log.borrow_mut().push("dungeon.update");
        }

        fn draw(&self, canvas: &mut dyn Canvas, _state: &PlayState) {
            canvas.draw_text("dungeon", 0.0, 0.0, Color::WHITE);
        }

        fn current_room(&self) -> RoomSlot {
            self.room.get()
        }
    }

    struct FakeMap {
        log: Log,
        navigator: Rc<Cell<bool>>,
    }

    impl NavigationMap for FakeMap {
        fn process_input(&mut self, _events: &[InputEvent]) {
            self.log.borrow_mut().push("map.input");
        }

        fn draw(&self, canvas: &mut dyn Canvas) {
            canvas.draw_text("map", 0.0, 0.0, Color::WHITE);
        }

        fn navigator_visible(&self) -> bool {
            self.navigator.get()
        }

        fn set_navigator_visible(&mut self, visible: bool) {
            self.navigator.set(visible);
        }
    }

    struct FakeHud;

    impl Hud for FakeHud {
        fn draw(&self, canvas: &mut dyn Canvas, view: &HudView<'_>) {
            let shown = view.state.messages.recent(view.now, view.message_lifetime).count();
            canvas.draw_text(if shown > 0 { "hud+messages" } else { "hud" }, 0.0, 0.0, Color::WHITE);
        }
    }

    struct Harness {
        scene: GameScene,
        clock: ManualClock,
        log: Log,
        room: Rc<Cell<RoomSlot>>,
        navigator: Rc<Cell<bool>>,
        viewport: Viewport,
        held: HeldInputs,
    }

    impl Harness {
        fn new(gun: Gun) -> Self {
            let log: Log = Rc::default();
            let room = Rc::new(Cell::new(RoomSlot::Absent));
            let navigator = Rc::new(Cell::new(false));
            let clock = ManualClock::new();

            let shot_log = log.clone();
            let parts = Collaborators {
                player: Box::new(FakePlayer { log: log.clone(), gun }),
                dungeon: Box::new(FakeDungeon { log: log.clone(), room: room.clone() }),
                map: Box::new(FakeMap { log: log.clone(), navigator: navigator.clone() }),
                hud: Box::new(FakeHud),
                shooting: Box::new(move |_: &mut dyn Player, state: &mut PlayState, _: Duration| {
                    shot_log.borrow_mut().push("shoot");
                    state.projectiles.spawn(Projectile {
                        x: state.pointer.x,
                        y: state.pointer.y,
                        angle: 0.0,
                        speed: 10.0,
                        damage: 1.0,
                    });
                }),
            };

            let config = SceneConfig::default();
            let viewport = Viewport::new(config.render_width, config.render_height);

            Self {
                scene: GameScene::new(config, parts, Box::new(clock.clone())),
                clock,
                log,
                room,
                navigator,
                viewport,
                held: HeldInputs::new(),
            }
        }

        fn at(&mut self, t: u64) -> &mut Self {
            self.clock.set(ms(t));
            self
        }

        fn input(&mut self, events: &[InputEvent]) -> FrameIntent {
            self.held.apply_events(events);
            self.scene
                .process_input(events, &self.held, ms(16), &mut self.viewport)
        }

        fn projectiles(&self) -> usize {
            self.scene.state().projectiles.len()
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn pistol() -> Gun {
        Gun { holdable: false, cooldown: ms(200) }
    }

    fn rifle() -> Gun {
        Gun { holdable: true, cooldown: ms(100) }
    }

    fn press(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn click() -> InputEvent {
        InputEvent::PointerDown { button: MouseButton::Left }
    }

    fn release() -> InputEvent {
        InputEvent::PointerUp { button: MouseButton::Left }
    }

    fn combat_room(cleared: Option<bool>) -> RoomSlot {
        RoomSlot::Room(RoomInfo {
            kind: RoomKind::Dungeon,
            round: cleared.map(|cleared| RoundState { cleared }),
        })
    }

    //--- Shooting ---------------------------------------------------------

    #[test]
    fn cooldown_gates_clicks() {
        let mut h = Harness::new(pistol());

        assert!(h.at(0).input(&[click(), release()]).fire);
        assert_eq!(h.scene.state().last_shot_at(), Some(ms(0)));

        assert!(!h.at(150).input(&[click(), release()]).fire);
        assert!(h.at(210).input(&[click(), release()]).fire);

        assert_eq!(h.projectiles(), 2);
        assert_eq!(h.scene.state().last_shot_at(), Some(ms(210)));
    }

    #[test]
    fn holdable_gun_auto_fires_on_cooldown() {
        let mut h = Harness::new(rifle());
        h.at(0).input(&[click()]);

        let mut t = 16;
        while t <= 240 {
            h.at(t).input(&[]);
            t += 16;
        }

        // Shots at 0, 112 and 224 ms.
        assert_eq!(h.projectiles(), 3);
        assert_eq!(h.scene.state().last_shot_at(), Some(ms(224)));
    }

    #[test]
    fn held_and_click_in_one_frame_fire_once() {
        let mut h = Harness::new(rifle());
        h.held = HeldInputs::new().with_button(MouseButton::Left);

        let intent = h.at(0).input(&[click()]);
        assert!(intent.fire);
        assert_eq!(h.projectiles(), 1);
    }

    #[test]
    fn paused_scene_does_not_shoot() {
        let mut h = Harness::new(pistol());
        h.at(0).input(&[press(KeyCode::KeyP)]);

        assert!(!h.at(500).input(&[click()]).fire);
        assert_eq!(h.projectiles(), 0);
        assert_eq!(h.scene.state().last_shot_at(), None);
    }

    #[test]
    fn shot_spawns_at_remapped_pointer() {
        let mut h = Harness::new(pistol());
        h.viewport.set_display_rect(Some(DisplayRect {
            left: 10.0,
            top: 20.0,
            width: 480.0,
            height: 270.0,
        }));

        h.at(0)
            .input(&[InputEvent::PointerMoved { x: 250.0, y: 155.0 }, click()]);

        let (_, shot) = h.scene.state().projectiles.iter().next().unwrap();
        assert_eq!((shot.x, shot.y), (480.0, 270.0));
    }

    //--- Mode Commands ----------------------------------------------------

    #[test]
    fn pause_toggles_and_fullscreen_stays_available() {
        let mut h = Harness::new(pistol());

        h.input(&[press(KeyCode::KeyP)]);
        assert!(h.scene.is_paused());

        h.input(&[press(KeyCode::KeyF)]);
        assert!(h.viewport.take_fullscreen_request());

        h.input(&[press(KeyCode::KeyP)]);
        assert!(!h.scene.is_paused());
    }

    #[test]
    fn inventory_toggle_ignored_while_paused() {
        let mut h = Harness::new(pistol());
        h.input(&[press(KeyCode::KeyP), press(KeyCode::KeyI)]);

        assert!(!h.scene.state().inventory.is_visible());
        assert!(!h.scene.state().inventory.is_sliding());
    }

    #[test]
    fn repeated_inventory_toggle_during_hide_ends_hidden() {
        let mut h = Harness::new(pistol());
        let (shown_x, hidden_x) = h.scene.config().inventory_positions();

        h.input(&[press(KeyCode::KeyI)]);
        h.scene.update(ms(250));
        assert_eq!(h.scene.state().inventory.x(), shown_x);

        h.input(&[press(KeyCode::KeyI)]);
        h.scene.update(ms(50));
        h.input(&[press(KeyCode::KeyI)]);

        let inventory = &h.scene.state().inventory;
        assert!(!inventory.is_visible());
        assert!(inventory.hide_tween().is_running());
        assert!(!inventory.show_tween().is_running());

        h.scene.update(ms(250));
        assert_eq!(h.scene.state().inventory.x(), hidden_x);
        assert!(!h.scene.state().inventory.is_sliding());
    }

    #[test]
    fn navigator_blocked_during_combat() {
        let mut h = Harness::new(pistol());
        h.room.set(combat_room(Some(false)));

        h.at(40).input(&[press(KeyCode::KeyM)]);

        assert!(!h.navigator.get());
        let messages = &h.scene.state().messages;
        assert_eq!(messages.len(), 1);
        let last = messages.last().unwrap();
        assert_eq!(last.text, "You cannot access the navigator during combat!");
        assert_eq!(last.created_at, ms(40));
    }

    #[test]
    fn navigator_blocked_when_round_missing() {
        let mut h = Harness::new(pistol());
        h.room.set(combat_room(None));

        h.input(&[press(KeyCode::KeyM)]);
        assert!(!h.navigator.get());
        assert_eq!(h.scene.state().messages.len(), 1);
    }

    #[test]
    fn navigator_toggles_outside_combat() {
        let mut h = Harness::new(pistol());
        h.room.set(combat_room(Some(true)));

        h.input(&[press(KeyCode::KeyM)]);
        assert!(h.navigator.get());

        h.room.set(RoomSlot::NoRoom);
        h.input(&[press(KeyCode::KeyM)]);
        assert!(!h.navigator.get());
        assert!(h.scene.state().messages.is_empty());
    }

    //--- Frame Ordering ---------------------------------------------------

    #[test]
    fn collaborator_input_runs_before_shooting() {
        let mut h = Harness::new(pistol());
        h.input(&[click()]);

        assert_eq!(*h.log.borrow(), vec!["player.input", "map.input", "shoot"]);
    }

    #[test]
    fn update_runs_dungeon_before_player() {
        let mut h = Harness::new(pistol());
        h.scene.update(ms(16));

        assert_eq!(*h.log.borrow(), vec!["dungeon.update", "player.update"]);
    }

    #[test]
    fn paused_update_is_noop() {
        let mut h = Harness::new(pistol());
        let hidden_x = h.scene.state().inventory.x();

        h.input(&[press(KeyCode::KeyI), press(KeyCode::KeyP)]);
        h.log.borrow_mut().clear();

        h.scene.update(ms(100));
        h.scene.update(ms(300));

        assert!(h.log.borrow().is_empty());
        let inventory = &h.scene.state().inventory;
        assert_eq!(inventory.x(), hidden_x);
        assert_eq!(inventory.show_tween().steps_applied(), 0);
    }

    #[test]
    fn draw_order_is_back_to_front() {
        let mut h = Harness::new(pistol());
        h.room.set(combat_room(Some(false)));
        h.input(&[press(KeyCode::KeyM)]);

        let mut canvas = DrawList::new();
        h.scene.draw(&mut canvas);

        let commands = canvas.commands();
        assert_eq!(
            commands[0],
            DrawCommand::FillRect {
                rect: h.scene.config().render_rect(),
                color: h.scene.config().background,
            }
        );

        let layers: Vec<&str> = commands[1..]
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(layers, vec!["dungeon", "player", "hud+messages", "map"]);
    }

    #[test]
    fn push_message_uses_scene_clock() {
        let mut h = Harness::new(pistol());
        h.clock.set(ms(1234));

        let id = h.scene.push_message("Crate opened");
        assert_eq!(id, 0);
        assert_eq!(h.scene.state().messages.last().unwrap().created_at, ms(1234));
    }
}
