//=========================================================================
// Scene Configuration
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyBindings;
use crate::core::render::{Color, Rect};

//=== SceneConfig =========================================================

/// Tunables for a [`GameScene`](super::GameScene).
///
/// Defaults: 960×540 render size, `#5a6988` background, 16 px HUD margin,
/// a 64 px inventory panel sliding in over 250 ms in 64 steps.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub render_width: f32,
    pub render_height: f32,
    pub background: Color,
    pub hud_margin: f32,

    //--- Inventory --------------------------------------------------------
    pub inventory_width: f32,
    pub inventory_slide: Duration,
    pub inventory_slide_steps: u32,

    //--- Input & Messages -------------------------------------------------
    pub bindings: KeyBindings,
    pub navigator_blocked_message: String,
    pub message_lifetime: Duration,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            render_width: 960.0,
            render_height: 540.0,
            background: Color::rgb(0x5a, 0x69, 0x88),
            hud_margin: 16.0,
            inventory_width: 64.0,
            inventory_slide: Duration::from_millis(250),
            inventory_slide_steps: 64,
            bindings: KeyBindings::default(),
            navigator_blocked_message: "You cannot access the navigator during combat!".into(),
            message_lifetime: Duration::from_secs(3),
        }
    }
}

impl SceneConfig {
    //--- Builders ---------------------------------------------------------

    /// # Panics
    ///
    /// Panics if either dimension is not positive.
    pub fn with_render_size(mut self, width: f32, height: f32) -> Self {
        assert!(width > 0.0 && height > 0.0, "Render size must be positive");
        self.render_width = width;
        self.render_height = height;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_hud_margin(mut self, margin: f32) -> Self {
        self.hud_margin = margin;
        self
    }

    /// Sets the inventory panel width and its slide timing.
    ///
    /// # Panics
    ///
    /// Panics if `steps == 0` or `duration` is zero.
    pub fn with_inventory_slide(mut self, width: f32, duration: Duration, steps: u32) -> Self {
        assert!(steps > 0, "Inventory slide needs at least one step");
        assert!(!duration.is_zero(), "Inventory slide duration must be positive");
        self.inventory_width = width;
        self.inventory_slide = duration;
        self.inventory_slide_steps = steps;
        self
    }

    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_navigator_blocked_message(mut self, text: impl Into<String>) -> Self {
        self.navigator_blocked_message = text.into();
        self
    }

    pub fn with_message_lifetime(mut self, lifetime: Duration) -> Self {
        self.message_lifetime = lifetime;
        self
    }

    //--- Derived Layout ---------------------------------------------------

    /// Whole render area.
    pub fn render_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.render_width, self.render_height)
    }

    /// Where the player enters the first room.
    pub fn player_spawn(&self) -> (f32, f32) {
        (self.render_width / 2.0, self.render_height - 50.0)
    }

    /// Inventory panel offsets: `(shown_x, hidden_x)`.
    pub fn inventory_positions(&self) -> (f32, f32) {
        let hidden_x = self.render_width - self.hud_margin;
        (hidden_x - self.inventory_width, hidden_x)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
