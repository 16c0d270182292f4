//=========================================================================
// Inventory Overlay
//=========================================================================
//
// Visibility flag plus the horizontal offset of the inventory panel,
// driven by two slide tweens.
//
// Architecture:
//   toggle() ─┬─ hidden → visible = true,  show tween activated
//             └─ shown  → visible = false, hide tween activated
//   update(dt) → show.update(x) → hide.update(x)
//
// The logical flag flips immediately; the slide lags behind it. A toggle
// while either tween runs is ignored, so at most one tween is ever active
// and `x` rests at exactly `shown_x` or `hidden_x` between slides.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::tween::{Slide, Tween};

//=== InventoryToggle =====================================================

/// Outcome of [`Inventory::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryToggle {
    Opening,
    Closing,

    /// A slide was already in flight.
    Ignored,
}

//=== Inventory ===========================================================

#[derive(Debug)]
pub struct Inventory {
    visible: bool,
    x: f32,
    shown_x: f32,
    hidden_x: f32,
    show: Tween<Slide>,
    hide: Tween<Slide>,
}

impl Inventory {
    /// Creates a hidden inventory resting at `hidden_x`.
    ///
    /// # Panics
    ///
    /// Panics if `steps == 0` or `slide` is zero (see [`Tween::new`]).
    pub fn new(shown_x: f32, hidden_x: f32, slide: Duration, steps: u32) -> Self {
        Self {
            visible: false,
            x: hidden_x,
            shown_x,
            hidden_x,
            show: Tween::slide(slide, steps, hidden_x, shown_x),
            hide: Tween::slide(slide, steps, shown_x, hidden_x),
        }
    }

    //--- toggle() ---------------------------------------------------------

    /// Starts sliding the panel towards the opposite resting position.
    pub fn toggle(&mut self) -> InventoryToggle {
        if self.is_sliding() {
            debug!("Inventory toggle ignored: slide in progress");
            return InventoryToggle::Ignored;
        }

        if self.visible {
            self.visible = false;
            self.hide.activate();
            info!("Inventory closing");
            InventoryToggle::Closing
        } else {
            self.visible = true;
            self.show.activate();
            info!("Inventory opening");
            InventoryToggle::Opening
        }
    }

    /// Advances both slides.
    pub fn update(&mut self, dt: Duration) {
        self.show.update(dt, &mut self.x);
        self.hide.update(dt, &mut self.x);
    }

    //--- Query API --------------------------------------------------------

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current horizontal offset of the panel.
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn shown_x(&self) -> f32 {
        self.shown_x
    }

    pub fn hidden_x(&self) -> f32 {
        self.hidden_x
    }

    pub fn is_sliding(&self) -> bool {
        self.show.is_running() || self.hide.is_running()
    }

    pub fn show_tween(&self) -> &Tween<Slide> {
        &self.show
    }

    pub fn hide_tween(&self) -> &Tween<Slide> {
        &self.hide
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
