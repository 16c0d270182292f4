//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Messages crossing the platform ⇄ logic thread boundary, and the
// platform error type.
//
//   platform ── PlatformEvent ───▶ logic
//   platform ◀── PlatformCommand ── logic
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PlatformEvent {
    /// Input buffered over one platform frame.
    Inputs {
        /// Presses and releases, in arrival order.
        discrete: Vec<InputEvent>,

        /// Coalesced pointer movement (latest position only).
        continuous: Vec<InputEvent>,
    },

    /// Window inner size changed, in physical pixels.
    Resized { width: u32, height: u32 },

    /// Window gained or lost keyboard focus.
    Focused(bool),

    /// Window close requested.
    WindowClosed,
}

//=== PlatformCommand =====================================================

/// Requests sent from core back to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PlatformCommand {
    ToggleFullscreen,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(String),

    /// Event loop execution error.
    EventLoopExecution(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=========================================================================
// Unit Tests
//=========================================================================
