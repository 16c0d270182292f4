//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the logic thread.
//
// The logic thread only sees these types, so the windowing backend can
// change without touching scene code.
//
// Components:
// - `interface`: event, command and error types (the contract)
// - `event_collector`: core-side draining of platform events per tick
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{PlatformCommand, PlatformEvent};
pub use interface::PlatformError;
