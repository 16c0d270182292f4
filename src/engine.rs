//=========================================================================
// Engine
//
// Entry point that wires the platform and the logic thread together.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(make_scene, sink)──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform (main thread)
//         ├─ with_title()               blocks until exit
//         └─ with_window_size()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformError;
use crate::core::scene::Scene;
use crate::core::{spawn_core_thread, Frame};
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic ticks per second)
/// - **Channel capacity**: 128 events
/// - **Window**: "Dungeon", 960×540 logical pixels
///
/// # Examples
///
/// ```no_run
/// use dungeon_scene::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .with_title("Dungeon")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    title: String,
    window_width: u32,
    window_height: u32,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
            title: "Dungeon".into(),
            window_width: 960,
            window_height: 540,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// Each tick runs one full frame cycle with a fixed `dt` of `1 / tps`.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the channel capacity for platform → core communication.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive");
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        Engine {
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: WindowSettings {
                title: self.title,
                width: self.window_width,
                height: self.window_height,
            },
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Runtime hosting one scene.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreLoop (Logic Thread @ TPS)
///   │     └─► Scene: process_input → update → draw → frame sink
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input Polling, Fullscreen
///
/// Communication: crossbeam channels (PlatformEvent ⇄ PlatformCommand)
/// ```
pub struct Engine {
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
}

impl Engine {
    //--- Execution --------------------------------------------------------

    /// Starts the runtime and blocks until the window closes.
    ///
    /// `make_scene` runs on the logic thread, so the scene itself never
    /// crosses threads. `sink` receives every finished frame there too.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the platform ⇄ core channels
    /// 2. Spawns the logic thread (builds the scene, then ticks at TPS)
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: platform exits → channel disconnects → logic
    ///    thread terminates
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the platform event loop fails. A
    /// panicking logic thread is logged, not returned.
    pub fn run<S, M, F>(self, make_scene: M, sink: F) -> Result<(), PlatformError>
    where
        S: Scene,
        M: FnOnce() -> S + Send + 'static,
        F: FnMut(&Frame<'_>) + Send + 'static,
    {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels -----------------------------
        let (event_tx, event_rx) = bounded(self.channel_capacity);
        let (command_tx, command_rx) = bounded(self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = spawn_core_thread(make_scene, sink, event_rx, command_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.window, event_tx, command_rx);
        let result = platform.run();
        if let Err(e) = &result {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: wait for the logic thread ------------------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 60.0);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.title, "Dungeon");
        assert_eq!((builder.window_width, builder.window_height), (960, 540));
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_window_size_panics_on_zero() {
        EngineBuilder::new().with_window_size(0, 540);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(256)
            .with_title("Crypt")
            .with_window_size(1280, 720)
            .build();

        assert_eq!(engine.tps, 120.0);
        assert_eq!(engine.channel_capacity, 256);
        assert_eq!(
            engine.window,
            WindowSettings {
                title: "Crypt".into(),
                width: 1280,
                height: 720,
            }
        );
    }
}
