//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) with the logic thread.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  CoreLoop        │
//  │   ↓                      │    │   ↓              │
//  │  InputProcessor          │    │  GameScene       │
//  │   ↓                      │    │   process_input  │
//  │  InputBuffer             │    │   update         │
//  │   ├─ discrete: Vec<>     │    │   draw           │
//  │   └─ continuous: Set<>   │    │                  │
//  │   ↓                      │    └──────────────────┘
//  │  RedrawRequested (flush) │       ↑          │
//  │   ↓                      │       │          │
//  │  PlatformEvent ──────────┼───────┘          │
//  │                          │                  │
//  │  about_to_wait ◀─────────┼── PlatformCommand┘
//  │   └─ toggle fullscreen   │
//  └──────────────────────────┘
// ```
//
// RedrawRequested is the frame boundary: everything buffered since the
// previous one is sent as a single batch. Resizes and focus changes are
// forwarded immediately.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{PlatformCommand, PlatformError, PlatformEvent};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowSettings ======================================================

/// Initial window title and logical size.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

//=== Platform ============================================================

/// Window owner and input aggregator.
///
/// Runs on the main thread (winit requirement on macOS/iOS). Talks to the
/// logic thread only through the two channels.
pub(crate) struct Platform {
    /// Created lazily in `resumed()`.
    window: Option<Window>,
    settings: WindowSettings,
    buffer: InputBuffer,
    input_processor: InputProcessor,
    event_sender: Sender<PlatformEvent>,
    command_receiver: Receiver<PlatformCommand>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(
        settings: WindowSettings,
        event_sender: Sender<PlatformEvent>,
        command_receiver: Receiver<PlatformCommand>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            settings,
            buffer: InputBuffer::new(),
            input_processor: InputProcessor::new(),
            event_sender,
            command_receiver,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop =
            EventLoop::new().map_err(|e| PlatformError::EventLoopCreation(e.to_string()))?;

        event_loop
            .run_app(&mut self)
            .map_err(|e| PlatformError::EventLoopExecution(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the logic thread. Empty frames are not sent.
    ///
    /// A disconnected channel only logs; the window stays closable.
    fn flush_input_buffer(&mut self) {
        if let Some((discrete, continuous)) = self.buffer.drain() {
            let discrete_count = discrete.len();
            let continuous_count = continuous.len();

            trace!(
                target: "platform::input",
                "Flushing {} discrete + {} continuous events",
                discrete_count,
                continuous_count
            );

            if self
                .event_sender
                .send(PlatformEvent::Inputs { discrete, continuous })
                .is_err()
            {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    discrete_count + continuous_count
                );
            }
        }
    }

    fn send(&self, event: PlatformEvent) {
        if self.event_sender.send(event).is_err() {
            warn!(target: "platform", "Channel disconnected, dropping platform event");
        }
    }

    /// Applies commands queued by the logic thread.
    fn apply_commands(&mut self) {
        while let Ok(command) = self.command_receiver.try_recv() {
            match command {
                PlatformCommand::ToggleFullscreen => self.toggle_fullscreen(),
            }
        }
    }

    fn toggle_fullscreen(&self) {
        let Some(window) = &self.window else {
            debug!(target: "platform", "Fullscreen toggle ignored: no window");
            return;
        };

        if window.fullscreen().is_some() {
            info!(target: "platform", "Leaving fullscreen");
            window.set_fullscreen(None);
        } else {
            info!(target: "platform", "Entering borderless fullscreen");
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first resume and reports its size.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.send(PlatformEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized: {}x{}", size.width, size.height);
                self.send(PlatformEvent::Resized {
                    width: size.width,
                    height: size.height,
                });
            }

            WindowEvent::Focused(focused) => {
                trace!(target: "platform", "Focus changed: {}", focused);
                if !*focused && !self.buffer.is_empty() {
                    debug!(
                        target: "platform",
                        "Focus lost, dropping {} buffered inputs",
                        self.buffer.len()
                    );
                    self.buffer.clear();
                }
                self.send(PlatformEvent::Focused(*focused));
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = self
                    .input_processor
                    .process_pointer_move(position.x, position.y);
                self.buffer.push_continuous(event);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    self.buffer.push_discrete(event);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let event = self.input_processor.process_mouse_button(*button, *state);
                self.buffer.push_discrete(event);
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        self.apply_commands();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
