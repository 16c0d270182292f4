//=========================================================================
// Event Collector
//=========================================================================
//
// Drains platform events once per logic tick into a single frame batch.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() ─┬─ frame input batch
//                                              ├─ latest resize
//                                              ├─ focus loss position
//                                              └─ TickControl
//
// Draining is bounded so a flooded channel cannot starve the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events with bounded polling.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    frame: Vec<InputEvent>,
    resized: Option<(u32, u32)>,
    focus_lost_at: Option<usize>,
}

impl EventCollector {
    const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            frame: Vec::with_capacity(32),
            resized: None,
            focus_lost_at: None,
        }
    }

    //--- collect_frame() --------------------------------------------------

    /// Drains pending platform events into this frame's state.
    ///
    /// Returns [`TickControl::Exit`] on window close or channel disconnect.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.frame.clear();
        self.resized = None;
        self.focus_lost_at = None;

        let mut drained = 0;
        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => {
                    warn!("Platform channel disconnected");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    //--- Frame Accessors --------------------------------------------------

    /// Input events gathered this frame, in platform order.
    #[cfg(test)]
    pub(crate) fn frame(&self) -> &[InputEvent] {
        &self.frame
    }

    /// Takes this frame's input batch, leaving an empty buffer.
    pub(crate) fn take_frame(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.frame)
    }

    /// Latest window size reported this frame, if any.
    pub(crate) fn resized(&self) -> Option<(u32, u32)> {
        self.resized
    }

    /// Batch index of the last focus loss this frame, if any.
    ///
    /// Events before the index happened while focused; events from the
    /// index on arrived after focus went away.
    pub(crate) fn focus_lost_at(&self) -> Option<usize> {
        self.focus_lost_at
    }

    //--- Internal Helpers -------------------------------------------------

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs { discrete, continuous } => {
                // Movement first so a press in the same batch sees the
                // final pointer position.
                self.frame.extend(continuous);
                self.frame.extend(discrete);
            }
            PlatformEvent::Resized { width, height } => {
                debug!("Surface resized to {}x{}", width, height);
                self.resized = Some((width, height));
            }
            PlatformEvent::Focused(focused) => {
                if !focused {
                    self.focus_lost_at = Some(self.frame.len());
                }
            }
            PlatformEvent::WindowClosed => return TickControl::Exit,
        }
        TickControl::Continue
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
