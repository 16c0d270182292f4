//=========================================================================
// Core Loop
//
// Frame loop of the logic (non-platform) thread.
//
// Responsibilities:
// - Drain platform events once per tick (`platform_bridge`)
// - Keep the held-input snapshot and the viewport in step with them
// - Drive the scene through process_input → update → draw
// - Hand each recorded frame to the host's frame sink
// - Forward fullscreen requests back to the platform
//
// Notes:
// The loop owns the scene outright; the scene is built inside the thread
// by a factory, so it never needs to be `Send`. Communication with the
// platform occurs only through the two crossbeam channels.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod assets;
pub mod input;
pub mod messages;
pub mod render;
pub mod scene;
pub mod time;
pub mod tween;

pub(crate) mod platform_bridge;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use log::{info, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::assets::SoundHandle;
use crate::core::input::{FrameIntent, HeldInputs};
use crate::core::render::{DrawList, Viewport};
use crate::core::scene::Scene;
use platform_bridge::{EventCollector, PlatformCommand, PlatformEvent, TickControl};

//=== Frame ===============================================================

/// One finished frame, as handed to the frame sink.
#[derive(Debug)]
pub struct Frame<'a> {
    /// Monotonic frame counter, starting at zero.
    pub index: u64,

    /// Fixed time step the frame was simulated with.
    pub dt: Duration,

    /// Draw commands, back to front.
    pub draw_list: &'a DrawList,

    /// Sounds to start playing.
    pub sounds: &'a [SoundHandle],
}

//=== CoreLoop ============================================================

pub(crate) struct CoreLoop<S: Scene> {
    scene: S,
    collector: EventCollector,
    commands: Sender<PlatformCommand>,
    held: HeldInputs,
    viewport: Viewport,
    canvas: DrawList,
    dt: Duration,
    frame_index: u64,
}

impl<S: Scene> CoreLoop<S> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        scene: S,
        events: Receiver<PlatformEvent>,
        commands: Sender<PlatformCommand>,
        tps: f64,
    ) -> Self {
        let (render_width, render_height) = scene.render_size();
        Self {
            viewport: Viewport::new(render_width, render_height),
            scene,
            collector: EventCollector::new(events),
            commands,
            held: HeldInputs::new(),
            canvas: DrawList::new(),
            dt: Duration::from_secs_f64(1.0 / tps),
            frame_index: 0,
        }
    }

    //--- tick() -----------------------------------------------------------
    //
    // One frame:
    //  1. Drain platform events (exit on close/disconnect)
    //  2. Apply resize, focus loss and the held-input snapshot
    //  3. Scene: process_input → update → draw
    //  4. Forward fullscreen requests, hand the frame to the sink
    //
    pub(crate) fn tick<F>(&mut self, sink: &mut F) -> TickControl
    where
        F: FnMut(&Frame<'_>),
    {
        if self.collector.collect_frame() == TickControl::Exit {
            return TickControl::Exit;
        }

        if let Some((width, height)) = self.collector.resized() {
            self.viewport.resize(width, height);
        }
        let events = self.collector.take_frame();
        match self.collector.focus_lost_at() {
            Some(at) => {
                let (before, after) = events.split_at(at.min(events.len()));
                self.held.apply_events(before);
                trace!("Focus lost, releasing held inputs");
                self.held.clear();
                self.held.apply_events(after);
            }
            None => self.held.apply_events(&events),
        }

        let intent: FrameIntent =
            self.scene
                .process_input(&events, &self.held, self.dt, &mut self.viewport);
        if intent.skipped > 0 {
            trace!("Frame {} skipped {} input events", self.frame_index, intent.skipped);
        }

        if self.viewport.take_fullscreen_request()
            && self.commands.send(PlatformCommand::ToggleFullscreen).is_err()
        {
            warn!("Platform channel disconnected, fullscreen request dropped");
        }

        self.scene.update(self.dt);

        self.canvas.clear();
        self.scene.draw(&mut self.canvas);

        let sounds = self.scene.drain_sound_cues();
        sink(&Frame {
            index: self.frame_index,
            dt: self.dt,
            draw_list: &self.canvas,
            sounds: &sounds,
        });

        self.frame_index += 1;
        TickControl::Continue
    }

    //--- run() ------------------------------------------------------------

    /// Ticks at the fixed rate until the platform goes away.
    pub(crate) fn run<F>(mut self, mut sink: F)
    where
        F: FnMut(&Frame<'_>),
    {
        loop {
            let frame_start = Instant::now();

            if self.tick(&mut sink) == TickControl::Exit {
                info!("Core thread exiting after {} frames", self.frame_index);
                break;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < self.dt {
                thread::sleep(self.dt - elapsed);
            }
        }
    }
}

//--- spawn_core_thread() -------------------------------------------------
//
// Builds the scene inside the logic thread and runs the loop there.
//
pub(crate) fn spawn_core_thread<S, M, F>(
    make_scene: M,
    sink: F,
    events: Receiver<PlatformEvent>,
    commands: Sender<PlatformCommand>,
    tps: f64,
) -> thread::JoinHandle<()>
where
    S: Scene,
    M: FnOnce() -> S + Send + 'static,
    F: FnMut(&Frame<'_>) + Send + 'static,
{
    thread::spawn(move || {
        let scene = make_scene();
        info!("Scene constructed, core loop starting at {:.1} TPS", tps);
        CoreLoop::new(scene, events, commands, tps).run(sink);
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
