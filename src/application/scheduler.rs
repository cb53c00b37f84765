use std::cell::Cell as StdCell;
use std::rc::Rc;

use crate::domain::{PARALLEL_THRESHOLD, Universe};
use crate::rendering::{Renderer, Surface};

/// Frame scheduler lifecycle states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// No surface/renderer yet, nothing scheduled
    #[default]
    Idle,
    /// Actively scheduling tick + render frames
    Running,
    /// Renderer exists but the loop is suspended
    Paused,
    /// Terminal: owner torn down, nothing will run again
    Stopped,
}

/// Cancellation token for one pending scheduled frame.
///
/// Clones share the same flag, so the scheduler and any external holder
/// observe each other's cancellation. Cancel is idempotent; canceling an
/// already-fired or already-canceled handle is a no-op.
#[derive(Clone, Default)]
pub struct LoopHandle {
    canceled: Rc<StdCell<bool>>,
}

impl LoopHandle {
    fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.canceled.set(true);
    }

    pub fn is_canceled(&self) -> bool {
        self.canceled.get()
    }
}

/// FrameScheduler drives the tick -> render cycle.
///
/// The host calls [`on_frame`](FrameScheduler::on_frame) once per display
/// refresh; the scheduler decides whether its pending frame fires. All of
/// tick, render and scheduling stay on one logical execution context, so
/// no locking is involved anywhere.
///
/// Invariant: at most one loop handle is outstanding at any time. A frame
/// firing consumes the handle; pause, detach, shutdown and universe
/// replacement cancel it before doing anything else.
pub struct FrameScheduler {
    phase: Phase,
    pending: Option<LoopHandle>,
    /// Universe id the running loop is bound to. A mismatch on the next
    /// frame means the host swapped the universe wholesale (reset), and
    /// the loop restarts against the new instance instead of ticking a
    /// stale one.
    bound_to: Option<u64>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            pending: None,
            bound_to: None,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Handle for the currently scheduled frame, if any
    pub fn pending_handle(&self) -> Option<LoopHandle> {
        self.pending.clone()
    }

    /// A renderer became available for `universe`. Enters `Running` and
    /// schedules the first frame unless the externally owned pause flag
    /// is set, in which case the loop waits in `Paused`.
    pub fn attach(&mut self, universe: &Universe, paused: bool) {
        if self.phase == Phase::Stopped {
            return;
        }

        self.cancel_pending();
        self.bound_to = Some(universe.id());

        if paused {
            self.phase = Phase::Paused;
        } else {
            self.phase = Phase::Running;
            self.schedule();
        }
    }

    /// Observe the externally owned pause flag. Idempotent: the host may
    /// call this every frame with the current value.
    pub fn set_paused(&mut self, paused: bool) {
        match (self.phase, paused) {
            (Phase::Running, true) => {
                self.cancel_pending();
                self.phase = Phase::Paused;
            }
            (Phase::Paused, false) => {
                self.phase = Phase::Running;
                self.schedule();
            }
            _ => {}
        }
    }

    /// The renderer/surface went away (e.g. new dimensions). Cancels any
    /// pending frame and waits in `Idle` for the next `attach`.
    pub fn detach(&mut self) {
        if self.phase == Phase::Stopped {
            return;
        }
        self.cancel_pending();
        self.bound_to = None;
        self.phase = Phase::Idle;
    }

    /// Owner teardown. Cancels unconditionally; terminal.
    pub fn shutdown(&mut self) {
        self.cancel_pending();
        self.bound_to = None;
        self.phase = Phase::Stopped;
    }

    /// One display refresh elapsed. If a scheduled frame is pending and
    /// not canceled it fires now: tick the universe, render the post-tick
    /// generation, then schedule the next frame.
    ///
    /// While `Paused` the frozen generation is redrawn without ticking,
    /// since hosts clear the backbuffer every refresh. A render failure
    /// demotes the scheduler to `Idle` to await a fresh surface.
    pub fn on_frame<S: Surface>(&mut self, universe: &mut Universe, renderer: &mut Renderer<S>) {
        match self.phase {
            Phase::Idle | Phase::Stopped => return,
            Phase::Paused => {
                if renderer.render(universe).is_err() {
                    self.detach();
                }
                return;
            }
            Phase::Running => {}
        }

        // Reset replaced the universe: restart the loop against the new
        // instance. Its first tick fires on the next refresh.
        if self.bound_to != Some(universe.id()) {
            self.cancel_pending();
            self.bound_to = Some(universe.id());
            self.schedule();
            return;
        }

        let Some(handle) = self.pending.take() else {
            return;
        };
        if handle.is_canceled() {
            return;
        }

        // Tick fully completes before render begins; render always sees
        // the post-tick generation.
        if universe.cells().len() >= PARALLEL_THRESHOLD {
            universe.tick_parallel();
        } else {
            universe.tick();
        }

        match renderer.render(universe) {
            Ok(()) => self.schedule(),
            Err(_) => self.detach(),
        }
    }

    fn schedule(&mut self) {
        debug_assert!(
            self.pending.is_none(),
            "scheduling over an outstanding loop handle would double the tick rate"
        );
        self.pending = Some(LoopHandle::new());
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}
