//! Transition Engine
//!
//! Owns the single [`TransitionState`] and is its only writer. Everyone
//! else reads snapshots through [`TransitionEngine::state`] or watches it
//! through [`TransitionEngine::subscribe`].
//!
//! ## Run lifecycle
//!
//! ```text
//! begin() ── busy? ──▶ Err(InProgress)            (state untouched)
//!    │
//!    ├─ runtime, viewport guard, effect.prepare() ── fail ──▶ on_error, Err(Setup)
//!    │
//!    ├─ Start(direction) → Entering, on_start
//!    │
//!    └─ ScheduledTasks ┬─ ticker   (+2 / 16 ms, stops at 40 or on phase change)
//!                      └─ timeline (Midpoint → fire effect, BeginExit, Finish, Settle)
//!                                                           │
//!                                   guard released, on_complete, Ok(()) ◀┘
//! ```
//!
//! Every timer callback carries its [`RunId`] and re-checks it under the
//! engine lock, so a timer that fires after `cancel_transition` is a no-op.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::task::{Context, Poll};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::{oneshot, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::scheduler::ScheduledTasks;
use crate::domain::options::Callback;
use crate::domain::{
    apply, Direction, Phase, TransitionEvent, TransitionOptions, TransitionState,
    TransitionTiming, ENTERING_PROGRESS_CAP,
};
use crate::error::TransitionError;
use crate::ports::{NoopViewport, TransitionEffect, ViewportGuard, ViewportLock};

/// Identifier of one run, unique per engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

type CompletionSender = oneshot::Sender<Result<(), TransitionError>>;

/// Resources owned by the run in flight.
struct ActiveRun {
    id: RunId,
    tasks: Option<ScheduledTasks>,
    guard: Option<ViewportGuard>,
    effect: Option<Box<dyn TransitionEffect>>,
    on_complete: Option<Callback>,
    completion: Option<CompletionSender>,
}

struct EngineCore {
    timing: TransitionTiming,
    viewport: Arc<dyn ViewportLock>,
    state: watch::Sender<TransitionState>,
    active: Mutex<Option<ActiveRun>>,
    next_run: AtomicU64,
}

impl EngineCore {
    /// Apply `event` and publish the result. Callers hold the `active` lock.
    fn transition(&self, event: TransitionEvent) -> Option<TransitionState> {
        let current = *self.state.borrow();
        match apply(current, event) {
            Ok(next) => {
                if next != current {
                    self.state.send_replace(next);
                }
                Some(next)
            }
            Err(err) => {
                debug!(%err, "[bps-01] Transition event rejected");
                None
            }
        }
    }

    fn is_current(active: &Option<ActiveRun>, run: RunId) -> bool {
        matches!(active, Some(r) if r.id == run)
    }

    /// Ticker step. Returns whether the ticker should keep going.
    fn tick(&self, run: RunId, progress: u8) -> bool {
        let active = self.active.lock();
        if !Self::is_current(&active, run) || self.state.borrow().phase != Phase::Entering {
            return false;
        }
        self.transition(TransitionEvent::Tick(progress));
        progress < ENTERING_PROGRESS_CAP
    }

    /// Timeline step. Returns whether the run is still alive.
    fn on_timer(&self, run: RunId, event: TransitionEvent) -> bool {
        match event {
            TransitionEvent::Midpoint => self.midpoint(run),
            TransitionEvent::Settle => {
                self.settle(run);
                false
            }
            other => {
                let active = self.active.lock();
                if !Self::is_current(&active, run) {
                    return false;
                }
                if let Some(state) = self.transition(other) {
                    debug!(run = %run, phase = %state.phase, progress = state.progress, "[bps-01] Timer step");
                }
                true
            }
        }
    }

    fn midpoint(&self, run: RunId) -> bool {
        let effect = {
            let mut active = self.active.lock();
            let Some(current) = active.as_mut().filter(|r| r.id == run) else {
                return false;
            };
            self.transition(TransitionEvent::Midpoint);
            current.effect.take()
        };

        if let Some(effect) = effect {
            debug!(run = %run, "[bps-01] Midpoint reached, firing effect");
            effect.fire();
        }
        true
    }

    fn settle(&self, run: RunId) {
        let finished = {
            let mut active = self.active.lock();
            if !Self::is_current(&active, run) {
                return;
            }
            if self.transition(TransitionEvent::Settle).is_none() {
                self.state.send_replace(TransitionState::IDLE);
            }
            active.take()
        };

        let Some(mut finished) = finished else {
            return;
        };
        drop(finished.guard.take());
        if let Some(on_complete) = finished.on_complete.take() {
            on_complete();
        }
        if let Some(completion) = finished.completion.take() {
            let _ = completion.send(Ok(()));
        }
        info!(run = %run, "[bps-01] Transition complete");
    }

    fn cancel(&self) -> bool {
        let cancelled = {
            let mut active = self.active.lock();
            let run = active.take();
            if run.is_some() {
                self.transition(TransitionEvent::Cancel);
            }
            run
        };

        let Some(mut run) = cancelled else {
            return false;
        };
        if let Some(mut tasks) = run.tasks.take() {
            tasks.cancel_all();
        }
        drop(run.guard.take());
        if let Some(completion) = run.completion.take() {
            let _ = completion.send(Err(TransitionError::Cancelled));
        }
        info!(run = %run.id, "[bps-01] Transition cancelled");
        true
    }
}

impl Drop for EngineCore {
    fn drop(&mut self) {
        if self.active.get_mut().take().is_some() {
            let current = *self.state.borrow();
            let idle = apply(current, TransitionEvent::Abort).unwrap_or(TransitionState::IDLE);
            self.state.send_replace(idle);
            warn!("[bps-01] Engine dropped with a run in flight");
        }
    }
}

/// Handle to the process-wide transition engine. Clones share one engine.
#[derive(Clone)]
pub struct TransitionEngine {
    core: Arc<EngineCore>,
}

impl Default for TransitionEngine {
    fn default() -> Self {
        Self::new(Arc::new(NoopViewport))
    }
}

impl TransitionEngine {
    pub fn new(viewport: Arc<dyn ViewportLock>) -> Self {
        Self::with_timing(viewport, TransitionTiming::default())
    }

    pub fn with_timing(viewport: Arc<dyn ViewportLock>, timing: TransitionTiming) -> Self {
        let (state, _) = watch::channel(TransitionState::IDLE);
        Self {
            core: Arc::new(EngineCore {
                timing,
                viewport,
                state,
                active: Mutex::new(None),
                next_run: AtomicU64::new(0),
            }),
        }
    }

    pub fn timing(&self) -> TransitionTiming {
        self.core.timing
    }

    pub fn state(&self) -> TransitionState {
        *self.core.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<TransitionState> {
        self.core.state.subscribe()
    }

    /// Whether a run is in flight.
    pub fn is_navigating(&self) -> bool {
        self.core.active.lock().is_some()
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.core.active.lock().as_ref().map(|r| r.id)
    }

    /// Start a run and return a future that resolves when it settles.
    ///
    /// Fails immediately with [`TransitionError::InProgress`] while another
    /// run is in flight, without touching it. Setup (runtime lookup, viewport
    /// lock, `effect.prepare()` when `preload` is set) happens before this
    /// returns; on failure `on_error` runs and the state stays idle.
    ///
    /// The viewport lock and `prepare` run under the engine lock and must
    /// not call back into the engine.
    pub fn begin(
        &self,
        direction: Direction,
        mut options: TransitionOptions,
        mut effect: Option<Box<dyn TransitionEffect>>,
    ) -> Result<TransitionCompletion, TransitionError> {
        let core = &self.core;
        let mut active = core.active.lock();
        if active.is_some() {
            warn!(%direction, "[bps-01] Transition rejected: another run is in flight");
            return Err(TransitionError::InProgress);
        }

        let (runtime, guard) = match Self::setup(core, &options, effect.as_deref_mut()) {
            Ok(ready) => ready,
            Err(err) => {
                drop(active);
                warn!(%err, %direction, "[bps-01] Transition setup failed");
                if let Some(on_error) = options.on_error.take() {
                    on_error(&err);
                }
                return Err(err);
            }
        };

        let id = RunId(core.next_run.fetch_add(1, Ordering::Relaxed) + 1);
        let duration = options.duration.unwrap_or(core.timing.duration);
        let (completion, rx) = oneshot::channel();

        *active = Some(ActiveRun {
            id,
            tasks: None,
            guard: Some(guard),
            effect,
            on_complete: options.on_complete.take(),
            completion: Some(completion),
        });
        core.transition(TransitionEvent::Start(direction));
        drop(active);

        info!(
            run = %id,
            %direction,
            duration_ms = duration.as_millis() as u64,
            "[bps-01] Transition started"
        );

        if let Some(on_start) = options.on_start.take() {
            on_start();
        }

        // on_start may have cancelled the run already.
        let mut active = core.active.lock();
        if let Some(run) = active.as_mut().filter(|r| r.id == id) {
            run.tasks = Some(self.schedule(runtime, id, duration));
        }

        Ok(TransitionCompletion { run: id, rx })
    }

    /// [`begin`](Self::begin) and wait for the run to settle.
    pub async fn run_transition(
        &self,
        direction: Direction,
        options: TransitionOptions,
        effect: Option<Box<dyn TransitionEffect>>,
    ) -> Result<(), TransitionError> {
        self.begin(direction, options, effect)?.await
    }

    /// Abort the run in flight, if any.
    ///
    /// Pending timers are cancelled together, the state returns to idle, the
    /// viewport is released and the pending completion resolves with
    /// [`TransitionError::Cancelled`]. `on_complete` and `on_error` do not
    /// run. Returns `false` when nothing was in flight.
    pub fn cancel_transition(&self) -> bool {
        self.core.cancel()
    }

    fn setup(
        core: &EngineCore,
        options: &TransitionOptions,
        effect: Option<&mut (dyn TransitionEffect + 'static)>,
    ) -> Result<(Handle, ViewportGuard), TransitionError> {
        let runtime = Handle::try_current().map_err(|_| TransitionError::NoRuntime)?;
        let guard = ViewportGuard::acquire(Arc::clone(&core.viewport))?;
        if options.preload {
            if let Some(effect) = effect {
                effect.prepare()?;
            }
        }
        Ok((runtime, guard))
    }

    fn schedule(&self, runtime: Handle, id: RunId, duration: Duration) -> ScheduledTasks {
        let timing = self.core.timing;
        let marks = timing.marks(duration);
        let mut tasks = ScheduledTasks::new(runtime, Instant::now());
        let origin = tasks.origin();

        let period = timing.tick_interval;
        let step = timing.tick_step.max(1);
        let weak = Arc::downgrade(&self.core);
        tasks.spawn(async move {
            if period.is_zero() {
                return;
            }
            let mut ticker = tokio::time::interval_at(origin + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut progress = 0u8;
            loop {
                ticker.tick().await;
                progress = progress.saturating_add(step);
                let Some(core) = Weak::upgrade(&weak) else {
                    return;
                };
                if !core.tick(id, progress) {
                    return;
                }
            }
        });

        let timeline = [
            (marks.midpoint, TransitionEvent::Midpoint),
            (marks.exit, TransitionEvent::BeginExit),
            (marks.finish, TransitionEvent::Finish),
            (marks.settle, TransitionEvent::Settle),
        ];
        let weak = Arc::downgrade(&self.core);
        tasks.spawn(async move {
            for (offset, event) in timeline {
                tokio::time::sleep_until(origin + offset).await;
                let Some(core) = Weak::upgrade(&weak) else {
                    return;
                };
                if !core.on_timer(id, event) {
                    return;
                }
            }
        });

        tasks
    }
}

impl fmt::Debug for TransitionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionEngine")
            .field("state", &self.state())
            .field("active_run", &self.active_run())
            .finish()
    }
}

/// Resolves when a run settles (`Ok`) or is cancelled (`Err(Cancelled)`).
///
/// Dropping it does not cancel the run.
#[must_use = "a completion does nothing unless awaited"]
pub struct TransitionCompletion {
    run: RunId,
    rx: oneshot::Receiver<Result<(), TransitionError>>,
}

impl TransitionCompletion {
    pub fn run_id(&self) -> RunId {
        self.run
    }
}

impl Future for TransitionCompletion {
    type Output = Result<(), TransitionError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx)
            .poll(cx)
            .map(|received| received.unwrap_or(Err(TransitionError::Cancelled)))
    }
}
