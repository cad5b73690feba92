//! Cancelable task group.
//!
//! All timers of one run live in one group and are aborted together.

use std::future::Future;

use tokio::runtime::Handle;
use tokio::task::JoinSet;
use tokio::time::Instant;

pub struct ScheduledTasks {
    runtime: Handle,
    origin: Instant,
    tasks: JoinSet<()>,
}

impl ScheduledTasks {
    /// Empty group whose offsets are measured from `origin`.
    pub fn new(runtime: Handle, origin: Instant) -> Self {
        Self {
            runtime,
            origin,
            tasks: JoinSet::new(),
        }
    }

    pub fn origin(&self) -> Instant {
        self.origin
    }

    /// Run `task` on the group's runtime.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.spawn_on(task, &self.runtime);
    }

    /// Abort every task in the group.
    pub fn cancel_all(&mut self) {
        self.tasks.abort_all();
    }
}

impl Drop for ScheduledTasks {
    fn drop(&mut self) {
        self.tasks.abort_all();
    }
}
