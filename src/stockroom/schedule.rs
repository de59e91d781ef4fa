//! Deterministic delay scheduling.
//!
//! The tracker's two slow operations (commit, removal) take effect a
//! fixed delay after they are initiated. Rather than real timers, the
//! delays run against a [`Scheduler`]: a single-threaded queue over a
//! logical clock that only moves when the owner calls
//! [`Scheduler::advance`]. This keeps completion ordering fully
//! deterministic and lets tests drive time explicitly.
//!
//! A task fires at most once. It can be cancelled any time before its
//! due instant, after which the payload is dropped and never delivered.

use std::time::Duration;

/// Handle to a scheduled task, usable with [`Scheduler::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Scheduled<T> {
    id: TaskId,
    due: Duration,
    payload: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    tasks: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    /// Current logical clock reading.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Queue `payload` to be delivered `delay` after the current clock
    /// reading.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        self.tasks.push(Scheduled {
            id,
            due: self.now + delay,
            payload,
        });
        id
    }

    /// Drop a task that has not fired yet. Returns whether anything was
    /// cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Move the clock forward by `elapsed` and return every payload now
    /// due, ordered by due instant; ties keep scheduling order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now += elapsed;
        let now = self.now;

        let mut due = Vec::new();
        let mut remaining = Vec::new();
        for task in self.tasks.drain(..) {
            if task.due <= now {
                due.push(task);
            } else {
                remaining.push(task);
            }
        }
        self.tasks = remaining;

        // Stable sort: equal due instants stay in scheduling order.
        due.sort_by_key(|t| t.due);
        due.into_iter().map(|t| t.payload).collect()
    }
}
