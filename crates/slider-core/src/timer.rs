//! Cancellable deadline queue
//!
//! The carousel never calls `setTimeout` itself. It schedules [`Task`]s here
//! against an injected `now_ms`; the host arms one real timeout for
//! [`Timers::next_deadline`] and feeds due tasks back through
//! `Carousel::tick`.

/// Handle of a scheduled task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Work the carousel defers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Task {
    /// Primary return to idle after a move
    SettleTransit,
    /// Safety net that returns to idle if the primary task was lost
    TransitBackstop,
    /// Measure slide heights once layout has settled
    MeasureHeight {
        /// Height run generation this measurement belongs to
        generation: u64,
    },
    /// Re-apply the current offset after first paint
    InitialResync,
}

/// A scheduled task
#[derive(Clone, Debug, PartialEq)]
pub struct Timer {
    pub id: TimerId,
    pub due_ms: f64,
    pub task: Task,
}

/// Pending tasks of one carousel
#[derive(Debug, Default)]
pub struct Timers {
    next_id: u64,
    pending: Vec<Timer>,
}

impl Timers {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to run `delay_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: f64, delay_ms: u32, task: Task) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(Timer {
            id,
            due_ms: now_ms + delay_ms as f64,
            task,
        });
        id
    }

    /// Cancel a task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Check whether a task is still waiting
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|t| t.id == id)
    }

    /// Earliest deadline, if any task is waiting
    pub fn next_deadline(&self) -> Option<f64> {
        self.pending
            .iter()
            .map(|t| t.due_ms)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Remove and return the earliest task due at `now_ms`.
    ///
    /// Ties are broken by scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<Timer> {
        let pos = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.id.cmp(&b.id)))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(pos))
    }

    /// Number of waiting tasks
    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is waiting
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_pop_in_deadline_order() {
        let mut timers = Timers::new();
        let backstop = timers.schedule(0.0, 1000, Task::TransitBackstop);
        let settle = timers.schedule(0.0, 350, Task::SettleTransit);

        assert_eq!(timers.next_deadline(), Some(350.0));
        assert!(timers.pop_due(349.0).is_none());

        let first = timers.pop_due(2000.0).unwrap();
        assert_eq!(first.id, settle);
        let second = timers.pop_due(2000.0).unwrap();
        assert_eq!(second.id, backstop);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut timers = Timers::new();
        let id = timers.schedule(10.0, 50, Task::SettleTransit);

        assert!(timers.is_pending(id));
        assert!(timers.cancel(id));
        assert!(!timers.is_pending(id));
        assert!(!timers.cancel(id));
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn test_ties_keep_scheduling_order() {
        let mut timers = Timers::new();
        let a = timers.schedule(0.0, 100, Task::InitialResync);
        let b = timers.schedule(0.0, 100, Task::MeasureHeight { generation: 1 });

        assert_eq!(timers.pop_due(100.0).map(|t| t.id), Some(a));
        assert_eq!(timers.pop_due(100.0).map(|t| t.id), Some(b));
    }
}
