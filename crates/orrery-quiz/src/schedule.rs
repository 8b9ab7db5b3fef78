//! Fire-once scheduled transitions.
//!
//! The session never sleeps. It records what should happen and when, and
//! the front end's event loop calls back in with the current time.

use std::time::Instant;

/// Identifies one scheduled action so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleHandle(u64);

#[derive(Debug)]
struct Pending<T> {
    handle: ScheduleHandle,
    due: Instant,
    action: T,
}

/// A set of actions waiting for their due time.
#[derive(Debug)]
pub struct Timer<T> {
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Timer<T> {
    /// Create an empty timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to become due at `due`.
    pub fn schedule(&mut self, due: Instant, action: T) -> ScheduleHandle {
        let handle = ScheduleHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due,
            action,
        });
        handle
    }

    /// Cancel a scheduled action. Returns it if it had not fired yet.
    pub fn cancel(&mut self, handle: ScheduleHandle) -> Option<T> {
        let idx = self.pending.iter().position(|p| p.handle == handle)?;
        Some(self.pending.remove(idx).action)
    }

    /// Remove and return the earliest action due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<T> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= now)
            .min_by_key(|(_, p)| p.due)
            .map(|(i, _)| i)?;
        Some(self.pending.remove(idx).action)
    }

    /// When the next action becomes due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Number of actions waiting.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fires_once_when_due() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(start + Duration::from_millis(100), "next");

        assert_eq!(timer.pop_due(start), None);
        assert_eq!(timer.pop_due(start + Duration::from_millis(99)), None);
        assert_eq!(timer.pop_due(start + Duration::from_millis(100)), Some("next"));
        assert_eq!(timer.pop_due(start + Duration::from_secs(10)), None);
        assert!(timer.is_empty());
    }

    #[test]
    fn earliest_first() {
        let start = Instant::now();
        let mut timer = Timer::new();
        timer.schedule(start + Duration::from_millis(300), 3);
        timer.schedule(start + Duration::from_millis(100), 1);
        timer.schedule(start + Duration::from_millis(200), 2);

        assert_eq!(timer.next_deadline(), Some(start + Duration::from_millis(100)));
        let late = start + Duration::from_secs(1);
        assert_eq!(timer.pop_due(late), Some(1));
        assert_eq!(timer.pop_due(late), Some(2));
        assert_eq!(timer.pop_due(late), Some(3));
        assert_eq!(timer.next_deadline(), None);
    }

    #[test]
    fn cancel_removes_action() {
        let start = Instant::now();
        let mut timer = Timer::new();
        let a = timer.schedule(start, 'a');
        let b = timer.schedule(start, 'b');
        assert_eq!(timer.cancel(a), Some('a'));
        assert_eq!(timer.cancel(a), None);
        assert_eq!(timer.len(), 1);
        assert_eq!(timer.pop_due(start), Some('b'));
        assert_eq!(timer.cancel(b), None);
    }
}
