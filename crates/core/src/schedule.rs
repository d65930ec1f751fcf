//! Scheduling primitives driven by an explicit millisecond clock.
//!
//! Nothing in here reads the wall clock: callers pass `now_ms`, which keeps
//! the game logic testable without a terminal or real timers.

use std::collections::VecDeque;

/// One-shot actions that become due after a fixed delay.
///
/// Entries fire in due order; entries with the same due time fire in
/// scheduling order. There is no cancellation.
#[derive(Debug, Clone)]
pub struct DeferredQueue<T> {
    pending: VecDeque<(u64, T)>,
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `item` to become due at `now_ms + delay_ms`.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, item: T) {
        let due = now_ms.saturating_add(delay_ms);
        let at = self.pending.partition_point(|(d, _)| *d <= due);
        self.pending.insert(at, (due, item));
    }

    /// Pop the earliest entry if it is due at `now_ms`.
    pub fn pop_due(&mut self, now_ms: u64) -> Option<T> {
        match self.pending.front() {
            Some((due, _)) if *due <= now_ms => self.pending.pop_front().map(|(_, item)| item),
            _ => None,
        }
    }

    /// Due time of the earliest pending entry.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.front().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Frame-tick source for the redraw loop.
///
/// Stands in for the display refresh signal: a frame is due every
/// `interval_ms`. The first call to [`FrameTicker::tick`] always yields a
/// frame.
#[derive(Debug, Clone)]
pub struct FrameTicker {
    interval_ms: u64,
    last_frame_ms: u64,
    frames: u64,
}

impl FrameTicker {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            last_frame_ms: 0,
            frames: 0,
        }
    }

    /// Decide whether a frame is due at `now_ms`, and consume it if so.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.frames > 0 && now_ms.saturating_sub(self.last_frame_ms) < self.interval_ms {
            return false;
        }
        self.last_frame_ms = now_ms;
        self.frames += 1;
        true
    }

    /// Milliseconds until the next frame is due (0 if already due).
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        if self.frames == 0 {
            return 0;
        }
        self.interval_ms
            .saturating_sub(now_ms.saturating_sub(self.last_frame_ms))
    }

    /// Frames produced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_item_is_not_due_early() {
        let mut q = DeferredQueue::new();
        q.schedule(1000, 100, "msg");
        assert_eq!(q.pop_due(1000), None);
        assert_eq!(q.pop_due(1099), None);
        assert_eq!(q.pop_due(1100), Some("msg"));
        assert_eq!(q.pop_due(5000), None);
        assert!(q.is_empty());
    }

    #[test]
    fn deferred_items_fire_in_due_order() {
        let mut q = DeferredQueue::new();
        q.schedule(0, 50, 'b');
        q.schedule(0, 10, 'a');
        q.schedule(0, 50, 'c');
        assert_eq!(q.next_due(), Some(10));
        assert_eq!(q.pop_due(100), Some('a'));
        assert_eq!(q.pop_due(100), Some('b'));
        assert_eq!(q.pop_due(100), Some('c'));
        assert_eq!(q.pop_due(100), None);
    }

    #[test]
    fn ticker_yields_first_frame_immediately() {
        let mut t = FrameTicker::new(16);
        assert_eq!(t.remaining_ms(500), 0);
        assert!(t.tick(500));
        assert_eq!(t.frames(), 1);
    }

    #[test]
    fn ticker_waits_for_interval() {
        let mut t = FrameTicker::new(16);
        assert!(t.tick(0));
        assert!(!t.tick(10));
        assert_eq!(t.remaining_ms(10), 6);
        assert!(t.tick(16));
        assert!(!t.tick(31));
        assert!(t.tick(40));
        assert_eq!(t.frames(), 3);
    }
}
