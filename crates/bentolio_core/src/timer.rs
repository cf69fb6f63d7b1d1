//! Deterministic timer queue
//!
//! All waiting in the interaction core is timer-based, and every timer
//! must be cancellable: hover timers are superseded by newer ones, and
//! teardown must guarantee nothing fires against disposed state. The
//! queue runs on virtual time advanced by the host loop, so tests drive
//! it without sleeping.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle for a scheduled timer
    pub struct TimerHandle;
}

struct TimerEntry<T> {
    /// Absolute deadline on the queue's virtual clock
    deadline_ms: f64,
    /// Scheduling order, used to break deadline ties
    seq: u64,
    payload: T,
}

/// A cancellable, virtual-time timer queue
///
/// Payloads fire in deadline order when [`TimerQueue::advance`] moves
/// the clock past them. Cancelling an already-fired or already-cancelled
/// handle is a no-op.
pub struct TimerQueue<T> {
    entries: SlotMap<TimerHandle, TimerEntry<T>>,
    now_ms: f64,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
            now_ms: 0.0,
            next_seq: 0,
        }
    }

    /// Schedule a payload to fire after `delay_ms`
    ///
    /// A non-positive delay fires on the next `advance` call.
    pub fn schedule(&mut self, delay_ms: f32, payload: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        let deadline_ms = self.now_ms + f64::from(delay_ms.max(0.0));
        let handle = self.entries.insert(TimerEntry {
            deadline_ms,
            seq,
            payload,
        });
        tracing::trace!(deadline_ms, "timer scheduled");
        handle
    }

    /// Cancel a pending timer
    ///
    /// Returns `true` if the timer was still pending. Stale handles
    /// (fired or previously cancelled) are silently ignored.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.entries.remove(handle).is_some()
    }

    /// Whether a handle still refers to a pending timer
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.contains_key(handle)
    }

    /// Advance the virtual clock and collect fired payloads
    ///
    /// Payloads are returned in deadline order; equal deadlines fire in
    /// scheduling order.
    pub fn advance(&mut self, dt_ms: f32) -> Vec<T> {
        self.now_ms += f64::from(dt_ms.max(0.0));

        // Few timers are ever pending at once; one in the hover case.
        let mut due: SmallVec<[TimerHandle; 4]> = self
            .entries
            .iter()
            .filter(|(_, e)| e.deadline_ms <= self.now_ms)
            .map(|(h, _)| h)
            .collect();
        due.sort_by(|a, b| {
            let ea = &self.entries[*a];
            let eb = &self.entries[*b];
            ea.deadline_ms
                .total_cmp(&eb.deadline_ms)
                .then(ea.seq.cmp(&eb.seq))
        });

        due.into_iter()
            .filter_map(|h| self.entries.remove(h))
            .map(|e| e.payload)
            .collect()
    }

    /// Drop every pending timer (teardown path)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
