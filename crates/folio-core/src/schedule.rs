//! One-shot deferred actions on a logical clock.
//!
//! Nothing here reads the wall clock. Callers move time forward with
//! [`Timers::advance`] (the TUI does it on every tick) or drain everything
//! with [`Timers::flush`], which keeps tests deterministic.

use std::time::Duration;

/// Handle returned by [`Timers::schedule`], used to cancel the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug)]
struct Entry<A> {
    token: TimerToken,
    deadline: Duration,
    action: A,
}

#[derive(Debug)]
pub struct Timers<A> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<A>>,
}

impl<A> Timers<A> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn schedule(&mut self, delay: Duration, action: A) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            token,
            deadline: self.now + delay,
            action,
        });
        token
    }

    /// Returns false when the action already fired or was cancelled.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.token != token);
        self.entries.len() != before
    }

    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.entries.iter().any(|e| e.token == token)
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Move the clock forward and return every action that came due, in
    /// deadline order (ties keep scheduling order).
    pub fn advance(&mut self, elapsed: Duration) -> Vec<A> {
        self.now += elapsed;
        let now = self.now;
        self.take_where(|e| e.deadline <= now)
    }

    /// Fire everything regardless of deadline.
    pub fn flush(&mut self) -> Vec<A> {
        if let Some(latest) = self.entries.iter().map(|e| e.deadline).max() {
            self.now = self.now.max(latest);
        }
        self.take_where(|_| true)
    }

    fn take_where(&mut self, due: impl Fn(&Entry<A>) -> bool) -> Vec<A> {
        let (mut fired, kept): (Vec<_>, Vec<_>) = self.entries.drain(..).partition(|e| due(e));
        self.entries = kept;
        // Tokens grow monotonically, so they break deadline ties by schedule order.
        fired.sort_by_key(|e| (e.deadline, e.token.0));
        fired.into_iter().map(|e| e.action).collect()
    }
}

impl<A> Default for Timers<A> {
    fn default() -> Self {
        Self::new()
    }
}
