//! Trailing-edge debounce for search boxes.
//!
//! Each call bumps a generation counter and sleeps for the quiet period; when the
//! timer fires the value is emitted only if no newer call happened meanwhile.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Monotonic ticket counter. Only the latest ticket is current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation {
    current: u64,
}

impl Generation {
    pub fn bump(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }
}

pub struct Debounced<T: 'static> {
    generation: StoredValue<Generation>,
    delay_ms: u32,
    on_settled: Callback<T>,
}

impl<T: 'static> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Debounced<T> {}

impl<T: 'static> Debounced<T> {
    pub fn new(delay_ms: u32, on_settled: Callback<T>) -> Self {
        Self {
            generation: StoredValue::new(Generation::default()),
            delay_ms,
            on_settled,
        }
    }

    /// Schedules `value`; supersedes any pending value.
    pub fn call(&self, value: T) {
        let Some(ticket) = self.generation.try_update_value(|g| g.bump()) else {
            return;
        };
        let generation = self.generation;
        let on_settled = self.on_settled;
        let delay_ms = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            // The owning component may be gone by now
            if generation
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false)
            {
                on_settled.run(value);
            }
        });
    }

    /// Emits `value` now and cancels whatever is pending (clear buttons).
    pub fn immediate(&self, value: T) {
        if self.generation.try_update_value(|g| g.bump()).is_some() {
            self.on_settled.run(value);
        }
    }

    /// Drops the pending value, if any.
    pub fn cancel(&self) {
        self.generation.try_update_value(|g| {
            g.bump();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays keystrokes at the given times against a `delay` quiet period and
    /// returns the times at which a value was emitted.
    fn replay(keystrokes: &[u32], delay: u32) -> Vec<u32> {
        let mut keystrokes = keystrokes.to_vec();
        keystrokes.sort_unstable();

        let mut generation = Generation::default();
        let mut timers: Vec<(u32, u64)> = Vec::new();
        let mut emitted = Vec::new();
        let mut fire_due = |generation: &Generation, timers: &mut Vec<(u32, u64)>, before: u32| {
            // A keystroke at the very instant a timer fires supersedes it
            timers.retain(|&(fire, ticket)| {
                if fire < before {
                    if generation.is_current(ticket) {
                        emitted.push(fire);
                    }
                    false
                } else {
                    true
                }
            });
        };

        for t in keystrokes {
            fire_due(&generation, &mut timers, t);
            let ticket = generation.bump();
            timers.push((t + delay, ticket));
        }
        fire_due(&generation, &mut timers, u32::MAX);
        emitted
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut g = Generation::default();
        let a = g.bump();
        let b = g.bump();
        assert!(!g.is_current(a));
        assert!(g.is_current(b));
    }

    #[test]
    fn test_bump_without_call_drops_pending_ticket() {
        let mut g = Generation::default();
        let pending = g.bump();
        g.bump();
        assert!(!g.is_current(pending));
    }

    #[test]
    fn test_burst_emits_once() {
        assert_eq!(replay(&[0, 50, 120, 200, 290], 300), vec![590]);
    }

    #[test]
    fn test_pauses_longer_than_quiet_period_emit_each() {
        assert_eq!(replay(&[0, 100, 500, 900], 300), vec![400, 800, 1200]);
    }

    #[test]
    fn test_never_more_than_one_emission_per_quiet_period() {
        let keystrokes: Vec<u32> = (0..40).map(|i| i * 70 + (i % 3) * 250).collect();
        let emitted = replay(&keystrokes, 300);
        assert!(!emitted.is_empty());
        for pair in emitted.windows(2) {
            assert!(pair[1] - pair[0] >= 300, "{:?}", emitted);
        }
    }
}
