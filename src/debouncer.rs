use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::watcher::ChangeWatcher;

/// Debounce window used by `Default`, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Coalesces a rapidly-changing value into a single delayed notification.
///
/// Drive the debouncer once per evaluation cycle with the latest value.
/// Each detected change discards any running countdown and starts a fresh
/// one, so a burst of edits produces at most one notification, one delay
/// after the burst ends. When a countdown elapses, the notification is
/// delivered only if the value still differs from the comparison snapshot
/// taken when the countdown was armed; a value that bounces straight back
/// to where it was settles silently.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    /// How long the value must stay unchanged before a fire
    delay: Duration,
    /// Change detection across cycles
    watcher: ChangeWatcher<T>,
    /// Value the watcher held just before the most recent change.
    /// A restarted countdown compares against this snapshot.
    prior: Option<T>,
    /// The single armed countdown, if any. Arming a new one replaces
    /// (and thereby cancels) the old one.
    pending: Option<PendingFire<T>>,
}

/// An armed countdown. `prev` is the comparison snapshot: at expiry the
/// notification is suppressed if the value has come back to equal it.
/// A `prev` of None means no value had been recorded yet, which never
/// matches a real value.
#[derive(Debug, Clone)]
struct PendingFire<T> {
    deadline: Instant,
    prev: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// Create a debouncer with the given delay in milliseconds
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            watcher: ChangeWatcher::new(),
            prior: None,
            pending: None,
        }
    }

    /// One evaluation cycle: settle any expired countdown, then observe
    /// this cycle's value, restarting the countdown if it changed.
    ///
    /// Returns true when a countdown elapsed this cycle with the value
    /// settled on something new.
    pub fn debounce(&mut self, value: T) -> bool {
        self.debounce_at(value, Instant::now())
    }

    /// `debounce` with an explicit current time
    pub fn debounce_at(&mut self, value: T, now: Instant) -> bool {
        let fired = self.settle(now);
        let Self {
            delay,
            watcher,
            prior,
            pending,
        } = self;
        watcher.observe(value, |prev, _curr| {
            let snapshot = if pending.is_some() {
                trace!("Countdown already armed, restarting it");
                prior.clone()
            } else {
                prev.cloned()
            };
            *pending = Some(PendingFire {
                deadline: now + *delay,
                prev: snapshot,
            });
            *prior = prev.cloned();
            trace!("Debounce countdown armed");
        });
        fired
    }

    /// Callback form of `debounce`: runs `action` when this cycle fires
    pub fn run_debounced(&mut self, value: T, action: impl FnOnce()) {
        if self.debounce(value) {
            action();
        }
    }

    /// Check the countdown without supplying a new value. Hosts whose
    /// event loop ticks between value changes call this once per tick.
    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// `poll` with an explicit current time
    pub fn poll_at(&mut self, now: Instant) -> bool {
        self.settle(now)
    }

    /// Resolve the countdown if it has expired. Fires only when the
    /// recorded value differs from the comparison snapshot.
    fn settle(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(armed) if now >= armed.deadline => {
                if self.watcher.last() == armed.prev.as_ref() {
                    debug!("Debounce countdown elapsed with no net change, suppressing");
                    false
                } else {
                    debug!("Debounce window elapsed, value settled");
                    true
                }
            }
            not_expired => {
                self.pending = not_expired;
                false
            }
        }
    }

    /// Whether a countdown is currently armed
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the armed countdown elapses, zero if it already
    /// has. None when nothing is armed.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(Instant::now()))
    }

    /// The value recorded from the most recent cycle
    pub fn last_value(&self) -> Option<&T> {
        self.watcher.last()
    }

    /// The configured debounce window
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any armed countdown and forget all recorded values.
    /// Nothing can fire after a reset until a new change arms a countdown.
    pub fn reset(&mut self) {
        if self.pending.take().is_some() {
            debug!("Cancelling armed debounce countdown");
        }
        self.prior = None;
        self.watcher.reset();
    }
}

impl<T: Clone + PartialEq> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}
