/// Tracks a value across evaluation cycles and reports when it changes.
///
/// The watcher remembers the last value it was shown. Feeding it the same
/// value again is a no-op; feeding it a different value invokes the callback
/// with the previous and current values, then records the new one.
#[derive(Debug, Clone)]
pub struct ChangeWatcher<T> {
    /// Last value seen; None until the first cycle has run
    last: Option<T>,
}

impl<T> ChangeWatcher<T> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// The value recorded from the most recent cycle
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Forget the recorded value, as if no cycle had run yet
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl<T: Clone + PartialEq> ChangeWatcher<T> {
    /// Feed this cycle's value. Invokes `on_change(prev, curr)` exactly once
    /// when the value differs from the previous cycle's value, and never
    /// otherwise. The very first cycle counts as a change, with a `prev`
    /// of None.
    ///
    /// Returns whether a change was reported.
    pub fn observe(&mut self, value: T, on_change: impl FnOnce(Option<&T>, &T)) -> bool {
        if self.last.as_ref() == Some(&value) {
            return false;
        }
        on_change(self.last.as_ref(), &value);
        self.last = Some(value);
        true
    }
}

impl<T> Default for ChangeWatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
