/// Widget-local state with a remembered initial snapshot.
///
/// `update` applies a partial change to the current state; `reset` returns
/// to the initial snapshot, optionally with overrides applied on top.
#[derive(Debug, Clone)]
pub struct StateCell<T: Clone> {
    initial: T,
    current: T,
}

impl<T: Clone> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: initial.clone(),
            initial,
        }
    }

    /// The current state
    pub fn get(&self) -> &T {
        &self.current
    }

    /// Apply a partial update to the current state
    pub fn update(&mut self, patch: impl FnOnce(&mut T)) {
        patch(&mut self.current);
    }

    /// Return to the initial snapshot
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
    }

    /// Return to the initial snapshot, then apply overrides on top
    pub fn reset_with(&mut self, overrides: impl FnOnce(&mut T)) {
        self.current = self.initial.clone();
        overrides(&mut self.current);
    }
}
