//! Optimistic Sync State
//!
//! Local mirror of a server-side value with an explicit request lifecycle.

/// Where a mirrored value is in its request cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncState<T> {
    Idle,
    Pending { previous: T, requested: T },
    Confirmed,
    Reverted,
}

/// When a requested value becomes visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// Shown at once, rolled back if the request fails
    Immediate,
    /// Shown only after the server confirms
    OnConfirm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimistic<T> {
    value: T,
    state: SyncState<T>,
}

impl<T: Clone + PartialEq> Optimistic<T> {
    pub fn new(value: T) -> Self {
        Self { value, state: SyncState::Idle }
    }

    /// Currently displayed value
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn state(&self) -> &SyncState<T> {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, SyncState::Pending { .. })
    }

    /// Start a change. Returns false (and changes nothing) when a request
    /// is already pending or the value would not change.
    pub fn begin(&mut self, next: T, commit: Commit) -> bool {
        if self.is_pending() || next == self.value {
            return false;
        }
        let previous = self.value.clone();
        if commit == Commit::Immediate {
            self.value = next.clone();
        }
        self.state = SyncState::Pending { previous, requested: next };
        true
    }

    /// Server accepted the pending change
    pub fn confirm(&mut self) {
        if let SyncState::Pending { requested, .. } = std::mem::replace(&mut self.state, SyncState::Confirmed) {
            self.value = requested;
        } else {
            self.state = SyncState::Idle;
        }
    }

    /// Server rejected the pending change
    pub fn revert(&mut self) {
        if let SyncState::Pending { previous, .. } = std::mem::replace(&mut self.state, SyncState::Reverted) {
            self.value = previous;
        } else {
            self.state = SyncState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_confirm_waits_for_server() {
        let mut fav = Optimistic::new(false);
        assert!(fav.begin(true, Commit::OnConfirm));
        assert!(!*fav.value());
        assert!(fav.is_pending());

        fav.confirm();
        assert!(*fav.value());
        assert_eq!(fav.state(), &SyncState::Confirmed);
    }

    #[test]
    fn test_immediate_reverts_on_failure() {
        let mut color = Optimistic::new("default".to_string());
        assert!(color.begin("blue".to_string(), Commit::Immediate));
        assert_eq!(color.value(), "blue");

        color.revert();
        assert_eq!(color.value(), "default");
        assert_eq!(color.state(), &SyncState::Reverted);
    }

    #[test]
    fn test_refuses_while_pending() {
        let mut color = Optimistic::new("default".to_string());
        assert!(color.begin("red".to_string(), Commit::Immediate));
        assert!(!color.begin("green".to_string(), Commit::Immediate));
        assert_eq!(color.value(), "red");

        color.confirm();
        assert!(color.begin("green".to_string(), Commit::Immediate));
    }

    #[test]
    fn test_same_value_is_noop() {
        let mut fav = Optimistic::new(true);
        assert!(!fav.begin(true, Commit::OnConfirm));
        assert_eq!(fav.state(), &SyncState::Idle);
    }

    #[test]
    fn test_failed_on_confirm_keeps_value() {
        let mut fav = Optimistic::new(false);
        fav.begin(true, Commit::OnConfirm);
        fav.revert();
        assert!(!*fav.value());
        assert_eq!(fav.state(), &SyncState::Reverted);
    }
}
