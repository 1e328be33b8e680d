//! In-flight Request Tracking
//!
//! Per-task registry of operations with a request on the wire. A card
//! acquires a slot before sending and releases it when the response lands,
//! so rapid repeated clicks cannot race each other.

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Favorite,
    Color,
    Text,
    Delete,
}

impl Operation {
    /// Operations that may not overlap with this one on the same task.
    /// The color endpoint answers with a full task, which would race a
    /// favorite change.
    fn conflicts(self) -> &'static [Operation] {
        match self {
            Operation::Favorite => &[Operation::Color],
            Operation::Color => &[Operation::Favorite],
            Operation::Text | Operation::Delete => &[],
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct InFlight {
    pending: HashMap<String, HashSet<Operation>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `(task_id, op)`. False if the same or a conflicting operation
    /// is already pending, or if a delete is pending for the task.
    pub fn try_begin(&mut self, task_id: &str, op: Operation) -> bool {
        let ops = self.pending.entry(task_id.to_string()).or_default();
        let blocked = ops.contains(&op)
            || ops.contains(&Operation::Delete)
            || op.conflicts().iter().any(|c| ops.contains(c));
        if blocked {
            return false;
        }
        ops.insert(op)
    }

    pub fn finish(&mut self, task_id: &str, op: Operation) {
        if let Some(ops) = self.pending.get_mut(task_id) {
            ops.remove(&op);
            if ops.is_empty() {
                self.pending.remove(task_id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_request_refused() {
        let mut inflight = InFlight::new();
        assert!(inflight.try_begin("t1", Operation::Favorite));
        assert!(!inflight.try_begin("t1", Operation::Favorite));
        // Other tasks and other operations are independent
        assert!(inflight.try_begin("t2", Operation::Favorite));
        assert!(inflight.try_begin("t1", Operation::Text));

        inflight.finish("t1", Operation::Favorite);
        assert!(inflight.try_begin("t1", Operation::Favorite));
    }

    #[test]
    fn test_delete_blocks_everything() {
        let mut inflight = InFlight::new();
        assert!(inflight.try_begin("t1", Operation::Delete));
        assert!(!inflight.try_begin("t1", Operation::Text));
        assert!(!inflight.try_begin("t1", Operation::Color));
        assert!(!inflight.try_begin("t1", Operation::Delete));

        inflight.finish("t1", Operation::Delete);
        assert!(inflight.try_begin("t1", Operation::Text));
    }

    #[test]
    fn test_favorite_and_color_exclusive() {
        let mut inflight = InFlight::new();
        assert!(inflight.try_begin("t1", Operation::Color));
        assert!(!inflight.try_begin("t1", Operation::Favorite));
        assert!(inflight.try_begin("t2", Operation::Favorite));

        inflight.finish("t1", Operation::Color);
        assert!(inflight.try_begin("t1", Operation::Favorite));
        assert!(!inflight.try_begin("t1", Operation::Color));
    }

    #[test]
    fn test_finish_clears_entry() {
        let mut inflight = InFlight::new();
        inflight.try_begin("t1", Operation::Text);
        inflight.finish("t1", Operation::Text);
        assert!(inflight.pending.is_empty());
        // Finishing something never started is harmless
        inflight.finish("t9", Operation::Delete);
        assert!(inflight.pending.is_empty());
    }
}
