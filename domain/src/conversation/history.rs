//! Dialogue history

use super::turn::Turn;
use std::collections::VecDeque;

/// Ordered log of successful turns for one session
///
/// Order is insertion order and is replayed verbatim to the generator.
/// With a turn limit set, appending past the limit evicts the oldest turn;
/// without one, the history grows until the session ends and bounding it is
/// the owner's responsibility.
#[derive(Debug, Clone, Default)]
pub struct DialogueHistory {
    turns: VecDeque<Turn>,
    next_sequence: u64,
    max_turns: Option<usize>,
}

impl DialogueHistory {
    /// Unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `max_turns` turns (`0` means unbounded)
    pub fn with_max_turns(max_turns: usize) -> Self {
        Self {
            max_turns: (max_turns > 0).then_some(max_turns),
            ..Self::default()
        }
    }

    pub fn max_turns(&self) -> Option<usize> {
        self.max_turns
    }

    /// Record a turn, returning its sequence number
    pub fn append(&mut self, user: impl Into<String>, assistant: impl Into<String>) -> u64 {
        self.next_sequence += 1;
        let sequence = self.next_sequence;
        self.turns.push_back(Turn::new(sequence, user, assistant));

        if let Some(max) = self.max_turns {
            while self.turns.len() > max {
                self.turns.pop_front();
            }
        }

        sequence
    }

    /// Owned copy of the turns in call order
    pub fn snapshot(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }

    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.back()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop all turns. Sequence numbers keep increasing afterwards.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_preserves_call_order() {
        let mut history = DialogueHistory::new();
        for i in 1..=5 {
            history.append(format!("q{i}"), format!("a{i}"));
        }

        let snapshot = history.snapshot();
        assert_eq!(snapshot.len(), 5);
        for (i, turn) in snapshot.iter().enumerate() {
            assert_eq!(turn.user, format!("q{}", i + 1));
            assert_eq!(turn.assistant, format!("a{}", i + 1));
            assert_eq!(turn.sequence, (i + 1) as u64);
        }
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut history = DialogueHistory::new();
        for i in 0..200 {
            history.append(format!("q{i}"), "a");
        }
        assert_eq!(history.len(), 200);
        assert_eq!(history.max_turns(), None);
    }

    #[test]
    fn test_bounded_evicts_oldest() {
        let mut history = DialogueHistory::with_max_turns(2);
        history.append("q1", "a1");
        history.append("q2", "a2");
        history.append("q3", "a3");

        let users: Vec<_> = history.turns().map(|t| t.user.as_str()).collect();
        assert_eq!(users, vec!["q2", "q3"]);
        assert_eq!(history.last().map(|t| t.sequence), Some(3));
    }

    #[test]
    fn test_zero_limit_means_unbounded() {
        let history = DialogueHistory::with_max_turns(0);
        assert_eq!(history.max_turns(), None);
    }

    #[test]
    fn test_clear_keeps_sequence_monotonic() {
        let mut history = DialogueHistory::new();
        history.append("q1", "a1");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.append("q2", "a2"), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut history = DialogueHistory::new();
        history.append("q1", "a1");
        let snapshot = history.snapshot();
        history.append("q2", "a2");
        assert_eq!(snapshot.len(), 1);
    }
}
