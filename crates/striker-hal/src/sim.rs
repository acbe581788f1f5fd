//! In-process snapshot source for headless tests.
//!
//! [`SimSnapshotSource`] plays back a script of snapshots and injected read
//! failures, one entry per [`read_snapshot`][SnapshotSource::read_snapshot]
//! call.  Once the script is exhausted it keeps returning the last snapshot
//! it handed out.
//!
//! # Example
//!
//! ```rust
//! use striker_hal::sim::SimSnapshotSource;
//! use striker_hal::snapshot::SnapshotSource;
//! use striker_types::RawRobotState;
//!
//! let mut source = SimSnapshotSource::new()
//!     .with_snapshot(RawRobotState { player_number: 2, ..RawRobotState::default() })
//!     .with_failure("link down");
//!
//! assert_eq!(source.read_snapshot().unwrap().player_number, 2);
//! assert!(source.read_snapshot().is_err());
//! assert_eq!(source.read_snapshot().unwrap().player_number, 2);
//! ```

use std::collections::VecDeque;

use striker_types::{RawRobotState, StrikerError};

use crate::snapshot::SnapshotSource;

enum Step {
    Snapshot(Box<RawRobotState>),
    Failure(String),
}

/// A scripted [`SnapshotSource`].
#[derive(Default)]
pub struct SimSnapshotSource {
    script: VecDeque<Step>,
    last: Option<RawRobotState>,
    reads: usize,
}

impl SimSnapshotSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a snapshot to be returned by a later read.
    pub fn with_snapshot(mut self, state: RawRobotState) -> Self {
        self.push_snapshot(state);
        self
    }

    /// Queue a failed read.
    pub fn with_failure(mut self, reason: impl Into<String>) -> Self {
        self.push_failure(reason);
        self
    }

    pub fn push_snapshot(&mut self, state: RawRobotState) {
        self.script.push_back(Step::Snapshot(Box::new(state)));
    }

    pub fn push_failure(&mut self, reason: impl Into<String>) {
        self.script.push_back(Step::Failure(reason.into()));
    }

    /// Number of reads served so far, failures included.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl SnapshotSource for SimSnapshotSource {
    fn id(&self) -> &str {
        "sim"
    }

    fn read_snapshot(&mut self) -> Result<RawRobotState, StrikerError> {
        self.reads += 1;
        match self.script.pop_front() {
            Some(Step::Snapshot(state)) => {
                self.last = Some((*state).clone());
                Ok(*state)
            }
            Some(Step::Failure(reason)) => Err(StrikerError::Snapshot(reason)),
            None => self
                .last
                .clone()
                .ok_or_else(|| StrikerError::Snapshot("no snapshot scripted".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_fails() {
        let mut source = SimSnapshotSource::new();
        let err = source.read_snapshot().unwrap_err();
        assert!(err.to_string().contains("no snapshot scripted"));
        assert_eq!(source.reads(), 1);
    }

    #[test]
    fn script_plays_in_order_then_repeats_last() {
        let mut source = SimSnapshotSource::new();
        for n in 1..=3 {
            source.push_snapshot(RawRobotState {
                player_number: n,
                ..RawRobotState::default()
            });
        }
        let numbers: Vec<u8> = (0..5)
            .map(|_| source.read_snapshot().unwrap().player_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 3, 3]);
        assert_eq!(source.reads(), 5);
    }

    #[test]
    fn failure_carries_its_reason() {
        let mut source = SimSnapshotSource::new().with_failure("whiteboard closed");
        match source.read_snapshot() {
            Err(StrikerError::Snapshot(reason)) => assert_eq!(reason, "whiteboard closed"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
