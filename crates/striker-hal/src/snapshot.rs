//! The snapshot collaborator: one blocking read of the robot's published
//! state.

use std::fs;
use std::path::{Path, PathBuf};

use striker_types::{RawRobotState, StrikerError};
use tracing::debug;

/// A source of complete robot state snapshots.
///
/// Implementations hand out a self-consistent copy on every call; the caller
/// owns the returned value and nothing is shared between reads.
pub trait SnapshotSource: Send {
    /// Stable identifier for this source, e.g. `"whiteboard"`.
    fn id(&self) -> &str;

    /// Read the current snapshot.  May block.
    ///
    /// # Errors
    ///
    /// Returns [`StrikerError::Snapshot`] when no snapshot can be produced.
    fn read_snapshot(&mut self) -> Result<RawRobotState, StrikerError>;
}

/// Reads a [`RawRobotState`] serialised as JSON from a file, re-reading the
/// file on every call.
pub struct JsonFileSnapshotSource {
    id: String,
    path: PathBuf,
}

impl JsonFileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            id: format!("json:{}", path.display()),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for JsonFileSnapshotSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn read_snapshot(&mut self) -> Result<RawRobotState, StrikerError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            StrikerError::Snapshot(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let state: RawRobotState = serde_json::from_str(&raw).map_err(|e| {
            StrikerError::Snapshot(format!("failed to decode {}: {e}", self.path.display()))
        })?;
        debug!(source = %self.id, bytes = raw.len(), "snapshot read");
        Ok(state)
    }
}

/// Write `state` as JSON to `path`, e.g. to record a snapshot for replay.
pub fn write_snapshot(path: &Path, state: &RawRobotState) -> Result<(), StrikerError> {
    let raw = serde_json::to_string_pretty(state)
        .map_err(|e| StrikerError::Serialization(e.to_string()))?;
    fs::write(path, raw)
        .map_err(|e| StrikerError::Snapshot(format!("failed to write {}: {e}", path.display())))
}
