//! `striker-types` – value types shared by the perception geometry crates.
//!
//! # Modules
//!
//! - [`coordinates`] – image, robot-relative and field coordinates.
//! - [`camera`] – [`Camera`] optics and the [`CameraPivot`] they hang from.
//! - [`joints`] – joint angles reported by the robot.
//! - [`sightings`] – per-camera detections ([`SoccerSightings`]).
//! - [`state`] – [`RobotPerceptionState`], the typed form of one snapshot.
//! - [`raw`] – [`RawRobotState`], the native snapshot layout.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod camera;
pub mod coordinates;
pub mod joints;
pub mod raw;
pub mod sightings;
pub mod state;

pub use camera::{Camera, CameraPivot};
pub use coordinates::{
    BallPosition, CameraCoordinate, CartesianCoordinate, CenteredPixelCoordinate,
    FieldCoordinate, FieldTarget, ImagePoint, Orientation, PercentCoordinate, PixelCoordinate,
    RelativeCoordinate, Resolution,
};
pub use joints::{NaoJoints, PitchYawJoint};
pub use raw::RawRobotState;
pub use sightings::{
    EllipseSighting, HorizonSighting, MAX_LINE_SIGHTINGS, RectangleSighting, Sighted,
    SoccerObjectLocations, SoccerSightings,
};
pub use state::RobotPerceptionState;

/// Errors raised at the I/O edges of the stack: snapshot reads, configuration
/// and logging setup.  Geometry never fails; it returns `Option` or `bool`.
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum StrikerError {
    #[error("Snapshot Error: {0}")]
    Snapshot(String),

    #[error("Config Error at {path}: {details}")]
    Config { path: String, details: String },

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Telemetry Error: {0}")]
    Telemetry(String),
}
