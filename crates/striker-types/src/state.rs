//! The typed perception state produced from one sensor snapshot.

use serde::{Deserialize, Serialize};

use crate::coordinates::{BallPosition, FieldCoordinate};
use crate::joints::NaoJoints;
use crate::sightings::{SoccerObjectLocations, SoccerSightings};

/// Everything the perception geometry needs from one snapshot.
///
/// Optional fields are absent when the upstream estimator has no value
/// (e.g. `field_position` while the robot is not localised).  `sightings`
/// holds one entry per camera, indexed like the camera pivot's cameras.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RobotPerceptionState {
    pub player_number: u8,
    pub joints: NaoJoints,
    pub field_position: Option<FieldCoordinate>,
    pub ball_position: Option<BallPosition>,
    pub locations: SoccerObjectLocations,
    pub sightings: Vec<SoccerSightings>,
}
