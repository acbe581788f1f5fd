//! Joint angles reported by the robot (radians).
//!
//! Only the head feeds the perception geometry (through the head-to-pivot
//! kinematics); the remaining joints are carried so that a snapshot is a
//! complete picture of the robot.

use serde::{Deserialize, Serialize};

/// A joint that can pitch and yaw, e.g. the NAO neck.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PitchYawJoint {
    pub pitch: f32,
    pub yaw: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PitchRollJoint {
    pub pitch: f32,
    pub roll: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YawRollJoint {
    pub yaw: f32,
    pub roll: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YawJoint {
    pub yaw: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PitchJoint {
    pub pitch: f32,
}

/// A hip joint: pitch, roll and the coupled yaw-pitch axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YPJoint {
    pub pitch: f32,
    pub roll: f32,
    pub yaw_pitch: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NaoArm {
    pub shoulder: PitchRollJoint,
    pub elbow: YawRollJoint,
    pub wrist: YawJoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NaoLeg {
    pub hip: YPJoint,
    pub knee: PitchJoint,
    pub ankle: PitchRollJoint,
}

/// Every joint of a NAO.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NaoJoints {
    pub head: PitchYawJoint,
    pub left_arm: NaoArm,
    pub right_arm: NaoArm,
    pub left_leg: NaoLeg,
    pub right_leg: NaoLeg,
}
