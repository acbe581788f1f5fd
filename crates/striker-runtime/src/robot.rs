//! [`NaoV5`] – the perception state of one NAO V5, refreshed from snapshots.
//!
//! The robot owns its snapshot source, its head kinematics and the
//! conversion [`Engine`].  [`NaoV5::update`] performs one blocking read and
//! replaces the whole state at once; every other method is a pure read of
//! the last snapshot.  The camera pivot is never stored: it is recomputed
//! from the current head joints on each access.
//!
//! All capability traits from `striker-perception` are implemented, so a
//! `NaoV5` answers conversions by camera index, by camera name
//! (`top_camera_*` / `bottom_camera_*`) or through [`NaoCamera`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use striker_hal::kinematics::ApproximateHeadKinematics;
//! use striker_hal::sim::SimSnapshotSource;
//! use striker_perception::sim::FlatGroundModel;
//! use striker_perception::{BottomCameraContainer, CameraPivotContainer};
//! use striker_runtime::NaoV5;
//! use striker_types::{RawRobotState, RelativeCoordinate};
//!
//! let source = SimSnapshotSource::new().with_snapshot(RawRobotState::default());
//! let mut nao = NaoV5::new(
//!     Box::new(source),
//!     Box::new(ApproximateHeadKinematics::nao_v5()),
//!     Arc::new(FlatGroundModel),
//! );
//! nao.update().expect("snapshot");
//!
//! let at_feet = RelativeCoordinate::new(0.0, 0.5);
//! assert_eq!(nao.bottom_camera_can_see(at_feet), nao.can_see(at_feet, 1));
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use striker_hal::kinematics::HeadKinematics;
use striker_hal::snapshot::{JsonFileSnapshotSource, SnapshotSource};
use striker_perception::{
    BottomCameraContainer, CameraModel, CameraPivotContainer, Engine, FieldPositionContainer,
    RobotCamera, SoccerObjectLocationsContainer, SoccerSightingsContainer, TopCameraContainer,
};
use striker_types::{
    BallPosition, CameraPivot, FieldCoordinate, NaoJoints, PitchYawJoint, RobotPerceptionState,
    SoccerObjectLocations, SoccerSightings, StrikerError,
};
use tracing::{debug, warn};

use crate::config::RobotConfig;

/// Index of the top camera in the pivot's camera list.
pub const TOP_CAMERA_INDEX: usize = 0;
/// Index of the bottom camera in the pivot's camera list.
pub const BOTTOM_CAMERA_INDEX: usize = 1;
/// Number of cameras on a NAO V5 head.
pub const CAMERA_COUNT: usize = 2;

const _: () = assert!(
    TOP_CAMERA_INDEX != BOTTOM_CAMERA_INDEX
        && TOP_CAMERA_INDEX < CAMERA_COUNT
        && BOTTOM_CAMERA_INDEX < CAMERA_COUNT
);

/// The cameras of a NAO V5 by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NaoCamera {
    Top,
    Bottom,
}

impl NaoCamera {
    pub const fn index(self) -> usize {
        match self {
            NaoCamera::Top => TOP_CAMERA_INDEX,
            NaoCamera::Bottom => BOTTOM_CAMERA_INDEX,
        }
    }

    /// The camera at `index`, if it is one of the two.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            TOP_CAMERA_INDEX => Some(NaoCamera::Top),
            BOTTOM_CAMERA_INDEX => Some(NaoCamera::Bottom),
            _ => None,
        }
    }
}

/// A NAO V5 and its last perception snapshot.
pub struct NaoV5 {
    source: Box<dyn SnapshotSource>,
    kinematics: Box<dyn HeadKinematics>,
    engine: Engine,
    state: RobotPerceptionState,
    last_update: Option<DateTime<Utc>>,
}

impl NaoV5 {
    /// Create a robot with an empty state.  Call [`NaoV5::update`] to read
    /// the first snapshot.
    ///
    /// # Panics
    ///
    /// Panics when `kinematics` yields fewer than [`CAMERA_COUNT`] cameras,
    /// since the top and bottom camera indices must always resolve.
    pub fn new(
        source: Box<dyn SnapshotSource>,
        kinematics: Box<dyn HeadKinematics>,
        model: Arc<dyn CameraModel>,
    ) -> Self {
        let cameras = kinematics
            .camera_pivot(&PitchYawJoint::default())
            .camera_count();
        assert!(
            cameras >= CAMERA_COUNT,
            "head kinematics provide {cameras} camera(s), a NAO V5 needs {CAMERA_COUNT}"
        );
        Self {
            source,
            kinematics,
            engine: Engine::new(model),
            state: RobotPerceptionState {
                sightings: vec![SoccerSightings::default(); CAMERA_COUNT],
                ..RobotPerceptionState::default()
            },
            last_update: None,
        }
    }

    /// Build a robot reading JSON snapshots from `config.snapshot_path`,
    /// with kinematics from the configured pivot height and cameras.
    ///
    /// # Errors
    ///
    /// Returns [`StrikerError::Config`] when the configuration is invalid or
    /// names no snapshot file.
    pub fn from_config(
        config: &RobotConfig,
        model: Arc<dyn CameraModel>,
    ) -> Result<Self, StrikerError> {
        let invalid = |details: String| StrikerError::Config {
            path: "robot config".to_string(),
            details,
        };
        config.validate().map_err(invalid)?;
        let path = config
            .snapshot_path
            .as_ref()
            .ok_or_else(|| invalid("snapshot_path is not set".to_string()))?;
        Ok(Self::new(
            Box::new(JsonFileSnapshotSource::new(path)),
            Box::new(config.head_kinematics()),
            model,
        ))
    }

    /// Read one snapshot and replace the whole state with it.
    ///
    /// A snapshot with the wrong number of sightings entries is padded with
    /// empty sightings or truncated to [`CAMERA_COUNT`].
    ///
    /// # Errors
    ///
    /// Propagates the source's error; the previous state is kept.
    pub fn update(&mut self) -> Result<(), StrikerError> {
        let raw = match self.source.read_snapshot() {
            Ok(raw) => raw,
            Err(e) => {
                warn!(source = self.source.id(), error = %e, "snapshot read failed; keeping previous state");
                return Err(e);
            }
        };
        let mut state = RobotPerceptionState::from(raw);
        if state.sightings.len() != CAMERA_COUNT {
            warn!(
                source = self.source.id(),
                found = state.sightings.len(),
                expected = CAMERA_COUNT,
                "snapshot sightings do not match the camera count"
            );
            state.sightings.resize(CAMERA_COUNT, SoccerSightings::default());
        }
        self.state = state;
        self.last_update = Some(Utc::now());
        debug!(
            source = self.source.id(),
            player = self.state.player_number,
            cameras = self.state.sightings.len(),
            localised = self.state.field_position.is_some(),
            "snapshot applied"
        );
        Ok(())
    }

    pub fn state(&self) -> &RobotPerceptionState {
        &self.state
    }

    pub fn player_number(&self) -> u8 {
        self.state.player_number
    }

    pub fn joints(&self) -> &NaoJoints {
        &self.state.joints
    }

    pub fn ball_position(&self) -> Option<BallPosition> {
        self.state.ball_position
    }

    /// When the current state was read; `None` before the first update.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn nao_camera(&self, camera: NaoCamera) -> RobotCamera<'_> {
        self.camera(camera.index())
    }
}

impl CameraPivotContainer for NaoV5 {
    fn engine(&self) -> &Engine {
        &self.engine
    }

    fn camera_pivot(&self) -> CameraPivot {
        self.kinematics.camera_pivot(&self.state.joints.head)
    }
}

impl FieldPositionContainer for NaoV5 {
    fn field_position(&self) -> Option<FieldCoordinate> {
        self.state.field_position
    }
}

impl TopCameraContainer for NaoV5 {
    const TOP_CAMERA_INDEX: usize = TOP_CAMERA_INDEX;
}

impl BottomCameraContainer for NaoV5 {
    const BOTTOM_CAMERA_INDEX: usize = BOTTOM_CAMERA_INDEX;
}

impl SoccerSightingsContainer for NaoV5 {
    fn sightings(&self) -> &[SoccerSightings] {
        &self.state.sightings
    }
}

impl SoccerObjectLocationsContainer for NaoV5 {
    fn object_locations(&self) -> &SoccerObjectLocations {
        &self.state.locations
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
