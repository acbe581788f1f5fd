//! The raw snapshot layout published by the robot's shared-memory store.
//!
//! The layout mirrors the native structs: optionals are a `has_value` flag
//! next to an always-present value, and the horizon is a discriminant plus
//! one payload per kind.  This module is the only place that knows about
//! that layout; everything else works with [`RobotPerceptionState`].

use serde::{Deserialize, Serialize};

use crate::coordinates::{BallPosition, FieldCoordinate, RelativeCoordinate};
use crate::joints::NaoJoints;
use crate::sightings::{
    CornerSighting, EllipseSighting, HorizonSighting, LineSighting, RectangleSighting,
    SoccerObjectLocations, SoccerSightings,
};
use crate::state::RobotPerceptionState;

/// Discriminant of a [`HorizonSighting::FieldOnly`] in the raw layout.
pub const HORIZON_FIELD: u8 = 0;
/// Discriminant of a [`HorizonSighting::Line`] in the raw layout.
pub const HORIZON_LINE: u8 = 1;
/// Discriminant of a [`HorizonSighting::Corner`] in the raw layout.
pub const HORIZON_CORNER: u8 = 2;

/// A native optional: `value` is meaningful only when `has_value` is set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawOptional<T> {
    pub has_value: bool,
    pub value: T,
}

impl<T: Default> From<Option<T>> for RawOptional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self {
                has_value: true,
                value,
            },
            None => Self::default(),
        }
    }
}

impl<T> From<RawOptional<T>> for Option<T> {
    fn from(raw: RawOptional<T>) -> Self {
        raw.has_value.then_some(raw.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawHorizonSighting {
    pub sighting_type: u8,
    pub line_sighting: LineSighting,
    pub corner_sighting: CornerSighting,
}

impl From<HorizonSighting> for RawHorizonSighting {
    fn from(horizon: HorizonSighting) -> Self {
        match horizon {
            HorizonSighting::FieldOnly => Self {
                sighting_type: HORIZON_FIELD,
                ..Self::default()
            },
            HorizonSighting::Line(line_sighting) => Self {
                sighting_type: HORIZON_LINE,
                line_sighting,
                ..Self::default()
            },
            HorizonSighting::Corner(corner_sighting) => Self {
                sighting_type: HORIZON_CORNER,
                corner_sighting,
                ..Self::default()
            },
        }
    }
}

impl From<RawHorizonSighting> for HorizonSighting {
    /// # Panics
    ///
    /// Panics on a discriminant that names no horizon kind; such a value
    /// means the producer and this crate disagree on the layout.
    fn from(raw: RawHorizonSighting) -> Self {
        match raw.sighting_type {
            HORIZON_FIELD => HorizonSighting::FieldOnly,
            HORIZON_LINE => HorizonSighting::Line(raw.line_sighting),
            HORIZON_CORNER => HorizonSighting::Corner(raw.corner_sighting),
            other => panic!("invalid horizon sighting type: {other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSoccerSightings {
    pub ball: RawOptional<EllipseSighting>,
    pub generic_goal_post: RawOptional<RectangleSighting>,
    pub left_goal_post: RawOptional<RectangleSighting>,
    pub right_goal_post: RawOptional<RectangleSighting>,
    pub horizon: RawOptional<RawHorizonSighting>,
    pub lines: Vec<RectangleSighting>,
}

impl From<RawSoccerSightings> for SoccerSightings {
    fn from(raw: RawSoccerSightings) -> Self {
        SoccerSightings::new(
            raw.ball.into(),
            raw.generic_goal_post.into(),
            raw.left_goal_post.into(),
            raw.right_goal_post.into(),
            Option::<RawHorizonSighting>::from(raw.horizon).map(HorizonSighting::from),
            raw.lines,
        )
    }
}

impl From<&SoccerSightings> for RawSoccerSightings {
    fn from(sightings: &SoccerSightings) -> Self {
        Self {
            ball: sightings.ball.into(),
            generic_goal_post: sightings.generic_goal_post.into(),
            left_goal_post: sightings.left_goal_post.into(),
            right_goal_post: sightings.right_goal_post.into(),
            horizon: sightings.horizon.map(RawHorizonSighting::from).into(),
            lines: sightings.lines().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSoccerObjectLocations {
    pub ball: RawOptional<RelativeCoordinate>,
    pub left_goal_post: RawOptional<RelativeCoordinate>,
    pub right_goal_post: RawOptional<RelativeCoordinate>,
    pub goal: RawOptional<RelativeCoordinate>,
}

impl From<RawSoccerObjectLocations> for SoccerObjectLocations {
    fn from(raw: RawSoccerObjectLocations) -> Self {
        Self {
            ball: raw.ball.into(),
            left_goal_post: raw.left_goal_post.into(),
            right_goal_post: raw.right_goal_post.into(),
            goal: raw.goal.into(),
        }
    }
}

impl From<SoccerObjectLocations> for RawSoccerObjectLocations {
    fn from(locations: SoccerObjectLocations) -> Self {
        Self {
            ball: locations.ball.into(),
            left_goal_post: locations.left_goal_post.into(),
            right_goal_post: locations.right_goal_post.into(),
            goal: locations.goal.into(),
        }
    }
}

/// A complete, internally consistent copy of the robot's published state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRobotState {
    pub player_number: u8,
    pub joints: NaoJoints,
    pub field_position: RawOptional<FieldCoordinate>,
    pub ball_position: RawOptional<BallPosition>,
    pub locations: RawSoccerObjectLocations,
    pub sightings: Vec<RawSoccerSightings>,
}

impl From<RawRobotState> for RobotPerceptionState {
    fn from(raw: RawRobotState) -> Self {
        Self {
            player_number: raw.player_number,
            joints: raw.joints,
            field_position: raw.field_position.into(),
            ball_position: raw.ball_position.into(),
            locations: raw.locations.into(),
            sightings: raw.sightings.into_iter().map(SoccerSightings::from).collect(),
        }
    }
}

impl From<&RobotPerceptionState> for RawRobotState {
    fn from(state: &RobotPerceptionState) -> Self {
        Self {
            player_number: state.player_number,
            joints: state.joints,
            field_position: state.field_position.into(),
            ball_position: state.ball_position.into(),
            locations: state.locations.into(),
            sightings: state.sightings.iter().map(RawSoccerSightings::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::{CartesianCoordinate, PixelCoordinate, Resolution};

    fn ball() -> EllipseSighting {
        EllipseSighting {
            center_point: PixelCoordinate::new(320, 400, Resolution::new(640, 480)),
            vertical_radius: 12,
            horizontal_radius: 14,
        }
    }

    #[test]
    fn optional_without_value_is_absent_even_with_payload() {
        let raw = RawOptional {
            has_value: false,
            value: ball(),
        };
        assert_eq!(Option::<EllipseSighting>::from(raw), None);
    }

    #[test]
    fn horizon_discriminants_decode() {
        let corner = CornerSighting::default();
        let raw = RawHorizonSighting {
            sighting_type: HORIZON_CORNER,
            corner_sighting: corner,
            ..RawHorizonSighting::default()
        };
        assert_eq!(HorizonSighting::from(raw), HorizonSighting::Corner(corner));

        let raw = RawHorizonSighting::default();
        assert_eq!(HorizonSighting::from(raw), HorizonSighting::FieldOnly);
    }

    #[test]
    #[should_panic(expected = "invalid horizon sighting type: 9")]
    fn unknown_horizon_discriminant_panics() {
        let raw = RawHorizonSighting {
            sighting_type: 9,
            ..RawHorizonSighting::default()
        };
        let _ = HorizonSighting::from(raw);
    }

    #[test]
    fn raw_state_converts_to_typed_state() {
        let raw = RawRobotState {
            player_number: 3,
            field_position: RawOptional {
                has_value: true,
                value: FieldCoordinate::new(CartesianCoordinate::new(1.0, -2.0), 0.5),
            },
            sightings: vec![
                RawSoccerSightings::default(),
                RawSoccerSightings {
                    ball: Some(ball()).into(),
                    horizon: Some(RawHorizonSighting::from(HorizonSighting::FieldOnly)).into(),
                    ..RawSoccerSightings::default()
                },
            ],
            ..RawRobotState::default()
        };

        let state = RobotPerceptionState::from(raw);
        assert_eq!(state.player_number, 3);
        assert!(state.field_position.is_some());
        assert!(state.ball_position.is_none());
        assert_eq!(state.sightings.len(), 2);
        assert!(state.sightings[0].ball.is_none());
        assert_eq!(state.sightings[1].ball, Some(ball()));
        assert_eq!(state.sightings[1].horizon, Some(HorizonSighting::FieldOnly));
    }

    #[test]
    fn typed_state_survives_raw_layout() {
        let state = RobotPerceptionState {
            player_number: 2,
            sightings: vec![SoccerSightings::new(
                Some(ball()),
                None,
                None,
                None,
                Some(HorizonSighting::Line(LineSighting::default())),
                [],
            )],
            ..RobotPerceptionState::default()
        };
        let back = RobotPerceptionState::from(RawRobotState::from(&state));
        assert_eq!(back, state);
    }

    #[test]
    fn raw_state_json_roundtrip() {
        let raw = RawRobotState {
            player_number: 5,
            ..RawRobotState::default()
        };
        let json = serde_json::to_string(&raw).unwrap();
        let back: RawRobotState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, raw);
    }
}
