//! Accessors over per-camera sightings and upstream object locations.

use striker_types::{
    CartesianCoordinate, EllipseSighting, HorizonSighting, RectangleSighting, RelativeCoordinate,
    Sighted, SoccerObjectLocations, SoccerSightings,
};

use crate::containers::{BottomCameraContainer, FieldPositionContainer, TopCameraContainer};

/// Something holding one [`SoccerSightings`] per camera.
///
/// Per-camera accessors panic on an index without sightings, like the
/// camera lookups on the pivot.  The merged accessors walk the cameras in
/// ascending index order and keep each camera's own order within it.
pub trait SoccerSightingsContainer {
    /// All sightings, indexed like the pivot's cameras.
    fn sightings(&self) -> &[SoccerSightings];

    fn soccer_sightings(&self, camera: usize) -> &SoccerSightings {
        let sightings = self.sightings();
        sightings.get(camera).unwrap_or_else(|| {
            panic!(
                "camera index {camera} out of range for sightings of {} camera(s)",
                sightings.len()
            )
        })
    }

    fn ball_sighting(&self, camera: usize) -> Option<&EllipseSighting> {
        self.soccer_sightings(camera).ball.as_ref()
    }

    fn horizon_sighting(&self, camera: usize) -> Option<&HorizonSighting> {
        self.soccer_sightings(camera).horizon.as_ref()
    }

    fn line_sightings(&self, camera: usize) -> &[RectangleSighting] {
        self.soccer_sightings(camera).lines()
    }

    /// Ball sightings from every camera that saw the ball.
    fn all_ball_sightings(&self) -> Vec<Sighted<EllipseSighting>> {
        self.sightings()
            .iter()
            .enumerate()
            .filter_map(|(camera, s)| s.ball.map(|sighting| Sighted { camera, sighting }))
            .collect()
    }

    /// Goal post sightings from every camera, generic/left/right within a
    /// camera.
    fn all_goal_post_sightings(&self) -> Vec<Sighted<RectangleSighting>> {
        self.sightings()
            .iter()
            .enumerate()
            .flat_map(|(camera, s)| {
                s.goal_posts().map(move |sighting| Sighted {
                    camera,
                    sighting: *sighting,
                })
            })
            .collect()
    }

    fn all_line_sightings(&self) -> Vec<Sighted<RectangleSighting>> {
        self.sightings()
            .iter()
            .enumerate()
            .flat_map(|(camera, s)| {
                s.lines().iter().map(move |sighting| Sighted {
                    camera,
                    sighting: *sighting,
                })
            })
            .collect()
    }
}

/// Per-camera sightings under the top camera's name.
pub trait TopCameraSightingsContainer: SoccerSightingsContainer + TopCameraContainer {
    fn top_camera_sightings(&self) -> &SoccerSightings {
        self.soccer_sightings(Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_ball_sighting(&self) -> Option<&EllipseSighting> {
        self.ball_sighting(Self::TOP_CAMERA_INDEX)
    }

    fn top_camera_horizon_sighting(&self) -> Option<&HorizonSighting> {
        self.horizon_sighting(Self::TOP_CAMERA_INDEX)
    }
}

impl<T: SoccerSightingsContainer + TopCameraContainer> TopCameraSightingsContainer for T {}

/// Per-camera sightings under the bottom camera's name.
pub trait BottomCameraSightingsContainer: SoccerSightingsContainer + BottomCameraContainer {
    fn bottom_camera_sightings(&self) -> &SoccerSightings {
        self.soccer_sightings(Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_ball_sighting(&self) -> Option<&EllipseSighting> {
        self.ball_sighting(Self::BOTTOM_CAMERA_INDEX)
    }

    fn bottom_camera_horizon_sighting(&self) -> Option<&HorizonSighting> {
        self.horizon_sighting(Self::BOTTOM_CAMERA_INDEX)
    }
}

impl<T: SoccerSightingsContainer + BottomCameraContainer> BottomCameraSightingsContainer for T {}

/// Robot-relative locations of the soccer objects, as estimated upstream,
/// and their field positions when the robot is localised.
pub trait SoccerObjectLocationsContainer {
    fn object_locations(&self) -> &SoccerObjectLocations;

    fn ball_location(&self) -> Option<RelativeCoordinate> {
        self.object_locations().ball
    }

    fn left_goal_post_location(&self) -> Option<RelativeCoordinate> {
        self.object_locations().left_goal_post
    }

    fn right_goal_post_location(&self) -> Option<RelativeCoordinate> {
        self.object_locations().right_goal_post
    }

    fn goal_location(&self) -> Option<RelativeCoordinate> {
        self.object_locations().goal
    }

    fn ball_location_position(&self) -> Option<CartesianCoordinate>
    where
        Self: FieldPositionContainer,
    {
        self.cartesian_coordinate_at(self.ball_location()?)
    }

    fn left_goal_post_location_position(&self) -> Option<CartesianCoordinate>
    where
        Self: FieldPositionContainer,
    {
        self.cartesian_coordinate_at(self.left_goal_post_location()?)
    }

    fn right_goal_post_location_position(&self) -> Option<CartesianCoordinate>
    where
        Self: FieldPositionContainer,
    {
        self.cartesian_coordinate_at(self.right_goal_post_location()?)
    }

    fn goal_location_position(&self) -> Option<CartesianCoordinate>
    where
        Self: FieldPositionContainer,
    {
        self.cartesian_coordinate_at(self.goal_location()?)
    }
}
