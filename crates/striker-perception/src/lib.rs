//! `striker-perception` – conversion and visibility geometry for a robot's
//! cameras.
//!
//! Maps points between the images of the cameras on a pivot, the ground
//! around the robot and the field, and decides what each camera can see.
//!
//! # Modules
//!
//! - [`model`] – [`CameraModel`]: the projection functions of the target
//!   platform, consumed as a trait.
//! - [`engine`] – [`Engine`]: every conversion, parameterised by pivot and
//!   camera index.
//! - [`clamp`] – [`Clampable`]: snapping off-image projections to the image
//!   edge, with or without a tolerance band.
//! - [`camera`] – [`RobotCamera`]: one camera bound to its pivot, with
//!   calibration accessors.
//! - [`containers`] – capability traits giving a robot the engine's
//!   operations by index or by camera name.
//! - [`sightings`] – per-camera and merged sighting accessors, and field
//!   positions of the upstream object locations.
//! - [`sim`] – [`FlatGroundModel`][sim::FlatGroundModel] for headless tests.

pub mod camera;
pub mod clamp;
pub mod containers;
pub mod engine;
pub mod model;
pub mod sightings;
pub mod sim;

pub use camera::RobotCamera;
pub use clamp::Clampable;
pub use containers::{
    BottomCameraContainer, CameraPivotContainer, FieldCameraContainer, FieldPositionContainer,
    TopCameraContainer,
};
pub use engine::Engine;
pub use model::CameraModel;
pub use sightings::{
    BottomCameraSightingsContainer, SoccerObjectLocationsContainer, SoccerSightingsContainer,
    TopCameraSightingsContainer,
};
