//! Optical configuration of the cameras and the pivot they are mounted on.

use serde::{Deserialize, Serialize};

/// Optical parameters of a single camera, expressed relative to the pivot
/// it is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    /// Height of the camera above the pivot (metres).
    pub height: f32,
    /// Downward tilt of the optical axis relative to the pivot (radians).
    pub v_direction: f32,
    /// Forward offset of the camera from the pivot (metres).
    pub center_offset: f32,
    /// Horizontal field of view (radians).
    pub h_fov: f32,
    /// Vertical field of view (radians).
    pub v_fov: f32,
}

/// The pivot point (e.g. the neck) that one or more cameras are attached to.
///
/// The position of a camera in [`CameraPivot::cameras`] is its identity:
/// every conversion names a camera by that index.  Using an index outside
/// `0..cameras.len()` is a programming error and panics.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraPivot {
    /// Height of the pivot above the ground (metres).
    pub height: f32,
    /// Downward tilt of the pivot (radians).
    pub pitch: f32,
    /// Rotation of the pivot, counter-clockwise from straight ahead (radians).
    pub yaw: f32,
    pub cameras: Vec<Camera>,
}

impl CameraPivot {
    pub fn new(height: f32, pitch: f32, yaw: f32, cameras: Vec<Camera>) -> Self {
        Self {
            height,
            pitch,
            yaw,
            cameras,
        }
    }

    /// The camera at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index` does not name a camera on this pivot.
    pub fn camera(&self, index: usize) -> &Camera {
        self.cameras.get(index).unwrap_or_else(|| {
            panic!(
                "camera index {index} out of range for a pivot with {} camera(s)",
                self.cameras.len()
            )
        })
    }

    /// Mutable access to the camera at `index`, for calibration.
    ///
    /// # Panics
    ///
    /// Panics when `index` does not name a camera on this pivot.
    pub fn camera_mut(&mut self, index: usize) -> &mut Camera {
        let count = self.cameras.len();
        self.cameras.get_mut(index).unwrap_or_else(|| {
            panic!("camera index {index} out of range for a pivot with {count} camera(s)")
        })
    }

    pub fn camera_count(&self) -> usize {
        self.cameras.len()
    }
}
