//! `striker-hal` – the robot-facing collaborators of the perception stack.
//!
//! # Modules
//!
//! - [`snapshot`] – [`SnapshotSource`][snapshot::SnapshotSource]: one
//!   blocking read of the robot's published state, plus a JSON file reader.
//! - [`kinematics`] – [`HeadKinematics`][kinematics::HeadKinematics]: head
//!   joint angles to camera pivot, with the fixed-height NAO V5
//!   approximation.
//! - [`sim`] – [`SimSnapshotSource`][sim::SimSnapshotSource]: a scripted
//!   source for headless tests.

pub mod kinematics;
pub mod sim;
pub mod snapshot;
