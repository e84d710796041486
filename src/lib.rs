//! Earth Orbit - seasons and rotation of a simplified Earth–Sun model
//!
//! A library crate providing the simulation clock, the orbit kinematics
//! model and the Bevy plugins that present them.

pub mod calendar;
pub mod camera;
pub mod input;
pub mod orbit;
pub mod render;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
