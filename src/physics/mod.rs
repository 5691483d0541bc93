//! Closed-form float kinematics and piston flow derivation

pub mod error;
pub mod flow;
pub mod kinematics;

pub use error::KinematicsError;
pub use flow::derive_flow;
pub use kinematics::{depth_to_velocity, position, time_to_velocity, velocity};
