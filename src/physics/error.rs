use serde::{Deserialize, Serialize};
use std::fmt;

/// Domain errors for the closed-form float kinematics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum KinematicsError {
    /// `1 + a == 0` makes every formula divide by zero
    DegenerateAddedMass { added_mass: f64 },
    /// Zero piston flow means the float never reaches the target velocity
    ZeroFlow { target_velocity: f64 },
    /// The radicand of the time inversion went negative, meaning the target
    /// velocity is unreachable for this parameter sign combination
    NegativeRadicand {
        radicand: f64,
        target_velocity: f64,
    },
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KinematicsError::DegenerateAddedMass { added_mass } => {
                write!(
                    f,
                    "degenerate added mass: 1 + a = 0 for a = {} (division by zero)",
                    added_mass
                )
            }
            KinematicsError::ZeroFlow { target_velocity } => {
                write!(
                    f,
                    "zero piston flow: target velocity {} m/s is never reached",
                    target_velocity
                )
            }
            KinematicsError::NegativeRadicand {
                radicand,
                target_velocity,
            } => {
                write!(
                    f,
                    "negative radicand {} inverting for target velocity {} m/s",
                    radicand, target_velocity
                )
            }
        }
    }
}

impl std::error::Error for KinematicsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let err = KinematicsError::DegenerateAddedMass { added_mass: -1.0 };
        assert!(err.to_string().contains("-1"));

        let err = KinematicsError::ZeroFlow {
            target_velocity: 0.05,
        };
        assert!(err.to_string().contains("0.05"));

        let err = KinematicsError::NegativeRadicand {
            radicand: -2.5,
            target_velocity: 0.05,
        };
        assert!(err.to_string().contains("-2.5"));
    }

    #[test]
    fn serde_round_trip() {
        let err = KinematicsError::NegativeRadicand {
            radicand: -1.0,
            target_velocity: 0.1,
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: KinematicsError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }
}
