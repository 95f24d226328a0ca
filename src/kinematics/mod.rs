//! Kinematics algorithms and gait sequencing for the hexapod.
//!
//! This module provides the mathematical routines for converting foot
//! positions into joint angles, as well as the routines for generating and
//! sequencing leg movements (the wave gait).
//!
//! - [`conversion`] handles the per-leg inverse kinematics.
//! - [`gait`] expands one directional step into a per-leg waypoint sequence.
//! - [`gait_engine`] coordinates the six legs through the alternating
//!   tripod phases.
//!
//! Used by the motion task to plan and execute robot movement.
pub mod conversion;
pub mod gait;
pub mod gait_engine;
