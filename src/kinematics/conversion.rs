//! Inverse kinematics for one leg.
//!
//! Converts a requested foot position, expressed relative to the calibrated
//! rest pose, into the three joint angles of that leg. The math is plain
//! trigonometry: hip yaw from the horizontal components, then two law-of-
//! cosines angles for the knee pair, recentered around the rest-pose knee
//! angle so a zero request reproduces the calibrated stance.
use crate::robot::config::LegGeometry;
use crate::robot::leg::Side;
use core::fmt::Display;
use micromath::F32Ext;

/// One waypoint of a leg trajectory: the three joint angles in degrees,
/// already shifted into servo space and calibrated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointAngles {
    pub j1: f32,
    pub j2: f32,
    pub j3: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KinematicsError {
    /// The requested foot position is outside the leg's physical reach.
    UnreachablePose,
}

impl Display for KinematicsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KinematicsError::UnreachablePose => f.write_str("foot target out of reach"),
        }
    }
}

/// `acos` with the domain made explicit: an argument pushed outside [-1, 1]
/// means the triangle the caller asked about does not exist.
fn acos_deg(arg: f32) -> Result<f32, KinematicsError> {
    if !arg.is_finite() || arg.abs() > 1.0 {
        return Err(KinematicsError::UnreachablePose);
    }
    Ok(arg.acos().to_degrees())
}

/// Solve the leg for a foot target relative to the rest pose.
///
/// `yaw` steers the step heading; together with the leg's mounting yaw it
/// folds a lateral component into the request so all six feet describe
/// arcs around the body. In rotation mode (in-place turn) the fold and the
/// left-side mirror are skipped and every leg pushes tangentially.
pub fn solve(
    geo: &LegGeometry,
    x: f32,
    y: f32,
    z: f32,
    yaw: f32,
    rotation: bool,
) -> Result<JointAngles, KinematicsError> {
    let mut x = x;

    // offset to the rest position
    let z = geo.z_rest - z;
    let mut y = y + geo.y_rest;

    if !rotation {
        if geo.side == Side::Left {
            x = -x;
        }
        let heading = (geo.mount_angle + yaw).to_radians();
        if geo.mount_angle != 0.0 {
            x += x * heading.cos();
        }
        y += x * heading.sin();
    }

    let j1 = (x / y).atan().to_degrees();
    let h = (x.powi(2) + y.powi(2)).sqrt();
    let l = (h.powi(2) + z.powi(2)).sqrt();

    let j3 = acos_deg(
        (geo.j2_len.powi(2) + geo.j3_len.powi(2) - l.powi(2)) / (2.0 * geo.j2_len * geo.j3_len),
    )?;
    let j3_out = 2.0 * geo.j3_rest - j3;

    let b = acos_deg(
        (l.powi(2) + geo.j2_len.powi(2) - geo.j3_len.powi(2)) / (2.0 * l * geo.j2_len),
    )?;
    // z is negative at rest, so this pulls j2 down rather than up
    let a = (z / h).atan().to_degrees();
    let j2 = b + a;

    let angles = match geo.side {
        Side::Left => JointAngles {
            j1: j1 + 90.0 + geo.dev_a,
            j2: 90.0 + j2 + geo.dev_b,
            j3: 90.0 + j3_out + geo.dev_c,
        },
        Side::Right => JointAngles {
            j1: j1 + 90.0 + geo.dev_a,
            j2: 90.0 - j2 + geo.dev_b,
            j3: 90.0 - j3_out + geo.dev_c,
        },
    };

    if !(angles.j1.is_finite() && angles.j2.is_finite() && angles.j3.is_finite()) {
        return Err(KinematicsError::UnreachablePose);
    }
    Ok(angles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::config::leg_geometries;

    const TOL: f32 = 0.05;

    fn bare_geometry(side: Side) -> LegGeometry {
        LegGeometry::new(side, 0.0, 0.0, 0.0, 0.0)
    }

    #[test]
    fn rest_pose_reproduces_the_calibrated_stance() {
        let geo = bare_geometry(Side::Left);
        let angles = solve(&geo, 0.0, 0.0, 0.0, 0.0, false).unwrap();
        // x = 0 so the hip stays centered
        assert!((angles.j1 - 90.0).abs() < TOL);
        // at the rest pose the recentering cancels: j3_out == j3_rest
        assert!((angles.j3 - (90.0 + geo.j3_rest)).abs() < TOL);
    }

    #[test]
    fn left_and_right_sides_mirror_on_j2_and_j3() {
        let left = bare_geometry(Side::Left);
        let right = bare_geometry(Side::Right);

        // rotation mode skips the side-dependent lateral fold, leaving only
        // the documented sign flips
        let l = solve(&left, 4.0, 6.0, -8.0, 0.0, true).unwrap();
        let r = solve(&right, 4.0, 6.0, -8.0, 0.0, true).unwrap();

        assert!((l.j1 - r.j1).abs() < TOL);
        assert!((l.j2 + r.j2 - 180.0).abs() < TOL);
        assert!((l.j3 + r.j3 - 180.0).abs() < TOL);
    }

    #[test]
    fn targets_beyond_the_leg_reach_are_rejected() {
        let geo = bare_geometry(Side::Left);
        // y + y_rest = 150 > j2_len + j3_len = 120
        let result = solve(&geo, 0.0, 100.0, 0.0, 0.0, false);
        assert_eq!(result, Err(KinematicsError::UnreachablePose));
    }

    #[test]
    fn folded_targets_too_close_to_the_hip_are_rejected() {
        let geo = bare_geometry(Side::Left);
        // pulls the foot almost under the hip, past the minimum knee fold
        let result = solve(&geo, 0.0, -49.0, -25.0, 0.0, false);
        assert_eq!(result, Err(KinematicsError::UnreachablePose));
    }

    #[test]
    fn deviations_shift_the_output_angles() {
        let plain = bare_geometry(Side::Left);
        let mut calibrated = plain;
        calibrated.dev_a = 5.0;
        calibrated.dev_b = -10.0;
        calibrated.dev_c = 3.0;

        let p = solve(&plain, 2.0, 3.0, -4.0, 0.0, true).unwrap();
        let c = solve(&calibrated, 2.0, 3.0, -4.0, 0.0, true).unwrap();
        assert!((c.j1 - p.j1 - 5.0).abs() < TOL);
        assert!((c.j2 - p.j2 + 10.0).abs() < TOL);
        assert!((c.j3 - p.j3 - 3.0).abs() < TOL);
    }

    #[test]
    fn every_configured_leg_can_stand_at_rest() {
        for geo in leg_geometries() {
            solve(&geo, 0.0, 0.0, 0.0, 0.0, false).unwrap();
        }
    }

    #[test]
    fn every_configured_leg_can_take_a_full_step() {
        for geo in leg_geometries() {
            solve(&geo, 15.0, 0.0, 0.0, 0.0, false).unwrap();
            solve(&geo, -15.0, 0.0, 0.0, 45.0, false).unwrap();
            solve(&geo, 15.0, 0.0, 0.0, 0.0, true).unwrap();
        }
    }
}
