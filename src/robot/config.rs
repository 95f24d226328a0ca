use crate::robot::leg::Side;
use micromath::F32Ext;

// LEG GEOMETRY (mm)
pub const X_REST: f32 = 0.0;
pub const Y_REST: f32 = 50.0;
pub const Z_REST: f32 = -30.0;
pub const J2_LENGTH: f32 = 50.0;
pub const J3_LENGTH: f32 = 70.0;

/// Mounting yaw of the corner legs; middle legs sit at 0.
pub const MOUNT_ANGLE: f32 = 30.0;

// GAIT CONSTANTS
/// Interpolated segments per wave plan. A plan holds `WAVE_STEPS + 1` waypoints.
pub const WAVE_STEPS: usize = 15;
/// Horizontal travel of one step (mm).
pub const H_STEP: f32 = 15.0;
/// Peak of the swing-phase lift profile. Negative is up.
pub const LIFT_HEIGHT: f32 = -15.0;

// TIMING
pub const PHASE_SETTLE_MS: u64 = 100;
pub const IDLE_WAIT_MS: u64 = 500;
pub const LOOP_WAIT_MS: u64 = 10;
pub const TRANSMIT_PERIOD_MS: u64 = 500;

/// Fixed geometry and calibration of one leg. Built once at startup; the
/// rest-pose knee angle `j3_rest` needs a runtime `acos` so it is derived in
/// the constructor and never changes afterwards.
#[derive(Debug, Clone, Copy)]
pub struct LegGeometry {
    pub x_rest: f32,
    pub y_rest: f32,
    pub z_rest: f32,
    pub j2_len: f32,
    pub j3_len: f32,
    pub mount_angle: f32,
    pub dev_a: f32,
    pub dev_b: f32,
    pub dev_c: f32,
    pub side: Side,
    pub j3_rest: f32,
}

impl LegGeometry {
    pub fn new(side: Side, mount_angle: f32, dev_a: f32, dev_b: f32, dev_c: f32) -> Self {
        let rest_reach_sq = Y_REST.powi(2) + Z_REST.powi(2);
        let j3_rest = ((J2_LENGTH.powi(2) + J3_LENGTH.powi(2) - rest_reach_sq)
            / (2.0 * J2_LENGTH * J3_LENGTH))
            .acos()
            .to_degrees();

        Self {
            x_rest: X_REST,
            y_rest: Y_REST,
            z_rest: Z_REST,
            j2_len: J2_LENGTH,
            j3_len: J3_LENGTH,
            mount_angle,
            dev_a,
            dev_b,
            dev_c,
            side,
            j3_rest,
        }
    }
}

/// Calibrated geometry for all six legs, indexed by [`crate::robot::leg::LegId`].
/// Deviations compensate the horn offset of each individual servo.
pub fn leg_geometries() -> [LegGeometry; 6] {
    [
        LegGeometry::new(Side::Left, -MOUNT_ANGLE, 0.0, -15.0, -20.0), // front left
        LegGeometry::new(Side::Left, 0.0, 7.0, -23.0, -14.0),          // mid left
        LegGeometry::new(Side::Left, MOUNT_ANGLE, 0.0, -23.0, -8.0),   // rear left
        LegGeometry::new(Side::Right, MOUNT_ANGLE, 10.0, 20.0, -5.0),  // rear right
        LegGeometry::new(Side::Right, 0.0, 10.0, 5.0, 7.0),            // mid right
        LegGeometry::new(Side::Right, -MOUNT_ANGLE, 0.0, 17.0, 25.0),  // front right
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_knee_angle_is_derived_from_geometry() {
        let geo = LegGeometry::new(Side::Left, 0.0, 0.0, 0.0, 0.0);
        // law of cosines at the rest pose: (50² + 70² − (50² + 30²)) / (2·50·70)
        let expected = (4000.0f32 / 7000.0).acos().to_degrees();
        assert!((geo.j3_rest - expected).abs() < 0.01);
    }

    #[test]
    fn corner_legs_carry_the_mounting_yaw() {
        let legs = leg_geometries();
        assert_eq!(legs[0].mount_angle, -MOUNT_ANGLE);
        assert_eq!(legs[1].mount_angle, 0.0);
        assert_eq!(legs[4].mount_angle, 0.0);
        assert_eq!(legs[3].mount_angle, MOUNT_ANGLE);
        assert_eq!(legs[0].side, Side::Left);
        assert_eq!(legs[5].side, Side::Right);
    }
}
