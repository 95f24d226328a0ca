//! Per-leg wave-gait sequencing.
//!
//! A [`LegState`] remembers where its foot was last commanded and, given a
//! new target, expands the move into a fixed-length sequence of joint-angle
//! waypoints. The sequence is played back later by the gait engine; planning
//! itself never talks to the servos.
use crate::kinematics::conversion::{solve, JointAngles, KinematicsError};
use crate::robot::config::{LegGeometry, LIFT_HEIGHT, WAVE_STEPS};
use crate::robot::leg::LegId;
use core::f32::consts::PI;
use core::ops::{Index, IndexMut};
use micromath::F32Ext;

/// Planned waypoints awaiting playback. Capacity matches one full wave.
pub type RoadMap = heapless::Vec<JointAngles, { WAVE_STEPS + 1 }>;

/// Last commanded foot position of a leg, relative to its rest pose.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FootPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Mutable gait state of one leg: where the foot was last sent and the
/// waypoints still to be driven. Exactly one plan is active at a time; a
/// new plan is only made once the previous one has been drained.
#[derive(Debug)]
pub struct LegState {
    id: LegId,
    geometry: LegGeometry,
    last: FootPosition,
    road_map: RoadMap,
}

impl LegState {
    pub fn new(id: LegId, geometry: LegGeometry) -> Self {
        Self {
            id,
            geometry,
            last: FootPosition::default(),
            road_map: RoadMap::new(),
        }
    }

    pub fn id(&self) -> LegId {
        self.id
    }

    pub fn last_position(&self) -> FootPosition {
        self.last
    }

    /// Expand a move to `(x, y, z)` into `WAVE_STEPS + 1` waypoints.
    ///
    /// X and Y interpolate linearly from the last commanded position to the
    /// target. While the foot travels toward a larger X it is swinging, so Z
    /// rides a half-sine lift; otherwise the leg is in stance and Z holds
    /// the requested level. The last commanded position updates once, after
    /// the whole sequence solved; a single unreachable waypoint rejects the
    /// plan and leaves the leg state untouched.
    pub fn plan_wave(
        &mut self,
        x: f32,
        y: f32,
        z: f32,
        yaw: f32,
        rotation: bool,
    ) -> Result<(), KinematicsError> {
        let mut road_map = RoadMap::new();

        let steps = WAVE_STEPS as f32;
        let x_span = (self.last.x - x) / steps;
        let y_span = (self.last.y - y) / steps;
        let swinging = x > self.last.x;

        for i in 0..=WAVE_STEPS {
            let t = i as f32;
            let wx = self.last.x - x_span * t;
            let wy = self.last.y - y_span * t;
            let wz = if swinging {
                LIFT_HEIGHT * (PI * t / steps).sin()
            } else {
                z
            };
            let angles = solve(&self.geometry, wx, wy, wz, yaw, rotation)?;
            // capacity is exactly WAVE_STEPS + 1
            let _ = road_map.push(angles);
        }

        self.road_map = road_map;
        self.last = FootPosition { x, y, z };
        Ok(())
    }

    pub fn waypoint(&self, index: usize) -> Option<&JointAngles> {
        self.road_map.get(index)
    }

    pub fn planned_len(&self) -> usize {
        self.road_map.len()
    }

    /// Drop the active plan. Called after playback, and to abort the phase
    /// of a leg whose plan failed.
    pub fn clear_plan(&mut self) {
        self.road_map.clear();
    }
}

impl Index<LegId> for [LegState; 6] {
    type Output = LegState;

    fn index(&self, leg: LegId) -> &Self::Output {
        &self[leg.index()]
    }
}

impl IndexMut<LegId> for [LegState; 6] {
    fn index_mut(&mut self, leg: LegId) -> &mut Self::Output {
        &mut self[leg.index()]
    }
}
