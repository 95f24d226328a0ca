//! Six-leg motion coordination.
//!
//! [`Hexapod`] owns the per-leg gait state and turns a single
//! `(speed, yaw)` request into the two alternating tripod phases of the
//! wave gait. Planning and playback are synchronous and non-suspending; the
//! only awaits are the settle pauses between phases and the idle wait, so
//! the surrounding task can be cancelled at those points with every joint
//! left at its last commanded angle.
use crate::kinematics::gait::LegState;
use crate::robot::config::{
    leg_geometries, LegGeometry, H_STEP, IDLE_WAIT_MS, PHASE_SETTLE_MS, WAVE_STEPS,
};
use crate::robot::joint::Joint;
use crate::robot::leg::LegId;
use crate::robot::servo::ServoBus;
use embassy_time::Timer;
use log::{info, warn};

/// The two halves of one wave-gait cycle. Tripod group A leads in
/// [`GaitPhase::StepLeft`] and trails in [`GaitPhase::StepRight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GaitPhase {
    StepLeft,
    StepRight,
}

/// State machine coordinating the six legs through the wave gait.
pub struct Hexapod {
    legs: [LegState; 6],
    direction: f32,
    rotation: bool,
}

impl Hexapod {
    pub fn new() -> Self {
        Self::with_geometries(leg_geometries())
    }

    /// Build the coordinator from explicit per-leg geometry, e.g. after
    /// recalibration.
    pub fn with_geometries(geometries: [LegGeometry; 6]) -> Self {
        let mut index = 0;
        let legs = geometries.map(|geo| {
            let leg = LegState::new(LegId::from(index), geo);
            index += 1;
            leg
        });
        Self {
            legs,
            direction: 1.0,
            rotation: false,
        }
    }

    /// Global walking direction, +1 or -1. Applied to the step sign of
    /// every leg on the next cycle.
    pub fn set_direction(&mut self, direction: f32) {
        self.direction = if direction < 0.0 { -1.0 } else { 1.0 };
    }

    /// In-place turn mode. While set, the kinematics skip the lateral
    /// heading fold and the legs push tangentially.
    pub fn set_rotation(&mut self, rotation: bool) {
        self.rotation = rotation;
    }

    pub fn rotation(&self) -> bool {
        self.rotation
    }

    /// Step length for the requested speed. Reverse requests never produce
    /// a step: the original controller zeroes the stride and only keeps the
    /// sign in `direction`, so "reverse" holds position instead of walking
    /// backwards. Preserved as observed.
    fn step_size(&self, speed: i8) -> f32 {
        if speed < 0 {
            0.0
        } else {
            H_STEP * self.direction
        }
    }

    /// Plan one tripod phase: group A strides one way, group B the other.
    /// A leg whose target cannot be solved sits this phase out; the rest of
    /// the body keeps walking.
    fn plan_phase(&mut self, phase: GaitPhase, speed: i8, yaw: f32) {
        let step = self.step_size(speed);
        let (step_a, step_b) = match phase {
            GaitPhase::StepLeft => (step, -step),
            GaitPhase::StepRight => (-step, step),
        };

        for (group, step) in [(LegId::TRIPOD_A, step_a), (LegId::TRIPOD_B, step_b)] {
            for id in group {
                let leg = &mut self.legs[id];
                if let Err(e) = leg.plan_wave(step, 0.0, 0.0, yaw, self.rotation) {
                    warn!("{} leg: {}, holding last pose this phase", id, e);
                    leg.clear_plan();
                }
            }
        }
    }

    /// Drain every leg's plan in lockstep: waypoint `i` of all six legs is
    /// written before waypoint `i + 1` of any leg, producing one coordinated
    /// wave instead of six independent trajectories.
    fn drive(&mut self, bus: &mut dyn ServoBus) {
        for i in 0..=WAVE_STEPS {
            for leg in &self.legs {
                if let Some(angles) = leg.waypoint(i) {
                    bus.set_angle(leg.id(), Joint::Coxa, angles.j1);
                    bus.set_angle(leg.id(), Joint::Femur, angles.j2);
                    bus.set_angle(leg.id(), Joint::Tibia, angles.j3);
                }
            }
        }
        for leg in &mut self.legs {
            leg.clear_plan();
        }
    }

    /// Run one full gait cycle for the latest `(speed, yaw)` command.
    ///
    /// Zero speed idles without touching the servos. Otherwise both tripod
    /// phases are planned, driven in lockstep and given a settle pause, in
    /// strict order.
    pub async fn move_cycle(&mut self, bus: &mut dyn ServoBus, speed: i8, yaw: f32) {
        if speed == 0 {
            Timer::after_millis(IDLE_WAIT_MS).await;
            return;
        }

        self.plan_phase(GaitPhase::StepLeft, speed, yaw);
        self.drive(bus);
        Timer::after_millis(PHASE_SETTLE_MS).await;

        self.plan_phase(GaitPhase::StepRight, speed, yaw);
        self.drive(bus);
        Timer::after_millis(PHASE_SETTLE_MS).await;
    }

    /// Put every foot at its rest pose. Used once at startup so the first
    /// gait cycle starts from a known stance.
    pub fn init_stance(&mut self, bus: &mut dyn ServoBus) {
        for leg in &mut self.legs {
            if let Err(e) = leg.plan_wave(0.0, 0.0, 0.0, 0.0, false) {
                warn!("{} leg: {} at rest stance", leg.id(), e);
            }
        }
        self.drive(bus);
        info!("hexapod initialized at rest stance");
    }
}

impl Default for Hexapod {
    fn default() -> Self {
        Self::new()
    }
}
