//! Actuation sink for the motion coordinator.
//!
//! [`ServoBus`] is the only thing the gait engine knows about the hardware:
//! something able to put a joint of a leg at an angle. [`Servo`] and
//! [`ServoBank`] provide the reference implementation over any
//! [`SetDutyCycle`] PWM channel; firmware that drives its joints through an
//! I2C expander instead only has to supply its own `ServoBus`.
use crate::robot::{joint::Joint, leg::LegId};
use embedded_hal::pwm::SetDutyCycle;
use fugit::Hertz;
use log::error;
use micromath::F32Ext;

/// Joint-angle sink consumed by the gait engine. One call per joint per
/// waypoint; implementations are expected to be quick and to log rather
/// than fail.
pub trait ServoBus {
    fn set_angle(&mut self, leg: LegId, joint: Joint, degrees: f32);
}

const SERVO_MIN_PULSE_US: u32 = 544; // 0 degrees
const SERVO_MAX_PULSE_US: u32 = 2400; // 180 degrees
const SERVO_ANGLE_RANGE: u32 = 180;

/// One hobby servo on a PWM channel.
///
/// Converts an angle to a pulse width and the pulse width to a duty value
/// for the channel resolution. The width of the pulse drives the angle, not
/// the frequency.
#[derive(Debug)]
pub struct Servo<PWM> {
    pwm: PWM,
    angle: u8,
    max_duty: u16,
    frequency: Hertz<u32>,
    leg_id: LegId,
    joint_id: Joint,
}

impl<PWM> Servo<PWM>
where
    PWM: SetDutyCycle,
{
    pub fn new(pwm: PWM, max_duty: u16, frequency: Hertz<u32>, leg_id: LegId, joint_id: Joint) -> Self {
        Self {
            pwm,
            angle: 0,
            max_duty,
            frequency,
            leg_id,
            joint_id,
        }
    }

    /// Drive the horn to `degrees`, clamped to the 0-180 range the linkage
    /// allows. Writing the angle the servo already holds is skipped.
    pub fn set_degrees(&mut self, degrees: f32) {
        let angle = degrees.round().clamp(0.0, SERVO_ANGLE_RANGE as f32) as u8;
        if self.angle == angle {
            return;
        }
        self.angle = angle;

        // Linearly interpolate the pulse, e.g. 90 degrees -> 1472 us
        let pulse = SERVO_MIN_PULSE_US
            + (angle as u32 * (SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US)) / SERVO_ANGLE_RANGE;

        // Scale the pulse to the channel resolution
        let period_us = 1_000_000 / self.frequency.raw();
        let duty = ((pulse * self.max_duty as u32) / period_us).min(self.max_duty as u32) as u16;
        if let Err(e) = self.pwm.set_duty_cycle(duty) {
            error!(
                "{} {} error writing angle: {:?}",
                self.leg_id, self.joint_id, e
            );
        }
    }

    pub fn angle(&self) -> u8 {
        self.angle
    }
}

/// The full set of eighteen servos, three per leg, as one [`ServoBus`].
pub struct ServoBank<PWM> {
    servos: [[Servo<PWM>; 3]; 6],
}

impl<PWM> ServoBank<PWM>
where
    PWM: SetDutyCycle,
{
    pub fn new(servos: [[Servo<PWM>; 3]; 6]) -> Self {
        Self { servos }
    }
}

impl<PWM> ServoBus for ServoBank<PWM>
where
    PWM: SetDutyCycle,
{
    fn set_angle(&mut self, leg: LegId, joint: Joint, degrees: f32) {
        self.servos[leg.index()][joint as usize].set_degrees(degrees);
    }
}
