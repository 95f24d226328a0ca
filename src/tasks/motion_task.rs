//! High-level motion task.
//!
//! Owns the gait engine and the actuation sink. Each iteration drains the
//! latest decoded command, derives `(speed, yaw, rotation)` from it and runs
//! one gait cycle. A command arriving mid-cycle is picked up at the start of
//! the next one; when no new command arrived the previous one stays in
//! effect. Cancelling the task at any await point simply leaves every servo
//! at its last commanded angle.
use crate::kinematics::gait_engine::Hexapod;
use crate::robot::commands::Buttons;
use crate::robot::config::LOOP_WAIT_MS;
use crate::robot::servo::ServoBus;
use crate::tasks::radio_task::LATEST_COMMAND;
use embassy_time::Timer;
use log::info;

#[embassy_executor::task]
pub async fn motion_task(bus: &'static mut dyn ServoBus) {
    let mut hexapod = Hexapod::new();
    hexapod.init_stance(bus);

    let mut speed: i8 = 0;
    let mut yaw: f32 = 0.0;

    loop {
        if let Some(cmd) = LATEST_COMMAND.try_take() {
            hexapod.set_rotation(cmd.buttons.contains(Buttons::TRIANGLE));
            speed = cmd.speed();
            yaw = cmd.yaw_degrees();
            info!(
                "[MOTION_TASK] speed {} yaw {} rotation {}",
                speed,
                yaw,
                hexapod.rotation()
            );
        }

        hexapod.move_cycle(bus, speed, yaw).await;
        Timer::after_millis(LOOP_WAIT_MS).await;
    }
}
