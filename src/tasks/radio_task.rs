//! Control-frame reception task.
//!
//! The radio driver (out of scope here) pushes raw 8-byte frames into a
//! channel; this task validates and decodes them and publishes the result
//! as the latest command. Bad frames are logged and dropped, leaving the
//! previous command in effect. Delivery is last-write-wins: the motion task
//! only ever cares about the most recent operator intent, so a [`Signal`]
//! replaces any queueing.
use crate::robot::commands::{decode, ControlCommand, DecodeError, WireFrame};
use crate::FRAME_CHANNEL_SIZE;
use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::Receiver,
    signal::Signal,
};
use log::{debug, warn};

/// Most recent decoded command. Overwritten on every good frame, consumed
/// by the motion task at the start of its next cycle.
pub static LATEST_COMMAND: Signal<CriticalSectionRawMutex, ControlCommand> = Signal::new();

#[embassy_executor::task]
pub async fn radio_task(
    frame_receiver: Receiver<'static, CriticalSectionRawMutex, WireFrame, FRAME_CHANNEL_SIZE>,
) {
    loop {
        let frame = frame_receiver.receive().await;
        match decode(&frame) {
            Ok(cmd) => {
                debug!(
                    "[RADIO_TASK] buttons {:#04x} radius {} angle code {}",
                    cmd.buttons.bits(),
                    cmd.radius,
                    cmd.angle_code
                );
                LATEST_COMMAND.signal(cmd);
            }
            Err(e @ DecodeError::UnsupportedMode) => warn!("[RADIO_TASK] {e}"),
            Err(e @ DecodeError::MalformedFrame) => {
                warn!("[RADIO_TASK] {e}, dropping frame {:02x?}", frame)
            }
        }
    }
}
