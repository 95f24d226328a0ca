//! Remote-controller tasks.
//!
//! The remote runs two independent tasks: one samples the operator's
//! currently held keys and transmits a control frame at a fixed cadence,
//! the other passively receives telemetry and logs it. Both sides of the
//! input hand-off use a `Copy` snapshot behind a critical-section mutex, so
//! the transmit task always reads a consistent value and never a structure
//! the input-capture callback is halfway through updating.
use crate::robot::commands::{encode, Buttons, DirectionKeys, WireFrame};
use crate::robot::config::TRANSMIT_PERIOD_MS;
use crate::{FRAME_CHANNEL_SIZE, TELEMETRY_CHANNEL_SIZE};
use core::cell::Cell;
use embassy_sync::{
    blocking_mutex::{raw::CriticalSectionRawMutex, Mutex},
    channel::{Receiver, Sender},
};
use embassy_time::{Duration, Ticker};
use log::{debug, info};

/// Operator input at one sampling instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSnapshot {
    pub keys: DirectionKeys,
    /// The "special" key; mapped to the TRIANGLE button bit, which the
    /// robot reads as rotation mode.
    pub special: bool,
}

impl InputSnapshot {
    pub const RELEASED: InputSnapshot = InputSnapshot {
        keys: DirectionKeys::NONE,
        special: false,
    };
}

static ACTIVE_INPUTS: Mutex<CriticalSectionRawMutex, Cell<InputSnapshot>> =
    Mutex::new(Cell::new(InputSnapshot::RELEASED));

/// Called from the input-capture layer whenever the held keys change.
/// Swaps the whole snapshot in one critical section.
pub fn publish_inputs(snapshot: InputSnapshot) {
    ACTIVE_INPUTS.lock(|cell| cell.set(snapshot));
}

fn sample_inputs() -> InputSnapshot {
    ACTIVE_INPUTS.lock(|cell| cell.get())
}

/// Encode the sampled inputs into the frame that goes on the air.
pub fn frame_for(snapshot: InputSnapshot) -> WireFrame {
    let mut buttons = Buttons::NONE;
    if snapshot.special {
        buttons |= Buttons::TRIANGLE;
    }
    encode(buttons, snapshot.keys)
}

#[embassy_executor::task]
pub async fn transmit_task(
    frame_sender: Sender<'static, CriticalSectionRawMutex, WireFrame, FRAME_CHANNEL_SIZE>,
) {
    let mut ticker = Ticker::every(Duration::from_millis(TRANSMIT_PERIOD_MS));
    loop {
        let frame = frame_for(sample_inputs());
        debug!("[TRANSMIT_TASK] sending {:02x?}", frame);
        frame_sender.send(frame).await;
        ticker.next().await;
    }
}

/// Telemetry line from the robot, e.g. a temperature readout.
pub type TelemetryLine = heapless::String<64>;

#[embassy_executor::task]
pub async fn telemetry_task(
    receiver: Receiver<'static, CriticalSectionRawMutex, TelemetryLine, TELEMETRY_CHANNEL_SIZE>,
) {
    loop {
        let line = receiver.receive().await;
        info!("[TELEMETRY_TASK] {}", line);
    }
}
