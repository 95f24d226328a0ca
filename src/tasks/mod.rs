//! Asynchronous tasks for hexapod operation.
//!
//! This module contains the Embassy tasks of the runtime:
//! - [`radio_task`]: Decodes raw control frames and publishes the latest
//!   command (robot side).
//! - [`motion_task`]: Drives the gait engine from the latest command
//!   (robot side).
//! - [`remote_task`]: Samples operator input, encodes and transmits frames,
//!   and logs telemetry (remote side).
//!
//! Tasks are spawned from the firmware binary and communicate via Embassy
//! channels and signals.
pub mod motion_task;
pub mod radio_task;
pub mod remote_task;
