//! Library root for the hexapod motion subsystem.
//!
//! Re-exports all main modules: [`kinematics`], [`robot`], and [`tasks`].
//! The radio transport, the servo-bus peripheral and process bootstrap live
//! in the firmware binary; this crate only consumes a stream of raw control
//! frames and a [`robot::servo::ServoBus`] sink.
#![no_std]

pub mod kinematics;
pub mod robot;
pub mod tasks;

pub const FRAME_CHANNEL_SIZE: usize = 4;
pub const TELEMETRY_CHANNEL_SIZE: usize = 4;
