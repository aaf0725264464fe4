//! SensorBridge library.
//!
//! Bridges a virtual sensor subsystem to an emulated device consumer over a
//! length-framed text message channel. The consumer enables channels and
//! tunes the sampling interval through a small line protocol; a background
//! broadcaster pushes readings for every enabled channel plus a sync
//! timestamp each tick.
//!
//! The crate is transport-agnostic: anything implementing
//! [`bridge::transport::Transport`] can carry the framed messages.

#![deny(unused_must_use)]

pub mod adapters;
pub mod bridge;
pub mod config;
pub mod sensors;
