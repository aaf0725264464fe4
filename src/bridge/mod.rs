//! The bridge core — command protocol plus periodic broadcaster.
//!
//! ```text
//!  framed bytes ──▶ codec ──▶ command ──▶ ┌────────────────────┐
//!                                         │  SensorsProcessor  │──▶ writer ──▶ Transport
//!  SensorSource ─────────────────────────▶│  (broadcast loop)  │
//!                                         └────────────────────┘
//! ```
//!
//! The processor owns the protocol state machine and a dedicated broadcast
//! thread; everything else is a seam ([`transport::Transport`],
//! [`ports::SensorSource`], [`ports::DiagnosticSink`]).

pub mod codec;
pub mod command;
pub mod ports;
pub mod processor;
pub mod transport;
pub mod writer;
