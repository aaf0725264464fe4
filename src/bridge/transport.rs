//! Transport abstraction — any byte-oriented outbound channel.
//!
//! Concrete implementations live with the owning session: a Unix socket, a
//! pipe into the emulated device, an in-memory buffer for tests. The bridge
//! core is generic over `Transport`, so adding a new carrier requires zero
//! changes to the protocol logic.
//!
//! Inbound data is push-based — whoever owns the I/O feeds received bytes
//! into [`SensorsProcessor::feed_bytes`](super::processor::SensorsProcessor::feed_bytes)
//! — so the trait only covers the outbound half.

use core::fmt;

/// Byte-oriented outbound channel.
pub trait Transport {
    /// Error type for this transport.
    type Error: fmt::Debug;

    /// Write all of `data` to the channel.
    fn send(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered output.
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// A null transport that discards all writes.
/// Useful as a default when no consumer is connected.
pub struct NullTransport;

impl Transport for NullTransport {
    type Error = ();

    fn send(&mut self, _data: &[u8]) -> Result<(), ()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}
