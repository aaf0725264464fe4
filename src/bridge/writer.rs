//! Outbound message writer — shared, framed text sends.
//!
//! Both the command interpreter (responses) and the broadcast loop
//! (readings, sync) emit through one writer, so the consumer sees a single
//! uniformly-framed stream and can only tell message types apart by the
//! payload's own `name:value` prefix.

use std::sync::{Arc, Mutex, PoisonError};

use super::codec::encode_frame;
use super::transport::Transport;

/// Cloneable handle to the shared outbound channel.
///
/// Each `send` frames the payload (length header, then bytes) and writes it
/// under the transport lock, so concurrent senders cannot interleave partial
/// frames.
pub struct MessageWriter<T: Transport> {
    transport: Arc<Mutex<T>>,
}

impl<T: Transport> Clone for MessageWriter<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> MessageWriter<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(Mutex::new(transport)),
        }
    }

    /// Frame `payload` and write it to the transport.
    ///
    /// Payloads longer than the maximum frame size are a programming error
    /// on the emitting side; they are dropped with a log entry rather than
    /// sent unframed.
    pub fn send(&self, payload: &str) -> Result<(), T::Error> {
        let Some(frame) = encode_frame(payload.as_bytes()) else {
            log::warn!("dropping unframeable payload ({} bytes)", payload.len());
            return Ok(());
        };
        let mut transport = self
            .transport
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        transport.send(&frame)?;
        transport.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct VecTransport {
        bytes: Vec<u8>,
        flushes: usize,
    }

    impl Transport for &mut VecTransport {
        type Error = ();

        fn send(&mut self, data: &[u8]) -> Result<(), ()> {
            self.bytes.extend_from_slice(data);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), ()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn send_frames_and_flushes() {
        let mut inner = VecTransport {
            bytes: Vec::new(),
            flushes: 0,
        };
        {
            let writer = MessageWriter::new(&mut inner);
            writer.send("temperature:25.000000").unwrap();
        }
        let payload = b"temperature:25.000000";
        assert_eq!(&inner.bytes[..4], &(payload.len() as u32).to_le_bytes());
        assert_eq!(&inner.bytes[4..], payload);
        assert_eq!(inner.flushes, 1);
    }

    #[test]
    fn oversized_payload_is_dropped_not_sent() {
        let mut inner = VecTransport {
            bytes: Vec::new(),
            flushes: 0,
        };
        {
            let writer = MessageWriter::new(&mut inner);
            let huge = "x".repeat(super::super::codec::MAX_FRAME_SIZE + 1);
            writer.send(&huge).unwrap();
        }
        assert!(inner.bytes.is_empty());
    }
}
