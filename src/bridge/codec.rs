//! Length-prefix frame codec.
//!
//! Wire format:
//! ```text
//! ┌────────────┬──────────────────────────┐
//! │ Length (4B)│ text payload (N bytes)   │
//! │ LE u32     │                          │
//! └────────────┴──────────────────────────┘
//! ```
//!
//! The decoder accumulates incoming bytes and yields complete frames. A
//! single transport read may deliver part of the header, part of the
//! payload, or several frames concatenated; all of these decode correctly.

use std::collections::VecDeque;

/// Maximum frame payload size (protects against memory exhaustion).
pub const MAX_FRAME_SIZE: usize = 4096;

/// Frame header size (4-byte little-endian length).
const HEADER_SIZE: usize = 4;

/// Decoder state machine.
enum DecoderState {
    /// Waiting for header bytes.
    ReadingHeader,
    /// Header received, reading payload.
    ReadingPayload { expected: usize },
}

/// Streaming frame decoder.
pub struct FrameDecoder {
    state: DecoderState,
    buf: VecDeque<u8>,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self {
            state: DecoderState::ReadingHeader,
            buf: VecDeque::new(),
        }
    }

    /// Append raw transport bytes to the decode buffer.
    pub fn push(&mut self, data: &[u8]) {
        self.buf.extend(data);
    }

    /// Pop the next complete frame payload, if one is buffered.
    ///
    /// Call in a loop after [`push`](Self::push): one chunk may carry any
    /// number of frames. A header announcing a zero-length or oversized
    /// payload is dropped and decoding resumes at the following byte
    /// position.
    pub fn next_frame(&mut self) -> Option<Vec<u8>> {
        loop {
            match self.state {
                DecoderState::ReadingHeader => {
                    if self.buf.len() < HEADER_SIZE {
                        return None;
                    }
                    let mut header = [0u8; HEADER_SIZE];
                    for b in &mut header {
                        *b = self.buf.pop_front()?;
                    }
                    let expected = u32::from_le_bytes(header) as usize;
                    if expected == 0 || expected > MAX_FRAME_SIZE {
                        // Invalid frame — stay in header state.
                        continue;
                    }
                    self.state = DecoderState::ReadingPayload { expected };
                }

                DecoderState::ReadingPayload { expected } => {
                    if self.buf.len() < expected {
                        return None;
                    }
                    let payload: Vec<u8> = self.buf.drain(..expected).collect();
                    self.state = DecoderState::ReadingHeader;
                    return Some(payload);
                }
            }
        }
    }

    /// Reset decoder state (e.g. after a transport reconnect).
    pub fn reset(&mut self) {
        self.state = DecoderState::ReadingHeader;
        self.buf.clear();
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a payload into a length-prefixed frame.
///
/// Returns `None` if the payload exceeds [`MAX_FRAME_SIZE`].
pub fn encode_frame(payload: &[u8]) -> Option<Vec<u8>> {
    if payload.is_empty() || payload.len() > MAX_FRAME_SIZE {
        return None;
    }
    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    Some(out)
}
