//! Fuzz target: `FrameDecoder`
//!
//! Drives arbitrary byte sequences into the streaming frame decoder and
//! asserts that it never panics, never yields empty or oversized payloads,
//! and accepts input cleanly after a reset.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use libfuzzer_sys::fuzz_target;
use sensorbridge::bridge::codec::{FrameDecoder, MAX_FRAME_SIZE};

fuzz_target!(|data: &[u8]| {
    let mut decoder = FrameDecoder::new();

    // Feed in the raw bytes (may contain any length prefix, garbage, etc.)
    decoder.push(data);
    while let Some(payload) = decoder.next_frame() {
        assert!(payload.len() <= MAX_FRAME_SIZE, "payload exceeds MAX_FRAME_SIZE");
        assert!(!payload.is_empty(), "decoder must not yield empty payload");
    }

    // After a reset the decoder must accept bytes cleanly again.
    decoder.reset();
    decoder.push(data);
    let _ = decoder.next_frame();
});
