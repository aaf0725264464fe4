//! Property tests for robustness of the protocol surfaces.

use proptest::prelude::*;

use sensorbridge::bridge::codec::{FrameDecoder, MAX_FRAME_SIZE, encode_frame};
use sensorbridge::bridge::command::Command;
use sensorbridge::sensors::SensorKind;

// ── Command parser ────────────────────────────────────────────

proptest! {
    /// Any line classifies without panicking, and a classification implies
    /// the structural facts it encodes.
    #[test]
    fn parser_total_and_consistent(line in ".{0,128}") {
        match Command::parse(&line) {
            Command::ListSensors => prop_assert_eq!(line.as_str(), "list-sensors"),
            Command::SetDelay(_) => prop_assert!(line.starts_with("set-delay:")),
            Command::SetChannel { name, .. } => {
                prop_assert!(line.starts_with("set:"));
                prop_assert!(!name.contains(':'));
            }
            Command::Unknown(raw) => prop_assert_eq!(raw, line.as_str()),
        }
    }

    /// Every scanned delay value round-trips through its canonical decimal
    /// rendering.
    #[test]
    fn set_delay_parses_canonical_integers(millis in -1_000_000i64..=1_000_000i64) {
        let line = format!("set-delay:{millis}");
        prop_assert_eq!(
            Command::parse(&line),
            Command::SetDelay(millis)
        );
    }
}

// ── Mask algebra ──────────────────────────────────────────────

fn arb_kind() -> impl Strategy<Value = SensorKind> {
    prop::sample::select(SensorKind::ALL.to_vec())
}

proptest! {
    /// Arbitrary enable/disable sequences keep the mask inside the known
    /// universe and agree with a fold over the same operations.
    #[test]
    fn mask_churn_matches_model(ops in prop::collection::vec((arb_kind(), any::<bool>()), 0..64)) {
        let mut mask = 0u32;
        for (kind, enable) in &ops {
            if *enable {
                mask |= kind.mask();
            } else {
                mask &= !kind.mask();
            }
            prop_assert_eq!(mask & !SensorKind::full_mask(), 0);
        }
        // Disabling everything always returns to zero.
        for kind in SensorKind::ALL {
            mask &= !kind.mask();
        }
        prop_assert_eq!(mask, 0);
    }
}

// ── Frame codec ───────────────────────────────────────────────

proptest! {
    /// Encoded frames survive arbitrary chunk boundaries and come back out
    /// byte-identical, in order.
    #[test]
    fn decoder_reassembles_chunked_frames(
        payloads in prop::collection::vec(prop::collection::vec(any::<u8>(), 1..64), 1..8),
        chunk_size in 1usize..32,
    ) {
        let mut stream = Vec::new();
        for payload in &payloads {
            stream.extend_from_slice(&encode_frame(payload).unwrap());
        }

        let mut decoder = FrameDecoder::new();
        let mut decoded = Vec::new();
        for chunk in stream.chunks(chunk_size) {
            decoder.push(chunk);
            while let Some(frame) = decoder.next_frame() {
                decoded.push(frame);
            }
        }
        prop_assert_eq!(decoded, payloads);
    }

    /// Arbitrary garbage never panics the decoder and never yields an
    /// empty or oversized frame.
    #[test]
    fn decoder_survives_arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut decoder = FrameDecoder::new();
        decoder.push(&data);
        while let Some(frame) = decoder.next_frame() {
            prop_assert!(!frame.is_empty());
            prop_assert!(frame.len() <= MAX_FRAME_SIZE);
        }
    }
}
