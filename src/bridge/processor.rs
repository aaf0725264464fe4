//! The sensors message processor — command state machine plus the periodic
//! broadcast loop.
//!
//! Construction spawns one dedicated broadcast thread per processor; it
//! runs even before any command arrives (emitting nothing until a channel
//! is enabled). Commands are dispatched one at a time from whatever context
//! delivers inbound transport data, mutating the same shared config the
//! broadcast thread reads. Teardown signals the thread and joins it, so no
//! detached execution outlives the processor.
//!
//! The three shared fields (enabled mask, interval, run flag) are each
//! independently atomic; a command touching two of them may be observed by
//! the broadcaster as two separate updates. Update frequency is low and
//! every field is idempotent, so joint consistency is not needed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU32, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{debug, error, warn};

use crate::config::BridgeConfig;
use crate::sensors::SensorKind;

use super::codec::FrameDecoder;
use super::command::Command;
use super::ports::{DiagnosticSink, SensorSource};
use super::transport::Transport;
use super::writer::MessageWriter;

/// Shared mutable configuration, one instance per processor.
struct Shared {
    /// Bitmask of channels currently enabled by the consumer.
    enabled: AtomicU32,
    /// Inter-tick delay in milliseconds. Signed: the protocol accepts any
    /// integer; values below zero sleep zero.
    interval_ms: AtomicI64,
    /// Cleared exactly once, at teardown.
    running: AtomicBool,
}

/// Bridges the virtual sensor subsystem to one connected consumer.
pub struct SensorsProcessor<T: Transport> {
    writer: MessageWriter<T>,
    shared: Arc<Shared>,
    source: Arc<dyn SensorSource>,
    diagnostics: Arc<dyn DiagnosticSink>,
    decoder: FrameDecoder,
    broadcaster: Option<JoinHandle<()>>,
}

impl<T: Transport + Send + 'static> SensorsProcessor<T> {
    /// Construct the processor and start its broadcast thread.
    pub fn new(
        transport: T,
        source: Arc<dyn SensorSource>,
        diagnostics: Arc<dyn DiagnosticSink>,
        config: &BridgeConfig,
    ) -> Self {
        let writer = MessageWriter::new(transport);
        let shared = Arc::new(Shared {
            enabled: AtomicU32::new(0),
            interval_ms: AtomicI64::new(i64::from(config.broadcast_interval_ms)),
            running: AtomicBool::new(true),
        });

        let broadcaster = {
            let writer = writer.clone();
            let shared = Arc::clone(&shared);
            let source = Arc::clone(&source);
            thread::Builder::new()
                .name("sensor-broadcast".into())
                .spawn(move || broadcast_loop(&writer, &shared, source.as_ref()))
                .expect("sensor-broadcast: thread creation failed")
        };

        Self {
            writer,
            shared,
            source,
            diagnostics,
            decoder: FrameDecoder::new(),
            broadcaster: Some(broadcaster),
        }
    }
}

impl<T: Transport> SensorsProcessor<T> {
    /// Feed raw framed bytes from the inbound channel.
    ///
    /// Every complete frame decodes to one command line. Frames that are
    /// not valid UTF-8 cannot match any command form and go to the
    /// diagnostic sink.
    pub fn feed_bytes(&mut self, data: &[u8]) -> Result<(), T::Error> {
        self.decoder.push(data);
        while let Some(frame) = self.decoder.next_frame() {
            match core::str::from_utf8(&frame) {
                Ok(line) => self.handle_command(line)?,
                Err(_) => {
                    self.diagnostics
                        .unknown_command(&String::from_utf8_lossy(&frame));
                }
            }
        }
        Ok(())
    }

    /// Dispatch one inbound command line.
    ///
    /// Only `list-sensors` produces a response; the `set` forms mutate
    /// shared state silently and unrecognized lines go to the diagnostic
    /// sink. The only error source is the transport on the response path.
    pub fn handle_command(&self, line: &str) -> Result<(), T::Error> {
        match Command::parse(line) {
            Command::ListSensors => {
                let advertised = SensorKind::full_mask() & !self.source.disabled_mask();
                self.writer.send(&advertised.to_string())
            }
            Command::SetDelay(millis) => {
                self.shared.interval_ms.store(millis, Ordering::Release);
                Ok(())
            }
            Command::SetChannel { name, enable } => {
                // Unknown names resolve to an empty mask: a harmless no-op.
                let bit = SensorKind::from_protocol_name(name).map_or(0, SensorKind::mask);
                if enable {
                    self.shared.enabled.fetch_or(bit, Ordering::AcqRel);
                } else {
                    self.shared.enabled.fetch_and(!bit, Ordering::AcqRel);
                }
                Ok(())
            }
            Command::Unknown(raw) => {
                self.diagnostics.unknown_command(raw);
                Ok(())
            }
        }
    }

    /// Signal the broadcast thread to stop and join it.
    ///
    /// Returns once the thread has finished its current tick; bounded by
    /// one tick plus one interval. Idempotent.
    pub fn stop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Some(handle) = self.broadcaster.take() {
            if handle.join().is_err() {
                warn!("sensor-broadcast: thread panicked before join");
            }
        }
    }

    /// Currently enabled channel mask. Primarily for tests and
    /// introspection; the protocol itself never reads it back.
    pub fn enabled_mask(&self) -> u32 {
        self.shared.enabled.load(Ordering::Acquire)
    }

    /// Current inter-tick interval in milliseconds.
    pub fn interval_ms(&self) -> i64 {
        self.shared.interval_ms.load(Ordering::Acquire)
    }
}

impl<T: Transport> Drop for SensorsProcessor<T> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// One broadcast pass: send a reading for every enabled channel in
/// declaration order, then (if anything was enabled) the sync timestamp.
///
/// The mask is sampled once by the caller, so one tick's decisions are
/// consistent even while commands churn the shared mask.
pub fn broadcast_tick<T: Transport>(
    writer: &MessageWriter<T>,
    source: &dyn SensorSource,
    enabled: u32,
) -> Result<(), T::Error> {
    for kind in SensorKind::ALL {
        if enabled & kind.mask() != 0 {
            writer.send(&format!("{}:{}", kind.report_name(), source.read(kind)))?;
        }
    }
    if enabled != 0 {
        writer.send(&format!("sync:{}", timestamp_micros()))?;
    }
    Ok(())
}

fn broadcast_loop<T: Transport>(
    writer: &MessageWriter<T>,
    shared: &Shared,
    source: &dyn SensorSource,
) {
    debug!("sensor-broadcast: loop started");
    loop {
        let enabled = shared.enabled.load(Ordering::Acquire);
        if let Err(e) = broadcast_tick(writer, source, enabled) {
            // A dead transport invalidates the processor; the owning
            // session observes the channel failure on its side.
            error!("sensor-broadcast: send failed, stopping: {e:?}");
            break;
        }
        if !shared.running.load(Ordering::Acquire) {
            break;
        }
        let delay = shared.interval_ms.load(Ordering::Acquire).max(0) as u64;
        thread::sleep(Duration::from_millis(delay));
    }
    debug!("sensor-broadcast: loop stopped");
}

/// Wall-clock time as whole microseconds since the Unix epoch.
fn timestamp_micros() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_micros()
}
