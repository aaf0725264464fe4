//! Fuzz target: `Command::parse`
//!
//! Throws arbitrary lines at the command classifier and checks it is total:
//! every input maps to exactly one form without panicking.
//!
//! cargo fuzz run fuzz_command

#![no_main]

use libfuzzer_sys::fuzz_target;
use sensorbridge::bridge::command::Command;

fuzz_target!(|line: &str| {
    match Command::parse(line) {
        Command::ListSensors => assert_eq!(line, "list-sensors"),
        Command::SetDelay(_) => assert!(line.starts_with("set-delay:")),
        Command::SetChannel { .. } => assert!(line.starts_with("set:")),
        Command::Unknown(raw) => assert_eq!(raw, line),
    }
});
