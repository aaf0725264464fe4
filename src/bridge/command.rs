//! Inbound command forms understood by the bridge.
//!
//! One inbound line maps to exactly one [`Command`]. Matching is
//! exact-prefix, longest/most specific first:
//!
//! 1. `list-sensors` — exact match,
//! 2. `set-delay:<integer>` — decimal-integer scan of the remainder,
//! 3. `set:<name>:<flag>` — three-part split on `:`,
//! 4. anything else — [`Command::Unknown`].
//!
//! The order matters: `set-delay:5` must hit rule 2, never the three-part
//! split (it only has two parts, so rule 3 could not apply anyway), and a
//! `set-delay:` line whose integer scan fails falls all the way through to
//! `Unknown`.

/// A parsed inbound line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Query the advertised channel mask.
    ListSensors,
    /// Replace the broadcast interval (milliseconds).
    SetDelay(i64),
    /// Enable (`enable == true`) or disable one channel by name.
    SetChannel { name: &'a str, enable: bool },
    /// No recognized form matched.
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Classify one inbound line.
    pub fn parse(line: &'a str) -> Command<'a> {
        if line == "list-sensors" {
            return Self::ListSensors;
        }

        if let Some(rest) = line.strip_prefix("set-delay:") {
            if let Some(millis) = scan_decimal(rest) {
                return Self::SetDelay(millis);
            }
        }

        let mut parts = line.split(':');
        if let (Some("set"), Some(name), Some(flag), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        {
            // Only the literal "1" enables; any other flag disables.
            return Self::SetChannel {
                name,
                enable: flag == "1",
            };
        }

        Self::Unknown(line)
    }
}

/// Standard decimal-integer scan: optional leading whitespace, optional
/// sign, at least one digit; trailing input is ignored.
fn scan_decimal(input: &str) -> Option<i64> {
    let input = input.trim_start();
    let (negative, rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
