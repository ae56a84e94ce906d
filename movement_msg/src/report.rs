//! Human-readable renderings of the records.

use core::fmt::{self, Write};

use heapless::String;

use crate::{
    command::{MovementCommand, MovementPayload},
    serialize::Packet,
    telemetry::HkTelemetry,
};

/// Three 16-digit words and two separators.
pub const PAYLOAD_HEX_LEN: usize = 3 * 16 + 2;

impl MovementPayload {
    /// Payload as upper-case hex words, one per coordinate, in wire order.
    pub fn to_hex(&self) -> String<PAYLOAD_HEX_LEN> {
        let mut out = String::new();
        let words = [self.target.x, self.target.y, self.target.z];
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                // capacity is exact, the write cannot fail
                let _ = out.push(' ');
            }
            let _ = write!(out, "{:016X}", word.to_bits());
        }
        out
    }
}

impl fmt::Display for MovementCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.target();
        writeln!(f, "=== SENDING MOVEMENT COMMAND ===")?;
        writeln!(
            f,
            "Command: SAMPLE_APP_MOVEMENT_CC (Function Code {})",
            Self::FUNCTION_CODE
        )?;
        writeln!(f, "X Coordinate: {:.6}", target.x)?;
        writeln!(f, "Y Coordinate: {:.6}", target.y)?;
        writeln!(f, "Z Coordinate: {:.6}", target.z)?;
        writeln!(f, "Command Size: {} bytes", <Self as Packet>::SIZE)?;
        writeln!(f, "Payload Size: {} bytes", MovementPayload::SIZE)?;
        write!(f, "Destination MID: {}", Self::MESSAGE_ID)
    }
}

impl fmt::Display for HkTelemetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let current = self.current();
        writeln!(f, "=== TELEMETRY RESPONSE ===")?;
        writeln!(f, "Housekeeping Telemetry from MID {}:", Self::MESSAGE_ID)?;
        writeln!(f, "Command Counter: {}", self.payload.command_counter)?;
        writeln!(f, "Error Counter: {}", self.payload.command_error_counter)?;
        writeln!(f, "Current X: {:.6}", current.x)?;
        writeln!(f, "Current Y: {:.6}", current.y)?;
        writeln!(f, "Current Z: {:.6}", current.z)?;
        write!(f, "Telemetry Size: {} bytes", <Self as Packet>::SIZE)
    }
}
