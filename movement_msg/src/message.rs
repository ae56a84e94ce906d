use core::fmt;
use core::time::Duration;

use byteorder::{ByteOrder, NetworkEndian};

use crate::error::SerializeError;

/// Stream identifier carried in the first two bytes of every packet header.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct MessageId(pub u16);

impl MessageId {
    /// Sample app command stream.
    pub const SAMPLE_APP_CMD: Self = Self(0x1882);
    /// Sample app housekeeping telemetry stream.
    pub const SAMPLE_APP_HK_TLM: Self = Self(0x0883);
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}

/// Command subtype within a command stream.
///
/// Codes are carried as-is, any value decodes.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct FunctionCode(pub u8);

impl FunctionCode {
    /// Move to the target position in the payload.
    pub const MOVEMENT: Self = Self(4);
}

impl fmt::Display for FunctionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Packet timestamp. Subseconds are in units of 1/65536 s.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct MissionTime {
    pub seconds: u32,
    pub subseconds: u16,
}

impl MissionTime {
    pub fn new(seconds: u32, subseconds: u16) -> Self {
        MissionTime {
            seconds,
            subseconds,
        }
    }

    /// Build a timestamp from the time elapsed since the mission epoch.
    /// Seconds past `u32::MAX` wrap.
    pub fn from_duration(elapsed: Duration) -> Self {
        let subseconds = (u64::from(elapsed.subsec_nanos()) << 16) / 1_000_000_000;
        MissionTime {
            seconds: elapsed.as_secs() as u32,
            subseconds: subseconds as u16,
        }
    }
}

/// Cartesian position, no unit or range constraint.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    /// Three consecutive doubles, x then y then z.
    pub const SIZE: usize = 3 * size_of::<f64>();

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Position { x, y, z }
    }

    pub fn serialize_info(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        SerializeError::check_output(buf, Self::SIZE)?;

        NetworkEndian::write_f64(&mut buf[0..8], self.x);
        NetworkEndian::write_f64(&mut buf[8..16], self.y);
        NetworkEndian::write_f64(&mut buf[16..24], self.z);

        Ok(Self::SIZE)
    }

    pub fn try_deserialize(buf: &[u8]) -> Result<Self, SerializeError> {
        SerializeError::check_input(buf, Self::SIZE)?;

        Ok(Position {
            x: NetworkEndian::read_f64(&buf[0..8]),
            y: NetworkEndian::read_f64(&buf[8..16]),
            z: NetworkEndian::read_f64(&buf[16..24]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_time_from_duration() {
        let time = MissionTime::from_duration(Duration::from_millis(12_500));
        assert_eq!(time, MissionTime::new(12, 0x8000));

        let time = MissionTime::from_duration(Duration::from_secs(7));
        assert_eq!(time.subseconds, 0);
    }

    #[test]
    fn position_is_big_endian_doubles() {
        let mut buf = [0u8; Position::SIZE];
        let written = Position::new(1.5, -2.0, 0.0)
            .serialize_info(&mut buf)
            .unwrap();

        assert_eq!(written, 24);
        assert_eq!(&buf[0..8], &[0x3F, 0xF8, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&buf[8..16], &[0xC0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&buf[16..24], &[0u8; 8]);
    }

    #[test]
    fn subseconds_never_overflow() {
        let time = MissionTime::from_duration(Duration::new(1, 999_999_999));
        assert_eq!(time.seconds, 1);
        assert_eq!(time.subseconds, u16::MAX);
    }
}
