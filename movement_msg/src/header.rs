use byteorder::{ByteOrder, NetworkEndian};

use crate::{
    error::SerializeError,
    message::{FunctionCode, MessageId, MissionTime},
};

/// Command packet header.
/// Total size - 12 bytes, no padding.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct CommandHeader {
    // Stream ID 2 bytes / 0-2
    pub stream_id: MessageId,
    // Whole packet length 2 bytes / 2-4
    pub length: u16,
    // Sequence count 2 bytes / 4-6
    pub sequence: u16,
    // Low 16 bits of the mission seconds 2 bytes / 6-8
    pub seconds: u16,
    // Subseconds 2 bytes / 8-10
    pub subseconds: u16,
    // Function code 1 byte / 10-11
    pub function_code: FunctionCode,
    // Checksum 1 byte / 11-12
    pub checksum: u8,
}

impl CommandHeader {
    pub const SIZE: usize = 12;

    pub fn new(
        stream_id: MessageId,
        length: u16,
        sequence: u16,
        time: MissionTime,
        function_code: FunctionCode,
    ) -> Self {
        CommandHeader {
            stream_id,
            length,
            sequence,
            seconds: time.seconds as u16,
            subseconds: time.subseconds,
            function_code,
            checksum: 0,
        }
    }

    pub fn serialize_info(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        SerializeError::check_output(buf, Self::SIZE)?;

        NetworkEndian::write_u16(&mut buf[0..2], self.stream_id.0);
        NetworkEndian::write_u16(&mut buf[2..4], self.length);
        NetworkEndian::write_u16(&mut buf[4..6], self.sequence);
        NetworkEndian::write_u16(&mut buf[6..8], self.seconds);
        NetworkEndian::write_u16(&mut buf[8..10], self.subseconds);
        buf[10] = self.function_code.0;
        buf[11] = self.checksum;

        Ok(Self::SIZE)
    }

    pub fn try_deserialize(buf: &[u8]) -> Result<Self, SerializeError> {
        SerializeError::check_input(buf, Self::SIZE)?;

        Ok(CommandHeader {
            stream_id: MessageId(NetworkEndian::read_u16(&buf[0..2])),
            length: NetworkEndian::read_u16(&buf[2..4]),
            sequence: NetworkEndian::read_u16(&buf[4..6]),
            seconds: NetworkEndian::read_u16(&buf[6..8]),
            subseconds: NetworkEndian::read_u16(&buf[8..10]),
            function_code: FunctionCode(buf[10]),
            checksum: buf[11],
        })
    }
}

/// Telemetry packet header.
/// Total size - 16 bytes, the last 4 are spare so the payload starts at offset 16.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct TelemetryHeader {
    // Stream ID 2 bytes / 0-2
    pub stream_id: MessageId,
    // Whole packet length 2 bytes / 2-4
    pub length: u16,
    // Sequence count 2 bytes / 4-6
    pub sequence: u16,
    // Mission time 6 bytes / 6-12
    pub time: MissionTime,
    // Spare 4 bytes / 12-16
    pub spare: [u8; 4],
}

impl TelemetryHeader {
    pub const SIZE: usize = 16;

    pub fn new(stream_id: MessageId, length: u16, sequence: u16, time: MissionTime) -> Self {
        TelemetryHeader {
            stream_id,
            length,
            sequence,
            time,
            spare: [0u8; 4],
        }
    }

    pub fn serialize_info(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        SerializeError::check_output(buf, Self::SIZE)?;

        NetworkEndian::write_u16(&mut buf[0..2], self.stream_id.0);
        NetworkEndian::write_u16(&mut buf[2..4], self.length);
        NetworkEndian::write_u16(&mut buf[4..6], self.sequence);
        NetworkEndian::write_u32(&mut buf[6..10], self.time.seconds);
        NetworkEndian::write_u16(&mut buf[10..12], self.time.subseconds);
        buf[12..16].copy_from_slice(&self.spare);

        Ok(Self::SIZE)
    }

    pub fn try_deserialize(buf: &[u8]) -> Result<Self, SerializeError> {
        SerializeError::check_input(buf, Self::SIZE)?;

        let mut spare = [0u8; 4];
        spare.copy_from_slice(&buf[12..16]);

        Ok(TelemetryHeader {
            stream_id: MessageId(NetworkEndian::read_u16(&buf[0..2])),
            length: NetworkEndian::read_u16(&buf[2..4]),
            sequence: NetworkEndian::read_u16(&buf[4..6]),
            time: MissionTime::new(
                NetworkEndian::read_u32(&buf[6..10]),
                NetworkEndian::read_u16(&buf[10..12]),
            ),
            spare,
        })
    }
}
