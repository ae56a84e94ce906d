use crate::{
    command::MovementCommand,
    error::SerializeError,
    header::TelemetryHeader,
    message::{MessageId, MissionTime, Position},
    serialize::Packet,
};

/// Housekeeping telemetry payload.
/// Total size - 28 bytes.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct HkTelemetryPayload {
    // Rejected commands 1 byte / 0-1
    pub command_error_counter: u8,
    // Accepted commands 1 byte / 1-2
    pub command_counter: u8,
    // Alignment filler 2 bytes / 2-4
    pub spare: [u8; 2],
    // Current position 24 bytes / 4-28
    pub current: Position,
}

impl HkTelemetryPayload {
    pub const SIZE: usize = 4 + Position::SIZE;

    pub fn serialize_info(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        SerializeError::check_output(buf, Self::SIZE)?;

        buf[0] = self.command_error_counter;
        buf[1] = self.command_counter;
        buf[2..4].copy_from_slice(&self.spare);
        let position_size = self.current.serialize_info(&mut buf[4..])?;

        Ok(4 + position_size)
    }

    pub fn try_deserialize(buf: &[u8]) -> Result<Self, SerializeError> {
        SerializeError::check_input(buf, Self::SIZE)?;

        Ok(HkTelemetryPayload {
            command_error_counter: buf[0],
            command_counter: buf[1],
            spare: [buf[2], buf[3]],
            current: Position::try_deserialize(&buf[4..])?,
        })
    }
}

/// Housekeeping telemetry reported by the sample app.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct HkTelemetry {
    pub header: TelemetryHeader,
    pub payload: HkTelemetryPayload,
}

impl HkTelemetry {
    pub const MESSAGE_ID: MessageId = MessageId::SAMPLE_APP_HK_TLM;

    /// Counter values reported after a single accepted command.
    pub const ACCEPTED_COMMANDS: u8 = 1;
    pub const REJECTED_COMMANDS: u8 = 0;

    /// Create telemetry reporting the given position as current.
    ///
    /// The position is an echo of the commanded one, nothing is simulated.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        HkTelemetry {
            header: TelemetryHeader::default(),
            payload: HkTelemetryPayload {
                command_error_counter: Self::REJECTED_COMMANDS,
                command_counter: Self::ACCEPTED_COMMANDS,
                spare: [0u8; 2],
                current: Position::new(x, y, z),
            },
        }
    }

    /// Telemetry answering a movement command.
    pub fn echo(command: &MovementCommand) -> Self {
        let target = command.target();
        Self::new(target.x, target.y, target.z)
    }

    /// Fill the header so the telemetry can be put on the wire.
    pub fn stamped(mut self, sequence: u16, time: MissionTime) -> Self {
        self.header = TelemetryHeader::new(
            Self::MESSAGE_ID,
            <Self as Packet>::SIZE as u16,
            sequence,
            time,
        );
        self
    }

    pub fn current(&self) -> Position {
        self.payload.current
    }
}

impl Packet for HkTelemetry {
    const SIZE: usize = TelemetryHeader::SIZE + HkTelemetryPayload::SIZE;

    fn serialize_info(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        SerializeError::check_output(buf, Self::SIZE)?;

        let header_size = self
            .header
            .serialize_info(&mut buf[..TelemetryHeader::SIZE])?;
        let payload_size = self.payload.serialize_info(&mut buf[header_size..])?;

        Ok(header_size + payload_size)
    }

    fn try_deserialize(buf: &[u8]) -> Result<Self, SerializeError> {
        SerializeError::check_input(buf, Self::SIZE)?;

        let header = TelemetryHeader::try_deserialize(buf)?;
        let payload = HkTelemetryPayload::try_deserialize(&buf[TelemetryHeader::SIZE..])?;

        Ok(HkTelemetry { header, payload })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_packet, write_packet};

    #[test]
    fn new_telemetry_has_fixed_counters() {
        let telemetry = HkTelemetry::new(1.5, 2.7, 3.9);

        assert_eq!(telemetry.payload.command_counter, 1);
        assert_eq!(telemetry.payload.command_error_counter, 0);
        assert_eq!(telemetry.payload.spare, [0u8; 2]);
        assert_eq!(telemetry.current(), Position::new(1.5, 2.7, 3.9));
    }

    #[test]
    fn echo_reports_commanded_position() {
        let command = MovementCommand::new(-10.123, 25.456, 0.0);
        let telemetry = HkTelemetry::echo(&command);

        assert_eq!(telemetry.current(), command.target());
        assert_eq!(telemetry.payload.command_counter, 1);
        assert_eq!(telemetry.payload.command_error_counter, 0);
    }

    #[test]
    fn payload_starts_after_sixteen_byte_header() {
        let telemetry =
            HkTelemetry::new(1.5, 2.7, 3.9).stamped(3, MissionTime::new(1_700_000_000, 0));
        let buf = write_packet(&telemetry).unwrap();

        assert_eq!(buf.len(), 44);
        assert_eq!(&buf[0..4], &[0x08, 0x83, 0x00, 0x2C]);
        // error counter, command counter, spare
        assert_eq!(&buf[16..20], &[0x00, 0x01, 0x00, 0x00]);
        // x = 1.5
        assert_eq!(&buf[20..22], &[0x3F, 0xF8]);

        let decoded: HkTelemetry = parse_packet(&buf).unwrap();
        assert_eq!(decoded, telemetry);
    }

    #[test]
    fn extreme_values_keep_their_bits() {
        let telemetry = HkTelemetry::new(-0.0, f64::MIN, 5e-324);
        let buf = write_packet(&telemetry).unwrap();
        let decoded: HkTelemetry = parse_packet(&buf).unwrap();

        let current = decoded.current();
        assert_eq!(current.x.to_bits(), (-0.0f64).to_bits());
        assert_eq!(current.y.to_bits(), f64::MIN.to_bits());
        assert_eq!(current.z.to_bits(), 5e-324f64.to_bits());
    }

    #[test]
    fn spare_bytes_are_carried_verbatim() {
        let mut telemetry = HkTelemetry::new(0.0, 0.0, 0.0);
        telemetry.payload.spare = [0xDE, 0xAD];
        let buf = write_packet(&telemetry).unwrap();

        let decoded: HkTelemetry = parse_packet(&buf).unwrap();
        assert_eq!(decoded.payload.spare, [0xDE, 0xAD]);
    }

    #[test]
    fn short_output_buffer() {
        let telemetry = HkTelemetry::new(100.0, -50.0, 75.25);
        let mut buf = [0u8; 40];

        assert_eq!(
            telemetry.serialize_info(&mut buf),
            Err(SerializeError::BufferTooSmall {
                needed: 44,
                actual: 40
            })
        );
    }
}
