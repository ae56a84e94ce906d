use crate::{
    error::SerializeError,
    header::CommandHeader,
    message::{FunctionCode, MessageId, MissionTime, Position},
    serialize::Packet,
};

/// Movement command payload: the target position.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct MovementPayload {
    pub target: Position,
}

impl MovementPayload {
    /// Always 24 bytes, 3 doubles with no padding between them.
    pub const SIZE: usize = Position::SIZE;

    pub fn serialize_info(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        self.target.serialize_info(buf)
    }

    pub fn try_deserialize(buf: &[u8]) -> Result<Self, SerializeError> {
        Ok(MovementPayload {
            target: Position::try_deserialize(buf)?,
        })
    }
}

/// Command asking the sample app to move to a target position.
#[derive(PartialEq, Clone, Copy, Debug, Default)]
pub struct MovementCommand {
    pub header: CommandHeader,
    pub payload: MovementPayload,
}

impl MovementCommand {
    pub const MESSAGE_ID: MessageId = MessageId::SAMPLE_APP_CMD;
    pub const FUNCTION_CODE: FunctionCode = FunctionCode::MOVEMENT;

    /// Create a command with a zeroed header and the coordinates in the payload.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        MovementCommand {
            header: CommandHeader::default(),
            payload: MovementPayload {
                target: Position::new(x, y, z),
            },
        }
    }

    /// Fill the header so the command can be put on the wire.
    pub fn stamped(mut self, sequence: u16, time: MissionTime) -> Self {
        self.header = CommandHeader::new(
            Self::MESSAGE_ID,
            <Self as Packet>::SIZE as u16,
            sequence,
            time,
            Self::FUNCTION_CODE,
        );
        self
    }

    pub fn target(&self) -> Position {
        self.payload.target
    }
}

impl From<Position> for MovementCommand {
    fn from(position: Position) -> Self {
        MovementCommand::new(position.x, position.y, position.z)
    }
}

impl Packet for MovementCommand {
    const SIZE: usize = CommandHeader::SIZE + MovementPayload::SIZE;

    fn serialize_info(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        SerializeError::check_output(buf, Self::SIZE)?;

        let header_size = self.header.serialize_info(&mut buf[..CommandHeader::SIZE])?;
        let payload_size = self.payload.serialize_info(&mut buf[header_size..])?;

        Ok(header_size + payload_size)
    }

    fn try_deserialize(buf: &[u8]) -> Result<Self, SerializeError> {
        SerializeError::check_input(buf, Self::SIZE)?;

        let header = CommandHeader::try_deserialize(buf)?;
        let payload = MovementPayload::try_deserialize(&buf[CommandHeader::SIZE..])?;

        Ok(MovementCommand { header, payload })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse_packet, write_packet};

    #[test]
    fn new_command_is_zero_initialized() {
        let command = MovementCommand::new(1.5, 2.7, 3.9);

        assert_eq!(command.header, CommandHeader::default());
        assert_eq!(command.target(), Position::new(1.5, 2.7, 3.9));
        assert_eq!(MovementPayload::SIZE, 24);
    }

    #[test]
    fn payload_reads_back_negative_and_zero() {
        let command = MovementCommand::new(-10.123, 25.456, 0.0);
        let payload = command.payload.target;

        assert_eq!(payload.x, -10.123);
        assert_eq!(payload.y, 25.456);
        assert_eq!(payload.z, 0.0);
    }

    #[test]
    fn extreme_values_keep_their_bits() {
        let values = [-0.0, f64::MAX, f64::MIN, 5e-324, f64::INFINITY];

        for window in values.windows(3) {
            let command = MovementCommand::new(window[0], window[1], window[2]);
            let buf = write_packet(&command).unwrap();
            let decoded: MovementCommand = parse_packet(&buf).unwrap();

            let target = decoded.target();
            assert_eq!(target.x.to_bits(), window[0].to_bits());
            assert_eq!(target.y.to_bits(), window[1].to_bits());
            assert_eq!(target.z.to_bits(), window[2].to_bits());
        }
    }

    #[test]
    fn stamped_command_on_the_wire() {
        let command =
            MovementCommand::new(1.5, 2.7, 3.9).stamped(1, MissionTime::new(0x0001_0002, 0));
        let buf = write_packet(&command).unwrap();

        assert_eq!(buf.len(), 36);
        // stream id, length, sequence
        assert_eq!(&buf[0..6], &[0x18, 0x82, 0x00, 0x24, 0x00, 0x01]);
        // function code and checksum
        assert_eq!(&buf[10..12], &[0x04, 0x00]);
        // x = 1.5
        assert_eq!(
            &buf[12..20],
            &[0x3F, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );

        let decoded: MovementCommand = parse_packet(&buf).unwrap();
        assert_eq!(decoded, command);
        assert_eq!(decoded.target(), Position::new(1.5, 2.7, 3.9));
    }

    #[test]
    fn decode_keeps_unknown_function_code() {
        let mut command = MovementCommand::new(0.0, 0.0, 0.0);
        command.header.function_code = FunctionCode(0x7F);
        let buf = write_packet(&command).unwrap();

        let decoded: MovementCommand = parse_packet(&buf).unwrap();
        assert_eq!(decoded.header.function_code, FunctionCode(0x7F));
    }

    #[test]
    fn truncated_command_is_rejected() {
        let command = MovementCommand::new(100.0, -50.0, 75.25);
        let buf = write_packet(&command).unwrap();

        assert_eq!(
            MovementCommand::try_deserialize(&buf[..30]),
            Err(SerializeError::NotEnough {
                needed: 36,
                actual: 30
            })
        );
    }
}
