use movement_msg::{
    command::MovementCommand,
    error::SerializeError,
    message::{MessageId, MissionTime, Position},
    parse_packet,
    telemetry::HkTelemetry,
    write_packet, OutputVec,
};
use thiserror::Error;
use tracing::instrument;

pub type Result<T> = core::result::Result<T, Error>;

/// Sequence bookkeeping for one run of the demo.
///
/// Both counters are pre-incremented, so the first packet of each stream
/// carries sequence 1.
#[derive(Debug, Default)]
pub struct Session {
    command_sequence: u16,
    telemetry_sequence: u16,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] SerializeError),
    #[error("Unexpected message id {actual}, expected {expected}")]
    UnexpectedMessage {
        expected: MessageId,
        actual: MessageId,
    },
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn command_sequence(&self) -> u16 {
        self.command_sequence
    }

    pub fn telemetry_sequence(&self) -> u16 {
        self.telemetry_sequence
    }

    /// Build a movement command for the target and encode it.
    #[instrument(skip_all, fields(x = target.x, y = target.y, z = target.z))]
    pub fn movement_command(
        &mut self,
        target: Position,
        time: MissionTime,
    ) -> Result<(MovementCommand, OutputVec)> {
        self.command_sequence = self.command_sequence.wrapping_add(1);

        let command = MovementCommand::from(target).stamped(self.command_sequence, time);
        let packet = write_packet(&command)?;

        log::debug!(
            "Encoded command seq {} into {} bytes",
            self.command_sequence,
            packet.len()
        );
        Ok((command, packet))
    }

    /// Build the housekeeping telemetry answering a command and encode it.
    #[instrument(skip_all, fields(seq = command.header.sequence))]
    pub fn telemetry_response(
        &mut self,
        command: &MovementCommand,
        time: MissionTime,
    ) -> Result<(HkTelemetry, OutputVec)> {
        self.telemetry_sequence = self.telemetry_sequence.wrapping_add(1);

        let telemetry = HkTelemetry::echo(command).stamped(self.telemetry_sequence, time);
        let packet = write_packet(&telemetry)?;

        log::debug!(
            "Encoded telemetry seq {} into {} bytes",
            self.telemetry_sequence,
            packet.len()
        );
        Ok((telemetry, packet))
    }
}

/// Decode a movement command. The stream id must be the command MID.
pub fn parse_command(buf: &[u8]) -> Result<MovementCommand> {
    let command: MovementCommand = parse_packet(buf)?;
    expect_message(MovementCommand::MESSAGE_ID, command.header.stream_id)?;
    Ok(command)
}

/// Decode housekeeping telemetry. The stream id must be the telemetry MID.
pub fn parse_telemetry(buf: &[u8]) -> Result<HkTelemetry> {
    let telemetry: HkTelemetry = parse_packet(buf)?;
    expect_message(HkTelemetry::MESSAGE_ID, telemetry.header.stream_id)?;
    Ok(telemetry)
}

fn expect_message(expected: MessageId, actual: MessageId) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        log::warn!("Received unexpected message id: {}", actual);
        Err(Error::UnexpectedMessage { expected, actual })
    }
}
