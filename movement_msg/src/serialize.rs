use heapless::Vec;

use crate::error::SerializeError;

/// Upper bound for every encoded packet.
pub const PACKET_SIZE: usize = 64;

pub type OutputVec = Vec<u8, PACKET_SIZE>;

/// A complete message with a header, as it goes on the wire.
pub trait Packet: Sized {
    /// Encoded size in bytes, header included.
    const SIZE: usize;

    /// Write the packet into the buffer. Returns the number of bytes written.
    fn serialize_info(&self, buf: &mut [u8]) -> Result<usize, SerializeError>;

    /// Read a packet from the start of the buffer. Trailing bytes are ignored.
    fn try_deserialize(buf: &[u8]) -> Result<Self, SerializeError>;
}

/// Encode a packet into a fixed-capacity buffer truncated to the written size.
pub fn write_packet<P: Packet>(packet: &P) -> Result<OutputVec, SerializeError> {
    let mut output_vec = OutputVec::new();
    let _ = output_vec.resize_default(PACKET_SIZE);

    let size = packet.serialize_info(output_vec.as_mut_slice())?;

    output_vec.truncate(size);
    Ok(output_vec)
}

/// Decode a packet from a received buffer.
pub fn parse_packet<P: Packet>(buf: &[u8]) -> Result<P, SerializeError> {
    P::try_deserialize(buf)
}
