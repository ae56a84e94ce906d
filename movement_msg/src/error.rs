use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SerializeError {
    #[error("Buffer too small: {needed} bytes required, {actual} available")]
    BufferTooSmall { needed: usize, actual: usize },
    #[error("Not enough data to decode: {needed} bytes required, {actual} received")]
    NotEnough { needed: usize, actual: usize },
}

impl SerializeError {
    pub(crate) fn check_output(buf: &[u8], needed: usize) -> Result<(), Self> {
        if buf.len() < needed {
            Err(SerializeError::BufferTooSmall {
                needed,
                actual: buf.len(),
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn check_input(buf: &[u8], needed: usize) -> Result<(), Self> {
        if buf.len() < needed {
            Err(SerializeError::NotEnough {
                needed,
                actual: buf.len(),
            })
        } else {
            Ok(())
        }
    }
}
