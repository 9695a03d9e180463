use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingBufferError {
    #[error("write rejected: the ring has no free slot before the read cursor")]
    Overrun,
    #[error("read rejected: nothing unread between the read and write cursors")]
    Underrun,
}
