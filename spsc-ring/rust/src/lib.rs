//! Fixed-capacity ring buffer for one producer and one consumer.
//!
//! [`RingBuffer`] keeps `N` slots inline and never allocates. A full ring
//! rejects writes and an empty ring rejects reads. Rejections go to an
//! [`OverrunHandler`] chosen as a type parameter, or come back as
//! [`RingBufferError`] through the `try_` methods.
//!
//! ```
//! use spsc_ring::{handler::Count, RingBuffer};
//!
//! let mut rx = RingBuffer::<u8, 4, Count>::new();
//! for b in *b"ok\n!" {
//!     rx.write_next(b);
//! }
//! assert_eq!(rx.handler().overruns(), 1);
//! assert_eq!(rx.read_next(), b'o');
//! ```

mod error;
pub mod handler;
mod internal;
pub mod ring_buffer;

pub use error::RingBufferError;
pub use handler::{DoNothing, OverrunHandler};
pub use ring_buffer::RingBuffer;
