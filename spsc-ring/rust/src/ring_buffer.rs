use std::{
    fmt::{self, Debug, Formatter},
    ops::{Index, IndexMut},
    slice,
};

use crate::{
    error::RingBufferError,
    handler::{DoNothing, OverrunHandler},
    internal::AssertCapacity,
};

type Result<T> = std::result::Result<T, RingBufferError>;

/// Fixed-size single-producer/single-consumer ring over `N` inline slots.
///
/// Two cursors track the ring: `last_write` is the slot most recently written
/// and `last_read` the slot most recently returned by a read. Both start at
/// slot 0. The buffer is empty when they coincide and full when the slot after
/// `last_write` is `last_read`. One slot always separates writer from reader,
/// so at most `N - 1` elements are held at once.
///
/// Rejected writes and reads never touch the buffer. They invoke the handler
/// `H` instead, see [`OverrunHandler`].
///
/// A ring needs more than two slots. Smaller sizes are rejected when the type
/// is instantiated:
///
/// ```compile_fail
/// use spsc_ring::RingBuffer;
///
/// let _ = RingBuffer::<u8, 2>::new();
/// ```
///
/// ```
/// use spsc_ring::RingBuffer;
///
/// let rb = RingBuffer::<u8, 3>::new();
/// assert_eq!(rb.capacity(), 3);
/// ```
pub struct RingBuffer<T, const N: usize, H = DoNothing> {
    storage: [T; N],
    last_write: usize,
    last_read: usize,
    handler: H,
}

impl<T: Default, const N: usize, H: OverrunHandler + Default> RingBuffer<T, N, H> {
    pub fn new() -> Self {
        Self::with_handler(H::default())
    }

    /// Seeds every slot from `values`. The buffer still starts out empty.
    pub fn from_array(values: [T; N]) -> Self {
        Self::from_array_with_handler(values, H::default())
    }
}

impl<T: Default, const N: usize, H: OverrunHandler> RingBuffer<T, N, H> {
    pub fn with_handler(handler: H) -> Self {
        Self::from_array_with_handler(std::array::from_fn(|_| T::default()), handler)
    }
}

impl<T, const N: usize, H: OverrunHandler> RingBuffer<T, N, H> {
    /// Number of slots, including the separator.
    pub const SIZE: usize = N;
    /// Number of elements the ring can hold at once.
    pub const USABLE: usize = N - 1;

    pub fn from_array_with_handler(values: [T; N], handler: H) -> Self {
        let () = AssertCapacity::<N>::VALID;

        Self {
            storage: values,
            last_write: 0,
            last_read: 0,
            handler,
        }
    }

    /// Stores `value` in the slot after the last write, or calls
    /// [`OverrunHandler::overrun`] and drops `value` if the ring is full.
    #[inline]
    pub fn write_next(&mut self, value: T) {
        if self.try_write(value).is_err() {
            self.handler.overrun();
        }
    }

    /// Like [`write_next`](Self::write_next) but reports a full ring as an
    /// error rather than through the handler.
    #[inline]
    pub fn try_write(&mut self, value: T) -> Result<()> {
        let slot = self.next_write_slot();
        if slot == self.last_read {
            return Err(RingBufferError::Overrun);
        }

        self.last_write = slot;
        self.storage[slot] = value;
        Ok(())
    }

    #[inline]
    pub fn next_write_slot(&self) -> usize {
        (self.last_write + 1) % N
    }

    #[inline]
    pub fn next_read_slot(&self) -> usize {
        (self.last_read + 1) % N
    }

    #[inline]
    pub fn last_write_slot(&self) -> usize {
        self.last_write
    }

    #[inline]
    pub fn last_read_slot(&self) -> usize {
        self.last_read
    }

    #[inline]
    pub fn len(&self) -> usize {
        (self.last_write + N - self.last_read) % N
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.last_read == self.last_write
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.next_write_slot() == self.last_read
    }

    /// Always `N`. Only `N - 1` slots can be occupied at once.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Raw storage in slot order, independent of the cursors.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

impl<T: Clone + Default, const N: usize, H: OverrunHandler> RingBuffer<T, N, H> {
    /// Returns the oldest unread element, or calls [`OverrunHandler::underrun`]
    /// and returns `T::default()` if there is none.
    ///
    /// The slot keeps its value until the writer laps it.
    #[inline]
    pub fn read_next(&mut self) -> T {
        match self.try_read() {
            Ok(value) => value,
            Err(_) => {
                self.handler.underrun();
                T::default()
            }
        }
    }
}

impl<T: Clone, const N: usize, H: OverrunHandler> RingBuffer<T, N, H> {
    #[inline]
    pub fn try_read(&mut self) -> Result<T> {
        let slot = self.next_read_slot();
        if slot == self.next_write_slot() {
            return Err(RingBufferError::Underrun);
        }

        self.last_read = slot;
        Ok(self.storage[slot].clone())
    }

    /// Reads until the ring is empty. Stopping at empty is not an underrun.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        std::iter::from_fn(move || self.try_read().ok())
    }
}

impl<T: Default, const N: usize, H: OverrunHandler + Default> Default for RingBuffer<T, N, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize, H: OverrunHandler + Default> From<[T; N]> for RingBuffer<T, N, H> {
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T: Clone, const N: usize, H: Clone> Clone for RingBuffer<T, N, H> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            last_write: self.last_write,
            last_read: self.last_read,
            handler: self.handler.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.storage.clone_from(&source.storage);
        self.last_write = source.last_write;
        self.last_read = source.last_read;
        self.handler.clone_from(&source.handler);
    }
}

impl<T, const N: usize, H> Index<usize> for RingBuffer<T, N, H> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T, const N: usize, H> IndexMut<usize> for RingBuffer<T, N, H> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage[index]
    }
}

impl<T: Debug, const N: usize, H> Debug for RingBuffer<T, N, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("storage", &self.storage)
            .field("last_read", &self.last_read)
            .field("last_write", &self.last_write)
            .finish_non_exhaustive()
    }
}
