use super::RingError;
use tracing::debug;

/// What a write does once the buffer is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Reject bytes that do not fit; the write returns how many were accepted.
    NoCover,
    /// Evict the oldest bytes to make room; the write returns how many were evicted.
    Cover,
}

/// Whether a read consumes the bytes it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    Consume,
    Peek,
}

/// Fixed-capacity byte queue.
///
/// The unread bytes start at `read_cursor` and run for `occupied` bytes,
/// wrapping at `capacity`, so `write_cursor == (read_cursor + occupied) % capacity`
/// holds after every operation.
#[derive(Debug)]
pub struct RingBuffer {
    pub(crate) buf: Vec<u8>,
    pub(crate) capacity: usize,
    pub(crate) read_cursor: usize,
    pub(crate) write_cursor: usize,
    pub(crate) occupied: usize,
    pub(crate) dirty: bool,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Result<Self, RingError> {
        if capacity == 0 {
            return Err(RingError::InvalidCapacity {
                capacity,
                reason: "must be greater than zero",
            });
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(capacity)
            .map_err(|source| RingError::Allocation { capacity, source })?;
        buf.resize(capacity, 0);

        debug!(capacity, "ring buffer created");

        Ok(Self {
            buf,
            capacity,
            read_cursor: 0,
            write_cursor: 0,
            occupied: 0,
            dirty: false,
        })
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.occupied == self.capacity
    }

    /// Number of unread bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[inline(always)]
    pub fn available(&self) -> usize {
        self.capacity - self.occupied
    }

    /// True when bytes were written since the last read that produced anything.
    ///
    /// Peeks count as reads here: a peek that produces at least one byte
    /// clears the flag even though nothing was consumed.
    #[inline(always)]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Forgets all unread bytes. Storage is left as is.
    pub fn reset(&mut self) {
        self.read_cursor = 0;
        self.write_cursor = 0;
        self.occupied = 0;
        self.dirty = false;
        debug!(capacity = self.capacity, "ring buffer reset");
    }

    /// Releases the backing store.
    ///
    /// Taking `self` by value means a buffer can only be destroyed once; an
    /// absent buffer is an `Option::None` and needs no call at all.
    pub fn destroy(self) {
        debug!(capacity = self.capacity, discarded = self.occupied, "ring buffer destroyed");
    }

    /// Unread bytes in logical order as up to two slices. The second slice is
    /// empty unless the data wraps.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        if self.occupied == 0 {
            return (&[], &[]);
        }
        let contiguous = self.capacity - self.read_cursor;
        if self.occupied <= contiguous {
            (
                &self.buf[self.read_cursor..self.read_cursor + self.occupied],
                &[],
            )
        } else {
            (
                &self.buf[self.read_cursor..],
                &self.buf[..self.occupied - contiguous],
            )
        }
    }

    #[inline(always)]
    pub(crate) fn wrap(&self, pos: usize) -> usize {
        pos % self.capacity
    }

    /// Copies `src` into storage starting at `pos`, wrapping once.
    /// `src.len()` must not exceed `capacity`.
    pub(crate) fn copy_in(&mut self, pos: usize, src: &[u8]) {
        debug_assert!(src.len() <= self.capacity);
        let contiguous = self.capacity - pos;
        if src.len() <= contiguous {
            self.buf[pos..pos + src.len()].copy_from_slice(src);
        } else {
            let (head, tail) = src.split_at(contiguous);
            self.buf[pos..].copy_from_slice(head);
            self.buf[..tail.len()].copy_from_slice(tail);
        }
    }

    /// Fills `dst` from storage starting at `pos`, wrapping once.
    pub(crate) fn copy_out(&self, pos: usize, dst: &mut [u8]) {
        debug_assert!(dst.len() <= self.capacity);
        let contiguous = self.capacity - pos;
        if dst.len() <= contiguous {
            dst.copy_from_slice(&self.buf[pos..pos + dst.len()]);
        } else {
            let (head, tail) = dst.split_at_mut(contiguous);
            head.copy_from_slice(&self.buf[pos..]);
            tail.copy_from_slice(&self.buf[..tail.len()]);
        }
    }
}
