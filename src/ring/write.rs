use super::{RingBuffer, WriteMode};
use tracing::trace;

impl RingBuffer {
    /// Appends `data` according to `mode`.
    ///
    /// The return value depends on the mode: [`WriteMode::NoCover`] returns the
    /// number of bytes accepted (anything past the free space is dropped), while
    /// [`WriteMode::Cover`] accepts everything and returns the number of old
    /// bytes it evicted. Any write that processes a byte marks the buffer dirty.
    #[inline]
    pub fn write(&mut self, data: &[u8], mode: WriteMode) -> usize {
        match mode {
            WriteMode::NoCover => self.write_no_cover(data),
            WriteMode::Cover => self.write_cover(data),
        }
    }

    fn write_no_cover(&mut self, data: &[u8]) -> usize {
        let accepted = data.len().min(self.available());
        if accepted == 0 {
            return 0;
        }

        self.copy_in(self.write_cursor, &data[..accepted]);
        self.write_cursor = self.wrap(self.write_cursor + accepted);
        self.occupied += accepted;
        self.dirty = true;
        accepted
    }

    fn write_cover(&mut self, data: &[u8]) -> usize {
        let len = data.len();
        if len == 0 {
            return 0;
        }

        let evicted = len.saturating_sub(self.available());

        // Only the last `capacity` bytes can survive; earlier ones would be
        // overwritten within this same call.
        let skipped = len.saturating_sub(self.capacity);
        let kept = &data[skipped..];
        let start = self.wrap(self.write_cursor + self.wrap(skipped));

        self.copy_in(start, kept);
        self.write_cursor = self.wrap(start + kept.len());

        if evicted > 0 {
            self.occupied = self.capacity;
            self.read_cursor = self.write_cursor;
            trace!(evicted, capacity = self.capacity, "cover write evicted oldest bytes");
        } else {
            self.occupied += len;
        }

        self.dirty = true;
        evicted
    }
}
