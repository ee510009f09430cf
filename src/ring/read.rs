use super::{ReadMode, RingBuffer};

impl RingBuffer {
    /// Reads up to `maxlen` of the oldest bytes.
    ///
    /// Bytes are copied into `sink` when one is given, and the count is capped
    /// at the sink's length. Without a sink a [`ReadMode::Consume`] read simply
    /// discards bytes. [`ReadMode::Peek`] leaves the cursors alone.
    ///
    /// Both modes clear the dirty flag when they produce at least one byte, so
    /// a peek acknowledges pending data just like a consuming read does.
    pub fn read(&mut self, sink: Option<&mut [u8]>, maxlen: usize, mode: ReadMode) -> usize {
        let limit = sink.as_ref().map_or(maxlen, |out| maxlen.min(out.len()));
        let produced = limit.min(self.occupied);
        if produced == 0 {
            return 0;
        }

        if let Some(out) = sink {
            self.copy_out(self.read_cursor, &mut out[..produced]);
        }

        if mode == ReadMode::Consume {
            self.read_cursor = self.wrap(self.read_cursor + produced);
            self.occupied -= produced;
        }

        self.dirty = false;
        produced
    }

    /// Fills as much of `out` as the unread bytes allow.
    #[inline]
    pub fn read_into(&mut self, out: &mut [u8], mode: ReadMode) -> usize {
        let maxlen = out.len();
        self.read(Some(out), maxlen, mode)
    }

    /// Drops up to `n` of the oldest bytes.
    #[inline]
    pub fn skip(&mut self, n: usize) -> usize {
        self.read(None, n, ReadMode::Consume)
    }
}
