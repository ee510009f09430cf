use super::ByteConsumer;
use crate::ring::{ReadMode, RingBuffer};
use tracing::{debug, warn};

/// Drains a ring in fixed-size chunks and hands each chunk to every consumer.
pub struct Dispatcher {
    consumers: Vec<Box<dyn ByteConsumer>>,
    chunk: Vec<u8>,
}

impl Dispatcher {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            consumers: Vec::new(),
            chunk: vec![0; chunk_size.max(1)],
        }
    }

    pub fn add_consumer<C: ByteConsumer + 'static>(&mut self, consumer: C) {
        debug!(consumer = consumer.name(), "consumer registered");
        self.consumers.push(Box::new(consumer));
    }

    #[inline]
    pub fn drain(&mut self, ring: &mut RingBuffer) -> DrainStats {
        let stats = self.drain_batch(ring, usize::MAX);
        for consumer in &mut self.consumers {
            consumer.flush();
        }
        stats
    }

    /// Consumes at most `limit` bytes. Consumers are not flushed.
    #[inline]
    pub fn drain_batch(&mut self, ring: &mut RingBuffer, limit: usize) -> DrainStats {
        let mut stats = DrainStats::default();
        let mut remaining = limit;
        while remaining > 0 {
            let want = remaining.min(self.chunk.len());
            let n = ring.read(Some(self.chunk.as_mut_slice()), want, ReadMode::Consume);
            if n == 0 {
                break;
            }
            remaining -= n;
            stats.bytes_read += n as u64;
            stats.chunks_read += 1;

            let chunk = &self.chunk[..n];
            for consumer in &mut self.consumers {
                if consumer.consume(chunk) {
                    stats.chunks_delivered += 1;
                } else {
                    stats.chunks_failed += 1;
                    warn!(consumer = consumer.name(), len = n, "consumer rejected chunk");
                }
            }
        }
        stats
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DrainStats {
    pub bytes_read: u64,
    pub chunks_read: u64,
    pub chunks_delivered: u64,
    pub chunks_failed: u64,
}

impl DrainStats {
    pub fn absorb(&mut self, other: DrainStats) {
        self.bytes_read += other.bytes_read;
        self.chunks_read += other.chunks_read;
        self.chunks_delivered += other.chunks_delivered;
        self.chunks_failed += other.chunks_failed;
    }

    #[inline]
    pub fn success_rate(&self) -> f64 {
        let total = self.chunks_delivered + self.chunks_failed;
        if total == 0 {
            1.0
        } else {
            self.chunks_delivered as f64 / total as f64
        }
    }
}
