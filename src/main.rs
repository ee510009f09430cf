use anyhow::Context;
use ringbyte::config::PumpConfig;
use ringbyte::consumer::ByteConsumer;
use ringbyte::consumer::dispatcher::{Dispatcher, DrainStats};
use ringbyte::ring::{RingBuffer, WriteMode};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tracing::info;

struct CountingConsumer {
    bytes: u64,
}

impl ByteConsumer for CountingConsumer {
    fn consume(&mut self, chunk: &[u8]) -> bool {
        self.bytes += chunk.len() as u64;
        true
    }

    fn flush(&mut self) {
        tracing::trace!(bytes = self.bytes, "counter flushed");
    }

    fn name(&self) -> &str {
        "counter"
    }
}

/// FNV-1a over everything drained so far.
struct ChecksumConsumer {
    hash: u64,
}

impl ChecksumConsumer {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    fn new() -> Self {
        Self { hash: Self::OFFSET }
    }
}

impl ByteConsumer for ChecksumConsumer {
    fn consume(&mut self, chunk: &[u8]) -> bool {
        for &b in chunk {
            self.hash ^= b as u64;
            self.hash = self.hash.wrapping_mul(Self::PRIME);
        }
        true
    }

    fn name(&self) -> &str {
        "checksum"
    }
}

fn load_config() -> anyhow::Result<PumpConfig> {
    match std::env::args().nth(1) {
        Some(path) => PumpConfig::load(&path).with_context(|| format!("loading {path}")),
        None => Ok(PumpConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.as_str().into()),
        )
        .init();

    info!(
        capacity = config.capacity,
        chunk_size = config.chunk_size,
        write_mode = ?config.write_mode,
        "ringbyte pump starting, press Ctrl+C to stop"
    );

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    let mut ring = RingBuffer::new(config.capacity)?;
    let mut dispatcher = Dispatcher::new(config.drain_chunk);
    dispatcher.add_consumer(CountingConsumer { bytes: 0 });
    dispatcher.add_consumer(ChecksumConsumer::new());

    let mut pattern = vec![0u8; config.chunk_size];
    let mut next = 0u8;
    let mut produced = 0u64;
    let mut processed = 0u64;
    let mut totals = DrainStats::default();
    let mut last_report = Instant::now();
    let report_every = Duration::from_secs(config.report_interval_secs);
    let tick = Duration::from_millis(config.tick_millis);

    while running.load(Ordering::SeqCst) {
        for b in pattern.iter_mut() {
            *b = next;
            next = next.wrapping_add(1);
        }
        produced += pattern.len() as u64;
        processed += ring.write(&pattern, config.write_mode) as u64;

        // Drain half the ring per tick so both full and partially full
        // states show up under load.
        totals.absorb(dispatcher.drain_batch(&mut ring, config.capacity / 2 + 1));

        if last_report.elapsed() >= report_every {
            info!(
                produced,
                processed,
                drained = totals.bytes_read,
                ring_used = ring.len(),
                ring_available = ring.available(),
                "status"
            );
            last_report = Instant::now();
        }

        std::thread::sleep(tick);
    }

    totals.absorb(dispatcher.drain(&mut ring));

    let counted = match config.write_mode {
        WriteMode::NoCover => "accepted",
        WriteMode::Cover => "evicted",
    };
    info!(
        produced,
        drained = totals.bytes_read,
        processed,
        counted,
        success_rate = totals.success_rate(),
        "shutting down"
    );
    ring.destroy();
    Ok(())
}
