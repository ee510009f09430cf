use ringbyte::ring::{ReadMode, RingBuffer, WriteMode};

#[test]
fn overwrite_scenario_on_four_byte_ring() {
    let mut ring = RingBuffer::new(4).expect("ring");

    assert_eq!(ring.write(&[1, 2, 3, 4, 5], WriteMode::NoCover), 4);
    assert!(ring.is_full());

    assert_eq!(ring.write(&[9], WriteMode::Cover), 1);

    let mut peeked = [0u8; 4];
    assert_eq!(ring.read_into(&mut peeked, ReadMode::Peek), 4);
    assert_eq!(peeked, [2, 3, 4, 9]);

    let mut out = [0u8; 2];
    assert_eq!(ring.read_into(&mut out, ReadMode::Consume), 2);
    assert_eq!(out, [2, 3]);
    assert_eq!(ring.len(), 2);
    assert_eq!(ring.available(), 2);
}

#[test]
fn cover_keeps_last_capacity_bytes_across_many_writes() {
    let mut ring = RingBuffer::new(16).expect("ring");
    let mut evicted = 0;
    let mut written = Vec::new();

    for round in 0u8..10 {
        let chunk: Vec<u8> = (0..7).map(|i| round * 7 + i).collect();
        evicted += ring.write(&chunk, WriteMode::Cover);
        written.extend_from_slice(&chunk);
    }

    assert_eq!(evicted, written.len() - 16);
    let mut out = [0u8; 16];
    assert_eq!(ring.read_into(&mut out, ReadMode::Consume), 16);
    assert_eq!(&out[..], &written[written.len() - 16..]);
    assert!(ring.is_empty());
}

#[test]
fn streaming_through_small_ring_preserves_order() {
    let mut ring = RingBuffer::new(7).expect("ring");
    let input: Vec<u8> = (0..=255).collect();
    let mut output = Vec::new();
    let mut pending = &input[..];
    let mut scratch = [0u8; 3];

    while !pending.is_empty() || !ring.is_empty() {
        let accepted = ring.write(pending, WriteMode::NoCover);
        pending = &pending[accepted..];
        let n = ring.read_into(&mut scratch, ReadMode::Consume);
        output.extend_from_slice(&scratch[..n]);
    }

    assert_eq!(output, input);
}

#[test]
fn peek_does_not_consume_but_acknowledges() {
    let mut ring = RingBuffer::new(8).expect("ring");
    ring.write(b"abc", WriteMode::NoCover);
    assert!(ring.is_dirty());

    let mut first = [0u8; 2];
    let mut second = [0u8; 2];
    ring.read_into(&mut first, ReadMode::Peek);
    ring.read_into(&mut second, ReadMode::Peek);

    assert_eq!(first, second);
    assert_eq!(ring.len(), 3);
    assert!(!ring.is_dirty());
}
