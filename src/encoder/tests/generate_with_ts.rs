use super::{decode_digits, seeded_encoder};
use crate::REDUCE_TIME;

/// Omits counter from the first ID of each second
#[test]
fn omits_counter_from_the_first_id_of_each_second() {
    let ts = REDUCE_TIME + 0x1234_5678;
    let mut e = seeded_encoder(0);

    let first = e.generate_with_ts(ts).unwrap();
    assert_eq!(first.chars().count(), 2 + 8);

    let second: Vec<char> = e.generate_with_ts(ts).unwrap().chars().collect();
    assert_eq!(second.len(), 2 + 1 + 8);
    assert_eq!(decode_digits(&e, &second[2..3].iter().collect::<String>()), 1);

    let third: Vec<char> = e.generate_with_ts(ts).unwrap().chars().collect();
    assert_eq!(decode_digits(&e, &third[2..3].iter().collect::<String>()), 2);

    let next_sec = e.generate_with_ts(ts + 1).unwrap();
    assert_eq!(next_sec.chars().count(), 2 + 8);
}

/// Encodes fields least significant digit first
#[test]
fn encodes_fields_least_significant_digit_first() {
    let ts = REDUCE_TIME + 0x0abc_def0;
    let mut e = seeded_encoder(7);
    e.set_worker_id(12).unwrap();

    for _ in 0..17 {
        e.generate_with_ts(ts).unwrap();
    }
    // the 18th ID in the same second carries counter 0x11
    let chars: Vec<char> = e.generate_with_ts(ts).unwrap().chars().collect();
    assert_eq!(chars.len(), 2 + 2 + 7);

    let run = |range: std::ops::Range<usize>| chars[range].iter().collect::<String>();
    assert_eq!(decode_digits(&e, &run(0..1)), crate::VERSION as u64);
    assert_eq!(decode_digits(&e, &run(1..2)), 12);
    assert_eq!(decode_digits(&e, &run(2..4)), 0x11);
    assert_eq!(decode_digits(&e, &run(4..11)), 0x0abc_def0);
}

/// Grows the counter with sustained generation within a second
#[test]
fn grows_the_counter_with_sustained_generation_within_a_second() {
    let ts = REDUCE_TIME + 0x1234_5678;
    let mut e = seeded_encoder(3);

    let mut prev_len = 0;
    for i in 0..300u64 {
        let len = e.generate_with_ts(ts).unwrap().chars().count();
        let counter_len = match i {
            0 => 0,
            1..=15 => 1,
            16..=255 => 2,
            _ => 3,
        };
        assert_eq!(len, 2 + counter_len + 8);
        assert!(len >= prev_len);
        prev_len = len;
    }
}

/// Resets counter when clock moves backwards
#[test]
fn resets_counter_when_clock_moves_backwards() {
    let ts = REDUCE_TIME + 0x1234_5678;
    let mut e = seeded_encoder(0);

    e.generate_with_ts(ts).unwrap();
    e.generate_with_ts(ts).unwrap();
    let x = e.generate_with_ts(ts - 1).unwrap();
    assert_eq!(x.chars().count(), 2 + 8);
    assert_eq!(decode_digits(&e, &x.chars().skip(2).collect::<String>()), 0x1234_5677);
}

/// Encodes timestamps before the epoch offset as zero seconds
#[test]
fn encodes_timestamps_before_the_epoch_offset_as_zero_seconds() {
    let mut e = seeded_encoder(0);

    let x = e.generate_with_ts(0).unwrap();
    assert_eq!(x.chars().count(), 3);
    assert_eq!(decode_digits(&e, &x.chars().skip(2).collect::<String>()), 0);

    // same clamped second, so the counter advances
    let y = e.generate_with_ts(REDUCE_TIME).unwrap();
    assert_eq!(y.chars().count(), 4);
}
