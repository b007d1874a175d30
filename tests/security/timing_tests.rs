//! Coarse guards against early-exit tag comparison.
//!
//! These compare medians of interleaved batches. An early-exit comparison
//! over the large inputs used here differs by orders of magnitude between
//! first-byte and last-byte mismatches, so the generous ratio bound still
//! catches a regression without flaking on a busy machine.

use authutil::security::{check_mac, constant_time_eq, generate_mac};
use std::hint::black_box;
use std::time::{Duration, Instant};

const ROUNDS: usize = 41;
const MAX_RATIO: f64 = 2.0;

fn median(mut samples: Vec<Duration>) -> Duration {
    samples.sort_unstable();
    samples[samples.len() / 2]
}

fn time_batch(iterations: usize, mut f: impl FnMut() -> bool) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        black_box(f());
    }
    start.elapsed()
}

fn ratio(a: Duration, b: Duration) -> f64 {
    let (a, b) = (a.as_secs_f64(), b.as_secs_f64());
    a.max(b) / a.min(b).max(f64::MIN_POSITIVE)
}

#[test]
fn constant_time_eq_ignores_mismatch_position() {
    const LEN: usize = 1 << 14;
    let expected = vec![0x5au8; LEN];
    let mut first = expected.clone();
    first[0] ^= 0xff;
    let mut last = expected.clone();
    last[LEN - 1] ^= 0xff;

    let mut first_samples = Vec::with_capacity(ROUNDS);
    let mut last_samples = Vec::with_capacity(ROUNDS);
    for _ in 0..ROUNDS {
        first_samples.push(time_batch(16, || {
            constant_time_eq(black_box(&expected), black_box(&first))
        }));
        last_samples.push(time_batch(16, || {
            constant_time_eq(black_box(&expected), black_box(&last))
        }));
    }

    let (first_median, last_median) = (median(first_samples), median(last_samples));
    let r = ratio(first_median, last_median);
    assert!(
        r < MAX_RATIO,
        "first-byte mismatch {first_median:?} vs last-byte mismatch {last_median:?} (ratio {r:.2})"
    );
}

#[test]
fn check_mac_ignores_mismatch_position() {
    let message = vec![0x42u8; 1024];
    let key = b"timing key";
    let good = *generate_mac(&message, key).as_bytes();

    let mut first = good;
    first[0] = if first[0] == b'0' { b'1' } else { b'0' };
    let mut last = good;
    last[63] = if last[63] == b'0' { b'1' } else { b'0' };

    let mut first_samples = Vec::with_capacity(ROUNDS);
    let mut last_samples = Vec::with_capacity(ROUNDS);
    for _ in 0..ROUNDS {
        first_samples.push(time_batch(200, || {
            check_mac(black_box(&message), black_box(&first), key)
        }));
        last_samples.push(time_batch(200, || {
            check_mac(black_box(&message), black_box(&last), key)
        }));
    }

    let (first_median, last_median) = (median(first_samples), median(last_samples));
    let r = ratio(first_median, last_median);
    assert!(
        r < MAX_RATIO,
        "first-byte mismatch {first_median:?} vs last-byte mismatch {last_median:?} (ratio {r:.2})"
    );
}
