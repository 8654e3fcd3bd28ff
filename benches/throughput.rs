use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eol2eol::{convert_stream, Eol, LineBuffer};
use std::time::Duration;

/// Generate buffers with a few different patterns:
/// - "random": pseudo-random bytes (deterministic LCG)
/// - "all_lf": all newline bytes
/// - "all_cr": all CR bytes
/// - "crlf": repeating CRLF sequences
/// - "mixed": intermittent lone CRs and LFs
/// - "prose": 60-byte lines ending in CRLF
fn make_buffer(size: usize, pattern: &str) -> Vec<u8> {
    let mut v = vec![0u8; size];
    match pattern {
        "random" => {
            // simple LCG to avoid extra deps
            let mut state: u64 = 0x12345678;
            for b in &mut v[..] {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                *b = (state & 0xFF) as u8;
            }
        }
        "all_lf" => v.fill(b'\n'),
        "all_cr" => v.fill(b'\r'),
        "crlf" => {
            for (i, b) in v.iter_mut().enumerate() {
                *b = if i % 2 == 0 { b'\r' } else { b'\n' };
            }
        }
        "mixed" => {
            for (i, b) in v.iter_mut().enumerate() {
                *b = match i % 7 {
                    0 => b'\r',
                    1 => b'\n',
                    2 => b'a',
                    _ => b'b',
                }
            }
        }
        "prose" => {
            for (i, b) in v.iter_mut().enumerate() {
                *b = match i % 62 {
                    60 => b'\r',
                    61 => b'\n',
                    _ => b'x',
                }
            }
        }
        _ => {}
    }
    v
}

fn bench_throughput(c: &mut Criterion) {
    for eol in Eol::ALL {
        let mut group = c.benchmark_group(format!("to_{eol}"));
        // Longer measurement to get stable GB/s numbers
        group.measurement_time(Duration::from_secs(3));
        group.sample_size(10);

        let sizes = [8 << 10, 1 << 20]; // 8KiB, 1MiB
        let patterns = ["random", "all_lf", "all_cr", "crlf", "mixed", "prose"];

        for &size in &sizes {
            for &pattern in &patterns {
                let buf = make_buffer(size, pattern);
                let id = BenchmarkId::new(pattern, size);
                group.throughput(Throughput::Bytes(size as u64));
                group.bench_with_input(id, &buf, |b, data| {
                    // allocate once, outside the measured loop
                    let mut out = Vec::with_capacity(data.len() * 2 + 8);
                    let mut line = LineBuffer::new();
                    b.iter(|| {
                        out.clear();
                        let lines = convert_stream(&data[..], &mut out, eol, &mut line).unwrap();
                        std::hint::black_box(lines);
                    })
                });
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
