use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{Rng, SeedableRng};

use huffpack::code::build_code_table;
use huffpack::codec::encode_to_bit_string;
use huffpack::frequency::FrequencyTable;
use huffpack::tree::build_huffman_tree;

fn sample_data(len: usize) -> Vec<u8> {
    // Skewed distribution so the tree has uneven depths.
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            let roll: f64 = rng.gen();
            if roll < 0.6 {
                rng.gen_range(b'a'..=b'f')
            } else {
                rng.gen()
            }
        })
        .collect()
}

fn bench_tree_build(c: &mut Criterion) {
    let data = sample_data(64 * 1024);
    let freqs = FrequencyTable::from_bytes(&data);
    c.bench_function("build_huffman_tree", |b| {
        b.iter(|| build_huffman_tree(black_box(&freqs)).unwrap().unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let data = sample_data(64 * 1024);
    let freqs = FrequencyTable::from_bytes(&data);
    let tree = build_huffman_tree(&freqs).unwrap().unwrap();
    let codes = build_code_table(&tree);

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("encode_to_bit_string", |b| {
        b.iter(|| encode_to_bit_string(black_box(&data), &codes))
    });
    group.finish();
}

criterion_group!(benches, bench_tree_build, bench_encode);
criterion_main!(benches);
