use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use schelling_city::city::City;
use schelling_city::core::types::{OccupantKind, Position};
use schelling_city::entity::Occupant;
use schelling_city::persistence::snapshot::{decode_snapshot, encode_snapshot};

/// A `size` x `size` city with every third cell filled, cycling through kinds
fn crowded_city(size: usize) -> City {
    let mut city = City::new(size);
    for index in (0..size * size).step_by(3) {
        let kind = OccupantKind::ALL[index % OccupantKind::ALL.len()];
        city.place(Occupant::new(kind, Position::new(index / size, index % size)));
    }
    city
}

fn bench_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("city_tick");
    // Grid sizes can be overridden with CITY_BENCH_SIZES=25,100
    let sizes: Vec<usize> = std::env::var("CITY_BENCH_SIZES")
        .ok()
        .map(|s| {
            s.split(',')
                .filter_map(|t| t.trim().parse::<usize>().ok())
                .collect::<Vec<_>>()
        })
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| vec![25_usize, 100, 250]);

    group.bench_function("reference_city", |b| {
        b.iter_batched(City::default, |mut city| city.tick(), BatchSize::SmallInput)
    });
    for &size in &sizes {
        group.bench_function(format!("crowded_{}x{}", size, size), |b| {
            b.iter_batched(
                || crowded_city(size),
                |mut city| city.tick(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let city = crowded_city(100);
    c.bench_function("snapshot_round_trip_100x100", |b| {
        b.iter(|| {
            let bytes = encode_snapshot(&city).expect("encode");
            decode_snapshot(&bytes).expect("decode")
        })
    });
}

criterion_group!(benches, bench_ticks, bench_snapshot);
criterion_main!(benches);
