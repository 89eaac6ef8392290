use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use motel_booking::{
    available_rooms, generate_catalog, FacilityConfig, InMemoryReservationStore, Reservation,
};
use rand::{seq::SliceRandom, thread_rng, Rng};

// Benchmark for the availability computation over a populated store
pub fn availability_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("room_availability");

    // Benchmark with different numbers of stored reservations
    for reservation_count in [0usize, 64, 512].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(reservation_count),
            reservation_count,
            |b, &reservation_count| {
                let config = FacilityConfig::default();
                let catalog = generate_catalog(&config);
                let window_start = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
                let window_end = Utc.with_ymd_and_hms(2025, 6, 30, 0, 0, 0).unwrap();

                // Seed stays that fall fully inside the queried window so
                // every one of them counts against occupancy
                let mut rng = thread_rng();
                let reservations = (0..reservation_count)
                    .map(|i| {
                        let start_day = rng.gen_range(1..=27);
                        let end_day = rng.gen_range(start_day + 1..=28);
                        let room_count = rng.gen_range(1..=3);
                        let rooms = catalog
                            .choose_multiple(&mut rng, room_count)
                            .copied()
                            .collect();
                        Reservation {
                            id: i as u64 + 1,
                            guest_id: i as u64 + 1,
                            rooms,
                            start_date: Utc
                                .with_ymd_and_hms(2025, 6, start_day, 0, 0, 0)
                                .unwrap(),
                            end_date: Utc.with_ymd_and_hms(2025, 6, end_day, 0, 0, 0).unwrap(),
                        }
                    })
                    .collect();
                let store = InMemoryReservationStore::with_reservations(reservations);

                b.iter(|| {
                    black_box(available_rooms(
                        &config,
                        &store,
                        window_start,
                        window_end,
                        false,
                        false,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, availability_benchmark);
criterion_main!(benches);
