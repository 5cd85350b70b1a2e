use criterion::{Criterion, criterion_group, criterion_main};
use splinechart::core::{
    AxisDirection, AxisMapping, AxisRange, DataPoint, DataSet, DataSetOptions, DrawRect,
    InnerPadding, PixelPoint, PointSpace, SetCollection, hit_test_markers, solve_spline,
};
use std::hint::black_box;

fn sample_sets(points_per_set: usize, sets_len: usize) -> SetCollection {
    let mut sets = SetCollection::new();
    for set_index in 0..sets_len {
        let points: Vec<DataPoint> = (0..points_per_set)
            .map(|i| {
                let x = i as f64;
                DataPoint::new(x, (x * 0.01 + set_index as f64).sin() * 100.0)
            })
            .collect();
        sets.prepend(DataSet::new(points, DataSetOptions::default()).expect("valid set"));
    }
    sets
}

fn bench_axis_mapping_round_trip(c: &mut Criterion) {
    let mapping = AxisMapping::new(
        AxisRange::new(0.0, 10_000.0),
        1040.0,
        1000.0,
        AxisDirection::Decreasing,
    )
    .expect("valid mapping");

    c.bench_function("axis_mapping_round_trip", |b| {
        b.iter(|| {
            let px = mapping.to_pixel(black_box(4_321.123));
            let _ = mapping.from_pixel(px);
        })
    });
}

fn bench_point_space_10k(c: &mut Criterion) {
    let sets = sample_sets(10_000, 1);
    let draw_rect = DrawRect::new(40.0, 20.0, 1840.0, 1030.0);

    c.bench_function("point_space_10k", |b| {
        b.iter(|| {
            let _ = PointSpace::compute(
                black_box(&sets),
                black_box(draw_rect),
                InnerPadding::uniform(12.2),
            )
            .expect("projection should succeed");
        })
    });
}

fn bench_spline_10k(c: &mut Criterion) {
    let points: Vec<PixelPoint> = (0..10_000)
        .map(|i| {
            let x = i as f64 * 0.2;
            PixelPoint::new(x, 500.0 + (x * 0.05).sin() * 300.0)
        })
        .collect();

    c.bench_function("spline_10k", |b| {
        b.iter(|| {
            let _ = solve_spline(black_box(&points)).expect("enough points");
        })
    });
}

fn bench_hit_test_miss_4x2k(c: &mut Criterion) {
    let sets = sample_sets(2_000, 4);
    let space = PointSpace::compute(
        &sets,
        DrawRect::new(40.0, 20.0, 1840.0, 1030.0),
        InnerPadding::uniform(12.2),
    )
    .expect("projection should succeed")
    .expect("sets hold points");
    let radii = vec![8.2; space.point_sets.len()];

    c.bench_function("hit_test_miss_4x2k", |b| {
        b.iter(|| {
            let _ = hit_test_markers(
                black_box(PixelPoint::new(-100.0, -100.0)),
                &space.point_sets,
                &radii,
            );
        })
    });
}

criterion_group!(
    benches,
    bench_axis_mapping_round_trip,
    bench_point_space_10k,
    bench_spline_10k,
    bench_hit_test_miss_4x2k
);
criterion_main!(benches);
