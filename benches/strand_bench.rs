//! Criterion benches for the strand geometry passes.

// Criterion's builder API returns `&mut` handles that benches discard.
#![allow(unused_results)]

use criterion::{criterion_group, criterion_main, Criterion, black_box};
use glam::Vec3;
use wisp::buffers::{ControlPoint, StrandBuffers};
use wisp::camera::{Projection, ViewParams};
use wisp::draw::draw_pass;
use wisp::options::ShapeOptions;
use wisp::record::StrandRecord;
use wisp::refine::{refine_at, refine_pass};
use wisp::shape::strand_radius;

/// `count` strands of five control points each, with records and an index
/// map addressing them.
fn strand_field(count: u32) -> (Vec<ControlPoint>, Vec<u32>, Vec<u32>) {
    let mut points = Vec::new();
    let mut records = Vec::new();
    let mut index_map = Vec::new();
    for strand in 0..count {
        let offset = points.len() as u32;
        let root = Vec3::new(strand as f32 * 0.1, 0.0, 0.0);
        for i in 0..5 {
            let t = i as f32 / 4.0;
            points.push(ControlPoint::new(
                root + Vec3::new(t.sin() * 0.2, t * 2.0, t * t * 0.5),
                t,
            ));
            index_map.push(strand);
        }
        records.push(
            StrandRecord {
                offset,
                segment_count: 4,
            }
            .pack(),
        );
    }
    (points, records, index_map)
}

fn shape_benchmark(c: &mut Criterion) {
    let opts = ShapeOptions {
        radius_shape: 0.5,
        ..ShapeOptions::default()
    };
    c.bench_function("shape_radius", |b| {
        b.iter(|| black_box(strand_radius(&opts, black_box(0.5))))
    });
}

fn refine_point_benchmark(c: &mut Criterion) {
    let (points, _, _) = strand_field(1);
    let record = StrandRecord {
        offset: 0,
        segment_count: 4,
    };
    c.bench_function("single_point_refinement", |b| {
        b.iter(|| black_box(refine_at(&points, record, black_box(0.37))))
    });
}

fn refine_pass_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("refine_pass");

    for count in [10, 100, 1000].iter() {
        let (points, records, index_map) = strand_field(*count);
        let buffers = StrandBuffers {
            points: &points,
            records: &records,
            index_map: &index_map,
        };
        group.bench_function(format!("{}_strands", count), |b| {
            b.iter(|| black_box(refine_pass(&buffers, 8)))
        });
    }
    group.finish();
}

fn draw_pass_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_pass");
    let view = ViewParams {
        position: Vec3::new(0.0, 1.0, 10.0),
        forward: Vec3::NEG_Z,
        projection: Projection::Perspective,
    };
    let opts = ShapeOptions {
        thickness_subdivisions: 3,
        ..ShapeOptions::default()
    };

    for count in [10, 100, 1000].iter() {
        let (points, _, _) = strand_field(*count);
        group.bench_function(format!("{}_strands", count), |b| {
            b.iter(|| black_box(draw_pass(&points, &opts, &view)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    shape_benchmark,
    refine_point_benchmark,
    refine_pass_benchmark,
    draw_pass_benchmark
);
criterion_main!(benches);
