use criterion::{Criterion, black_box, criterion_group, criterion_main};
use focus_indicator::smoother::PositionSmoother;
use focus_indicator::{DetachedNode, FocusIndicator, SurfaceAnchorId, TrackingState};
use glam::Vec3;

fn jittered(i: usize) -> Vec3 {
    let t = i as f32;
    Vec3::new(0.01 * (t * 1.3).sin(), -0.5, -1.0 + 0.01 * (t * 0.7).cos())
}

fn bench_smoother_update(c: &mut Criterion) {
    let inputs: Vec<Vec3> = (0..1000).map(jittered).collect();
    c.bench_function("smoother_update_1000", |b| {
        b.iter(|| {
            let mut smoother = PositionSmoother::default();
            for p in &inputs {
                black_box(smoother.update(black_box(*p)));
            }
        })
    });
}

fn bench_state_stream(c: &mut Criterion) {
    let states: Vec<TrackingState> = (0..1000)
        .map(|i| match i % 7 {
            0 => TrackingState::NoFix,
            1 | 2 => TrackingState::point(jittered(i), None),
            _ => TrackingState::surface(jittered(i), SurfaceAnchorId((i % 5) as u64), None),
        })
        .collect();
    c.bench_function("set_state_1000", |b| {
        b.iter(|| {
            let mut indicator = FocusIndicator::new(DetachedNode::default());
            for s in &states {
                black_box(indicator.set_state(*s));
            }
        })
    });
}

criterion_group!(benches, bench_smoother_update, bench_state_stream);
criterion_main!(benches);
