use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sweeper_core::{route_to, Heading, Memory};
use sweeper_world::Position;

fn open_memory(width: i32, height: i32) -> Memory {
    let mut memory = Memory::new();
    for y in 0..height {
        for x in 0..width {
            let pos = Position::new(x, y);
            memory.record_dust(pos, 0.0);
            for heading in Heading::ALL {
                let next = heading.step(pos);
                if (0..width).contains(&next.x) && (0..height).contains(&next.y) {
                    memory.record_delta(pos, heading, 0);
                }
            }
        }
    }
    memory
}

fn bench_router(c: &mut Criterion) {
    let memory = open_memory(64, 64);
    let start = Position::new(0, 0);
    let goal = Position::new(63, 63);

    let mut group = c.benchmark_group("sweeper-core/router");

    group.bench_function("route_64x64_corner_to_corner", |b| {
        b.iter(|| {
            let path = route_to(&memory, start, goal, 3).expect("route");
            black_box(path.len());
        })
    });

    let near = Position::new(4, 4);
    group.bench_function("route_64x64_short_hop", |b| {
        b.iter(|| {
            let path = route_to(&memory, start, near, 3).expect("route");
            black_box(path.len());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_router);
criterion_main!(benches);
