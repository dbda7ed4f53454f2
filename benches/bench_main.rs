use criterion::{Criterion, black_box, criterion_group, criterion_main};
use geo::Point;
use wayfinder::prelude::*;

/// Square lattice of streets with uniform speed limits.
fn lattice_map(side: usize) -> RoadMap {
    let mut map = RoadMap::new();
    for row in 0..side {
        for col in 0..side {
            map.add_node(
                format!("n{row}x{col}"),
                Point::new(row as f64 * 100.0, col as f64 * 100.0),
            )
            .unwrap();
        }
    }
    for row in 0..side {
        for col in 0..side {
            if row + 1 < side {
                map.add_edge(
                    &format!("n{row}x{col}"),
                    &format!("n{}x{col}", row + 1),
                    "EastWest",
                    50.0,
                    EdgeDirection::TwoWay,
                )
                .unwrap();
            }
            if col + 1 < side {
                map.add_edge(
                    &format!("n{row}x{col}"),
                    &format!("n{row}x{}", col + 1),
                    "NorthSouth",
                    50.0,
                    EdgeDirection::TwoWay,
                )
                .unwrap();
            }
        }
    }
    map
}

fn bench_astar(c: &mut Criterion) {
    let side = 40;
    let mut map = lattice_map(side);
    map.set_goal(&format!("n{0}x{0}", side - 1)).unwrap();

    c.bench_function("astar_lattice_corner_to_corner", |b| {
        b.iter(|| {
            let path = map.route(black_box("n0x0")).unwrap();
            assert!(path.found());
            path
        });
    });
}

fn bench_viewport(c: &mut Criterion) {
    let map = lattice_map(40);
    let region = geo::Rect::new((500.0, 500.0), (1700.0, 1400.0));

    c.bench_function("viewport_nodes_in_region", |b| {
        b.iter(|| map.nodes_in_region(black_box(&region)));
    });
}

criterion_group!(benches, bench_astar, bench_viewport);
criterion_main!(benches);
