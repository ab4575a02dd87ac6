use ringstat::prelude::*;
use ringstat::rings::{find_rings, remove_composites};
use ringstat::stats::ring_area;

const BOND: f64 = 1.42;

/// Honeycomb on a periodic `nx` x `ny` grid of rectangular 4-atom cells.
fn honeycomb(nx: usize, ny: usize, l: f64) -> (Graph, Lattice) {
    let w = 3f64.sqrt() * l;
    let h = 3.0 * l;
    let basis = [(0.0, 0.0), (w / 2.0, l / 2.0), (w / 2.0, 1.5 * l), (0.0, 2.0 * l)];
    let lattice = Lattice::new(w * nx as f64, h * ny as f64);
    let mut g = Graph::new();
    for i in 0..nx {
        for j in 0..ny {
            for (bx, by) in basis {
                g.add_vertex("C", bx + w * i as f64, by + h * j as f64, 0.0);
            }
        }
    }
    for a in 0..g.len() {
        for b in (a + 1)..g.len() {
            let d = lattice.displacement(g[a].position(), g[b].position());
            if d.length() < 1.1 * l {
                g.add_edge(a, b).unwrap();
            }
        }
    }
    (g, lattice)
}

fn run(g: &mut Graph, lattice: &Lattice) -> Report {
    analyze(g, &RingSettings::default(), lattice).unwrap()
}

#[test]
fn honeycomb_has_only_hexagons() {
    let (mut g, lattice) = honeycomb(6, 4, BOND);
    assert_eq!(g.len(), 96);
    assert_eq!(g.edge_count(), 144);
    let report = run(&mut g, &lattice);

    assert_eq!(report.rings.len(), 48);
    assert_eq!(report.histogram.count(6), 48);
    assert_eq!(report.histogram.total(), report.rings.len());
    assert_eq!(report.second_moment().unwrap(), 0.0);

    let hexagon = 1.5 * 3f64.sqrt() * BOND * BOND;
    for ring in &report.rings {
        assert!(
            (ring.area - hexagon).abs() < 0.01 * hexagon,
            "ring {:?} has area {}",
            ring.members,
            ring.area
        );
    }
    assert!((report.bonds.mean - BOND).abs() < 1e-9);
    assert!(report.bonds.std_dev() < 1e-6);
}

#[test]
fn honeycomb_aboav_is_flat() {
    let (mut g, lattice) = honeycomb(6, 4, BOND);
    let report = run(&mut g, &lattice);
    let rows: Vec<_> = report.aboav.rows().collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].size, 6);
    assert_eq!(rows[0].rings, 48);
    assert!((rows[0].mean_neighbor_size - 6.0).abs() < 1e-12);
    assert!(report.aboav.fit().is_none());
}

#[test]
fn ordered_rings_walk_along_bonds() {
    let (mut g, lattice) = honeycomb(6, 4, BOND);
    let report = run(&mut g, &lattice);
    for ring in &report.rings {
        let m = &ring.members;
        assert_eq!(m[0], *m.iter().min().unwrap());
        assert!(m[1] < m[m.len() - 1]);
        for i in 0..m.len() {
            assert!(g.has_edge(m[i], m[(i + 1) % m.len()]));
        }
    }
}

#[test]
fn straddling_ring_matches_translated_ring() {
    let lattice = Lattice::new(20.0, 20.0);
    let hex: Vec<(f64, f64)> = (0..6)
        .map(|k| {
            let t = std::f64::consts::FRAC_PI_3 * k as f64;
            (BOND * t.cos(), BOND * t.sin())
        })
        .collect();
    let build = |cx: f64, cy: f64| {
        let mut g = Graph::new();
        for &(x, y) in &hex {
            g.add_vertex("Si", (cx + x).rem_euclid(20.0), (cy + y).rem_euclid(20.0), 0.0);
        }
        for i in 0..6 {
            g.add_edge(i, (i + 1) % 6).unwrap();
        }
        g
    };
    let inside = build(10.0, 10.0);
    let straddling = build(0.2, 19.9);
    let order: Vec<_> = (0..6).collect();
    let a = ring_area(&inside, &order, &lattice);
    let b = ring_area(&straddling, &order, &lattice);
    assert!((a - b).abs() < 0.01 * a, "{a} vs {b}");

    let mut straddling = straddling;
    let report = run(&mut straddling, &lattice);
    assert_eq!(report.rings.len(), 1);
    assert!((report.rings[0].area - a).abs() < 0.01 * a);
}

/// Octagon 0..8 split by the chord 0-4 into two pentagons.
fn split_octagon() -> Graph {
    let mut g = Graph::new();
    for k in 0..8 {
        let t = std::f64::consts::FRAC_PI_4 * k as f64;
        g.add_vertex("Si", t.cos(), t.sin(), 0.0);
    }
    for i in 0..8 {
        g.add_edge(i, (i + 1) % 8).unwrap();
    }
    g.add_edge(0, 4).unwrap();
    g
}

fn sizes(report: &Report) -> Vec<usize> {
    let mut s: Vec<_> = report.rings.iter().map(|r| r.size()).collect();
    s.sort();
    s
}

#[test]
fn composite_octagon_is_filtered() {
    let mut g = split_octagon();
    let report = run(&mut g, &Lattice::OPEN);
    assert_eq!(report.removed, 1);
    assert_eq!(sizes(&report), vec![5, 5]);
}

#[test]
fn rerun_after_removing_a_bond() {
    let mut g = split_octagon();
    assert_eq!(sizes(&run(&mut g, &Lattice::OPEN)), vec![5, 5]);

    assert!(g.remove_edge(4, 0));
    let report = run(&mut g, &Lattice::OPEN);
    assert_eq!(sizes(&report), vec![8]);
    assert_eq!(report.removed, 0);
    for v in g.vertices() {
        assert_eq!(v.rings().len(), 1);
    }

    assert!(g.remove_edge(2, 3));
    let report = run(&mut g, &Lattice::OPEN);
    assert!(report.rings.is_empty());
    assert!(g.vertices().iter().all(|v| v.rings().is_empty()));
}

#[test]
fn removed_bond_never_appears_in_a_ring() {
    let (mut g, lattice) = honeycomb(6, 4, BOND);
    let (a, b) = g.edges().nth(10).unwrap();
    g.remove_edge(a, b);
    let report = run(&mut g, &lattice);
    assert!(report.rings.len() < 48);
    for ring in &report.rings {
        let m = &ring.members;
        for i in 0..m.len() {
            let (x, y) = (m[i], m[(i + 1) % m.len()]);
            assert!((x, y) != (a, b) && (x, y) != (b, a));
        }
    }
}

#[test]
fn filter_is_a_fixed_point() {
    let mut g = split_octagon();
    let settings = RingSettings::default();
    let mut set = find_rings(&g, &settings);
    set.attach(&mut g);
    remove_composites(&g, &mut set, &settings);
    let once: Vec<Ring> = set.iter().map(|(_, r)| r.clone()).collect();
    set.reattach(&mut g);
    assert_eq!(remove_composites(&g, &mut set, &settings), 0);
    let twice: Vec<Ring> = set.iter().map(|(_, r)| r.clone()).collect();
    assert_eq!(once, twice);
}

#[test]
fn reruns_are_independent() {
    let (mut g, lattice) = honeycomb(6, 4, BOND);
    let first = run(&mut g, &lattice);
    let second = run(&mut g, &lattice);
    assert_eq!(first.rings, second.rings);
    assert_eq!(first.histogram, second.histogram);
}
