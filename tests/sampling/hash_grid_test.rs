use glam::Vec3;
use procgeo::spatial::SpatialHashGrid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(count: usize, extent: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
                rng.gen_range(-extent..extent),
            )
        })
        .collect()
}

fn brute_force(points: &[Vec3], center: usize, radius: f32) -> Vec<usize> {
    (0..points.len())
        .filter(|&i| i != center && points[i].distance_squared(points[center]) <= radius * radius)
        .collect()
}

// =============================================================================
// Completeness
// =============================================================================

#[test]
fn test_grid_matches_brute_force_for_many_radii() {
    procgeo::logging_config().try_init();
    let points = random_points(600, 1.0, 11);
    let grid = SpatialHashGrid::build(&points, 0.1).unwrap();

    for radius in [0.03, 0.1, 0.17, 0.35, 0.8] {
        for center in (0..points.len()).step_by(7) {
            let mut from_grid = grid.query(center, radius);
            from_grid.sort_unstable();
            assert_eq!(
                from_grid,
                brute_force(&points, center, radius),
                "radius {} center {}",
                radius,
                center
            );
        }
    }
}

#[test]
fn test_grid_with_cells_larger_than_radius() {
    let points = random_points(300, 0.5, 5);
    let grid = SpatialHashGrid::build(&points, 0.4).unwrap();
    for center in 0..points.len() {
        let mut from_grid = grid.query(center, 0.05);
        from_grid.sort_unstable();
        assert_eq!(from_grid, brute_force(&points, center, 0.05));
    }
}

#[test]
fn test_grid_with_cells_much_smaller_than_radius() {
    let points = random_points(200, 0.05, 21);
    let grid = SpatialHashGrid::build(&points, 0.0005).unwrap();
    assert!(grid.num_cells() <= points.len());
    for radius in [0.002, 0.05, 0.5, 1.0e6] {
        for center in (0..points.len()).step_by(3) {
            let mut from_grid = grid.query(center, radius);
            from_grid.sort_unstable();
            assert_eq!(
                from_grid,
                brute_force(&points, center, radius),
                "radius {} center {}",
                radius,
                center
            );
        }
    }
}

#[test]
fn test_sparse_and_dense_scans_agree_on_order() {
    // A radius spanning both clusters walks the occupied cells, a one-ring radius walks the box
    // around the query.  Both report neighbours in the same cell order.
    let mut points = random_points(50, 0.01, 2);
    points.extend(random_points(50, 0.01, 3).into_iter().map(|p| p + Vec3::splat(0.5)));
    points[1] = points[0] + Vec3::new(0.001, -0.001, 0.0005);
    points[2] = points[0] + Vec3::new(-0.002, 0.001, 0.0);
    let grid = SpatialHashGrid::build(&points, 0.005).unwrap();

    let wide = grid.query(0, 10.0);
    assert_eq!(wide.len(), points.len() - 1);
    let close: Vec<usize> = wide
        .into_iter()
        .filter(|&i| points[i].distance_squared(points[0]) <= 0.005 * 0.005)
        .collect();
    let from_box = grid.query(0, 0.005);
    assert!(from_box.len() >= 2);
    assert_eq!(close, from_box);
}

#[test]
fn test_query_around_arbitrary_point() {
    let points = random_points(200, 1.0, 3);
    let grid = SpatialHashGrid::build(&points, 0.2).unwrap();
    let target = Vec3::new(0.1, -0.2, 0.3);

    let mut found = Vec::new();
    grid.neighbors_of_point(target, 0.5, None, &mut found);
    found.sort_unstable();
    let expected: Vec<usize> = (0..points.len())
        .filter(|&i| points[i].distance_squared(target) <= 0.25)
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_every_point_lands_in_exactly_one_cell() {
    let points = random_points(400, 2.0, 8);
    let grid = SpatialHashGrid::build(&points, 0.3).unwrap();
    assert_eq!(grid.len(), 400);
    assert!(grid.num_cells() <= 400);

    // A query large enough to cover everything sees every other point once.
    let mut all = grid.query(0, 10.0);
    all.sort_unstable();
    let expected: Vec<usize> = (1..points.len()).collect();
    assert_eq!(all, expected);
}
