use glam::{Vec2, Vec3};
use procgeo::geometry::PointCloud;
use procgeo::sample_elimination::{eliminate_indices, sample_elimination, EliminationParams};
use procgeo::ModelError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn unit_cube_points(count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Vec3::new(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

fn unit_square_points(count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Vec3::new(rng.gen(), rng.gen(), 0.0))
        .collect()
}

fn mean_nearest_neighbor_distance(points: &[Vec3]) -> f32 {
    let total: f32 = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            points
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, q)| p.distance(*q))
                .fold(f32::MAX, f32::min)
        })
        .sum();
    total / points.len() as f32
}

// =============================================================================
// Count and subset invariants
// =============================================================================

#[test]
fn test_ten_thousand_down_to_two_thousand() {
    procgeo::logging_config().try_init();
    let points = unit_cube_points(10_000, 1);
    let params = EliminationParams::new(0.05, 0.05);
    let kept = eliminate_indices(&points, 2_000, &params).unwrap();

    assert_eq!(kept.len(), 2_000);
    // Strictly ascending: distinct, and in input order.
    assert!(kept.windows(2).all(|w| w[0] < w[1]));
    assert!(kept.iter().all(|&i| i < points.len()));
}

#[test]
fn test_every_count_is_honored() {
    let points = unit_cube_points(300, 2);
    let params = EliminationParams::new(0.1, 0.1);
    for desired in [0, 1, 17, 150, 299, 300] {
        let kept = eliminate_indices(&points, desired, &params).unwrap();
        assert_eq!(kept.len(), desired);
        assert!(kept.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_asking_for_too_many_fails() {
    let points = unit_cube_points(10, 3);
    let params = EliminationParams::new(0.1, 0.1);
    assert!(matches!(
        eliminate_indices(&points, 11, &params),
        Err(ModelError::NotEnoughSamples {
            desired: 11,
            available: 10
        })
    ));
}

#[test]
fn test_degenerate_parameters_fail() {
    let points = unit_cube_points(10, 3);
    for params in [
        EliminationParams::new(0.0, 0.1),
        EliminationParams::new(0.1, -1.0),
        EliminationParams::new(f32::NAN, 0.1),
    ] {
        assert!(matches!(
            eliminate_indices(&points, 5, &params),
            Err(ModelError::InvalidParameter { .. })
        ));
    }
}

// =============================================================================
// Quality and reproducibility
// =============================================================================

#[test]
fn test_survivors_are_better_spread_than_random_subsample() {
    let points = unit_square_points(2_000, 4);
    let params = EliminationParams::new(0.05, 0.05);
    let kept = eliminate_indices(&points, 400, &params).unwrap();
    let eliminated: Vec<Vec3> = kept.iter().map(|&i| points[i]).collect();

    let mut rng = StdRng::seed_from_u64(5);
    let random: Vec<Vec3> = rand::seq::index::sample(&mut rng, points.len(), 400)
        .into_iter()
        .map(|i| points[i])
        .collect();

    let spread = mean_nearest_neighbor_distance(&eliminated);
    let baseline = mean_nearest_neighbor_distance(&random);
    assert!(
        spread > baseline * 1.2,
        "eliminated {} vs random {}",
        spread,
        baseline
    );
}

#[test]
fn test_elimination_is_deterministic() {
    let points = unit_cube_points(3_000, 6);
    let params = EliminationParams::new(0.04, 0.06);
    let first = eliminate_indices(&points, 700, &params).unwrap();
    let second = eliminate_indices(&points, 700, &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_tiny_cells_with_wide_influence() {
    // A hundred cells per influence radius.
    let points = unit_cube_points(200, 12);
    let params = EliminationParams::new(0.0005, 0.05);
    let first = eliminate_indices(&points, 100, &params).unwrap();
    assert_eq!(first.len(), 100);
    assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(first, eliminate_indices(&points, 100, &params).unwrap());
}

#[test]
fn test_point_cloud_attributes_follow_their_positions() {
    let positions = unit_cube_points(500, 7);
    let mut cloud = PointCloud::new();
    for (i, &p) in positions.iter().enumerate() {
        cloud.push(p, p.normalize_or_zero(), Vec2::new(i as f32, 0.0));
    }
    let params = EliminationParams::new(0.1, 0.1);
    let thinned = sample_elimination(&cloud, 120, &params).unwrap();

    assert_eq!(thinned.len(), 120);
    assert!(thinned.is_aligned());
    for k in 0..thinned.len() {
        let source = thinned.texcoords[k].x as usize;
        assert_eq!(thinned.positions[k], cloud.positions[source]);
        assert_eq!(thinned.normals[k], cloud.normals[source]);
    }
}

#[test]
fn test_misaligned_cloud_is_rejected() {
    let positions = unit_cube_points(20, 8);
    let cloud = PointCloud {
        normals: vec![Vec3::Z; positions.len() - 1],
        texcoords: vec![Vec2::ZERO; positions.len()],
        positions,
    };
    let params = EliminationParams::new(0.1, 0.1);
    assert!(sample_elimination(&cloud, 10, &params).is_err());
}
