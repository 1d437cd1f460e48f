use glam::Vec3;
use procgeo::NoiseField;

fn sample_points() -> Vec<Vec3> {
    (0..200)
        .map(|i| {
            let t = i as f32 * 0.37;
            Vec3::new(t.sin() * 5.0, t * 0.11 - 4.0, (t * 1.3).cos() * 3.0)
        })
        .collect()
}

fn all_fields(field: &NoiseField, p: Vec3) -> [f32; 10] {
    let v = field.noise3(p);
    [
        field.noise(p),
        v.x,
        v.y,
        v.z,
        field.fbm(p, 6),
        field.ridge(p, 6),
        field.voronoise(p, 0.7, 0.3),
        field.cell_distance(p),
        field.border(p),
        field.smooth_voronoi(p),
    ]
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_fields_are_bit_identical_across_evaluations() {
    let a = NoiseField::new(1234);
    let b = NoiseField::new(1234);
    for p in sample_points() {
        let first = all_fields(&a, p).map(f32::to_bits);
        let second = all_fields(&b, p).map(f32::to_bits);
        assert_eq!(first, second, "at {:?}", p);
    }
}

#[test]
fn test_fields_are_finite() {
    let field = NoiseField::new(77);
    for p in sample_points() {
        for value in all_fields(&field, p) {
            assert!(value.is_finite(), "non-finite value at {:?}", p);
        }
    }
}

// =============================================================================
// Ranges
// =============================================================================

#[test]
fn test_voronoise_stays_in_unit_interval() {
    let field = NoiseField::new(3);
    for p in sample_points() {
        for (u, v) in [(0.0, 0.0), (1.0, 1.0), (0.5, 0.5), (1.0, 0.0)] {
            let value = field.voronoise(p, u, v);
            assert!((0.0..1.0).contains(&value), "{} at {:?}", value, p);
        }
    }
}

#[test]
fn test_cell_distances_are_non_negative() {
    let field = NoiseField::new(3);
    for p in sample_points() {
        assert!(field.cell_distance(p) >= -1e-4);
        assert!(field.border(p) >= 0.0);
        assert!(field.smooth_voronoi(p) >= 0.0);
    }
}

#[test]
fn test_fbm_is_bounded_by_geometric_series() {
    let field = NoiseField::new(5);
    for p in sample_points() {
        assert!(field.fbm(p, 8) < 2.0);
        assert!(field.turbulence(p, 8) >= 0.0);
    }
}
