use glam::Vec3;
use procgeo::geometry::primitives::{make_icosphere, make_sphere};
use procgeo::model::displacement::{HIGH_BAND, LOW_BAND};
use procgeo::model::{
    make_displacement, make_terrain, DisplacementMode, DisplacementParams, TerrainMode,
    TerrainParams,
};
use procgeo::NoiseField;

fn assert_unit_normals(normals: &[Vec3]) {
    for n in normals {
        assert!((n.length() - 1.0).abs() < 1e-4, "normal {:?}", n);
    }
}

// =============================================================================
// Terrain
// =============================================================================

#[test]
fn test_icosphere_terrain_moves_along_normals_within_height() {
    procgeo::logging_config().try_init();
    let mut sphere = make_icosphere(3, 1.0);
    let before = sphere.positions.clone();
    let original_normals = sphere.normals.clone();
    let params = TerrainParams {
        size: 2.0,
        height: 0.1,
        scale: 10.0,
        octaves: 8,
        ..Default::default()
    };
    make_terrain(&mut sphere, &params, &NoiseField::new(0)).unwrap();

    assert_eq!(sphere.colors.len(), before.len());
    let mut raised = 0;
    for i in 0..before.len() {
        let moved = sphere.positions[i] - before[i];
        let amount = moved.dot(original_normals[i]);
        // Only along the normal, and never more than the height.
        assert!((moved - original_normals[i] * amount).length() < 1e-5);
        assert!(amount.abs() <= params.height + 1e-6);
        if amount > 0.0 {
            raised += 1;
        }

        let color = sphere.colors[i];
        assert!(color == params.bottom || color == params.middle || color == params.top);
        let normalized = amount / params.height;
        if normalized < LOW_BAND - 1e-4 {
            assert_eq!(color, params.bottom);
        } else if normalized > HIGH_BAND + 1e-4 {
            assert_eq!(color, params.top);
        }
    }
    assert!(raised > before.len() / 2);
    assert_unit_normals(&sphere.normals);
}

#[test]
fn test_voronoise_terrain_uses_three_bands() {
    let mut sphere = make_icosphere(2, 1.0);
    let params = TerrainParams {
        mode: TerrainMode::Voronoise,
        ..Default::default()
    };
    make_terrain(&mut sphere, &params, &NoiseField::new(4)).unwrap();
    for color in &sphere.colors {
        assert!(*color == params.bottom || *color == params.middle || *color == params.top);
    }
    assert_unit_normals(&sphere.normals);
}

#[test]
fn test_terrain_is_reproducible() {
    let params = TerrainParams {
        size: 2.0,
        ..Default::default()
    };
    let mut a = make_icosphere(2, 1.0);
    let mut b = make_icosphere(2, 1.0);
    make_terrain(&mut a, &params, &NoiseField::new(8)).unwrap();
    make_terrain(&mut b, &params, &NoiseField::new(8)).unwrap();
    let bits = |v: &[Vec3]| v.iter().flat_map(|p| p.to_array()).map(f32::to_bits).collect::<Vec<_>>();
    assert_eq!(bits(&a.positions), bits(&b.positions));
    assert_eq!(bits(&a.normals), bits(&b.normals));
}

// =============================================================================
// Displacement modes
// =============================================================================

#[test]
fn test_every_displacement_mode_keeps_unit_normals() {
    let modes = [
        DisplacementMode::Turbulence,
        DisplacementMode::Voronoise { u: 0.5, v: 2.0 },
        DisplacementMode::CellBorder,
        DisplacementMode::SmoothVoronoi,
        DisplacementMode::World,
    ];
    for mode in modes {
        let mut sphere = make_sphere(24, 12, 1.0);
        let params = DisplacementParams {
            mode,
            ..Default::default()
        };
        make_displacement(&mut sphere, &params, &NoiseField::new(12)).unwrap();
        assert_eq!(sphere.colors.len(), sphere.positions.len());
        assert_unit_normals(&sphere.normals);
        for p in &sphere.positions {
            assert!(p.is_finite());
        }
    }
}

#[test]
fn test_turbulence_only_pushes_outward() {
    let mut sphere = make_icosphere(2, 1.0);
    let params = DisplacementParams::default();
    make_displacement(&mut sphere, &params, &NoiseField::new(6)).unwrap();
    for p in &sphere.positions {
        // fbm over 8 octaves stays below 2.
        assert!(p.length() >= 1.0 - 1e-5);
        assert!(p.length() <= 1.0 + 2.0 * params.height);
    }
}
