use procgeo::geometry::primitives::{make_icosphere, make_sphere};
use procgeo::geometry::sampling::{sample_shape, sample_triangles_cdf};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_icosphere_samples_stay_near_the_sphere() {
    let sphere = make_icosphere(3, 1.0);
    let mut rng = StdRng::seed_from_u64(21);
    let samples = sample_shape(&sphere, 1_000, &mut rng).unwrap();
    assert_eq!(samples.len(), 1_000);
    for (p, n) in samples.positions.iter().zip(&samples.normals) {
        // Flat facets sit slightly inside the unit sphere.
        assert!(p.length() <= 1.0 + 1e-5 && p.length() > 0.98);
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(n.dot(p.normalize()) > 0.99);
    }
}

#[test]
fn test_uv_sphere_mixes_triangles_and_quads() {
    let sphere = make_sphere(16, 8, 2.0);
    let triangles = sphere.surface_triangles();
    assert_eq!(triangles.len(), sphere.triangles.len() + 2 * sphere.quads.len());
    let cdf = sample_triangles_cdf(&triangles, &sphere.positions);
    let area = *cdf.last().unwrap();
    // Inscribed polyhedron: a bit less than 4 pi r^2.
    let exact = 4.0 * std::f32::consts::PI * 4.0;
    assert!(area < exact && area > 0.9 * exact);
}

#[test]
fn test_same_seed_gives_same_samples() {
    let sphere = make_icosphere(2, 1.0);
    let first = sample_shape(&sphere, 200, &mut StdRng::seed_from_u64(9)).unwrap();
    let second = sample_shape(&sphere, 200, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(first, second);
}
