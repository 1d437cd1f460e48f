use glam::{Affine3A, Vec3, Vec4};
use procgeo::geometry::primitives::{make_grid_plane, make_icosphere};
use procgeo::scene::{Instance, Material, Texture};
use procgeo::{apply_request, HairMethod, ModelConfig, ModelError, ModelRequest, SceneData};

fn test_scene() -> SceneData {
    let mut scene = SceneData::new();
    let white = scene.add_material(Material::default());
    let checker = scene.add_texture(
        Texture::new(2, 2, vec![Vec4::ONE, Vec4::ZERO, Vec4::ZERO, Vec4::ONE]).unwrap(),
    );
    let textured = scene.add_material(Material {
        color_tex: Some(checker),
        ..Default::default()
    });

    let ground = scene.add_shape("ground", make_grid_plane(16, 4.0));
    scene.add_named_instance("ground", Instance::new(Affine3A::IDENTITY, ground, white));
    let rock = scene.add_shape("rock", make_icosphere(2, 0.5));
    scene.add_named_instance(
        "rock",
        Instance::new(Affine3A::from_translation(Vec3::new(1.0, 0.5, 0.0)), rock, white),
    );
    let body = scene.add_shape("body", make_icosphere(2, 0.3));
    scene.add_named_instance("body", Instance::new(Affine3A::IDENTITY, body, textured));
    let fur = scene.add_shape("fur", make_grid_plane(1, 0.1));
    scene.add_named_instance("fur", Instance::new(Affine3A::IDENTITY, fur, white));
    let blade = scene.add_shape("blade", make_grid_plane(1, 0.05));
    scene.add_named_instance("grass_blade", Instance::new(Affine3A::IDENTITY, blade, white));
    scene
}

fn full_config() -> ModelConfig {
    let mut config = ModelConfig {
        seed: 5,
        request: ModelRequest {
            terrain: Some("ground".to_string()),
            displacement: Some("rock".to_string()),
            hair: Some("fur".to_string()),
            hair_base: Some("body".to_string()),
            hair_method: HairMethod::SampleElimination,
            grass: Some("grass".to_string()),
            grass_base: Some("ground".to_string()),
            tree: true,
            woods: false,
        },
        ..Default::default()
    };
    config.terrain.size = 2.0;
    config.hair.num = 200;
    config.hair.influence_radius = 0.02;
    config.hair.cell_size = 0.02;
    config.grass.num = 150;
    config.tree.crown_points_num = 150;
    config.tree.steps = 80;
    config
}

#[test]
fn test_full_request_fills_the_scene() {
    procgeo::logging_config().try_init();
    let mut scene = test_scene();
    let instances_before = scene.instances.len();
    let summary = apply_request(&mut scene, &full_config()).unwrap();

    assert_eq!(summary.trees, 1);
    assert_eq!(summary.displaced_shapes, 2);
    assert_eq!(summary.hair_strands, 200);
    assert_eq!(summary.grass_blades, 150);
    assert_eq!(
        scene.instances.len(),
        instances_before + summary.branches + summary.grass_blades
    );

    assert_eq!(scene.shape_names[3], "hair");
    assert_eq!(scene.shapes[3].lines.len(), 200);
    assert_eq!(scene.shapes[0].colors.len(), scene.shapes[0].positions.len());
    assert_eq!(scene.shapes[1].colors.len(), scene.shapes[1].positions.len());
}

#[test]
fn test_full_request_is_reproducible() {
    let mut a = test_scene();
    let mut b = test_scene();
    apply_request(&mut a, &full_config()).unwrap();
    apply_request(&mut b, &full_config()).unwrap();
    assert_eq!(a.shapes, b.shapes);
    assert_eq!(a.instances, b.instances);
}

#[test]
fn test_dense_hair_uses_base_texture() {
    let mut scene = test_scene();
    let mut config = ModelConfig {
        request: ModelRequest {
            hair: Some("fur".to_string()),
            hair_base: Some("body".to_string()),
            hair_method: HairMethod::Dense,
            ..Default::default()
        },
        ..Default::default()
    };
    config.hair.num = 100;
    let summary = apply_request(&mut scene, &config).unwrap();
    assert_eq!(summary.hair_strands, 100);
    assert_eq!(scene.shapes[3].lines.len(), 100);
}

#[test]
fn test_unknown_instance_stops_the_request() {
    let mut scene = test_scene();
    let mut config = full_config();
    config.request.hair_base = Some("nobody".to_string());
    let result = apply_request(&mut scene, &config);
    assert!(matches!(result, Err(ModelError::UnknownInstance(name)) if name == "nobody"));
    // Terrain ran before hair and keeps its output.
    assert!(!scene.shapes[0].colors.is_empty());
    assert!(scene.shapes[3].lines.is_empty());
}

#[test]
fn test_woods_are_planted_on_grass_base() {
    let mut scene = test_scene();
    let mut config = ModelConfig {
        request: ModelRequest {
            grass_base: Some("ground".to_string()),
            woods: true,
            ..Default::default()
        },
        ..Default::default()
    };
    config.woods.count = 2;
    config.tree.crown_points_num = 80;
    config.tree.steps = 30;
    let summary = apply_request(&mut scene, &config).unwrap();
    assert_eq!(summary.trees, 2);
    assert_eq!(scene.instances.len(), 5 + summary.branches);
}
