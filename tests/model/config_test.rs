use procgeo::model::DisplacementMode;
use procgeo::{HairMethod, ModelConfig, ModelError};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
seed = 3

[request]
terrain = "ground"
hair = "fur"
hair_base = "body"
hair_method = "dense"
tree = true

[hair]
num = 2000
steps = 4
top = [1.0, 0.5, 0.25, 1.0]

[displacement]
mode = {{ kind = "cell_border" }}

[tree]
steps = 120
show_range = true
"#
    )
    .unwrap();

    let config = ModelConfig::load(file.path()).unwrap();
    assert_eq!(config.seed, 3);
    assert_eq!(config.request.terrain.as_deref(), Some("ground"));
    assert_eq!(config.request.hair_method, HairMethod::Dense);
    assert!(config.request.tree);
    assert_eq!(config.hair.num, 2000);
    assert_eq!(config.hair.steps, 4);
    assert_eq!(config.hair.top.y, 0.5);
    // Unset fields keep their defaults.
    assert_eq!(config.hair.length, 0.02);
    assert_eq!(config.displacement.mode, DisplacementMode::CellBorder);
    assert_eq!(config.tree.steps, 120);
    assert!(config.tree.show_range);
    assert_eq!(config.tree.kill_range, 0.08);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ModelConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ModelError::ConfigIo(_))));
}

#[test]
fn test_unknown_enum_value_is_parse_error() {
    let result = ModelConfig::from_toml_str("[request]\nhair_method = \"combed\"\n");
    assert!(matches!(result, Err(ModelError::ConfigParse(_))));
}

#[test]
fn test_zero_counts_are_rejected() {
    for document in [
        "[hair]\nnum = 0\n",
        "[tree]\nsteps = 0\n",
        "[grass]\nnum = 0\n",
        "[woods]\ncount = 0\n",
        "[woods]\nsize_variation = 1.0\n",
        "[terrain]\noctaves = 0\n",
    ] {
        assert!(
            matches!(
                ModelConfig::from_toml_str(document),
                Err(ModelError::InvalidParameter { .. })
            ),
            "{}",
            document
        );
    }
}
