use std::{fs, path::PathBuf};

use tempfile::tempdir;

use kinship_cli::{Args, run};

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn args_for(input: &PathBuf, output: &PathBuf, compact: bool) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        config: None,
        compact,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let valid_fixtures = collect_json_files(fixtures_path().join("valid"));

    assert!(
        !valid_fixtures.is_empty(),
        "No valid fixtures found in tests/fixtures/valid/"
    );

    let mut failed_fixtures = Vec::new();

    for fixture_path in &valid_fixtures {
        let output_filename = format!(
            "{}.layout.json",
            fixture_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if let Err(e) = run(&args_for(fixture_path, &output_path, false)) {
            failed_fixtures.push((fixture_path.clone(), e));
            continue;
        }

        let output = fs::read_to_string(&output_path).expect("Failed to read output");
        let layout: serde_json::Value =
            serde_json::from_str(&output).expect("Output is not valid JSON");
        assert!(layout["nodes"].is_array(), "{}", fixture_path.display());
        assert!(layout["edges"].is_array(), "{}", fixture_path.display());
    }

    if !failed_fixtures.is_empty() {
        eprintln!("\nValid fixtures that failed:");
        for (path, err) in &failed_fixtures {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid fixture(s) failed unexpectedly",
            failed_fixtures.len()
        );
    }
}

#[test]
fn e2e_smoke_test_error_fixtures() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let error_fixtures = collect_json_files(fixtures_path().join("errors"));

    assert!(
        !error_fixtures.is_empty(),
        "No error fixtures found in tests/fixtures/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for fixture_path in &error_fixtures {
        let output_filename = format!(
            "error_{}.layout.json",
            fixture_path.file_stem().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        if run(&args_for(fixture_path, &output_path, false)).is_ok() {
            unexpectedly_succeeded.push(fixture_path.clone());
        }
        assert!(!output_path.exists(), "{}", output_path.display());
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError fixtures that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error fixture(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_three_generations_layout() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixtures_path().join("valid").join("three_generations.json");
    let output = temp_dir.path().join("layout.json");

    run(&args_for(&input, &output, true)).expect("Layout failed");

    let text = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(text.lines().count(), 1);

    let layout: serde_json::Value = serde_json::from_str(&text).unwrap();
    let nodes = layout["nodes"].as_array().unwrap();
    let edges = layout["edges"].as_array().unwrap();
    assert_eq!(nodes.len(), 7);
    assert_eq!(edges.len(), 9);

    let generation_of = |id: &str| {
        nodes
            .iter()
            .find(|node| node["id"] == id)
            .map(|node| node["generation"].as_u64().unwrap())
            .unwrap()
    };
    assert_eq!(generation_of("gp1"), 0);
    assert_eq!(generation_of("p1"), 1);
    assert_eq!(generation_of("p2"), 1);
    assert_eq!(generation_of("c2"), 2);

    let first = &nodes[0];
    assert_eq!(first["payload"]["first_name"], "Walter");
    assert_eq!(first["y"], 0.0);
}

#[test]
fn e2e_dangling_relationship_is_dropped() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = fixtures_path().join("valid").join("blended_family.json");
    let output = temp_dir.path().join("layout.json");

    run(&args_for(&input, &output, false)).expect("Layout failed");

    let layout: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let edges = layout["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 7);
    assert!(edges.iter().all(|edge| edge["id"] != "r8"));
}

#[test]
fn e2e_explicit_config_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[layout]\nhorizontal_spacing = 100.0\nvertical_spacing = 50.0\n\n[style]\nparent_color = \"#000000\"\n",
    )
    .unwrap();

    let input = fixtures_path().join("valid").join("three_generations.json");
    let output = temp_dir.path().join("layout.json");
    let mut args = args_for(&input, &output, false);
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("Layout failed");

    let layout: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let c1 = layout["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .find(|node| node["id"] == "c1")
        .unwrap();
    assert_eq!(c1["y"], -100.0);
}

#[test]
fn e2e_invalid_config_color_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nspouse_color = \"not-a-color\"\n").unwrap();

    let input = fixtures_path().join("valid").join("empty.json");
    let output = temp_dir.path().join("layout.json");
    let mut args = args_for(&input, &output, false);
    args.config = Some(config_path.to_string_lossy().to_string());

    assert!(run(&args).is_err());
}
