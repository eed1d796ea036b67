use dynform_testing::TestWorld;

#[test]
fn test_show_without_file_uses_defaults() {
    let world = TestWorld::new();
    let result = world.run(&["config", "show"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("(not created, using defaults)"));
    assert!(result.stdout().contains("[api]"));
    assert!(result.stdout().contains("dynform config init"));
}

#[test]
fn test_init_writes_config_once() {
    let world = TestWorld::new();

    let result = world
        .run(&["--base-url", "http://forms.test:9000", "config", "init"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let written = std::fs::read_to_string(world.data_dir().join("config.toml")).unwrap();
    assert!(written.contains("http://forms.test:9000"));

    let again = world.run(&["config", "init"]).unwrap();
    assert!(!again.success());
    assert!(again.stderr().contains("--force"));

    let forced = world.run(&["config", "init", "--force"]).unwrap();
    assert!(forced.success());
    let rewritten = std::fs::read_to_string(world.data_dir().join("config.toml")).unwrap();
    assert!(!rewritten.contains("http://forms.test:9000"));
}

#[test]
fn test_base_url_flag_overrides_file() {
    let world = TestWorld::new().json();
    world.run(&["config", "init"]).unwrap();

    let result = world
        .run(&["--base-url", "http://override.test", "config", "show"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["exists"], true);
    assert_eq!(json["content"]["base_url"], "http://override.test");
}
