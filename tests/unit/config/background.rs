use super::*;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "lyric_reel_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn nothing_configured_is_solid() {
    assert_eq!(
        resolve_background(&BackgroundSpec::default(), &EnvOverrides::default()),
        Background::Solid
    );
}

#[test]
fn explicit_path_beats_env_and_id() {
    let dir = temp_dir("bg_explicit");
    let explicit = dir.join("explicit.png");
    let from_env = dir.join("env.png");
    let by_id = dir.join("night.jpg");
    for p in [&explicit, &from_env, &by_id] {
        std::fs::write(p, b"x").unwrap();
    }

    let spec = BackgroundSpec {
        image: Some(explicit.clone()),
        id: Some("night".to_string()),
        dir: Some(dir.clone()),
        random: true,
    };
    let env = EnvOverrides {
        background_image: Some(from_env.clone()),
        ..EnvOverrides::default()
    };
    assert_eq!(
        resolve_background(&spec, &env),
        Background::Image(explicit)
    );

    let spec = BackgroundSpec {
        image: None,
        ..spec
    };
    assert_eq!(
        resolve_background(&spec, &env),
        Background::Image(from_env)
    );

    assert_eq!(
        resolve_background(&spec, &EnvOverrides::default()),
        Background::Image(by_id)
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_candidates_fall_through_to_random_pick() {
    let dir = temp_dir("bg_random");
    std::fs::write(dir.join("only.jpeg"), b"x").unwrap();
    std::fs::write(dir.join("notes.txt"), b"x").unwrap();

    let spec = BackgroundSpec {
        image: Some(dir.join("missing.png")),
        id: Some("missing".to_string()),
        dir: Some(dir.clone()),
        random: true,
    };
    assert_eq!(
        resolve_background(&spec, &EnvOverrides::default()),
        Background::Image(dir.join("only.jpeg"))
    );

    let no_random = BackgroundSpec {
        random: false,
        ..spec
    };
    assert_eq!(
        resolve_background(&no_random, &EnvOverrides::default()),
        Background::Solid
    );

    let _ = std::fs::remove_dir_all(&dir);
}
