use super::*;

#[test]
fn lookup_reads_both_overrides() {
    let env = EnvOverrides::from_lookup(|key| match key {
        WORD_PAUSE_ENV => Some("750".to_string()),
        BG_IMAGE_ENV => Some("/srv/bg/night.jpg".to_string()),
        _ => None,
    });
    assert_eq!(env.word_pause_ms, Some(750));
    assert_eq!(
        env.background_image,
        Some(PathBuf::from("/srv/bg/night.jpg"))
    );
}

#[test]
fn garbage_and_blank_values_are_ignored() {
    let env = EnvOverrides::from_lookup(|key| match key {
        WORD_PAUSE_ENV => Some("soon".to_string()),
        BG_IMAGE_ENV => Some("  ".to_string()),
        _ => None,
    });
    assert_eq!(env, EnvOverrides::default());
}
