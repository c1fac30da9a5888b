use super::*;

#[test]
fn default_uses_access_token_key() {
    let config = GateConfig::default();
    assert_eq!(config.token_key, "access_token");
    assert_eq!(config.already_logged_in_notice, DEFAULT_LOGGED_IN_NOTICE);
}

#[test]
fn overrides_replace_defaults() {
    let config = GateConfig::from_overrides(Some("jwt"), Some("Already signed in."));
    assert_eq!(config.token_key, "jwt");
    assert_eq!(config.already_logged_in_notice, "Already signed in.");
}

#[test]
fn blank_overrides_fall_back_to_defaults() {
    let config = GateConfig::from_overrides(Some("  "), None);
    assert_eq!(config, GateConfig::default());
}
