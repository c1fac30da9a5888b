//! Navigation gate configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so overrides are taken at
//! compile time. Unset variables fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key holding the access token written at login.
pub const DEFAULT_TOKEN_KEY: &str = "access_token";

/// Notice shown when a signed-in user opens login or signup.
pub const DEFAULT_LOGGED_IN_NOTICE: &str = "이미 로그인되어 있습니다.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub token_key: String,
    pub already_logged_in_notice: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            already_logged_in_notice: DEFAULT_LOGGED_IN_NOTICE.to_owned(),
        }
    }
}

impl GateConfig {
    /// Build from `SEOGAEUM_TOKEN_KEY` / `SEOGAEUM_LOGGED_IN_NOTICE` set at
    /// build time.
    pub fn from_env() -> Self {
        Self::from_overrides(option_env!("SEOGAEUM_TOKEN_KEY"), option_env!("SEOGAEUM_LOGGED_IN_NOTICE"))
    }

    fn from_overrides(token_key: Option<&str>, notice: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            token_key: non_blank(token_key).unwrap_or(defaults.token_key),
            already_logged_in_notice: non_blank(notice).unwrap_or(defaults.already_logged_in_notice),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned)
}
