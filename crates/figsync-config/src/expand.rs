//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.
//!
//! Strings without `${` are returned as is, so a bare `$` in them survives.
//! Once a string contains `${`, bare `$VAR` references in it are expanded too.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// `field` names the config key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| std::env::var(var).map(Some))
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}
