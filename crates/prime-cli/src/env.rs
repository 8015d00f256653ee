//! Process environment access for `--inherit-env`.

use std::ffi::OsString;

use prime_core::env_keys;

use crate::error::CliError;

/// Read access to a process environment (injectable for testing).
pub trait ProcessEnv {
    fn var(&self, key: &str) -> Option<OsString>;
}

/// The environment of the running process.
pub struct SystemEnv;

impl ProcessEnv for SystemEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Offload-managed variables that are already set in `env`.
///
/// Other variables are not inherited: only the managed ones can clash with
/// what the selector would set.
pub fn inherited_vars(env: &dyn ProcessEnv) -> Result<Vec<(String, String)>, CliError> {
    env_keys::ALL
        .iter()
        .filter_map(|&key| env.var(key).map(|value| (key, value)))
        .map(|(key, value)| {
            let value = value
                .into_string()
                .map_err(|_| CliError::Arguments(format!("{key} is not valid UTF-8")))?;
            tracing::debug!(%key, %value, "Inherited variable from process environment");
            Ok((key.to_string(), value))
        })
        .collect()
}

/// Fixed environment for tests.
#[cfg(test)]
#[derive(Default)]
pub struct FixedEnv(std::collections::HashMap<String, OsString>);

#[cfg(test)]
impl FixedEnv {
    pub fn new<const N: usize>(vars: [(&str, &str); N]) -> Self {
        Self(
            vars.into_iter()
                .map(|(key, value)| (key.to_string(), OsString::from(value)))
                .collect(),
        )
    }
}

#[cfg(test)]
impl ProcessEnv for FixedEnv {
    fn var(&self, key: &str) -> Option<OsString> {
        self.0.get(key).cloned()
    }
}
