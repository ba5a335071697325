//! Environment input mapping and typed coercion.
//!
//! [`Env`] is an explicit snapshot of `KEY=value` inputs so resolution never
//! reads the process environment implicitly. [`EnvReader`] applies the
//! coercion rules and records a [`ConfigError::Parse`] for malformed values
//! instead of aborting, substituting the default so the remaining inputs are
//! still checked.

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use super::diagnostic::Diagnostics;
use crate::error::ConfigError;

/// Raw environment inputs keyed by variable name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: HashMap<String, String>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the current process environment.
    #[must_use]
    pub fn from_process() -> Self {
        std::env::vars().collect()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Typed reader over an [`Env`] that accumulates parse diagnostics.
pub(crate) struct EnvReader<'a> {
    env: &'a Env,
    diagnostics: Diagnostics,
}

impl<'a> EnvReader<'a> {
    pub(crate) fn new(env: &'a Env) -> Self {
        Self {
            env,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Raw string, `default` when absent.
    pub(crate) fn string(&self, key: &str, default: &str) -> String {
        self.env.get(key).unwrap_or(default).to_string()
    }

    /// Credential-style string kept verbatim; a blank value resolves to
    /// empty, the same as an absent one.
    pub(crate) fn secret(&self, key: &str) -> String {
        self.env
            .get(key)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_default()
            .to_string()
    }

    /// True when the key is present, even with an empty value.
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.env.get(key).is_some()
    }

    /// Boolean flag: true only for a case-insensitive `"true"`.
    pub(crate) fn flag(&self, key: &str, default: bool) -> bool {
        match self.env.get(key) {
            Some(raw) => raw.eq_ignore_ascii_case("true"),
            None => default,
        }
    }

    /// Parse a typed value, recording a diagnostic and falling back to
    /// `default` when the input is malformed.
    pub(crate) fn parse<T>(&mut self, key: &'static str, default: T) -> T
    where
        T: FromStr,
        T::Err: Display,
    {
        match self.env.get(key) {
            Some(raw) => self.parse_raw(key, raw).unwrap_or(default),
            None => default,
        }
    }

    /// Parse an optional typed value; blank means absent.
    pub(crate) fn parse_optional<T>(&mut self, key: &'static str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.env.get(key).filter(|v| !v.trim().is_empty())?;
        self.parse_raw(key, raw)
    }

    fn parse_raw<T>(&mut self, key: &'static str, raw: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match raw.trim().parse::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                self.diagnostics.push(ConfigError::Parse {
                    field: key,
                    value: raw.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    pub(crate) fn finish(self) -> Diagnostics {
        self.diagnostics
    }
}
