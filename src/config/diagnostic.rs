//! Two-tier validation findings.
//!
//! Resolution never stops at the first problem: every error and warning is
//! collected into [`Diagnostics`] so an operator sees the full list in one run.

use std::fmt;

use crate::error::{ConfigError, ConfigWarning};

/// Severity of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks startup.
    Error,
    /// Reported, startup continues.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    Error(ConfigError),
    Warning(ConfigWarning),
}

impl Diagnostic {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::Error(_) => Severity::Error,
            Self::Warning(_) => Severity::Warning,
        }
    }

    /// Environment variable the finding refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Error(e) => e.field(),
            Self::Warning(w) => w.field(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(e) => write!(f, "{}: {e}", self.severity()),
            Self::Warning(w) => write!(f, "{}: {w}", self.severity()),
        }
    }
}

impl From<ConfigError> for Diagnostic {
    fn from(err: ConfigError) -> Self {
        Self::Error(err)
    }
}

impl From<ConfigWarning> for Diagnostic {
    fn from(warning: ConfigWarning) -> Self {
        Self::Warning(warning)
    }
}

/// Ordered collection of findings produced by resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: impl Into<Diagnostic>) {
        self.items.push(diagnostic.into());
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ConfigError> {
        self.items.iter().filter_map(|d| match d {
            Diagnostic::Error(e) => Some(e),
            Diagnostic::Warning(_) => None,
        })
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter().filter_map(|d| match d {
            Diagnostic::Warning(w) => Some(w),
            Diagnostic::Error(_) => None,
        })
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.items {
            writeln!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}
