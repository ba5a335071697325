//! AI probability ensemble settings.
//!
//! The ensemble blends a primary (OpenAI) and a secondary (Anthropic)
//! probability estimate. Whether blending is active, and with which
//! weights, is decided by [`derive_ensemble`].

use std::fmt;
use std::str::FromStr;

use super::diagnostic::Diagnostics;
use super::env::EnvReader;
use crate::error::{ConfigError, ConfigWarning};

const DEFAULT_GPT_WEIGHT: f64 = 0.55;
const DEFAULT_CLAUDE_WEIGHT: f64 = 0.45;
const DEFAULT_TEMPERATURE: f64 = 0.3;
const DEFAULT_MAX_TOKENS: u32 = 1000;

const ENSEMBLE_KEY: &str = "PROBABILITY_MODEL_ENSEMBLE";

/// Requested ensemble behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnsembleMode {
    /// Blend whenever a secondary key is configured.
    True,
    /// Never blend.
    False,
    /// Blend when both credentials are available.
    #[default]
    Auto,
}

impl FromStr for EnsembleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            "auto" => Ok(Self::Auto),
            _ => Err("must be 'true', 'false' or 'auto'".to_string()),
        }
    }
}

impl fmt::Display for EnsembleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("true"),
            Self::False => f.write_str("false"),
            Self::Auto => f.write_str("auto"),
        }
    }
}

/// Primary/secondary blend weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelWeights {
    pub primary: f64,
    pub secondary: f64,
}

impl ModelWeights {
    /// Primary model only.
    pub const SOLO: Self = Self {
        primary: 1.0,
        secondary: 0.0,
    };
}

impl Default for ModelWeights {
    fn default() -> Self {
        Self {
            primary: DEFAULT_GPT_WEIGHT,
            secondary: DEFAULT_CLAUDE_WEIGHT,
        }
    }
}

/// Outcome of the tri-state ensemble rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnsembleDecision {
    pub enabled: bool,
    pub weights: ModelWeights,
}

/// Decide whether the ensemble is active and which weights apply.
///
/// A missing secondary credential always disables blending, whatever the
/// requested mode. When enabled, the requested weights are used verbatim:
/// they are not renormalized and need not sum to 1.
#[must_use]
pub fn derive_ensemble(
    secondary_present: bool,
    mode: EnsembleMode,
    requested: ModelWeights,
) -> EnsembleDecision {
    let enabled = secondary_present && matches!(mode, EnsembleMode::True | EnsembleMode::Auto);

    EnsembleDecision {
        enabled,
        weights: if enabled { requested } else { ModelWeights::SOLO },
    }
}

/// AI model configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AiConfig {
    /// Primary credential (required).
    pub openai_key: String,
    /// Secondary credential; empty disables the ensemble.
    pub anthropic_key: String,
    pub ensemble_mode: EnsembleMode,
    pub ensemble_enabled: bool,
    pub gpt_weight: f64,
    pub claude_weight: f64,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl AiConfig {
    pub(crate) fn from_env(reader: &mut EnvReader<'_>) -> Self {
        let openai_key = reader.secret("OPENAI_API_KEY");
        let anthropic_key = reader.secret("ANTHROPIC_API_KEY");

        // Only an absent key means "auto"; anything unrecognized, blank
        // included, is reported and treated as "false".
        let ensemble_mode = if reader.contains(ENSEMBLE_KEY) {
            reader.parse(ENSEMBLE_KEY, EnsembleMode::False)
        } else {
            EnsembleMode::Auto
        };

        let requested = ModelWeights {
            primary: reader.parse("GPT_MODEL_WEIGHT", DEFAULT_GPT_WEIGHT),
            secondary: reader.parse("CLAUDE_MODEL_WEIGHT", DEFAULT_CLAUDE_WEIGHT),
        };
        let decision = derive_ensemble(!anthropic_key.is_empty(), ensemble_mode, requested);

        Self {
            openai_key,
            anthropic_key,
            ensemble_mode,
            ensemble_enabled: decision.enabled,
            gpt_weight: decision.weights.primary,
            claude_weight: decision.weights.secondary,
            temperature: reader.parse("MODEL_TEMPERATURE", DEFAULT_TEMPERATURE),
            max_tokens: reader.parse("MODEL_MAX_TOKENS", DEFAULT_MAX_TOKENS),
        }
    }

    pub(crate) fn validate(&self, diagnostics: &mut Diagnostics) {
        if self.openai_key.is_empty() {
            diagnostics.push(ConfigError::MissingField {
                field: "OPENAI_API_KEY",
            });
        }
        if self.anthropic_key.is_empty() {
            diagnostics.push(ConfigWarning::MissingOptional {
                field: "ANTHROPIC_API_KEY",
                note: "ensemble mode disabled, GPT estimates carry full weight",
            });
        }
    }

    /// Weights actually applied to the two models.
    #[must_use]
    pub fn weights(&self) -> ModelWeights {
        ModelWeights {
            primary: self.gpt_weight,
            secondary: self.claude_weight,
        }
    }
}
