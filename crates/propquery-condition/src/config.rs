//! Dispatch configuration

use serde::{Deserialize, Serialize};

/// What to do when no builder operation matches an operator and operand kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unmatched {
    /// Skip the condition without calling the builder
    #[default]
    Ignore,
    /// Fail with `UnsupportedOperandKind`
    Reject,
}

/// Dispatcher settings
///
/// Deserializes from partial input; missing fields take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Handling of operator/kind pairs without a builder operation
    pub on_unmatched: Unmatched,
}

impl DispatchConfig {
    /// Configuration that skips unmatched pairs
    pub fn lenient() -> Self {
        Self {
            on_unmatched: Unmatched::Ignore,
        }
    }

    /// Configuration that rejects unmatched pairs
    pub fn strict() -> Self {
        Self {
            on_unmatched: Unmatched::Reject,
        }
    }

    /// Set the unmatched handling
    pub fn with_unmatched(mut self, on_unmatched: Unmatched) -> Self {
        self.on_unmatched = on_unmatched;
        self
    }
}
