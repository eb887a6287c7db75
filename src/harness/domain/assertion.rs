//! Expected-versus-observed comparisons.

use super::{ScenarioError, ScenarioResult};
use serde::{Deserialize, Serialize};

/// One comparison between an expected literal and an observed read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionRecord {
    label: String,
    expected: String,
    actual: String,
}

impl AssertionRecord {
    /// Records a comparison.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Returns the name of the check.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the expected literal.
    #[must_use]
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// Returns the observed value.
    #[must_use]
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Reports whether the observed value equals the expected literal.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.expected == self.actual
    }

    /// Converts a failed comparison into an error.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::AssertionMismatch`] naming both values when
    /// they differ.
    pub fn verify(&self) -> ScenarioResult<()> {
        if self.passed() {
            return Ok(());
        }
        Err(ScenarioError::AssertionMismatch {
            label: self.label.clone(),
            expected: self.expected.clone(),
            actual: self.actual.clone(),
        })
    }
}
