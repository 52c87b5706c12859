//! Free-form grid commentary from an external text-completion service.
//!
//! The service is best effort. [`ThrusterAssistant::analyze_grid`] always returns a
//! [`GridAnalysis`]; failures become placeholder text instead of errors.

pub mod client;
pub mod prompt;

use lift_advisor::ImprovementReport;
use lift_propulsion::{GridSpecifications, PerformanceError};
use serde::Serialize;
use thiserror::Error;

pub use client::ChatCompletionClient;
pub use prompt::{SYSTEM_PROMPT, build_prompt, parse_sections};

pub const NO_EFFICIENCY: &str = "Analysis unavailable";
pub const NO_OPTIMIZATION: &str = "No optimization suggestions";
pub const NO_USE_CASES: &str = "No use case analysis";

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("API key not set (expected environment variable {0})")]
    MissingApiKey(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
    #[error("cannot describe grid: {0}")]
    Performance(#[from] PerformanceError),
}

/// Anything that turns a system instruction and a user prompt into text.
pub trait CompletionService {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AssistantError>;
}

impl<F> CompletionService for F
where
    F: Fn(&str, &str) -> Result<String, AssistantError>,
{
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AssistantError> {
        self(system, prompt)
    }
}

/// Three commentary sections, mapped positionally from the completion text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridAnalysis {
    pub efficiency: String,
    pub optimization: String,
    pub use_cases: String,
}

impl GridAnalysis {
    /// Every field set to the same failure text naming `err`.
    pub fn unavailable(err: &AssistantError) -> Self {
        let message = format!("{NO_EFFICIENCY}: {err}");
        Self {
            efficiency: message.clone(),
            optimization: message.clone(),
            use_cases: message,
        }
    }
}

/// Pairs a completion service with the rule-based advisor.
pub struct ThrusterAssistant<S> {
    service: S,
}

impl<S: CompletionService> ThrusterAssistant<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Ask the service for commentary. Never fails.
    pub fn analyze_grid(&self, spec: &GridSpecifications) -> GridAnalysis {
        match self.try_analyze(spec) {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!(error = %err, "grid analysis unavailable");
                GridAnalysis::unavailable(&err)
            }
        }
    }

    fn try_analyze(&self, spec: &GridSpecifications) -> Result<GridAnalysis, AssistantError> {
        let prompt = build_prompt(spec)?;
        let text = self.service.complete(SYSTEM_PROMPT, &prompt)?;
        Ok(parse_sections(&text))
    }

    /// Rule-based suggestions, independent of the completion service.
    pub fn suggest_improvements(
        &self,
        spec: &GridSpecifications,
    ) -> Result<ImprovementReport, PerformanceError> {
        lift_advisor::suggest_improvements(spec)
    }
}
