//! Prompt templating and response splitting.

use lift_core::format::format_number;
use lift_propulsion::{
    GridSpecifications, PerformanceError, lift_capacity, thrust_by_type, thrust_to_weight_ratio,
};

use crate::{GridAnalysis, NO_EFFICIENCY, NO_OPTIMIZATION, NO_USE_CASES};

/// Fixed system instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "
You are an AI assistant specializing in Space Engineers thruster configurations.
Analyze grid specifications and provide optimization suggestions.
Focus on:
- Thruster type distribution
- Mass-to-thrust ratio
- Power efficiency
- Atmospheric vs Space performance
Provide specific, actionable recommendations.
";

/// Render the user prompt describing `spec`.
pub fn build_prompt(spec: &GridSpecifications) -> Result<String, PerformanceError> {
    let thrust = thrust_by_type(spec);
    let lift = lift_capacity(spec)?;
    let twr = thrust_to_weight_ratio(spec)?;

    Ok(format!(
        "
Current Grid Configuration:
- Mass: {mass} kg
- Total Thrust: {total} N
- Thrust-to-Weight Ratio: {twr:.2}
- Atmospheric Thrust: {atmospheric} N
- Ion Thrust: {ion} N
- Hydrogen Thrust: {hydrogen} N
- Lift Capacity: {lift} kg

Please analyze this configuration and provide:
1. Efficiency Assessment: Evaluate the current setup's efficiency
2. Optimization Suggestions: Recommend improvements
3. Use Case Analysis: Suggest ideal scenarios for this configuration
",
        mass = format_number(spec.mass()),
        total = format_number(thrust.total()),
        atmospheric = format_number(thrust.atmospheric),
        ion = format_number(thrust.ion),
        hydrogen = format_number(thrust.hydrogen),
        lift = format_number(lift),
    ))
}

/// Split completion text on blank lines and map the first three paragraphs to
/// efficiency, optimization, and use cases. Missing paragraphs get placeholders; anything past
/// the third is dropped.
pub fn parse_sections(text: &str) -> GridAnalysis {
    let mut sections = text.split("\n\n");
    let mut next_or = |placeholder: &str| {
        sections
            .next()
            .map(str::to_string)
            .unwrap_or_else(|| placeholder.to_string())
    };
    GridAnalysis {
        efficiency: next_or(NO_EFFICIENCY),
        optimization: next_or(NO_OPTIMIZATION),
        use_cases: next_or(NO_USE_CASES),
    }
}
