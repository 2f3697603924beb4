//! Serializable analysis report
//!
//! Bundles the inputs and outputs of one appraisal for export. Contains only
//! plain data: no formatting, currency symbols or localized text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::Verdict;
use crate::project::{ProjectParameters, StrategicInput};
use crate::scenario::{ScenarioEngine, ScenarioSet};
use crate::viability::{score_strategy, ScoreResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub parameters: ProjectParameters,
    pub scenarios: ScenarioSet,
    /// Financial verdict of the expected scenario
    pub verdict: Verdict,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<ScoreResult>,
}

impl AnalysisReport {
    /// Run all scenarios for `parameters` and stamp the report with the current time
    pub fn build(engine: &ScenarioEngine, parameters: ProjectParameters) -> Self {
        Self::build_at(engine, parameters, Utc::now())
    }

    pub fn build_at(engine: &ScenarioEngine, parameters: ProjectParameters, generated_at: DateTime<Utc>) -> Self {
        let scenarios = engine.run(&parameters);
        let verdict = scenarios.expected.verdict();
        Self {
            generated_at,
            parameters,
            scenarios,
            verdict,
            strategy: None,
        }
    }

    /// Attach a strategic viability score
    pub fn with_strategy(mut self, input: &StrategicInput) -> Self {
        self.strategy = Some(score_strategy(input));
        self
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn report() -> AnalysisReport {
        let params = ProjectParameters::new(10_000.0, 10.0, 12, 24_000.0, 0.0, 6_000.0, 0.0)
            .with_multipliers(1.5, 0.5)
            .named("Invoice automation");
        let stamp = Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap();
        AnalysisReport::build_at(&ScenarioEngine::default(), params, stamp)
    }

    #[test]
    fn test_report_contents() {
        let report = report();
        assert_eq!(report.verdict, Verdict::FinanciallyViable);
        assert_eq!(report.scenarios.expected.cash_flows.len(), 13);
        assert!(report.strategy.is_none());
    }

    #[test]
    fn test_report_json_parses_back() {
        let report = report().with_strategy(&StrategicInput::new(
            "Invoice automation",
            "Manual invoice entry drives cost",
            "Automate capture with AI",
            "ROI within a year",
        ));
        let json = report.to_json_pretty().unwrap();
        assert!(json.contains("2026-01-15T09:30:00"));
        assert!(json.contains("\"recommendation\": \"HIGH\""));

        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.generated_at, report.generated_at);
        assert_eq!(parsed.parameters, report.parameters);
        assert_eq!(parsed.strategy, report.strategy);
    }

    #[test]
    fn test_strategy_omitted_when_absent() {
        let json = serde_json::to_string(&report()).unwrap();
        assert!(!json.contains("strategy"));
    }
}
