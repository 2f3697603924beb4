//! Expected/best/worst scenario analysis
//!
//! A scenario differs from the base project only in yearly revenue, scaled by
//! the project's best- or worst-case multiplier. Costs, duration, discount rate
//! and investment are held constant.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::metrics::{analyze_with, MetricsResult};
use crate::project::ProjectParameters;

/// One of the three deterministic scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    Expected,
    Best,
    Worst,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Expected, Scenario::Best, Scenario::Worst];

    /// Revenue multiplier this scenario applies to `params`
    pub fn revenue_multiplier(&self, params: &ProjectParameters) -> f64 {
        match self {
            Scenario::Expected => 1.0,
            Scenario::Best => params.best_case_multiplier,
            Scenario::Worst => params.worst_case_multiplier,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Expected => "expected",
            Scenario::Best => "best",
            Scenario::Worst => "worst",
        }
    }

    fn parameters(&self, params: &ProjectParameters) -> ProjectParameters {
        match self {
            Scenario::Expected => params.clone(),
            _ => params.with_revenue_multiplier(self.revenue_multiplier(params)),
        }
    }
}

/// Metrics for all three scenarios of one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub expected: MetricsResult,
    pub best: MetricsResult,
    pub worst: MetricsResult,
}

impl ScenarioSet {
    pub fn get(&self, scenario: Scenario) -> &MetricsResult {
        match scenario {
            Scenario::Expected => &self.expected,
            Scenario::Best => &self.best,
            Scenario::Worst => &self.worst,
        }
    }

    /// Scenarios in expected, best, worst order
    pub fn iter(&self) -> impl Iterator<Item = (Scenario, &MetricsResult)> {
        Scenario::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// Build all three scenarios with the default solver settings
pub fn build_scenarios(params: &ProjectParameters) -> ScenarioSet {
    ScenarioEngine::default().run(params)
}

/// Scenario engine carrying the analysis configuration
///
/// # Example
/// ```
/// use investment_appraisal::{ProjectParameters, ScenarioEngine};
///
/// let params = ProjectParameters::new(10_000.0, 10.0, 12, 24_000.0, 0.0, 6_000.0, 0.0)
///     .with_multipliers(1.5, 0.5);
/// let scenarios = ScenarioEngine::default().run(&params);
/// assert!(scenarios.best.roi > scenarios.worst.roi);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioEngine {
    config: AnalysisConfig,
}

impl ScenarioEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Run a single scenario
    pub fn run_scenario(&self, params: &ProjectParameters, scenario: Scenario) -> MetricsResult {
        analyze_with(&scenario.parameters(params), &self.config)
    }

    /// Run expected, best and worst for one project
    pub fn run(&self, params: &ProjectParameters) -> ScenarioSet {
        log::debug!(
            "Running scenarios for '{}' (best x{}, worst x{})",
            params.project_name,
            params.best_case_multiplier,
            params.worst_case_multiplier
        );

        ScenarioSet {
            expected: self.run_scenario(params, Scenario::Expected),
            best: self.run_scenario(params, Scenario::Best),
            worst: self.run_scenario(params, Scenario::Worst),
        }
    }

    /// Run scenarios for many projects in parallel; output order matches input
    pub fn run_batch(&self, projects: &[ProjectParameters]) -> Vec<ScenarioSet> {
        projects.par_iter().map(|p| self.run(p)).collect()
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IrrConfig;

    fn test_project() -> ProjectParameters {
        ProjectParameters::new(10_000.0, 10.0, 12, 24_000.0, 6.0, 6_000.0, 1_200.0)
            .with_multipliers(1.5, 0.5)
            .named("Scheduling assistant")
    }

    #[test]
    fn test_scenario_ordering_per_month() {
        let set = build_scenarios(&test_project());
        let months = set.expected.cash_flows.months();
        assert_eq!(months, 12);

        for i in 1..=months {
            let best = set.best.cash_flows.as_slice()[i];
            let expected = set.expected.cash_flows.as_slice()[i];
            let worst = set.worst.cash_flows.as_slice()[i];
            assert!(best >= expected && expected >= worst, "month {i}");
        }
        assert!(set.best.npv > set.expected.npv);
        assert!(set.expected.roi > set.worst.roi);
    }

    #[test]
    fn test_only_revenue_differs() {
        let params = test_project();
        let set = build_scenarios(&params);

        // Month 0 is untouched by the multiplier
        for (_, result) in set.iter() {
            assert_eq!(result.cash_flows.initial_flow(), -10_000.0);
            assert_eq!(result.cash_flows.len(), 13);
        }

        let best_params = params.with_revenue_multiplier(1.5);
        assert_eq!(set.best, crate::metrics::analyze(&best_params));
    }

    #[test]
    fn test_unit_multipliers_match_expected() {
        let params = test_project().with_multipliers(1.0, 1.0);
        let set = build_scenarios(&params);
        assert_eq!(set.best, set.expected);
        assert_eq!(set.worst, set.expected);
    }

    #[test]
    fn test_zero_multiplier_removes_revenue() {
        let params = test_project().with_multipliers(1.0, 0.0);
        let worst = ScenarioEngine::default().run_scenario(&params, Scenario::Worst);
        assert!(worst.cash_flows.operational().iter().all(|&f| f == -600.0));
        assert_eq!(worst.payback, 12.0);
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let projects: Vec<_> = [6_000.0, 12_000.0, 24_000.0, 48_000.0]
            .iter()
            .map(|&revenue| ProjectParameters { yearly_revenue: revenue, ..test_project() })
            .collect();

        let engine = ScenarioEngine::default();
        let results = engine.run_batch(&projects);
        assert_eq!(results.len(), 4);

        for (params, set) in projects.iter().zip(&results) {
            assert_eq!(set, &engine.run(params));
        }
        assert!(results[3].expected.total_revenue > results[0].expected.total_revenue);
    }

    #[test]
    fn test_engine_uses_configured_solver() {
        let config = AnalysisConfig {
            irr: IrrConfig { max_iterations: 1, ..IrrConfig::default() },
            ..AnalysisConfig::default()
        };
        let engine = ScenarioEngine::new(config);
        assert_eq!(engine.config().irr.max_iterations, 1);

        let set = engine.run(&test_project());
        assert!(!set.expected.irr_converged);
    }

    #[test]
    fn test_iter_order() {
        let set = build_scenarios(&test_project());
        let order: Vec<_> = set.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(order, ["expected", "best", "worst"]);
    }
}
