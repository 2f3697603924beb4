//! Investment Appraisal - capital-budgeting engine for single projects
//!
//! This library provides:
//! - Monthly cash-flow projection from annual revenue, growth and cost figures
//! - ROI, NPV, payback period and IRR (Newton-Raphson)
//! - Expected/best/worst scenarios from revenue multipliers
//! - A keyword/length heuristic for strategic viability
//!
//! Every calculation is a pure function of its inputs and can be called from
//! any number of threads.

pub mod config;
pub mod error;
pub mod project;
pub mod projection;
pub mod metrics;
pub mod scenario;
pub mod viability;
pub mod report;

// Re-export commonly used types
pub use config::{AnalysisConfig, IrrConfig};
pub use error::AppraisalError;
pub use project::{ProjectParameters, RawProjectForm, StrategicInput};
pub use projection::{project, CashflowTimeline};
pub use metrics::{analyze, analyze_with, MetricsResult};
pub use scenario::{build_scenarios, Scenario, ScenarioEngine, ScenarioSet};
pub use viability::{score_strategy, Recommendation, ScoreResult};
pub use report::AnalysisReport;
