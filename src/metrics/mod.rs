//! Capital-budgeting metrics: ROI, NPV, payback and IRR
//!
//! Every function here is pure. `analyze` runs the projector and bundles the
//! four metrics for one set of parameters.

mod discount;
mod irr;
mod returns;

pub use discount::{discount_factor, npv};
pub use irr::{calculate_irr, estimate_irr, IrrEstimate};
pub use returns::{payback, roi};

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::project::ProjectParameters;
use crate::projection::{project, CashflowTimeline};

/// Metrics for one project (or one scenario of it)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    /// Return on investment (%)
    pub roi: f64,

    /// Net present value of the operational flows
    pub npv: f64,

    /// Months to recover the investment; equals the duration when not recovered
    pub payback: f64,

    /// Internal rate of return (% per month)
    pub irr: f64,

    /// Whether the IRR solver met its tolerance
    pub irr_converged: bool,

    /// Full timeline including month 0
    pub cash_flows: CashflowTimeline,

    /// Plain sum of operational flows
    pub total_revenue: f64,
}

/// Sign of the return on investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnStatus {
    Positive,
    Negative,
}

/// Whether discounted flows create or destroy value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueStatus {
    CreatesValue,
    DestroysValue,
}

/// Overall financial recommendation for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    FinanciallyViable,
    ReviewCostStructure,
}

impl MetricsResult {
    pub fn return_status(&self) -> ReturnStatus {
        if self.roi > 0.0 {
            ReturnStatus::Positive
        } else {
            ReturnStatus::Negative
        }
    }

    pub fn value_status(&self) -> ValueStatus {
        if self.npv > 0.0 {
            ValueStatus::CreatesValue
        } else {
            ValueStatus::DestroysValue
        }
    }

    /// Viable when the ROI is positive
    pub fn verdict(&self) -> Verdict {
        match self.return_status() {
            ReturnStatus::Positive => Verdict::FinanciallyViable,
            ReturnStatus::Negative => Verdict::ReviewCostStructure,
        }
    }

    /// False when payback hit the horizon sentinel
    ///
    /// A zero-month horizon counts as recovered only when there was nothing to
    /// recover in the first place.
    pub fn is_recovered(&self) -> bool {
        let months = self.cash_flows.months();
        if months == 0 {
            return self.cash_flows.initial_flow() >= 0.0;
        }
        self.payback < months as f64
    }
}

/// Project the cash flows and compute all metrics with the default solver settings
pub fn analyze(params: &ProjectParameters) -> MetricsResult {
    analyze_with(params, &AnalysisConfig::default())
}

/// Project the cash flows and compute all metrics
///
/// ROI compares the summed operational flows against the investment; NPV and
/// payback use the operational flows; IRR runs over the full timeline.
pub fn analyze_with(params: &ProjectParameters, config: &AnalysisConfig) -> MetricsResult {
    let cash_flows = project(params);
    let operational = cash_flows.operational();
    let total_revenue = cash_flows.operational_total();
    let irr = estimate_irr(cash_flows.as_slice(), &config.irr);

    MetricsResult {
        roi: roi(params.initial_investment, total_revenue),
        npv: npv(operational, params.discount_rate),
        payback: payback(params.initial_investment, operational),
        irr: irr.rate_pct,
        irr_converged: irr.converged,
        total_revenue,
        cash_flows,
    }
}
