//! Internal Rate of Return (IRR) calculation
//!
//! Newton-Raphson on the NPV-as-a-function-of-rate equation over the full
//! timeline, month 0 included.

use serde::{Deserialize, Serialize};

use crate::config::IrrConfig;

/// Result of the IRR solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrEstimate {
    /// Periodic rate as a percentage (5.0 = 5% per period)
    pub rate_pct: f64,

    /// Newton steps taken
    pub iterations: u32,

    /// False when the iteration cap was hit before the step size fell below tolerance.
    /// The rate is then the last iterate, which may be meaningless.
    pub converged: bool,
}

/// IRR of `cashflows` as a percentage, using the default solver settings
///
/// Flows are indexed by period with `cashflows[0]` undiscounted. When the solver
/// does not converge the last iterate is returned anyway; use [`estimate_irr`]
/// to tell the two apart.
pub fn calculate_irr(cashflows: &[f64]) -> f64 {
    estimate_irr(cashflows, &IrrConfig::default()).rate_pct
}

/// Run Newton-Raphson from `config.initial_guess`
///
/// Each step computes `npv(r)` and its analytic derivative and moves
/// `r <- r - npv / dnpv`. Stops as soon as `|Δr| < tolerance`, returning the new
/// iterate. A zero derivative yields an infinite or NaN step that propagates
/// into the result.
pub fn estimate_irr(cashflows: &[f64], config: &IrrConfig) -> IrrEstimate {
    let mut rate = config.initial_guess;

    for iteration in 1..=config.max_iterations {
        let (npv, dnpv) = npv_and_derivative(cashflows, rate);
        let new_rate = rate - npv / dnpv;

        if (new_rate - rate).abs() < config.tolerance {
            return IrrEstimate {
                rate_pct: new_rate * 100.0,
                iterations: iteration,
                converged: true,
            };
        }

        rate = new_rate;
    }

    log::debug!(
        "IRR did not converge after {} iterations; last estimate {:.6}",
        config.max_iterations,
        rate
    );

    IrrEstimate {
        rate_pct: rate * 100.0,
        iterations: config.max_iterations,
        converged: false,
    }
}

/// Calculate NPV and its derivative with respect to rate
fn npv_and_derivative(cashflows: &[f64], rate: f64) -> (f64, f64) {
    let mut npv = 0.0;
    let mut dnpv = 0.0;

    for (t, &cf) in cashflows.iter().enumerate() {
        let discount = (1.0 + rate).powi(t as i32);
        npv += cf / discount;
        dnpv -= (t as f64) * cf / (discount * (1.0 + rate));
    }

    (npv, dnpv)
}
