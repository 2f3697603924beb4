//! Cash-flow projector: investment at month 0, then monthly revenue minus costs

use crate::project::ProjectParameters;
use super::cashflows::CashflowTimeline;

/// Build the monthly cash-flow timeline for a project
///
/// Month `m` (1-based) earns `monthly_revenue * (1 + g)^(m-1) - monthly_cost`,
/// where `g` is the monthly equivalent of the annual growth rate. Month 1 uses
/// the base revenue un-grown. No validation is done: NaN inputs propagate into
/// every flow.
pub fn project(params: &ProjectParameters) -> CashflowTimeline {
    let months = params.project_duration as usize;
    let monthly_revenue = params.monthly_revenue();
    let monthly_cost = params.monthly_cost();
    let growth_factor = 1.0 + params.monthly_growth();

    let mut timeline = CashflowTimeline::with_investment(params.initial_investment, months);
    for month in 1..=params.project_duration {
        let revenue = monthly_revenue * growth_factor.powf((month - 1) as f64);
        timeline.push_month(revenue - monthly_cost);
    }

    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(duration: u32, growth: f64) -> ProjectParameters {
        ProjectParameters::new(10_000.0, 10.0, duration, 24_000.0, growth, 6_000.0, 0.0)
    }

    #[test]
    fn test_timeline_length_and_initial_outflow() {
        let timeline = project(&params(24, 5.0));
        assert_eq!(timeline.len(), 25);
        assert_eq!(timeline.as_slice()[0], -10_000.0);
    }

    #[test]
    fn test_flat_revenue_without_growth() {
        let timeline = project(&params(12, 0.0));
        assert!(timeline.operational().iter().all(|&f| f == 1_500.0));
    }

    #[test]
    fn test_growth_compounds_from_month_one() {
        let timeline = project(&params(13, 12.0));
        let flows = timeline.operational();

        // Month 1 is the base revenue un-grown
        assert_relative_eq!(flows[0], 1_500.0, epsilon = 1e-9);
        // Month 13 carries exactly one year of growth
        assert_relative_eq!(flows[12], 2_000.0 * 1.12 - 500.0, epsilon = 1e-9);
        assert!(flows.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_zero_duration_has_only_month_zero() {
        let timeline = project(&params(0, 0.0));
        assert_eq!(timeline.as_slice(), &[-10_000.0]);
    }

    #[test]
    fn test_nan_propagates() {
        let mut p = params(3, 0.0);
        p.yearly_revenue = f64::NAN;
        let timeline = project(&p);
        assert!(timeline.operational().iter().all(|f| f.is_nan()));
        assert_eq!(timeline.initial_flow(), -10_000.0);
    }
}
