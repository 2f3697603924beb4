//! Discounting of monthly cash flows

/// Discount factor for `periods` periods at `rate_pct` percent per period
pub fn discount_factor(rate_pct: f64, periods: u32) -> f64 {
    (1.0 + rate_pct / 100.0).powi(periods as i32).recip()
}

/// Net present value of `flows` at `rate_pct` percent per period
///
/// `flows[i]` is discounted by `(1 + rate)^(i + 1)`: the first flow is taken to
/// occur at the end of period 1. An empty slice is worth 0.
pub fn npv(flows: &[f64], rate_pct: f64) -> f64 {
    flows
        .iter()
        .enumerate()
        .map(|(i, flow)| flow * discount_factor(rate_pct, i as u32 + 1))
        .sum()
}
