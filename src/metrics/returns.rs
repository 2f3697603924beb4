//! Return on investment and payback period

/// Return on investment as a percentage: `(total_return - investment) / investment * 100`
///
/// Zero investment yields 0 rather than a division by zero.
pub fn roi(investment: f64, total_return: f64) -> f64 {
    if investment == 0.0 {
        return 0.0;
    }
    (total_return - investment) / investment * 100.0
}

/// Fractional month index at which the investment is recovered
///
/// Walks the cumulative balance from `-investment` through `flows`. At the first
/// index `i` where the balance reaches zero or more, returns
/// `i + surplus / flows[i]`, interpolating within the crossing month by the
/// balance carried out of it. If the balance was already non-negative going
/// into month `i` (nothing left to recover), returns `i` itself.
/// When the balance never turns non-negative the horizon length
/// (`flows.len()`) is returned.
pub fn payback(investment: f64, flows: &[f64]) -> f64 {
    let mut balance = -investment;
    for (i, &flow) in flows.iter().enumerate() {
        let previous = balance;
        balance += flow;
        if balance >= 0.0 {
            if previous >= 0.0 {
                return i as f64;
            }
            // previous < 0 <= balance, so flow > 0 here
            return i as f64 + balance / flow;
        }
    }

    flows.len() as f64
}
