//! Cash-flow timeline produced by the projector

use serde::{Deserialize, Serialize};

/// Monthly net cash flows of a project
///
/// Index 0 is the initial outflow (`-initial_investment`); indices 1..=N are
/// the operational months. Serializes as a plain array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashflowTimeline {
    flows: Vec<f64>,
}

impl CashflowTimeline {
    /// Start a timeline with the month-0 outflow for `initial_investment`
    pub fn with_investment(initial_investment: f64, months: usize) -> Self {
        let mut flows = Vec::with_capacity(months + 1);
        flows.push(-initial_investment);
        Self { flows }
    }

    /// Append the net flow for the next month
    pub(crate) fn push_month(&mut self, net_flow: f64) {
        self.flows.push(net_flow);
    }

    /// Month-0 flow (the negated investment)
    pub fn initial_flow(&self) -> f64 {
        self.flows.first().copied().unwrap_or(0.0)
    }

    /// Monthly flows excluding month 0
    pub fn operational(&self) -> &[f64] {
        self.flows.get(1..).unwrap_or(&[])
    }

    /// Full timeline including month 0
    pub fn as_slice(&self) -> &[f64] {
        &self.flows
    }

    /// Number of operational months
    pub fn months(&self) -> usize {
        self.flows.len().saturating_sub(1)
    }

    /// Total entries including month 0
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Plain sum of operational flows
    pub fn operational_total(&self) -> f64 {
        self.operational().iter().sum()
    }
}

impl From<Vec<f64>> for CashflowTimeline {
    fn from(flows: Vec<f64>) -> Self {
        Self { flows }
    }
}
