//! Monthly cash-flow projection

mod engine;
mod cashflows;

pub use engine::project;
pub use cashflows::CashflowTimeline;
