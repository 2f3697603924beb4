//! Project data structures matching the appraisal form

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PROJECT_DURATION;

fn default_project_duration() -> u32 {
    DEFAULT_PROJECT_DURATION
}

/// Financial parameters of a single investment project
///
/// All amounts are in the caller's currency; rates are percentages
/// (10.0 = 10%). Annual figures are converted to monthly by the projector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectParameters {
    /// Free-form label, carried through to reports only
    #[serde(default, alias = "projectName")]
    pub project_name: String,

    /// Outflow at month 0
    #[serde(default, alias = "initialInvestment")]
    pub initial_investment: f64,

    /// Discount rate (%) applied per period by NPV
    #[serde(default, alias = "discountRate")]
    pub discount_rate: f64,

    /// Number of operational months
    #[serde(default = "default_project_duration", alias = "projectDuration")]
    pub project_duration: u32,

    /// Annualized revenue increase
    #[serde(default, alias = "yearlyRevenue")]
    pub yearly_revenue: f64,

    /// Annual revenue growth (%), compounded monthly
    #[serde(default, alias = "revenueGrowth")]
    pub revenue_growth: f64,

    /// Annual operating costs
    #[serde(default, alias = "operatingCosts")]
    pub operating_costs: f64,

    /// Annual maintenance costs
    #[serde(default, alias = "maintenanceCosts")]
    pub maintenance_costs: f64,

    /// Revenue multiplier for the best case
    #[serde(default, alias = "bestCaseMultiplier")]
    pub best_case_multiplier: f64,

    /// Revenue multiplier for the worst case
    #[serde(default, alias = "worstCaseMultiplier")]
    pub worst_case_multiplier: f64,
}

impl Default for ProjectParameters {
    fn default() -> Self {
        Self {
            project_name: String::new(),
            initial_investment: 0.0,
            discount_rate: 0.0,
            project_duration: DEFAULT_PROJECT_DURATION,
            yearly_revenue: 0.0,
            revenue_growth: 0.0,
            operating_costs: 0.0,
            maintenance_costs: 0.0,
            best_case_multiplier: 0.0,
            worst_case_multiplier: 0.0,
        }
    }
}

impl ProjectParameters {
    /// Create parameters with the core financial fields; multipliers default to 1.0
    pub fn new(
        initial_investment: f64,
        discount_rate: f64,
        project_duration: u32,
        yearly_revenue: f64,
        revenue_growth: f64,
        operating_costs: f64,
        maintenance_costs: f64,
    ) -> Self {
        Self {
            project_name: String::new(),
            initial_investment,
            discount_rate,
            project_duration,
            yearly_revenue,
            revenue_growth,
            operating_costs,
            maintenance_costs,
            best_case_multiplier: 1.0,
            worst_case_multiplier: 1.0,
        }
    }

    /// Set the best/worst revenue multipliers
    pub fn with_multipliers(mut self, best: f64, worst: f64) -> Self {
        self.best_case_multiplier = best;
        self.worst_case_multiplier = worst;
        self
    }

    /// Set the project label
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    /// Copy of these parameters with yearly revenue scaled by `multiplier`.
    /// No other field is touched.
    pub fn with_revenue_multiplier(&self, multiplier: f64) -> Self {
        Self {
            yearly_revenue: self.yearly_revenue * multiplier,
            ..self.clone()
        }
    }

    /// Base revenue for month 1
    pub fn monthly_revenue(&self) -> f64 {
        self.yearly_revenue / 12.0
    }

    /// Combined operating and maintenance cost per month
    pub fn monthly_cost(&self) -> f64 {
        (self.operating_costs + self.maintenance_costs) / 12.0
    }

    /// Monthly rate equivalent to compounding `revenue_growth` over a year
    pub fn monthly_growth(&self) -> f64 {
        (1.0 + self.revenue_growth / 100.0).powf(1.0 / 12.0) - 1.0
    }
}

/// Project fields as raw text, the way a form submits them
///
/// `into_parameters` applies the coercion rules: numbers that cannot be read
/// become 0, durations that cannot be read (or are not positive) fall back to
/// the configured default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProjectForm {
    pub project_name: Option<String>,
    pub initial_investment: Option<String>,
    pub discount_rate: Option<String>,
    pub project_duration: Option<String>,
    pub yearly_revenue: Option<String>,
    pub revenue_growth: Option<String>,
    pub operating_costs: Option<String>,
    pub maintenance_costs: Option<String>,
    pub best_case_multiplier: Option<String>,
    pub worst_case_multiplier: Option<String>,
}

impl RawProjectForm {
    /// Coerce into numeric parameters
    pub fn into_parameters(self, default_duration: u32) -> ProjectParameters {
        let number = |field: &Option<String>| field.as_deref().map(parse_number).unwrap_or(0.0);

        let project_duration = self
            .project_duration
            .as_deref()
            .and_then(parse_integer)
            .filter(|d| *d > 0)
            .and_then(|d| u32::try_from(d).ok())
            .unwrap_or(default_duration);

        ProjectParameters {
            initial_investment: number(&self.initial_investment),
            discount_rate: number(&self.discount_rate),
            project_duration,
            yearly_revenue: number(&self.yearly_revenue),
            revenue_growth: number(&self.revenue_growth),
            operating_costs: number(&self.operating_costs),
            maintenance_costs: number(&self.maintenance_costs),
            best_case_multiplier: number(&self.best_case_multiplier),
            worst_case_multiplier: number(&self.worst_case_multiplier),
            project_name: self.project_name.unwrap_or_default(),
        }
    }
}

/// Read the leading decimal number of `text` ("12.5k" -> 12.5); anything
/// unreadable, NaN or infinite becomes 0.
fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }
    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Read the leading integer of `text` ("36 months" -> 36, "12.9" -> 12)
fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return None;
    }
    text[..end].parse().ok()
}

/// Free-text description of a project, scored by the viability heuristic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategicInput {
    #[serde(default, alias = "projectName")]
    pub project_name: String,

    /// Problem or opportunity statement
    #[serde(default)]
    pub problem: String,

    /// Proposed solution
    #[serde(default)]
    pub solution: String,

    /// Success metrics
    #[serde(default)]
    pub metrics: String,
}

impl StrategicInput {
    pub fn new(
        project_name: impl Into<String>,
        problem: impl Into<String>,
        solution: impl Into<String>,
        metrics: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            problem: problem.into(),
            solution: solution.into(),
            metrics: metrics.into(),
        }
    }

    /// All four fields joined by single spaces and lower-cased
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.project_name, self.problem, self.solution, self.metrics
        )
        .to_lowercase()
    }
}
