//! Load projects from JSON files and CSV batches

use super::{ProjectParameters, RawProjectForm, StrategicInput};
use crate::error::{AppraisalError, Result};
use csv::Reader;
use std::fs;
use std::path::Path;

/// Raw CSV row; every cell is kept as text and coerced like form input
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ProjectName", default)]
    project_name: Option<String>,
    #[serde(rename = "InitialInvestment", default)]
    initial_investment: Option<String>,
    #[serde(rename = "DiscountRate", default)]
    discount_rate: Option<String>,
    #[serde(rename = "ProjectDuration", default)]
    project_duration: Option<String>,
    #[serde(rename = "YearlyRevenue", default)]
    yearly_revenue: Option<String>,
    #[serde(rename = "RevenueGrowth", default)]
    revenue_growth: Option<String>,
    #[serde(rename = "OperatingCosts", default)]
    operating_costs: Option<String>,
    #[serde(rename = "MaintenanceCosts", default)]
    maintenance_costs: Option<String>,
    #[serde(rename = "BestCaseMultiplier", default)]
    best_case_multiplier: Option<String>,
    #[serde(rename = "WorstCaseMultiplier", default)]
    worst_case_multiplier: Option<String>,
}

impl CsvRow {
    fn into_form(self) -> RawProjectForm {
        RawProjectForm {
            project_name: self.project_name,
            initial_investment: self.initial_investment,
            discount_rate: self.discount_rate,
            project_duration: self.project_duration,
            yearly_revenue: self.yearly_revenue,
            revenue_growth: self.revenue_growth,
            operating_costs: self.operating_costs,
            maintenance_costs: self.maintenance_costs,
            best_case_multiplier: self.best_case_multiplier,
            worst_case_multiplier: self.worst_case_multiplier,
        }
    }
}

/// Load a single project from a JSON file
///
/// A missing duration is filled with `default_duration`, as for CSV rows.
pub fn load_project_json<P: AsRef<Path>>(path: P, default_duration: u32) -> Result<ProjectParameters> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| AppraisalError::io(path, e))?;
    parse_project_json(&text, default_duration)
}

fn parse_project_json(text: &str, default_duration: u32) -> Result<ProjectParameters> {
    let mut value: serde_json::Value = serde_json::from_str(text)?;
    if let Some(fields) = value.as_object_mut() {
        if !fields.contains_key("project_duration") && !fields.contains_key("projectDuration") {
            fields.insert("project_duration".to_string(), default_duration.into());
        }
    }
    Ok(serde_json::from_value(value)?)
}

/// Load a strategic description from a JSON file
pub fn load_strategy_json<P: AsRef<Path>>(path: P) -> Result<StrategicInput> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| AppraisalError::io(path, e))?;
    Ok(serde_json::from_str(&text)?)
}

/// Load all projects from a CSV file
pub fn load_projects_csv<P: AsRef<Path>>(path: P, default_duration: u32) -> Result<Vec<ProjectParameters>> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| AppraisalError::io(path, e))?;
    let projects = load_projects_from_reader(file, default_duration)?;
    log::info!("Loaded {} projects from {}", projects.len(), path.display());
    Ok(projects)
}

/// Load projects from any reader (e.g., string buffer, stdin)
pub fn load_projects_from_reader<R: std::io::Read>(
    reader: R,
    default_duration: u32,
) -> Result<Vec<ProjectParameters>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut projects = Vec::new();

    for (index, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result.map_err(|e| AppraisalError::InvalidRow {
            row: index + 1,
            message: e.to_string(),
        })?;
        projects.push(row.into_form().into_parameters(default_duration));
    }

    Ok(projects)
}
