//! Project inputs: financial parameters, strategic descriptions and loaders

mod data;
pub mod loader;

pub use data::{ProjectParameters, RawProjectForm, StrategicInput};
pub use loader::{load_project_json, load_projects_csv, load_projects_from_reader, load_strategy_json};
