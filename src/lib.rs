pub mod cleaning;
pub mod config;
pub mod dataset;
pub mod error;
pub mod explore;
pub mod model;
pub mod models;
pub mod predict;

pub use cleaning::CleaningConfig;
pub use config::Config;
pub use dataset::SurveyDataset;
pub use error::{Error, Result};
pub use model::ModelBundle;
pub use predict::{SalaryPredictor, SUPPORTED_COUNTRIES};
