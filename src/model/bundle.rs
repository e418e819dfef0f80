use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use super::{DecisionTreeRegressor, LabelEncoder};
use crate::error::{Error, Result};

/// The serialized training artifact: the regressor plus the two label
/// encoders it was fitted with. All three keys are required; a bundle with
/// any of them missing never reaches the predictor.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelBundle {
    pub model: DecisionTreeRegressor,
    pub le_country: LabelEncoder,
    pub le_education: LabelEncoder,
}

impl ModelBundle {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            Error::ModelBundle(format!("cannot open {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            Error::ModelBundle(format!("malformed bundle {}: {}", path.display(), e))
        })
    }
}
