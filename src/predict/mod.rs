use crate::error::{Error, Result};
use crate::model::ModelBundle;
use crate::models::EducationLevel;

/// Countries offered on the predict path, matching the survey labels the
/// country encoder was fitted on. This list must stay a subset of that
/// vocabulary; [`SalaryPredictor::new`] checks it once at startup instead of
/// letting a mismatch surface on the first prediction.
pub const SUPPORTED_COUNTRIES: [&str; 12] = [
    "United States of America",
    "Germany",
    "United Kingdom of Great Britain and Northern Ireland",
    "Ukraine",
    "India",
    "France",
    "Canada",
    "Brazil",
    "Spain",
    "Italy",
    "Netherlands",
    "Australia",
];

/// Number of features the regressor consumes: country, education,
/// experience, in that order.
const N_FEATURES: usize = 3;

pub struct SalaryPredictor {
    bundle: ModelBundle,
}

impl SalaryPredictor {
    /// Wraps a loaded bundle after verifying it is internally usable and
    /// that every choice the CLI offers is in the encoders' fitted
    /// vocabularies.
    pub fn new(bundle: ModelBundle) -> Result<Self> {
        bundle.model.validate(N_FEATURES)?;

        for country in SUPPORTED_COUNTRIES {
            if !bundle.le_country.contains(country) {
                return Err(Error::UnknownCategory {
                    field: "country",
                    value: country.to_string(),
                });
            }
        }
        for education in EducationLevel::ALL {
            if !bundle.le_education.contains(education.as_str()) {
                return Err(Error::UnknownCategory {
                    field: "education",
                    value: education.as_str().to_string(),
                });
            }
        }

        Ok(Self { bundle })
    }

    /// Produces a point salary estimate. The feature order is fixed by
    /// training: country code, education code, years of experience.
    pub fn predict(
        &self,
        country: &str,
        education: EducationLevel,
        experience: f64,
    ) -> Result<f64> {
        let country_code =
            self.bundle
                .le_country
                .transform(country)
                .ok_or_else(|| Error::UnknownCategory {
                    field: "country",
                    value: country.to_string(),
                })?;
        let education_code = self
            .bundle
            .le_education
            .transform(education.as_str())
            .ok_or_else(|| Error::UnknownCategory {
                field: "education",
                value: education.as_str().to_string(),
            })?;

        let features = [f64::from(country_code), f64::from(education_code), experience];
        Ok(self.bundle.model.predict(&features))
    }
}
