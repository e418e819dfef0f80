use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the raw survey CSV, restricted to the columns the cleaning
/// pipeline consumes. The survey writes missing answers as `NA` or an empty
/// field; both deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSurveyRecord {
    #[serde(rename = "Country", deserialize_with = "de_opt_string", default)]
    pub country: Option<String>,
    #[serde(rename = "EdLevel", deserialize_with = "de_opt_string", default)]
    pub education: Option<String>,
    #[serde(rename = "YearsCodePro", deserialize_with = "de_opt_string", default)]
    pub years_code_pro: Option<String>,
    #[serde(rename = "Employment", deserialize_with = "de_opt_string", default)]
    pub employment: Option<String>,
    #[serde(rename = "ConvertedCompYearly", deserialize_with = "de_opt_f64", default)]
    pub salary: Option<f64>,
}

fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty() && v.as_str() != "NA"))
}

fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") | Some("NA") => Ok(None),
        Some(v) => v.parse::<f64>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// The four canonical education buckets the model was trained on.
///
/// The survey labels use the typographic right single quote (U+2019), not the
/// ASCII apostrophe. `as_str` must reproduce those labels byte-for-byte:
/// both the substring matching in the cleaning pipeline and the education
/// encoder's vocabulary depend on the exact character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    Bachelors,
    Masters,
    Professional,
    LessThanBachelors,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 4] = [
        EducationLevel::Bachelors,
        EducationLevel::Masters,
        EducationLevel::Professional,
        EducationLevel::LessThanBachelors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Bachelors => "Bachelor’s degree",
            EducationLevel::Masters => "Master’s degree",
            EducationLevel::Professional => "Professional degree",
            EducationLevel::LessThanBachelors => "Less than a Bachelors",
        }
    }

    /// Parses a canonical label back into its bucket. Accepts the ASCII
    /// apostrophe as a typing convenience on the CLI; the stored labels
    /// always use U+2019.
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label.replace('\'', "\u{2019}");
        Self::ALL.into_iter().find(|e| e.as_str() == normalized)
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An analysis-ready survey row. Produced only by the cleaning pipeline;
/// every field is non-null and salary sits inside the configured bounds.
#[derive(Debug, Clone, Serialize)]
pub struct CleanedRecord {
    pub country: String,
    pub education: EducationLevel,
    pub experience: f64,
    pub salary: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_labels_round_trip() {
        for level in EducationLevel::ALL {
            assert_eq!(EducationLevel::parse(level.as_str()), Some(level));
        }
        assert_eq!(EducationLevel::parse("PhD"), None);
    }

    #[test]
    fn education_parse_accepts_ascii_apostrophe() {
        assert_eq!(
            EducationLevel::parse("Bachelor's degree"),
            Some(EducationLevel::Bachelors)
        );
    }

    #[test]
    fn na_fields_deserialize_to_none() {
        let data = "Country,EdLevel,YearsCodePro,Employment,ConvertedCompYearly\n\
                    Germany,NA,5,\"Employed, full-time\",NA\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: RawSurveyRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(row.country.as_deref(), Some("Germany"));
        assert_eq!(row.education, None);
        assert_eq!(row.salary, None);
        assert_eq!(row.employment.as_deref(), Some("Employed, full-time"));
    }

    #[test]
    fn numeric_salary_parses() {
        let data = "Country,EdLevel,YearsCodePro,Employment,ConvertedCompYearly\n\
                    Germany,Master’s degree,5,\"Employed, full-time\",62000\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let row: RawSurveyRecord = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(row.salary, Some(62000.0));
    }
}
