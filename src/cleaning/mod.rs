use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{CleanedRecord, EducationLevel, RawSurveyRecord};

/// Sentinel bucket for countries below the frequency cutoff. Rows mapped to
/// it are excluded from the cleaned table entirely.
pub const OTHER: &str = "Other";

const LESS_THAN_ONE_YEAR: &str = "Less than 1 year";

/// Ordered substring rules for collapsing free-text education answers.
/// Evaluated top to bottom, first match wins; the order is load-bearing
/// because a survey answer can mention more than one degree.
const EDUCATION_RULES: [(&str, EducationLevel); 3] = [
    ("Bachelor’s degree", EducationLevel::Bachelors),
    ("Master’s degree", EducationLevel::Masters),
    ("Professional degree", EducationLevel::Professional),
];

#[derive(Debug, Clone)]
pub struct CleaningConfig {
    /// Only respondents with exactly this employment status are kept.
    pub employment: String,
    /// Minimum respondent count for a country to keep its own label.
    pub country_cutoff: usize,
    pub min_salary: f64,
    pub max_salary: f64,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            employment: "Employed, full-time".to_string(),
            country_cutoff: 400,
            min_salary: 10_000.0,
            max_salary: 250_000.0,
        }
    }
}

/// Builds the collapse map for a categorical column: labels with at least
/// `cutoff` occurrences map to themselves, the rest to [`OTHER`]. Total over
/// the input; no label is dropped or invented.
pub fn shorten_categories(
    counts: &HashMap<String, usize>,
    cutoff: usize,
) -> HashMap<String, String> {
    counts
        .iter()
        .map(|(label, &count)| {
            let target = if count >= cutoff {
                label.clone()
            } else {
                OTHER.to_string()
            };
            (label.clone(), target)
        })
        .collect()
}

/// Normalizes a `YearsCodePro` answer to a number of years. The survey's
/// "fewer than one year" sentinel becomes 0.5; anything else must parse as a
/// float. A non-numeric, non-sentinel answer (including the survey's
/// "More than 50 years") is a data-contract violation and errors out rather
/// than being coerced.
pub fn clean_experience(x: &str) -> Result<f64> {
    if x == LESS_THAN_ONE_YEAR {
        return Ok(0.5);
    }
    x.parse::<f64>()
        .map_err(|_| Error::InvalidExperience(x.to_string()))
}

/// Collapses a free-text education answer into one of the four canonical
/// buckets via the ordered rule table; anything unmatched falls into the
/// catch-all.
pub fn clean_education(x: &str) -> EducationLevel {
    for (pattern, bucket) in EDUCATION_RULES {
        if x.contains(pattern) {
            return bucket;
        }
    }
    EducationLevel::LessThanBachelors
}

/// Runs the full cleaning pipeline over raw survey rows:
/// drop rows with any null among the five columns, keep only the configured
/// employment status, collapse rare countries into [`OTHER`], apply the
/// salary bounds (inclusive at both ends), drop collapsed-country rows, then
/// normalize experience and education per row.
///
/// The collapse map is built from counts taken after null-dropping and
/// before the sentinel filter; moving it breaks which countries survive.
pub fn clean_records(
    rows: &[RawSurveyRecord],
    config: &CleaningConfig,
) -> Result<Vec<CleanedRecord>> {
    let total = rows.len();

    let complete: Vec<(&str, &str, &str, f64)> = rows
        .iter()
        .filter_map(|row| {
            let country = row.country.as_deref()?;
            let education = row.education.as_deref()?;
            let years = row.years_code_pro.as_deref()?;
            let employment = row.employment.as_deref()?;
            let salary = row.salary?;
            (employment == config.employment).then_some((country, education, years, salary))
        })
        .collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    for (country, ..) in &complete {
        *counts.entry((*country).to_string()).or_default() += 1;
    }
    let country_map = shorten_categories(&counts, config.country_cutoff);

    let mut cleaned = Vec::new();
    for (country, education, years, salary) in complete {
        if salary > config.max_salary || salary < config.min_salary {
            continue;
        }
        let country = country_map.get(country).map(String::as_str).unwrap_or(OTHER);
        if country == OTHER {
            continue;
        }
        cleaned.push(CleanedRecord {
            country: country.to_string(),
            education: clean_education(education),
            experience: clean_experience(years)?,
            salary,
        });
    }

    // The catch-all swallowing most rows usually means the degree labels
    // drifted (e.g. ASCII apostrophes) and the substring rules stopped
    // matching, not that most respondents lack a degree.
    let catch_all = cleaned
        .iter()
        .filter(|r| r.education == EducationLevel::LessThanBachelors)
        .count();
    if !cleaned.is_empty() && catch_all * 2 > cleaned.len() {
        tracing::warn!(
            "{} of {} cleaned rows fell into the education catch-all bucket; check the survey's degree labels",
            catch_all,
            cleaned.len()
        );
    }

    tracing::info!("Cleaned {} of {} raw survey rows", cleaned.len(), total);
    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        country: &str,
        education: &str,
        years: &str,
        employment: &str,
        salary: f64,
    ) -> RawSurveyRecord {
        RawSurveyRecord {
            country: Some(country.to_string()),
            education: Some(education.to_string()),
            years_code_pro: Some(years.to_string()),
            employment: Some(employment.to_string()),
            salary: Some(salary),
        }
    }

    fn test_config() -> CleaningConfig {
        CleaningConfig {
            country_cutoff: 2,
            ..CleaningConfig::default()
        }
    }

    #[test]
    fn shorten_categories_is_total() {
        let counts = HashMap::from([
            ("Germany".to_string(), 500),
            ("France".to_string(), 400),
            ("Elbonia".to_string(), 3),
        ]);
        let map = shorten_categories(&counts, 400);

        assert_eq!(map.len(), counts.len());
        assert_eq!(map["Germany"], "Germany");
        assert_eq!(map["France"], "France");
        assert_eq!(map["Elbonia"], OTHER);
    }

    #[test]
    fn shorten_categories_empty_input() {
        let map = shorten_categories(&HashMap::new(), 400);
        assert!(map.is_empty());
    }

    #[test]
    fn experience_sentinel_maps_to_half_year() {
        assert_eq!(clean_experience("Less than 1 year").unwrap(), 0.5);
    }

    #[test]
    fn experience_numeric_parses() {
        assert_eq!(clean_experience("15").unwrap(), 15.0);
        assert_eq!(clean_experience("2.5").unwrap(), 2.5);
    }

    #[test]
    fn experience_garbage_fails() {
        assert!(clean_experience("abc").is_err());
        assert!(clean_experience("More than 50 years").is_err());
    }

    #[test]
    fn education_first_match_wins() {
        // An answer naming both degrees resolves to the first rule.
        let both = "Bachelor’s degree followed by a Master’s degree";
        assert_eq!(clean_education(both), EducationLevel::Bachelors);
    }

    #[test]
    fn education_buckets() {
        assert_eq!(
            clean_education("Master’s degree (M.A., M.S., M.Eng., MBA, etc.)"),
            EducationLevel::Masters
        );
        assert_eq!(
            clean_education("Professional degree (JD, MD, Ph.D, Ed.D, etc.)"),
            EducationLevel::Professional
        );
        assert_eq!(
            clean_education("Some college/university study without earning a degree"),
            EducationLevel::LessThanBachelors
        );
        assert_eq!(
            clean_education("Primary/elementary school"),
            EducationLevel::LessThanBachelors
        );
    }

    #[test]
    fn education_ascii_apostrophe_falls_through() {
        // ASCII apostrophe does not match the survey's U+2019 labels.
        assert_eq!(
            clean_education("Bachelor's degree (B.A., B.S., B.Eng., etc.)"),
            EducationLevel::LessThanBachelors
        );
    }

    #[test]
    fn rare_country_rows_are_dropped() {
        let rows = vec![
            raw("Germany", "Master’s degree", "5", "Employed, full-time", 60000.0),
            raw("Germany", "Master’s degree", "3", "Employed, full-time", 55000.0),
            raw("Elbonia", "Master’s degree", "Less than 1 year", "Employed, full-time", 50000.0),
        ];
        let cleaned = clean_records(&rows, &test_config()).unwrap();

        assert_eq!(cleaned.len(), 2);
        assert!(cleaned.iter().all(|r| r.country == "Germany"));
    }

    #[test]
    fn non_full_time_rows_are_dropped() {
        let rows = vec![
            raw("Germany", "Master’s degree", "5", "Employed, full-time", 60000.0),
            raw("Germany", "Master’s degree", "5", "Employed, full-time", 62000.0),
            raw("Germany", "Master’s degree", "5", "Student, full-time", 60000.0),
            raw("Germany", "Master’s degree", "5", "Independent contractor", 60000.0),
        ];
        let cleaned = clean_records(&rows, &test_config()).unwrap();

        // The student and contractor rows are dropped even though every
        // other field is valid; they never count toward the cutoff either.
        assert_eq!(cleaned.len(), 2);
    }

    #[test]
    fn salary_bounds_are_inclusive() {
        let rows = vec![
            raw("Germany", "Master’s degree", "5", "Employed, full-time", 5_000.0),
            raw("Germany", "Master’s degree", "5", "Employed, full-time", 10_000.0),
            raw("Germany", "Master’s degree", "5", "Employed, full-time", 250_000.0),
            raw("Germany", "Master’s degree", "5", "Employed, full-time", 250_001.0),
        ];
        let cleaned = clean_records(&rows, &test_config()).unwrap();

        let salaries: Vec<f64> = cleaned.iter().map(|r| r.salary).collect();
        assert_eq!(salaries, vec![10_000.0, 250_000.0]);
    }

    #[test]
    fn null_rows_are_dropped() {
        let rows = vec![
            RawSurveyRecord {
                country: Some("Germany".to_string()),
                education: None,
                years_code_pro: Some("5".to_string()),
                employment: Some("Employed, full-time".to_string()),
                salary: Some(60000.0),
            },
            RawSurveyRecord {
                salary: None,
                ..raw("Germany", "Master’s degree", "5", "Employed, full-time", 0.0)
            },
        ];
        let cleaned = clean_records(&rows, &test_config()).unwrap();
        assert!(cleaned.is_empty());
    }

    #[test]
    fn cleaned_rows_carry_normalized_fields() {
        let rows = vec![
            raw("Germany", "Master’s degree", "Less than 1 year", "Employed, full-time", 60000.0),
            raw("Germany", "Bachelor’s degree (B.A., B.S.)", "7", "Employed, full-time", 70000.0),
        ];
        let cleaned = clean_records(&rows, &test_config()).unwrap();

        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned[0].education, EducationLevel::Masters);
        assert_eq!(cleaned[0].experience, 0.5);
        assert_eq!(cleaned[1].education, EducationLevel::Bachelors);
        assert_eq!(cleaned[1].experience, 7.0);
    }

    #[test]
    fn bad_experience_surfaces_as_error() {
        let rows = vec![
            raw("Germany", "Master’s degree", "a while", "Employed, full-time", 60000.0),
            raw("Germany", "Master’s degree", "5", "Employed, full-time", 60000.0),
        ];
        assert!(clean_records(&rows, &test_config()).is_err());
    }
}
