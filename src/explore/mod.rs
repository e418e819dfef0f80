//! Aggregations over the cleaned survey table that back the explore view.
//! Pure summaries; all rendering happens in `main`.

use std::collections::HashMap;

use crate::models::CleanedRecord;

/// Respondent counts per country, most represented first.
pub fn country_counts(records: &[CleanedRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.country.as_str()).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(country, n)| (country.to_string(), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Mean salary per country, lowest first.
pub fn mean_salary_by_country(records: &[CleanedRecord]) -> Vec<(String, f64)> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for record in records {
        let entry = sums.entry(record.country.as_str()).or_default();
        entry.0 += record.salary;
        entry.1 += 1;
    }
    let mut out: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(country, (sum, n))| (country.to_string(), sum / n as f64))
        .collect();
    out.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Mean salary per years of professional experience, lowest mean first.
/// Experience values land on half-year steps (the sub-year sentinel is 0.5),
/// so they are bucketed on doubled integer keys.
pub fn mean_salary_by_experience(records: &[CleanedRecord]) -> Vec<(f64, f64)> {
    let mut sums: HashMap<u32, (f64, usize)> = HashMap::new();
    for record in records {
        let key = (record.experience * 2.0).round() as u32;
        let entry = sums.entry(key).or_default();
        entry.0 += record.salary;
        entry.1 += 1;
    }
    let mut out: Vec<(f64, f64)> = sums
        .into_iter()
        .map(|(key, (sum, n))| (f64::from(key) / 2.0, sum / n as f64))
        .collect();
    out.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.total_cmp(&b.0)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationLevel;

    fn record(country: &str, experience: f64, salary: f64) -> CleanedRecord {
        CleanedRecord {
            country: country.to_string(),
            education: EducationLevel::Bachelors,
            experience,
            salary,
        }
    }

    #[test]
    fn counts_sort_descending() {
        let records = vec![
            record("Germany", 5.0, 60_000.0),
            record("Germany", 3.0, 55_000.0),
            record("France", 5.0, 50_000.0),
        ];
        let counts = country_counts(&records);
        assert_eq!(
            counts,
            vec![("Germany".to_string(), 2), ("France".to_string(), 1)]
        );
    }

    #[test]
    fn means_sort_ascending() {
        let records = vec![
            record("Germany", 5.0, 60_000.0),
            record("Germany", 3.0, 80_000.0),
            record("France", 5.0, 50_000.0),
        ];
        let means = mean_salary_by_country(&records);
        assert_eq!(means[0], ("France".to_string(), 50_000.0));
        assert_eq!(means[1], ("Germany".to_string(), 70_000.0));
    }

    #[test]
    fn experience_buckets_keep_half_years() {
        let records = vec![
            record("Germany", 0.5, 40_000.0),
            record("Germany", 0.5, 44_000.0),
            record("Germany", 10.0, 90_000.0),
        ];
        let means = mean_salary_by_experience(&records);
        assert_eq!(means, vec![(0.5, 42_000.0), (10.0, 90_000.0)]);
    }
}
