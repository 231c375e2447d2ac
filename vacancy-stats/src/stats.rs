use crate::types::{Error, LanguageStats, LanguageStatsTable, Result};

/// Folds per-listing salary estimates into the stats record for one
/// language. Listings without a usable estimate are dropped; the average
/// is the truncated mean of what remains, absent when nothing remains.
pub fn aggregate(
    vacancies_found: u64,
    estimates: impl IntoIterator<Item = Option<f64>>,
) -> LanguageStats {
    let salaries: Vec<f64> = estimates.into_iter().flatten().collect();
    let average_salary = if salaries.is_empty() {
        None
    } else {
        Some((salaries.iter().sum::<f64>() / salaries.len() as f64) as u64)
    };
    LanguageStats {
        vacancies_found,
        vacancies_processed: salaries.len() as u64,
        average_salary,
    }
}

/// Zips per-language results back into a table in configured language
/// order. A malformed response loses that language only; transport and
/// HTTP failures abort the whole run.
pub fn collect_into_table(
    languages: &[String],
    results: Vec<Result<LanguageStats>>,
) -> Result<LanguageStatsTable> {
    let mut table = LanguageStatsTable::default();
    for (language, result) in languages.iter().zip(results) {
        match result {
            Ok(stats) => table.insert(language.clone(), stats),
            Err(error @ Error::MalformedResponse(_)) => {
                log::error!("skipping language '{}': {}", language, error);
            }
            Err(error) => return Err(error),
        }
    }
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_aggregate_filters_absent_estimates() {
        let stats = aggregate(10, vec![Some(100_000.0), Some(120_000.0), None]);
        assert_eq!(stats.vacancies_found, 10);
        assert_eq!(stats.vacancies_processed, 2);
        assert_eq!(stats.average_salary, Some(110_000));
    }

    #[test]
    fn test_aggregate_without_usable_estimates() {
        let stats = aggregate(7, vec![None, None]);
        assert_eq!(stats.vacancies_processed, 0);
        assert_eq!(stats.average_salary, None);
    }

    #[test]
    fn test_aggregate_truncates_the_mean() {
        let stats = aggregate(3, vec![Some(100_000.0), Some(100_001.0)]);
        assert_eq!(stats.average_salary, Some(100_000));
    }

    fn malformed() -> Error {
        serde_json::from_str::<u64>("not a number").unwrap_err().into()
    }

    #[test]
    fn test_malformed_response_drops_only_that_language() {
        let languages = vec!["Python".to_owned(), "Ruby".to_owned()];
        let results = vec![Err(malformed()), Ok(aggregate(5, vec![Some(90_000.0)]))];
        let table = collect_into_table(&languages, results).unwrap();
        assert_eq!(table.len(), 1);
        let (language, stats) = table.iter().next().unwrap();
        assert_eq!(language, "Ruby");
        assert_eq!(stats.vacancies_found, 5);
    }

    #[test]
    fn test_http_failure_aborts_the_run() {
        let languages = vec!["Python".to_owned()];
        let results = vec![Err(Error::RequestNotOk(
            "https://example.com".to_owned(),
            reqwest::StatusCode::BAD_GATEWAY,
        ))];
        assert!(collect_into_table(&languages, results).is_err());
    }
}
