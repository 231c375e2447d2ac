use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{0}' returned status {1}")]
    RequestNotOk(String, reqwest::StatusCode),
    #[error("Malformed provider response: '{0}'")]
    MalformedResponse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Aggregated numbers for one language under one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageStats {
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: Option<u64>,
}

/// Per-provider stats keyed by language, in configured language order.
#[derive(Debug, Default, Serialize)]
pub struct LanguageStatsTable {
    rows: Vec<(String, LanguageStats)>,
}

impl LanguageStatsTable {
    pub fn insert(&mut self, language: impl Into<String>, stats: LanguageStats) {
        self.rows.push((language.into(), stats));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LanguageStats)> {
        self.rows.iter().map(|(language, stats)| (language.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<(String, LanguageStats)> for LanguageStatsTable {
    fn from_iter<I: IntoIterator<Item = (String, LanguageStats)>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
