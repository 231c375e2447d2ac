use std::future::Future;

use reqwest::{header::USER_AGENT, Client};
use serde::{Deserialize, Serialize};

use crate::salary::estimate_salary;
use crate::stats;
use crate::types::{Error, LanguageStats, LanguageStatsTable, Result};

const VACANCIES_URL: &str = "https://api.hh.ru/vacancies";
const MOSCOW_AREA_ID: u32 = 1;
const SEARCH_PERIOD_DAYS: u32 = 30;
const RESULTS_PER_PAGE: u32 = 100;
const TARGET_CURRENCY: &str = "RUR";

#[derive(Debug, Deserialize, Serialize)]
pub struct Salary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Vacancy {
    pub salary: Option<Salary>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchPage {
    pub items: Vec<Vacancy>,
    pub found: u64,
    pub page: u32,
    pub pages: u32,
}

/// Rouble point estimate for one listing, `None` when the listing has no
/// salary block or quotes another currency.
pub fn predict_rub_salary(vacancy: &Vacancy) -> Option<f64> {
    let salary = vacancy.salary.as_ref()?;
    if salary.currency.as_deref() != Some(TARGET_CURRENCY) {
        return None;
    }
    estimate_salary(salary.from, salary.to)
}

async fn fetch_page(
    client: &Client,
    user_agent: &str,
    language: &str,
    page: u32,
) -> Result<SearchPage> {
    log::info!(
        "requesting vacancies from headhunter, page: {}, search: {}",
        page,
        language
    );
    let resp = client
        .get(VACANCIES_URL)
        .header(USER_AGENT, user_agent)
        .query(&[
            ("text", language.to_owned()),
            ("area", MOSCOW_AREA_ID.to_string()),
            ("period", SEARCH_PERIOD_DAYS.to_string()),
            ("per_page", RESULTS_PER_PAGE.to_string()),
            ("page", page.to_string()),
        ])
        .send()
        .await?;
    log::info!("response status to vacancy search: {}", resp.status());
    if !resp.status().is_success() {
        return Err(Error::RequestNotOk(VACANCIES_URL.to_owned(), resp.status()));
    }
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Drains every search page, returning all listings plus the
/// provider-reported total. The `found` counter is re-read on every page,
/// so the last page wins.
async fn collect_pages<F, Fut>(mut fetch: F) -> Result<(Vec<Vacancy>, u64)>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<SearchPage>>,
{
    let mut vacancies = Vec::new();
    let mut found = 0;
    let mut page = 0;
    loop {
        let current = fetch(page).await?;
        found = current.found;
        vacancies.extend(current.items);
        page += 1;
        if page >= current.pages {
            break;
        }
    }
    Ok((vacancies, found))
}

pub async fn fetch_all(
    client: &Client,
    user_agent: &str,
    language: &str,
) -> Result<(Vec<Vacancy>, u64)> {
    collect_pages(|page| fetch_page(client, user_agent, language, page)).await
}

pub async fn language_stats(
    client: &Client,
    user_agent: &str,
    language: &str,
) -> Result<LanguageStats> {
    let (vacancies, found) = fetch_all(client, user_agent, language).await?;
    Ok(stats::aggregate(found, vacancies.iter().map(predict_rub_salary)))
}

/// Collects stats for every language, fetching languages concurrently and
/// reassembling the table in the given order.
pub async fn scrape(
    client: &Client,
    user_agent: &str,
    languages: &[String],
) -> Result<LanguageStatsTable> {
    let results = futures::future::join_all(
        languages
            .iter()
            .map(|language| language_stats(client, user_agent, language)),
    )
    .await;
    stats::collect_into_table(languages, results)
}
