use std::future::Future;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::salary::estimate_salary;
use crate::stats;
use crate::types::{Error, LanguageStats, LanguageStatsTable, Result};

const VACANCIES_URL: &str = "https://api.superjob.ru/2.0/vacancies/";
const API_KEY_HEADER: &str = "X-Api-App-Id";
const MOSCOW_TOWN_ID: u32 = 4;
const PROGRAMMING_CATALOGUE_ID: u32 = 48;
const MAX_VACANCIES: usize = 500;
const TARGET_CURRENCY: &str = "rub";

#[derive(Debug, Deserialize, Serialize)]
pub struct Vacancy {
    pub currency: Option<String>,
    pub payment_from: Option<f64>,
    pub payment_to: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchPage {
    pub objects: Vec<Vacancy>,
    pub total: u64,
}

/// Rouble point estimate for one listing, `None` when the currency field
/// is empty or quotes another currency.
pub fn predict_rub_salary(vacancy: &Vacancy) -> Option<f64> {
    match vacancy.currency.as_deref() {
        Some(currency) if !currency.is_empty() && currency == TARGET_CURRENCY => {}
        _ => return None,
    }
    estimate_salary(vacancy.payment_from, vacancy.payment_to)
}

async fn fetch_page(
    client: &Client,
    api_key: &str,
    language: &str,
    page: u32,
) -> Result<SearchPage> {
    log::info!(
        "requesting vacancies from superjob, page: {}, search: {}",
        page,
        language
    );
    let resp = client
        .get(VACANCIES_URL)
        .header(API_KEY_HEADER, api_key)
        .query(&[
            ("keyword", language.to_owned()),
            ("town", MOSCOW_TOWN_ID.to_string()),
            ("catalogues", PROGRAMMING_CATALOGUE_ID.to_string()),
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

/// Accumulates pages until the first page's `total` is reached or the
/// 500-listing cap kicks in. The cap keeps a popular keyword from
/// dragging the run through thousands of listings.
async fn collect_pages<F, Fut>(mut fetch: F) -> Result<(Vec<Vacancy>, u64)>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<SearchPage>>,
{
    let first = fetch(0).await?;
    let total = first.total;
    let mut vacancies = first.objects;
    let mut page = 1;
    while (vacancies.len() as u64) < total && vacancies.len() < MAX_VACANCIES {
        let current = fetch(page).await?;
        if current.objects.is_empty() {
            // The reported total can overstate what the API will serve.
            break;
        }
        vacancies.extend(current.objects);
        page += 1;
    }
    vacancies.truncate(MAX_VACANCIES);
    Ok((vacancies, total))
}

pub async fn fetch_all(
    client: &Client,
    api_key: &str,
    language: &str,
) -> Result<(Vec<Vacancy>, u64)> {
    collect_pages(|page| fetch_page(client, api_key, language, page)).await
}

pub async fn language_stats(
    client: &Client,
    api_key: &str,
    language: &str,
) -> Result<LanguageStats> {
    let (vacancies, found) = fetch_all(client, api_key, language).await?;
    Ok(stats::aggregate(found, vacancies.iter().map(predict_rub_salary)))
}

/// Collects stats for every language, fetching languages concurrently and
/// reassembling the table in the given order.
pub async fn scrape(
    client: &Client,
    api_key: &str,
    languages: &[String],
) -> Result<LanguageStatsTable> {
    let results = futures::future::join_all(
        languages
            .iter()
            .map(|language| language_stats(client, api_key, language)),
    )
    .await;
    stats::collect_into_table(languages, results)
}
