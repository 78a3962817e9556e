//! Live listing retrieval and normalization.

use std::time::Duration;

use common::JobListing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::Result;
use crate::parse::{ListingParser, RawListing, RemoteOkParser};
use crate::salary::pick_salary;

/// Front page scraped for live listings.
pub const DEFAULT_LISTINGS_URL: &str = "https://remoteok.com/";

/// Browser-like client identifier; the page serves bot traffic differently.
const USER_AGENT: &str = "Mozilla/5.0";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_TITLE: &str = "Software Engineer";
const DEFAULT_COMPANY: &str = "Remote Company";
const DEFAULT_LOCATION: &str = "Remote";
const DEFAULT_IMAGE: &str = "https://cdn-icons-png.flaticon.com/512/942/942799.png";

/// Fetches listings from one fixed page and normalizes them into
/// [`JobListing`] records.
///
/// Built fresh per request: holds no connection state between calls and
/// caches nothing. The random source is owned so callers can seed it for
/// deterministic salary output.
pub struct ListingFetcher {
    url: String,
    parser: Box<dyn ListingParser>,
    rng: StdRng,
}

impl ListingFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            parser: Box::new(RemoteOkParser::new()),
            rng: StdRng::from_entropy(),
        }
    }

    /// Same as [`new`](Self::new) with a fixed rng seed, so salary
    /// sampling is reproducible.
    pub fn seeded(url: impl Into<String>, seed: u64) -> Self {
        let mut fetcher = Self::new(url);
        fetcher.rng = StdRng::seed_from_u64(seed);
        fetcher
    }

    /// Swaps the page-structure strategy.
    pub fn with_parser(mut self, parser: Box<dyn ListingParser>) -> Self {
        self.parser = parser;
        self
    }

    /// One GET, one parse. Any transport failure aborts the whole attempt;
    /// there is no retry and no partial result. Zero matched rows is a
    /// valid `Ok` outcome and the caller's cue to fall back.
    pub fn fetch(&mut self) -> Result<Vec<JobListing>> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;

        let body = client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;

        let rows = self.parser.parse(&body);
        debug!(rows = rows.len(), url = %self.url, "parsed listing page");

        Ok(rows.into_iter().map(|raw| self.normalize(raw)).collect())
    }

    fn normalize(&mut self, raw: RawListing) -> JobListing {
        let title = raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let company = raw.company.unwrap_or_else(|| DEFAULT_COMPANY.to_string());
        let location = raw.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string());
        let link = raw
            .link
            .map(|href| self.absolutize(&href))
            .unwrap_or_else(|| "#".to_string());
        let image = raw.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string());
        let salary = pick_salary(&mut self.rng);
        let description = format!("Exciting opportunity at {} as a {}.", company, title);

        JobListing {
            title,
            company,
            location,
            salary,
            description,
            link,
            image,
        }
    }

    fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.url.trim_end_matches('/'), href)
        }
    }
}
