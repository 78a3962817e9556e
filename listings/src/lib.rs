//! Job Listings Pipeline
//!
//! Fetches live job listings from RemoteOK, normalizes them into
//! [`common::JobListing`] records, and supplies the hardcoded fallback
//! set used whenever the live fetch fails or matches nothing.

pub mod error;
pub mod fallback;
pub mod fetch;
pub mod parse;
pub mod salary;

pub use error::FetchError;
pub use fallback::fallback_listings;
pub use fetch::{ListingFetcher, DEFAULT_LISTINGS_URL};
pub use parse::{ListingParser, RawListing, RemoteOkParser, MAX_LISTINGS};
pub use salary::SALARY_BANDS;
