use serde::{Deserialize, Serialize};

/// A normalized job posting as served by the `/jobs` endpoint.
/// Every field is always populated; missing source data is replaced
/// by a default at extraction time, never by omitting the field.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub link: String,
    pub image: String,
}
