//! CSS-selector parsing of the RemoteOK listings page.

use scraper::{ElementRef, Html, Selector};

/// Upper bound on rows taken from a single page.
pub const MAX_LISTINGS: usize = 8;

/// Raw per-row extraction result. Each field is independently optional;
/// a row missing its title still yields company, location and the rest.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawListing {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    /// Anchor href as found on the page, possibly relative.
    pub link: Option<String>,
    pub image: Option<String>,
}

/// Strategy interface for turning a raw HTML page into listing rows.
/// Keeps the page-structure assumption swappable without touching the
/// network or normalization code.
pub trait ListingParser: Send + Sync {
    fn parse(&self, html: &str) -> Vec<RawListing>;
}

/// Parser for the RemoteOK front page structure: one `tr.job` per
/// listing with nested title/company/location elements.
pub struct RemoteOkParser {
    row: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    link: Selector,
    image: Selector,
}

impl RemoteOkParser {
    pub fn new() -> Self {
        Self {
            row: Selector::parse("tr.job").unwrap(),
            title: Selector::parse(".company_and_position h2").unwrap(),
            company: Selector::parse(".companyLink h3").unwrap(),
            location: Selector::parse(".location").unwrap(),
            link: Selector::parse("a").unwrap(),
            image: Selector::parse("img").unwrap(),
        }
    }

    fn first_text(&self, row: ElementRef<'_>, selector: &Selector) -> Option<String> {
        row.select(selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    }

    fn first_attr(&self, row: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
        row.select(selector)
            .next()
            .and_then(|el| el.value().attr(attr))
            .map(str::to_string)
    }
}

impl Default for RemoteOkParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingParser for RemoteOkParser {
    fn parse(&self, html: &str) -> Vec<RawListing> {
        let document = Html::parse_document(html);

        document
            .select(&self.row)
            .take(MAX_LISTINGS)
            .map(|row| RawListing {
                title: self.first_text(row, &self.title),
                company: self.first_text(row, &self.company),
                location: self.first_text(row, &self.location),
                link: self.first_attr(row, &self.link, "href"),
                image: self.first_attr(row, &self.image, "data-src"),
            })
            .collect()
    }
}
