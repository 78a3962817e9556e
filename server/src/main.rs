//! Job Board Server
//!
//! Serves the latest scraped job listings over a small REST API using
//! Axum, falling back to a fixed listing set whenever the live fetch
//! comes back empty-handed.

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::get};
use common::JobListing;
use listings::{DEFAULT_LISTINGS_URL, ListingFetcher, fallback_listings};
use tokio::task;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Shared application state: the page the fetcher targets. Injectable so
/// tests can point the pipeline at a local mock server.
struct AppState {
    listings_url: String,
}

/// Builds the application with its explicit route registrations.
fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/jobs", get(jobs_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for GET / (liveness)
async fn root_handler() -> &'static str {
    "Job board backend is running!\n\nEndpoints:\n  GET /jobs - Latest job listings\n\nExample:\n  curl 'http://127.0.0.1:3000/jobs'"
}

/// Handler for GET /jobs
///
/// Always answers 200 with a non-empty JSON array: live scraped rows when
/// the fetch yields any, the fixed fallback set otherwise. Failure detail
/// goes to the log, never to the caller.
async fn jobs_handler(State(state): State<Arc<AppState>>) -> Json<Vec<JobListing>> {
    let url = state.listings_url.clone();
    let fetched = task::spawn_blocking(move || ListingFetcher::new(url).fetch()).await;

    let listings = match fetched {
        Ok(Ok(listings)) if !listings.is_empty() => listings,
        Ok(Ok(_)) => {
            warn!("scrape matched no rows, serving fallback listings");
            fallback_listings()
        }
        Ok(Err(err)) => {
            warn!(error = %err, "scrape failed, serving fallback listings");
            fallback_listings()
        }
        Err(err) => {
            warn!(error = %err, "scrape task aborted, serving fallback listings");
            fallback_listings()
        }
    };

    Json(listings)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("server=info,listings=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let state = Arc::new(AppState {
        listings_url: DEFAULT_LISTINGS_URL.to_string(),
    });

    let addr = "127.0.0.1:3000";
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server running at http://{}", addr);
    info!("try: curl 'http://{}/jobs'", addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use httpmock::prelude::*;
    use listings::SALARY_BANDS;
    use tower::ServiceExt;

    fn test_app(listings_url: String) -> Router {
        app(Arc::new(AppState { listings_url }))
    }

    async fn get_jobs(app: Router) -> (StatusCode, Vec<JobListing>) {
        let response = app
            .oneshot(Request::builder().uri("/jobs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let listings = serde_json::from_slice(&bytes).unwrap();
        (status, listings)
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let response = test_app("http://127.0.0.1:9/".to_string())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains("Job board backend is running!"));
    }

    #[tokio::test]
    async fn serves_fallback_when_upstream_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(500);
        });

        let (status, listings) = get_jobs(test_app(server.url("/"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listings, fallback_listings());
        assert_eq!(listings[0].title, "Frontend Developer");
        assert_eq!(listings[0].company, "TechNova");
        assert_eq!(listings[0].location, "Remote / India");
    }

    #[tokio::test]
    async fn serves_fallback_when_page_matches_no_rows() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .body("<html><body><p>Down for maintenance</p></body></html>");
        });

        let (status, listings) = get_jobs(test_app(server.url("/"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listings, fallback_listings());
    }

    #[tokio::test]
    async fn serves_scraped_rows_when_the_page_matches() {
        let page = concat!(
            "<html><body><table>",
            "<tr class=\"job\">",
            "<td class=\"company_and_position\"><h2>Rust Engineer</h2>",
            "<span class=\"companyLink\"><h3>Ferrous Works</h3></span></td>",
            "<td><div class=\"location\">Berlin</div></td>",
            "<td><a href=\"/remote-jobs/1\">view</a></td>",
            "</tr>",
            "</table></body></html>",
        );
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200).body(page);
        });

        let (status, listings) = get_jobs(test_app(server.url("/"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Rust Engineer");
        assert_eq!(listings[0].company, "Ferrous Works");
        assert_eq!(listings[0].location, "Berlin");
        assert_eq!(
            listings[0].description,
            "Exciting opportunity at Ferrous Works as a Rust Engineer."
        );
        assert!(SALARY_BANDS.contains(&listings[0].salary.as_str()));
    }

    #[tokio::test]
    async fn jobs_always_respond_200_within_contract_bounds() {
        // Repeated calls against a dead upstream: every response is 200
        // and between one and eight fully populated records.
        for _ in 0..3 {
            let (status, listings) = get_jobs(test_app("http://127.0.0.1:9/".to_string())).await;
            assert_eq!(status, StatusCode::OK);
            assert!((1..=8).contains(&listings.len()));
            for listing in &listings {
                assert!(!listing.title.is_empty());
                assert!(!listing.company.is_empty());
                assert!(!listing.location.is_empty());
                assert!(!listing.salary.is_empty());
                assert!(!listing.description.is_empty());
                assert!(!listing.link.is_empty());
                assert!(!listing.image.is_empty());
            }
        }
    }
}
