//! Portfolio Catalog - shared state and listing queries for the performer site

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod query;
pub mod validation;
pub mod views;

use serde::Serialize;

use catalog::CatalogStore;
use config::CatalogConfig;
use query::listing::ListingCriteria;

/// Everything the public pages and the dashboard would render for a freshly
/// loaded session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionReport {
    pub home: views::HomePage,
    pub portfolio: views::PortfolioPage,
    pub blog: views::BlogPage,
    pub dashboard: views::DashboardStats,
    pub admin_works: Vec<views::WorkRow>,
}

/// Load a catalog session and derive every page from it.
pub async fn build_report(store: &CatalogStore, config: &CatalogConfig) -> SessionReport {
    store.initialize().await;

    let snapshot = store.snapshot();
    if let Some(error) = snapshot.error() {
        tracing::warn!(error = %error, "catalog unavailable, pages will render empty");
    }

    let criteria = ListingCriteria::default();
    SessionReport {
        home: views::home_page(&snapshot, config),
        portfolio: views::portfolio_page(&snapshot, &criteria),
        blog: views::blog_page(&snapshot, &criteria, config),
        dashboard: views::dashboard(&snapshot, config.dashboard_activity),
        admin_works: views::admin_work_list(&snapshot),
    }
}

/// Run one session (used by main) and print its report as JSON.
pub async fn run() -> Result<(), serde_json::Error> {
    dotenvy::dotenv().ok();

    // Guards must outlive every log call or buffered lines are lost.
    let _log_guards = logging::init(&logging::config::LoggingConfig::from_env());

    let config = CatalogConfig::default();
    tracing::debug!(?config, "catalog configuration");

    let store = CatalogStore::with_sample_data(&config);
    let report = build_report(&store, &config).await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
