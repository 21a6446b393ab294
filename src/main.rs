//! Portfolio Catalog - binary entry point
//! Delegates to the library for all app logic.

#[tokio::main]
async fn main() {
    if let Err(e) = portfolio_catalog::run().await {
        eprintln!("Failed to write session report: {}", e);
        std::process::exit(1);
    }
}
