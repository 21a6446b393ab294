use std::time::Duration;

pub const DEFAULT_LOAD_DELAY_MS: u64 = 800;

/// Runtime knobs for a catalog session, read from the environment.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub load_delay_ms: u64,
    pub recent_posts: usize,
    pub featured_works: usize,
    pub dashboard_activity: usize,
}

fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: env_or("CATALOG_LOAD_DELAY_MS", DEFAULT_LOAD_DELAY_MS),
            recent_posts: env_or("CATALOG_RECENT_POSTS", 3),
            featured_works: env_or("CATALOG_FEATURED_WORKS", 3),
            dashboard_activity: env_or("CATALOG_DASHBOARD_ACTIVITY", 5),
        }
    }
}

impl CatalogConfig {
    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}
