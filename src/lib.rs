pub mod catalog;
pub mod config;
pub mod hours;
pub mod language;
pub mod observability;
pub mod prefs;
pub mod routes;
pub mod seo;
pub mod server;
pub mod template;

pub use routes::AppState;

rust_i18n::i18n!("locales", fallback = "en");

/// Create the app router for testing
///
/// Builds the same router `serve` uses, from an explicit config and the
/// embedded catalog, without binding a listener.
pub fn create_app(config: config::Config) -> anyhow::Result<axum::Router> {
    let catalog = catalog::load(&config.menu.catalog_path)?;

    let state = AppState {
        config,
        catalog: std::sync::Arc::new(catalog),
    };

    Ok(routes::router(state))
}
