use anyhow::{Context, Result};
use std::path::Path;
use zagros_menu::Catalog;

/// The catalog shipped with the binary. A file at `menu.catalog_path`
/// overrides it so the restaurant can edit dishes without a rebuild.
const EMBEDDED_CATALOG: &str = include_str!("../data/menu.json");

pub fn load(catalog_path: &str) -> Result<Catalog> {
    if Path::new(catalog_path).exists() {
        let document = std::fs::read_to_string(catalog_path)
            .with_context(|| format!("failed to read catalog at {catalog_path}"))?;
        let catalog = Catalog::from_json(&document)
            .with_context(|| format!("invalid catalog document at {catalog_path}"))?;

        tracing::info!(
            path = catalog_path,
            items = catalog.items.len(),
            categories = catalog.categories.len(),
            "Catalog loaded"
        );
        return Ok(catalog);
    }

    let catalog = Catalog::from_json(EMBEDDED_CATALOG).context("embedded catalog is invalid")?;
    tracing::info!(
        items = catalog.items.len(),
        "Catalog loaded from embedded copy"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses_and_validates() {
        let catalog = Catalog::from_json(EMBEDDED_CATALOG).unwrap();
        assert!(!catalog.items.is_empty());
        assert!(!catalog.categories.is_empty());

        // Every item points at a curated category.
        for item in &catalog.items {
            assert!(
                catalog.categories.iter().any(|c| c.id == item.category),
                "item {} has unknown category {}",
                item.id,
                item.category
            );
        }
    }
}
