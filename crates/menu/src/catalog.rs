use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Synthetic category id meaning "no category filter". Not present in the
/// backing data.
pub const CATEGORY_ALL: &str = "all";

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate item id: {0}")]
    DuplicateId(String),

    #[error("item {id}: spice level {value} out of range (0-3)")]
    SpiceLevel { id: String, value: u8 },

    #[error("item {id}: {field} must be non-negative")]
    Negative { id: String, field: &'static str },
}

/// Text in the two site locales. Kurdish falls back to English when a
/// translation is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    #[serde(default)]
    pub ku: String,
}

impl LocalizedText {
    pub fn get(&self, locale: &str) -> &str {
        match locale {
            "ku" if !self.ku.is_empty() => &self.ku,
            _ => &self.en,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub spice_level: u8,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default)]
    pub vegetarian: bool,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub halal: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub calories: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: LocalizedText,
}

impl Category {
    /// The synthetic "all" entry shown as the first tab on the menu page.
    pub fn all() -> Self {
        Self {
            id: CATEGORY_ALL.to_owned(),
            name: LocalizedText {
                en: "All".to_owned(),
                ku: "Hemû".to_owned(),
            },
        }
    }
}

/// The full menu for one session. Loaded once from a static JSON document
/// and read-only afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    pub items: Vec<MenuItem>,
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>, categories: Vec<Category>) -> Result<Self, CatalogError> {
        let catalog = Self { items, categories };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(document)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
            if item.spice_level > 3 {
                return Err(CatalogError::SpiceLevel {
                    id: item.id.clone(),
                    value: item.spice_level,
                });
            }
            if item.price < 0.0 {
                return Err(CatalogError::Negative {
                    id: item.id.clone(),
                    field: "price",
                });
            }
            if item.popularity < 0.0 {
                return Err(CatalogError::Negative {
                    id: item.id.clone(),
                    field: "popularity",
                });
            }
        }
        Ok(())
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn featured(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.featured).collect()
    }

    /// Categories for display: the synthetic "all" entry first, then the
    /// curated ones in document order.
    pub fn display_categories(&self) -> Vec<Category> {
        let mut categories = Vec::with_capacity(self.categories.len() + 1);
        categories.push(Category::all());
        categories.extend(self.categories.iter().cloned());
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> MenuItem {
        MenuItem {
            id: id.to_owned(),
            name: LocalizedText {
                en: id.to_owned(),
                ku: String::new(),
            },
            description: LocalizedText::default(),
            price: 9.5,
            category: "main".to_owned(),
            tags: vec![],
            spice_level: 1,
            popularity: 5.0,
            seasonal: false,
            vegetarian: false,
            vegan: false,
            halal: true,
            featured: false,
            prep_time: "15 min".to_owned(),
            calories: 420,
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(vec![item("kofta"), item("kofta")], vec![]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "kofta"));
    }

    #[test]
    fn rejects_spice_level_out_of_range() {
        let mut bad = item("dolma");
        bad.spice_level = 4;
        let result = Catalog::new(vec![bad], vec![]);
        assert!(matches!(result, Err(CatalogError::SpiceLevel { value: 4, .. })));
    }

    #[test]
    fn parses_a_minimal_document() {
        let catalog = Catalog::from_json(
            r#"{
                "items": [{
                    "id": "shorba",
                    "name": {"en": "Lentil Shorba", "ku": "Şorbeya Nîskan"},
                    "description": {"en": "Red lentil soup"},
                    "price": 6.5,
                    "category": "soup",
                    "tags": ["soup", "warm"],
                    "vegetarian": true,
                    "vegan": true
                }],
                "categories": [{"id": "soup", "name": {"en": "Soups", "ku": "Şorbe"}}]
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.items.len(), 1);
        assert!(catalog.items[0].vegan);
        assert_eq!(catalog.item("shorba").unwrap().name.get("ku"), "Şorbeya Nîskan");
        assert_eq!(catalog.item("shorba").unwrap().description.get("ku"), "Red lentil soup");
    }

    #[test]
    fn display_categories_start_with_all() {
        let catalog = Catalog::default();
        let categories = catalog.display_categories();
        assert_eq!(categories[0].id, CATEGORY_ALL);
    }
}
