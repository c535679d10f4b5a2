use serde::Deserialize;
use std::borrow::Cow;
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::catalog::{MenuItem, CATEGORY_ALL};

/// Synthetic category id that filters on the `vegetarian` flag instead of
/// the `category` field. Coexists with the `vegetarian` toggle on purpose;
/// selecting both is redundant but harmless.
pub const CATEGORY_VEGETARIAN: &str = "vegetarian";

/// Minimum popularity for the "popular" toggle.
pub const POPULAR_THRESHOLD: f64 = 8.0;

#[derive(
    EnumString, Display, VariantArray, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Name,
    Price,
    #[default]
    Popularity,
}

/// Filter state for one menu page view. The URL query string is the only
/// durable representation; everything here round-trips through
/// [`FilterState::to_query_string`] and [`FilterState::parse_query`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    pub popular: bool,
    pub seasonal: bool,
    pub vegetarian: bool,
    pub sort: SortBy,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CATEGORY_ALL.to_owned(),
            popular: false,
            seasonal: false,
            vegetarian: false,
            sort: SortBy::default(),
        }
    }
}

impl FilterState {
    /// Parse a raw query string. Absent keys keep their empty sentinel,
    /// unrecognized keys and an unknown `sort` value are ignored. An
    /// unknown `category` passes through verbatim and simply matches no
    /// real category.
    pub fn parse_query(query: &str) -> Self {
        let mut state = Self::default();

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);

            match key {
                "category" if !value.is_empty() => state.category = value.into_owned(),
                "search" => state.search = value.into_owned(),
                "popular" => state.popular = value == "true",
                "seasonal" => state.seasonal = value == "true",
                "vegetarian" => state.vegetarian = value == "true",
                "sort" => state.sort = SortBy::from_str(&value).unwrap_or_default(),
                _ => {}
            }
        }

        state
    }

    /// Serialize back to a query string, omitting every field that still
    /// holds its empty sentinel so URLs stay minimal. Returns `""` for the
    /// default state.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if self.category != CATEGORY_ALL {
            pairs.push(format!("category={}", urlencoding::encode(&self.category)));
        }
        if !self.search.is_empty() {
            pairs.push(format!("search={}", urlencoding::encode(&self.search)));
        }
        if self.popular {
            pairs.push("popular=true".to_owned());
        }
        if self.seasonal {
            pairs.push("seasonal=true".to_owned());
        }
        if self.vegetarian {
            pairs.push("vegetarian=true".to_owned());
        }
        if self.sort != SortBy::default() {
            pairs.push(format!("sort={}", self.sort));
        }

        pairs.join("&")
    }

    /// Path + query for the menu page, for building tab and toggle links.
    pub fn href(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/menu".to_owned()
        } else {
            format!("/menu?{query}")
        }
    }

    pub fn with_category(&self, category: &str) -> Self {
        Self {
            category: category.to_owned(),
            ..self.clone()
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn sort_is_default(&self) -> bool {
        self.sort == SortBy::default()
    }
}

// Query strings arrive both percent-encoded and form-encoded; treat '+'
// as space before decoding.
fn decode_component(raw: &str) -> Cow<'_, str> {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => Cow::Owned(decoded.into_owned()),
        Err(_) => Cow::Owned(spaced),
    }
}

fn category_matches(item: &MenuItem, selected: &str) -> bool {
    match selected {
        CATEGORY_ALL => true,
        CATEGORY_VEGETARIAN => item.vegetarian,
        other => item.category == other,
    }
}

fn search_matches(item: &MenuItem, needle: &str) -> bool {
    item.name.en.to_lowercase().contains(needle)
        || item.description.en.to_lowercase().contains(needle)
        || item
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Derive the ordered, visible subsequence of `items` for `state`.
///
/// All predicates are conjunctive. Search matches case-insensitive
/// substrings of the English name, English description and tags only,
/// regardless of the display locale. Sorting is stable, so ties keep
/// catalog order.
pub fn visible_items<'a>(items: &'a [MenuItem], state: &FilterState) -> Vec<&'a MenuItem> {
    let needle = state.search.trim().to_lowercase();

    let mut visible: Vec<&MenuItem> = items
        .iter()
        .filter(|item| category_matches(item, &state.category))
        .filter(|item| needle.is_empty() || search_matches(item, &needle))
        .filter(|item| !state.popular || item.popularity >= POPULAR_THRESHOLD)
        .filter(|item| !state.seasonal || item.seasonal)
        .filter(|item| !state.vegetarian || item.vegetarian)
        .collect();

    match state.sort {
        SortBy::Name => {
            visible.sort_by(|a, b| a.name.en.to_lowercase().cmp(&b.name.en.to_lowercase()))
        }
        SortBy::Price => visible.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::Popularity => visible.sort_by(|a, b| b.popularity.total_cmp(&a.popularity)),
    }

    visible
}
