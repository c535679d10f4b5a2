//! Menu catalog, filtering and recommendation core for the Zagros site.
//!
//! Everything in this crate is synchronous and framework-free: the web
//! layer feeds it a parsed catalog, a query string and a clock, and gets
//! back ordered item lists. Preference tracking goes through the
//! [`PrefsStorage`] trait so the backing store (a browser cookie in the
//! app, memory in tests) stays injectable.

mod catalog;
mod filter;
mod prefs;
mod recommend;

pub use catalog::{Catalog, CatalogError, Category, LocalizedText, MenuItem, CATEGORY_ALL};
pub use filter::{visible_items, FilterState, SortBy, CATEGORY_VEGETARIAN, POPULAR_THRESHOLD};
pub use prefs::{MemoryStorage, PrefsStorage, PrefsStore, StorageError, UserPrefs};
pub use recommend::{recommend, score, DayPart};
