use time::OffsetDateTime;

use crate::catalog::MenuItem;
use crate::prefs::UserPrefs;

const CATEGORY_AFFINITY_WEIGHT: f64 = 0.8;
const TAG_AFFINITY_WEIGHT: f64 = 0.5;
const VEGAN_BONUS: f64 = 1.0;
const VEGETARIAN_BONUS: f64 = 0.6;
const SEASONAL_BONUS: f64 = 0.5;

/// Hour-of-day bucket used to bias scores toward what people actually
/// order at that time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPart {
    /// Before 11:00.
    Morning,
    /// 11:00 to 15:59.
    Midday,
    /// 16:00 onwards.
    Evening,
}

impl DayPart {
    pub fn from_hour(hour: u8) -> Self {
        match hour {
            0..=10 => Self::Morning,
            11..=15 => Self::Midday,
            _ => Self::Evening,
        }
    }

    fn category_boost(self, category: &str) -> f64 {
        match (self, category) {
            (Self::Morning, "breakfast") => 1.25,
            (Self::Morning, "beverage") => 1.1,
            (Self::Midday, "main") => 1.1,
            (Self::Midday, "grill") => 1.1,
            (Self::Midday, "salad") => 1.05,
            (Self::Evening, "main") => 1.15,
            (Self::Evening, "soup") => 1.1,
            (Self::Evening, "dessert") => 1.1,
            _ => 1.0,
        }
    }

    fn tag_boost(self, tag: &str) -> f64 {
        match (self, tag) {
            (Self::Morning, "coffee") => 1.2,
            (Self::Morning, "tea") => 1.15,
            (Self::Midday, "quick") => 1.1,
            (Self::Midday, "wrap") => 1.1,
            (Self::Evening, "grill") => 1.1,
            (Self::Evening, "sharing") => 1.05,
            _ => 1.0,
        }
    }
}

/// Score one item against the accumulated preference signal and a
/// time-of-day bucket.
///
/// Base popularity, plus weighted category/tag affinity, plus a dietary
/// bonus when the record says vegetarian-preferred (vegan takes
/// precedence over vegetarian, they never stack), all multiplied by the
/// bucket's category boost and each matching tag boost, plus a flat
/// seasonal bonus.
pub fn score(item: &MenuItem, prefs: &UserPrefs, part: DayPart) -> f64 {
    let mut score = item.popularity;

    score += CATEGORY_AFFINITY_WEIGHT
        * f64::from(prefs.liked_categories.get(&item.category).copied().unwrap_or(0));

    let tag_affinity: u32 = item
        .tags
        .iter()
        .filter_map(|tag| prefs.liked_tags.get(tag))
        .sum();
    score += TAG_AFFINITY_WEIGHT * f64::from(tag_affinity);

    if prefs.veg_preferred == Some(true) {
        if item.vegan {
            score += VEGAN_BONUS;
        } else if item.vegetarian {
            score += VEGETARIAN_BONUS;
        }
    }

    score *= part.category_boost(&item.category);
    for tag in &item.tags {
        score *= part.tag_boost(tag);
    }

    if item.seasonal {
        score += SEASONAL_BONUS;
    }

    score
}

/// Rank the catalog for `now` and return the top `count` items. Pure in
/// all four inputs; the clock arrives as a parameter, never read here.
pub fn recommend<'a>(
    items: &'a [MenuItem],
    prefs: &UserPrefs,
    now: OffsetDateTime,
    count: usize,
) -> Vec<&'a MenuItem> {
    let part = DayPart::from_hour(now.hour());

    let mut scored: Vec<(&MenuItem, f64)> = items
        .iter()
        .map(|item| (item, score(item, prefs, part)))
        .collect();

    // Stable: equal scores keep catalog order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(count);
    scored.into_iter().map(|(item, _)| item).collect()
}
