use catalog::{CatalogItem, LocalizedText};

use crate::types::{KeywordSet, ScoreBreakdown};

/// Weight per (language, keyword) hit in the item name.
pub const NAME_WEIGHT: f64 = 3.0;
/// Flat bonus when any keyword occurs in the category.
pub const CATEGORY_WEIGHT: f64 = 2.5;
/// Bonus per color synonym containing any keyword.
pub const COLOR_WEIGHT: f64 = 2.0;
/// Bonus per tag containing any keyword.
pub const TAG_WEIGHT: f64 = 1.5;
/// Weight per (language, keyword) hit in the description.
pub const DESCRIPTION_WEIGHT: f64 = 1.0;

// Names and descriptions count every (translation, keyword) pair.
fn localized_hits(text: &LocalizedText, keywords: &KeywordSet) -> usize {
    text.values()
        .map(|value| {
            let value = value.to_lowercase();
            keywords.iter().filter(|kw| value.contains(kw)).count()
        })
        .sum()
}

// Category, colors and tags count each field value once, however many keywords hit it.
fn any_keyword_in(value: &str, keywords: &KeywordSet) -> bool {
    keywords.iter().any(|kw| value.contains(kw))
}

fn values_hit(values: &[String], keywords: &KeywordSet) -> usize {
    values
        .iter()
        .filter(|value| any_keyword_in(value, keywords))
        .count()
}

/// Per-field contributions of `item` against `keywords`.
pub fn score_breakdown(item: &CatalogItem, keywords: &KeywordSet) -> ScoreBreakdown {
    if keywords.is_empty() {
        return ScoreBreakdown::default();
    }

    let category = if any_keyword_in(&item.category, keywords) {
        CATEGORY_WEIGHT
    } else {
        0.0
    };

    ScoreBreakdown {
        name: localized_hits(&item.name, keywords) as f64 * NAME_WEIGHT,
        category,
        colors: values_hit(&item.colors, keywords) as f64 * COLOR_WEIGHT,
        tags: values_hit(&item.tags, keywords) as f64 * TAG_WEIGHT,
        description: localized_hits(&item.description, keywords) as f64 * DESCRIPTION_WEIGHT,
    }
}

/// Relevance of `item` for `keywords`. Zero means no field overlaps.
pub fn score_item(item: &CatalogItem, keywords: &KeywordSet) -> f64 {
    score_breakdown(item, keywords).total()
}
