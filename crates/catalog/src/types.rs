use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text keyed by language code (`"de"`, `"en"`, `"uk"`, `"ru"`, ...).
///
/// Serialized as a plain JSON object. Each language code appears at most once;
/// iteration order is by language code and carries no meaning for matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the text for `lang`, returning the previous value.
    pub fn insert(&mut self, lang: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(lang.into(), text.into())
    }

    pub fn get(&self, lang: &str) -> Option<&str> {
        self.0.get(lang).map(String::as_str)
    }

    /// Text for `lang`, falling back to `fallback` when `lang` is missing.
    pub fn get_or(&self, lang: &str, fallback: &str) -> Option<&str> {
        self.get(lang).or_else(|| self.get(fallback))
    }

    /// All translations, regardless of language.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for LocalizedText
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(lang, text)| (lang.into(), text.into()))
                .collect(),
        )
    }
}

/// A single searchable product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Identifier, unique within a [`Catalog`](crate::Catalog).
    pub id: u64,
    /// Display name per language.
    pub name: LocalizedText,
    /// Category slug, e.g. `"jeans"`.
    pub category: String,
    /// Color synonyms across languages (`"black"`, `"schwarz"`, `"черный"`).
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Marketing copy per language. Not every language has to be present.
    #[serde(default)]
    pub description: LocalizedText,
    /// Free-text tags used as extra search hooks.
    #[serde(default)]
    pub tags: Vec<String>,
    pub price: f64,
    /// Image URL.
    pub image: String,
    /// Collection label, e.g. `"APEX.ALPHA"`.
    pub collection: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_text_serializes_as_plain_object() {
        let text: LocalizedText = [("en", "Black Jeans"), ("de", "Schwarze Jeans")]
            .into_iter()
            .collect();

        let json = serde_json::to_value(&text).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"de": "Schwarze Jeans", "en": "Black Jeans"})
        );
    }

    #[test]
    fn localized_text_fallback() {
        let text: LocalizedText = [("en", "Comfortable premium hoodie")].into_iter().collect();

        assert_eq!(text.get("uk"), None);
        assert_eq!(text.get_or("uk", "en"), Some("Comfortable premium hoodie"));
        assert_eq!(text.get_or("uk", "ru"), None);
    }

    #[test]
    fn localized_text_insert_replaces() {
        let mut text = LocalizedText::new();
        assert!(text.insert("de", "Hemd").is_none());
        assert_eq!(text.insert("de", "Elegantes Hemd").as_deref(), Some("Hemd"));
        assert_eq!(text.len(), 1);
        assert_eq!(text.languages().collect::<Vec<_>>(), vec!["de"]);
    }

    #[test]
    fn catalog_item_optional_lists_default_to_empty() {
        let item: CatalogItem = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": {"en": "Plain Tee"},
            "category": "shirt",
            "price": 19.5,
            "image": "https://example.com/tee.jpg",
            "collection": "APEX.CORE"
        }))
        .unwrap();

        assert_eq!(item.id, 7);
        assert!(item.colors.is_empty());
        assert!(item.tags.is_empty());
        assert!(item.description.is_empty());
    }
}
