use apex_sphere::{
    CATEGORY_WEIGHT, Catalog, CatalogItem, DEFAULT_LIMIT, Matcher, ScoredResult, SearchOptions,
    extract_keywords, score_item, search,
};

const QUERIES: &[&str] = &[
    "black jeans for tall people",
    "Ich suche eine schwarze Jeans",
    "premium hoodie comfort",
    "белый офис рубашка",
    "white blue business shirt",
    "slim modern casual soft",
    "gray grau серый",
    "elegant",
];

fn synthetic_catalog() -> Vec<CatalogItem> {
    let mut items = Catalog::sample().to_vec();
    for (offset, template) in Catalog::sample().iter().enumerate() {
        let mut copy = template.clone();
        copy.id = 100 + offset as u64;
        copy.tags.push("limited".into());
        items.push(copy);
    }
    items
}

fn assert_sorted(results: &[ScoredResult], catalog: &[CatalogItem]) {
    let position = |id: u64| catalog.iter().position(|item| item.id == id).unwrap();
    for pair in results.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
        if pair[0].match_score == pair[1].match_score {
            assert!(position(pair[0].item.id) < position(pair[1].item.id));
        }
    }
}

#[test]
fn results_are_ordered_and_tie_stable() {
    let catalog = synthetic_catalog();
    for query in QUERIES {
        let results = search(query, &catalog, catalog.len());
        assert_sorted(&results, &catalog);
    }
}

#[test]
fn truncation_bounds_hold() {
    let catalog = synthetic_catalog();
    for query in QUERIES {
        let keywords = extract_keywords(query);
        let nonzero = catalog
            .iter()
            .filter(|item| score_item(item, &keywords) > 0.0)
            .count();

        for limit in 0..=catalog.len() + 1 {
            let results = search(query, &catalog, limit);
            assert!(results.len() <= limit);
            assert!(results.len() <= nonzero);
            assert_eq!(results.len(), limit.min(nonzero), "query {query:?} limit {limit}");
        }
    }
}

#[test]
fn every_result_scores_above_zero() {
    let catalog = synthetic_catalog();
    for query in QUERIES {
        for hit in search(query, &catalog, catalog.len()) {
            assert!(hit.match_score > 0.0);
            assert_eq!(hit.match_keywords, extract_keywords(query));
        }
    }
}

#[test]
fn category_keyword_scores_at_least_category_weight() {
    let catalog = Catalog::sample();
    for item in catalog.iter() {
        let results = search(&item.category, &catalog, DEFAULT_LIMIT);
        let hit = results
            .iter()
            .find(|r| r.item.id == item.id)
            .expect("item must match its own category");
        assert!(hit.match_score >= CATEGORY_WEIGHT);
    }
}

#[test]
fn adding_matching_keyword_raises_score() {
    let catalog = Catalog::sample();
    let jeans = &catalog[0];

    let base = score_item(jeans, &extract_keywords("jeans"));
    let with_tag = score_item(jeans, &extract_keywords("jeans modern"));
    let with_color = score_item(jeans, &extract_keywords("jeans modern schwarz"));

    assert!(with_tag > base);
    assert!(with_color > with_tag);
}

#[test]
fn catalog_snapshot_is_not_modified() {
    let catalog = Catalog::sample();
    let before = catalog.to_vec();

    let _ = Matcher::default().search(
        "black jeans",
        &catalog,
        SearchOptions {
            limit: Some(10),
            explain: true,
        },
    );

    assert_eq!(catalog.items(), before.as_slice());
}

#[test]
fn empty_catalog_yields_nothing() {
    assert!(search("black jeans", &[], DEFAULT_LIMIT).is_empty());
}
