use std::error::Error;

use apex_sphere::{Catalog, DEFAULT_LIMIT, extract_keywords, search};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let query = if args.is_empty() {
        "black jeans for tall people".to_string()
    } else {
        args.join(" ")
    };

    let catalog = match std::env::var_os("APEX_CATALOG") {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::sample(),
    };

    let keywords = extract_keywords(&query);
    println!("Query: {query:?}");
    println!("Keywords: {:?}", keywords.as_slice());

    let results = search(&query, &catalog, DEFAULT_LIMIT);
    if results.is_empty() {
        println!("No matches in {} items", catalog.len());
    }
    for (rank, hit) in results.iter().enumerate() {
        println!(
            "{:>2}. [{}] {} score={}",
            rank + 1,
            hit.item.id,
            hit.item.name.get_or("en", "de").unwrap_or("<unnamed>"),
            hit.match_score
        );
    }

    if std::env::var_os("APEX_JSON").is_some() {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(())
}
