use crate::types::{CatalogItem, LocalizedText};

fn localized<const N: usize>(pairs: [(&str, &str); N]) -> LocalizedText {
    pairs.into_iter().collect()
}

fn strings<const N: usize>(values: [&str; N]) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

/// The three built-in demo products.
pub(crate) fn sample_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: 1,
            name: localized([
                ("de", "Schwarze Jeans"),
                ("en", "Black Jeans"),
                ("uk", "Чорні джинси"),
                ("ru", "Черные джинсы"),
            ]),
            category: "jeans".into(),
            colors: strings(["black", "schwarz", "черный", "чорний"]),
            sizes: strings(["S", "M", "L", "XL", "XXL"]),
            description: localized([
                ("de", "Perfekte schwarze Jeans für große Menschen"),
                ("en", "Perfect black jeans for tall people"),
            ]),
            tags: strings(["tall", "hoch", "высокий", "високий", "slim", "modern"]),
            price: 89.99,
            image: "https://images.unsplash.com/photo-1542272604-787c3835535d?w=500".into(),
            collection: "APEX.ALPHA".into(),
        },
        CatalogItem {
            id: 2,
            name: localized([
                ("de", "Premium Hoodie"),
                ("en", "Premium Hoodie"),
                ("uk", "Преміум худі"),
                ("ru", "Премиум худи"),
            ]),
            category: "hoodie".into(),
            colors: strings(["gray", "grau", "серый", "сірий", "black", "white"]),
            sizes: strings(["XS", "S", "M", "L", "XL"]),
            description: localized([
                ("de", "Komfortables Premium Hoodie"),
                ("en", "Comfortable premium hoodie"),
            ]),
            tags: strings(["comfort", "bequem", "удобный", "зручний", "soft", "casual"]),
            price: 69.99,
            image: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?w=500".into(),
            collection: "APEX.BLISS".into(),
        },
        CatalogItem {
            id: 3,
            name: localized([
                ("de", "Elegantes Hemd"),
                ("en", "Elegant Shirt"),
                ("uk", "Елегантна сорочка"),
                ("ru", "Элегантная рубашка"),
            ]),
            category: "shirt".into(),
            colors: strings(["white", "weiß", "белый", "білий", "blue", "blau"]),
            sizes: strings(["S", "M", "L", "XL"]),
            description: localized([
                ("de", "Business Hemd für jeden Anlass"),
                ("en", "Business shirt for any occasion"),
            ]),
            tags: strings(["business", "elegant", "formal", "офис", "office"]),
            price: 59.99,
            image: "https://images.unsplash.com/photo-1596755094514-f87e34085b2c?w=500".into(),
            collection: "APEX.ZENITH".into(),
        },
    ]
}
