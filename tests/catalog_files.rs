//! Integration tests for loading catalog files from disk.
//!
//! Each test writes its catalog into a fresh temp directory, loads it through
//! `Catalog::load`, then queries it with a `ViewEngine`.

use std::path::PathBuf;
use std::sync::Arc;

use blogdeck::catalog::{Catalog, CatalogError, CatalogFormat, Category};
use blogdeck::engine::{CategoryFilter, SortMode, ViewEngine};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;

/// Write `content` to `name` inside a per-test temp directory.
fn write_catalog(test: &str, name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("blogdeck_catalog_test_{test}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const CAMEL_CASE_TOML: &str = r#"
[[posts]]
id = 10
title = "Night Shift Survival"
excerpt = "Sleep, food and rota tips."
author = "Priya Nair"
authorImg = "images/priya.jpg"
category = "nursing"
categoryName = "Nursing Jobs"
readTime = 4
date = "Feb 24, 2026"
featured = true
url = "blogs/night-shift.html"

[[posts]]
id = 11
title = "Residency Match Explained"
excerpt = "How the match algorithm ranks applicants."
author = "Dr. Omar Khan"
category = "education"
categoryName = "Medical Education"
readTime = 12
date = "2026-01-05"
url = "blogs/residency-match.html"

[[posts]]
id = 12
title = "Clinic Locum Rates"
author = "Dr. Omar Khan"
category = "doctor"
categoryName = "Doctor Careers"
readTime = 7
date = "Mar 3, 2026"
url = "https://example.org/locum-rates"
"#;

// ============================================================================
// TOML
// ============================================================================

#[test]
fn test_load_toml_with_site_field_names() {
    let path = write_catalog("toml_camel", "posts.toml", CAMEL_CASE_TOML);
    let catalog = Catalog::load(&path).unwrap();

    assert_eq!(catalog.len(), 3);
    let night = catalog.get(10).unwrap();
    assert_eq!(night.category, Category::Nursing);
    assert_eq!(night.category_name, "Nursing Jobs");
    assert_eq!(night.author_img.as_deref(), Some("images/priya.jpg"));
    assert_eq!(night.date, NaiveDate::from_ymd_opt(2026, 2, 24).unwrap());
    assert_eq!(night.display_date(), "Feb 24, 2026");

    // Omitted optional fields take their defaults.
    let locum = catalog.get(12).unwrap();
    assert_eq!(locum.excerpt, "");
    assert!(!locum.featured);
    assert_eq!(locum.author_img, None);
}

#[test]
fn test_loaded_catalog_drives_engine() {
    let path = write_catalog("toml_engine", "posts.toml", CAMEL_CASE_TOML);
    let catalog = Arc::new(Catalog::load(&path).unwrap());
    let mut engine = ViewEngine::new(catalog);

    let newest: Vec<i64> = engine.visible_posts().iter().map(|p| p.id).collect();
    assert_eq!(newest, vec![12, 10, 11]);
    assert_eq!(engine.featured().len(), 1);

    engine.set_sort(SortMode::ReadingTime);
    let quickest: Vec<i64> = engine.visible_posts().iter().map(|p| p.id).collect();
    assert_eq!(quickest, vec![10, 12, 11]);

    engine.set_search("omar");
    engine.set_category(CategoryFilter::Only(Category::Education));
    let found: Vec<i64> = engine.filtered_posts().iter().map(|p| p.id).collect();
    assert_eq!(found, vec![11]);
}

#[test]
fn test_load_toml_with_snake_case_fields() {
    let content = r#"
[[posts]]
id = 1
title = "Snake"
author = "S"
category = "hospital"
category_name = "Hospital Jobs"
read_time = 3
date = "2026-02-01"
url = "a.html"
"#;
    let path = write_catalog("toml_snake", "posts.toml", content);
    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.get(1).map(|p| p.read_time), Some(3));
}

#[test]
fn test_empty_toml_yields_empty_catalog() {
    let path = write_catalog("toml_empty", "posts.toml", "");
    let catalog = Catalog::load(&path).unwrap();
    assert!(catalog.is_empty());

    let engine = ViewEngine::new(Arc::new(catalog));
    assert!(engine.pagination_summary().is_empty());
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_load_bare_json_array() {
    let content = r#"[
        {"id": 1, "title": "One", "excerpt": "x", "author": "A", "category": "doctor",
         "categoryName": "Doctor Careers", "readTime": 5, "date": "Feb 20, 2026",
         "featured": true, "url": "blogs/one.html"},
        {"id": 2, "title": "Two", "excerpt": "y", "author": "B", "category": "nursing",
         "categoryName": "Nursing Jobs", "readTime": 9, "date": "Feb 21, 2026",
         "url": "blogs/two.html"}
    ]"#;
    let path = write_catalog("json_bare", "posts.json", content);
    let catalog = Catalog::load(&path).unwrap();

    assert_eq!(catalog.len(), 2);
    let featured: Vec<i64> = catalog.featured().iter().map(|p| p.id).collect();
    assert_eq!(featured, vec![1]);
}

#[test]
fn test_load_wrapped_json_object() {
    let content = r#"{"posts": [
        {"id": 7, "title": "Seven", "author": "C", "category": "education",
         "category_name": "Medical Education", "read_time": 20, "date": "2026-02-07",
         "url": "seven.html"}
    ]}"#;
    let path = write_catalog("json_wrapped", "catalog.JSON", content);
    assert_eq!(CatalogFormat::from_path(&path).unwrap(), CatalogFormat::Json);

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.get(7).map(|p| p.category), Some(Category::Education));
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_unsupported_extension_is_rejected() {
    let path = write_catalog("bad_ext", "posts.yaml", "posts: []");
    assert!(matches!(
        Catalog::load(&path),
        Err(CatalogError::UnsupportedFormat(ext)) if ext == "yaml"
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("blogdeck_catalog_test_missing/nope.toml");
    assert!(matches!(Catalog::load(&path), Err(CatalogError::Io(_))));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let content = r#"
[[posts]]
id = 1
title = "A"
author = "A"
category = "doctor"
category_name = "Doctor Careers"
read_time = 3
date = "2026-02-01"
url = "a.html"

[[posts]]
id = 1
title = "B"
author = "B"
category = "doctor"
category_name = "Doctor Careers"
read_time = 4
date = "2026-02-02"
url = "b.html"
"#;
    let path = write_catalog("dup_ids", "posts.toml", content);
    assert!(matches!(
        Catalog::load(&path),
        Err(CatalogError::DuplicateId(1))
    ));
}

#[test]
fn test_invalid_records_are_rejected() {
    let record = |field: &str| {
        let mut fields = vec![
            ("id", "5".to_string()),
            ("title", "\"T\"".to_string()),
            ("author", "\"A\"".to_string()),
            ("category", "\"doctor\"".to_string()),
            ("category_name", "\"Doctor Careers\"".to_string()),
            ("read_time", "3".to_string()),
            ("date", "\"2026-02-01\"".to_string()),
            ("url", "\"a.html\"".to_string()),
        ];
        match field {
            "read_time" => fields[5].1 = "0".to_string(),
            "date" => fields[6].1 = "\"someday\"".to_string(),
            "category" => fields[3].1 = "\"dentistry\"".to_string(),
            _ => {}
        }
        let body: Vec<String> = fields.iter().map(|(k, v)| format!("{k} = {v}")).collect();
        format!("[[posts]]\n{}\n", body.join("\n"))
    };

    let path = write_catalog("bad_read_time", "posts.toml", &record("read_time"));
    assert!(matches!(
        Catalog::load(&path),
        Err(CatalogError::InvalidReadTime { id: 5, read_time: 0 })
    ));

    let path = write_catalog("bad_date", "posts.toml", &record("date"));
    assert!(matches!(
        Catalog::load(&path),
        Err(CatalogError::InvalidDate { id: 5, .. })
    ));

    let path = write_catalog("bad_category", "posts.toml", &record("category"));
    assert!(matches!(
        Catalog::load(&path),
        Err(CatalogError::UnknownCategory { id: 5, .. })
    ));
}
