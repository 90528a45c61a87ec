use super::*;
use crate::entry::CompoundTier;

const HEADER: &str = "reading,surface,pos2,pos3,compound";

#[test]
fn first_line_is_dropped_as_header() {
    let catalog = CatalogLoader::load("reading,surface,pos2,pos3,compound\nねこ,猫,普通名詞,一般,A");
    assert_eq!(catalog.len(), 1);
    assert!(!catalog.contains("reading"));

    let catalog = CatalogLoader::load("ねこ,猫,普通名詞,一般,A");
    assert!(catalog.is_empty(), "first non-empty line is always the header");
}

#[test]
fn header_skip_ignores_leading_blank_lines() {
    let catalog = CatalogLoader::load("\n\n  \nねこ,猫,普通名詞,一般,A\nいぬ,犬,普通名詞,一般,A\n");
    assert_eq!(catalog.len(), 1);
    assert!(!catalog.contains("ねこ"));
    assert!(catalog.contains("いぬ"));
}

#[test]
fn parses_columns_with_trimming() {
    let text = format!("{HEADER}\n ねこ , 猫 , 普通名詞 , 一般 , A \n");
    let catalog = CatalogLoader::load(&text);
    let e = catalog.get("ねこ").unwrap();
    assert_eq!(e.reading, "ねこ");
    assert_eq!(e.surface, "猫");
    assert_eq!(e.pos_class, "普通名詞");
    assert_eq!(e.pos_subclass, "一般");
    assert_eq!(e.compound, CompoundTier::A);
}

#[test]
fn crlf_line_endings() {
    let text = format!("{HEADER}\r\nねこ,猫,普通名詞,一般,A\r\nいぬ,犬,普通名詞,一般,B\r\n");
    let catalog = CatalogLoader::load(&text);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("いぬ").unwrap().compound, CompoundTier::B);
}

#[test]
fn extra_columns_ignored() {
    let text = format!("{HEADER}\nねこ,猫,普通名詞,一般,A,extra,more\n");
    let catalog = CatalogLoader::load(&text);
    assert_eq!(catalog.get("ねこ").unwrap().compound, CompoundTier::A);
}

#[test]
fn malformed_row_is_skipped() {
    let text = format!("{HEADER}\nねこ,猫,普通名詞,一般,A\nいぬ,犬,普通名詞\n");
    let catalog = CatalogLoader::load(&text);
    assert_eq!(catalog.len(), 1);
    assert!(catalog.contains("ねこ"));
    assert!(!catalog.contains("いぬ"));
    assert_eq!(catalog.stats().malformed, 1);
    assert_eq!(catalog.stats().rows, 2);
}

#[test]
fn empty_reading_is_skipped() {
    let text = format!("{HEADER}\n ,猫,普通名詞,一般,A\nねこ,猫,普通名詞,一般,A\n");
    let catalog = CatalogLoader::load(&text);
    assert_eq!(catalog.len(), 1);
    assert!(!catalog.contains(""));
    assert_eq!(catalog.stats().empty_reading, 1);
}

#[test]
fn last_write_wins() {
    let text = format!(
        "{HEADER}\nかみ,紙,普通名詞,一般,A\nいぬ,犬,普通名詞,一般,A\nかみ,神,普通名詞,一般,B\n"
    );
    let catalog = CatalogLoader::load(&text);
    assert_eq!(catalog.len(), 2);
    let e = catalog.get("かみ").unwrap();
    assert_eq!(e.surface, "神");
    assert_eq!(e.compound, CompoundTier::B);
    assert_eq!(catalog.stats().overwritten, 1);

    // Overwrite keeps the reading's original position.
    let order: Vec<&str> = catalog.iter().map(|e| e.reading.as_str()).collect();
    assert_eq!(order, vec!["かみ", "いぬ"]);
}

#[test]
fn load_is_idempotent() {
    let text = format!(
        "{HEADER}\nねこ,猫,普通名詞,一般,A\nかみ,紙/神,普通名詞,一般,B\nとうきょう,東京,固有名詞,地名,A\n"
    );
    assert_eq!(CatalogLoader::load(&text), CatalogLoader::load(&text));
}

#[test]
fn catalogs_with_different_values_differ() {
    let a = CatalogLoader::load(&format!("{HEADER}\nねこ,猫,普通名詞,一般,A\n"));
    let b = CatalogLoader::load(&format!("{HEADER}\nねこ,猫,普通名詞,一般,B\n"));
    assert_ne!(a, b);
}

#[test]
fn missing_source_yields_empty_catalog() {
    let catalog = CatalogLoader::load_or_empty(None);
    assert!(catalog.is_empty());
    assert_eq!(catalog.stats(), LoadStats::default());

    let catalog = CatalogLoader::load_or_empty(Some("h\nねこ,猫,普通名詞,一般,A"));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn empty_text_yields_empty_catalog() {
    assert!(CatalogLoader::load("").is_empty());
    assert!(CatalogLoader::load("\n\r\n").is_empty());
}
